use carbonate::prelude::*;
use carbonate::test::UdpCollector;
use carbonate::{ErrorKind, GraphiteUdp, DEFAULT_PORT};
use std::net::SocketAddr;
use std::time::Duration;

mod utils;
use utils::{run_lifecycle_test, run_mutex_threaded_test, NUM_ITERATIONS, NUM_THREADS};

const TIMEOUT: Duration = Duration::from_secs(5);

fn new_collector() -> UdpCollector {
    UdpCollector::new(TIMEOUT).unwrap()
}

fn new_udp_client(collector: &UdpCollector) -> GraphiteUdp {
    GraphiteUdp::new(collector.local_addr().unwrap())
}

#[test]
fn test_graphite_udp_end_to_end() {
    let collector = new_collector();
    let mut client = new_udp_client(&collector);

    client.connect().unwrap();
    client.send("response time", "12.5 ms", 1609459200).unwrap();

    assert_eq!("response-time 12.5-ms 1609459200\n", collector.recv_string().unwrap());
    assert_eq!(0, client.failures());
    client.close().unwrap();
}

#[test]
fn test_graphite_udp_default_port_endpoint() {
    let mut client = GraphiteUdp::from_host(("127.0.0.1", DEFAULT_PORT)).unwrap();
    assert_eq!("127.0.0.1:2003".parse::<SocketAddr>().unwrap(), client.endpoint());

    client.connect().unwrap();
    client.send("response time", "12.5 ms", 1609459200).unwrap();
    assert_eq!(0, client.failures());
    client.close().unwrap();
}

#[test]
fn test_graphite_udp_one_datagram_per_send() {
    let collector = new_collector();
    let mut client = new_udp_client(&collector);
    client.connect().unwrap();

    client.send("a", "1", 10).unwrap();
    client.send("b", "2", 11).unwrap();

    assert_eq!("a 1 10\n", collector.recv_string().unwrap());
    assert_eq!("b 2 11\n", collector.recv_string().unwrap());
}

#[test]
fn test_graphite_udp_connect_twice_keeps_first_socket() {
    let collector = new_collector();
    let mut client = new_udp_client(&collector);

    client.connect().unwrap();
    let local = client.local_addr();
    assert_eq!(ErrorKind::AlreadyConnected, client.connect().unwrap_err().kind());
    assert_eq!(local, client.local_addr());

    client.send("x", "1", 1).unwrap();
    assert_eq!("x 1 1\n", collector.recv_string().unwrap());
}

#[test]
fn test_graphite_udp_failures_then_recovery() {
    let collector = new_collector();
    let mut client = new_udp_client(&collector);
    client.connect().unwrap();

    // Bigger than any UDP payload, the OS refuses to send it
    let huge = "y".repeat(70_000);
    for expected in 1..=5 {
        let err = client.send(&huge, "1", 1).unwrap_err();
        assert_eq!(ErrorKind::SendError, err.kind());
        assert_eq!(expected, client.failures());
    }

    // Sending without a socket doesn't touch the count
    client.close().unwrap();
    assert_eq!(ErrorKind::NotConnected, client.send("z", "1", 1).unwrap_err().kind());
    assert_eq!(5, client.failures());

    client.connect().unwrap();
    assert_eq!(5, client.failures());
    client.send("z", "1", 1).unwrap();
    assert_eq!(0, client.failures());
    assert_eq!("z 1 1\n", collector.recv_string().unwrap());
}

#[test]
fn test_graphite_udp_with_connection() {
    let collector = new_collector();
    let mut client = new_udp_client(&collector);

    let sent = client
        .with_connection(|c| {
            c.send("scoped", "1", 1)?;
            Ok(1)
        })
        .unwrap();

    assert_eq!(1, sent);
    assert!(!client.is_connected());
    assert_eq!("scoped 1 1\n", collector.recv_string().unwrap());
}

#[test]
fn test_graphite_udp_with_connection_error_still_closes() {
    let collector = new_collector();
    let mut client = new_udp_client(&collector);
    let huge = "y".repeat(70_000);

    let err = client.with_connection(|c| c.send(&huge, "1", 1)).unwrap_err();

    assert_eq!(ErrorKind::SendError, err.kind());
    assert!(!client.is_connected());
    assert_eq!(1, client.failures());
}

#[test]
fn test_graphite_udp_lifecycle() {
    let collector = new_collector();
    let mut client = new_udp_client(&collector);
    run_lifecycle_test(&mut client, 3);

    assert_eq!("some.counter 0 1609459200\n", collector.recv_string().unwrap());
    assert_eq!("some.counter 1 1609459201\n", collector.recv_string().unwrap());
    assert_eq!("some.counter 2 1609459202\n", collector.recv_string().unwrap());
}

#[test]
fn test_graphite_udp_mutex_threaded() {
    let collector = new_collector();
    let client = run_mutex_threaded_test(new_udp_client(&collector), NUM_THREADS, NUM_ITERATIONS);
    assert_eq!(0, client.failures());

    // Loopback shouldn't drop anything at this volume, but don't rely on
    // ordering between threads.
    for _ in 0..NUM_THREADS {
        let line = collector.recv_string().unwrap();
        assert!(line.starts_with("thread."));
        assert!(line.ends_with(" 1609459200\n"));
    }
}
