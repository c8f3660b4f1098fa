use carbonate::prelude::*;
use std::sync::{Arc, Mutex};
use std::thread;

pub const NUM_THREADS: u64 = 8;
pub const NUM_ITERATIONS: u64 = 100;
pub const TIMESTAMP: i64 = 1609459200;

/// Connect, send `iterations` measurements and close, checking the client
/// state along the way.
#[allow(dead_code)]
pub fn run_lifecycle_test<G: Graphite>(client: &mut G, iterations: u64) {
    assert!(!client.is_connected());
    client.connect().unwrap();

    for i in 0..iterations {
        client.send("some.counter", &i.to_string(), TIMESTAMP + i as i64).unwrap();
        assert_eq!(0, client.failures());
    }

    client.close().unwrap();
    assert!(!client.is_connected());
}

/// Share a single connected client between threads behind a mutex.
#[allow(dead_code)]
pub fn run_mutex_threaded_test<G>(client: G, num_threads: u64, iterations: u64) -> G
where
    G: Graphite + Send + 'static,
{
    let shared = Arc::new(Mutex::new(client));
    shared.lock().unwrap().connect().unwrap();

    let threads: Vec<_> = (0..num_threads)
        .map(|t| {
            let local = Arc::clone(&shared);

            thread::spawn(move || {
                for i in 0..iterations {
                    let name = format!("thread.{}.counter", t);
                    local.lock().unwrap().send(&name, &i.to_string(), TIMESTAMP).unwrap();
                }
            })
        })
        .collect();

    for t in threads {
        t.join().unwrap();
    }

    let mut client = match Arc::try_unwrap(shared) {
        Ok(m) => m.into_inner().unwrap(),
        Err(_) => panic!("client still shared after all threads joined"),
    };
    client.close().unwrap();
    client
}
