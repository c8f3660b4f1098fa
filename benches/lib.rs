use carbonate::prelude::*;
use carbonate::{format_line, sanitize, Encoding, GraphiteUdp, NopGraphite};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::net::SocketAddr;

fn benchmark_formatting(c: &mut Criterion) {
    c.bench_function("sanitize_clean", |b| b.iter(|| sanitize(black_box("servers.web01.cpu.user"))));

    c.bench_function("sanitize_whitespace", |b| {
        b.iter(|| sanitize(black_box("servers web01\tcpu  user")))
    });

    c.bench_function("format_line", |b| {
        b.iter(|| format_line(black_box("response time"), black_box("12.5 ms"), black_box(1609459200)))
    });

    c.bench_function("encode_latin1", |b| {
        b.iter(|| Encoding::Latin1.encode(black_box("temp\u{e9}rature 20 1609459200\n")).len())
    });
}

fn benchmark_clients(c: &mut Criterion) {
    let mut nop = NopGraphite::new();
    nop.connect().unwrap();
    c.bench_function("nop_graphite_send", |b| b.iter(|| nop.send("some.counter", "4", 1609459200)));

    // Nothing needs to listen on the other end for the datagram to be sent
    let addr: SocketAddr = "127.0.0.1:2003".parse().unwrap();
    let mut udp = GraphiteUdp::new(addr);
    udp.connect().unwrap();
    c.bench_function("graphite_udp_send", |b| b.iter(|| udp.send("some.counter", "4", 1609459200)));
}

criterion_group!(benches, benchmark_formatting, benchmark_clients);

criterion_main!(benches);
