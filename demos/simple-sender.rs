// Carbonate - A minimal Graphite client for Rust!
//
// Copyright 2026 The Carbonate Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// This example sends a few measurements to a Carbon server on localhost.
// Run it with `RUST_LOG=trace` to see each line as it's sent.

use carbonate::prelude::*;
use carbonate::{GraphiteUdp, MetricResult, DEFAULT_PORT};
use std::time::{SystemTime, UNIX_EPOCH};

fn now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

fn report<G: Graphite>(client: &mut G) -> MetricResult<()> {
    let ts = now();
    client.send("demo.requests", "1234", ts)?;
    client.send("demo.response time", "12.5 ms", ts)?;
    client.send("demo.queue.depth", "7", ts)
}

fn main() {
    env_logger::init();

    let mut client = GraphiteUdp::from_host(("localhost", DEFAULT_PORT)).unwrap();
    match client.with_connection(|c| report(c)) {
        Ok(()) => println!("Sent measurements to {}", client.endpoint()),
        Err(e) => eprintln!("Failed after {} consecutive failures: {}", client.failures(), e),
    }
}
