// Carbonate - A minimal Graphite client for Rust!
//
// Copyright 2026 The Carbonate Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A minimal Graphite client for Rust!
//!
//! Carbonate sends point-in-time measurements to a Carbon server using the
//! plaintext protocol over UDP. One measurement is one line, and one line is
//! one datagram:
//!
//! ``` text
//! <name> <value> <timestamp>\n
//! ```
//!
//! ## Features
//!
//! * A small client, `GraphiteUdp`, that owns a UDP socket and counts
//!   consecutive send failures.
//! * Sanitization of metric names and values so stray whitespace can't
//!   corrupt a line.
//! * Selectable text encoding (UTF-8 by default).
//! * Alternate backends via the `Graphite` trait, including `NopGraphite`
//!   and `SpyGraphite` for disabling metrics or testing.
//!
//! What it deliberately doesn't do: buffering, batching, retries, or TCP.
//! UDP is unreliable and Carbonate makes no attempt to hide that. Every error
//! is returned to the caller.
//!
//! ## Install
//!
//! To make use of `carbonate` in your project, add it as a dependency in your
//! `Cargo.toml` file.
//!
//! ```toml
//! [dependencies]
//! carbonate = "x.y.z"
//! ```
//!
//! ## Usage
//!
//! ### Simple Use
//!
//! Create a client pointing at your Carbon server, connect it, and send
//! measurements. Timestamps are seconds since the Unix epoch and are
//! always supplied by the caller.
//!
//! ```rust,no_run
//! use std::time::{SystemTime, UNIX_EPOCH};
//! use carbonate::prelude::*;
//! use carbonate::{GraphiteUdp, DEFAULT_PORT};
//!
//! let mut client = GraphiteUdp::from_host(("metrics.example.com", DEFAULT_PORT)).unwrap();
//! client.connect().unwrap();
//!
//! let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs() as i64;
//! client.send("servers.web01.requests", "1234", now).unwrap();
//! client.send("servers.web01.latency", "12.5", now).unwrap();
//!
//! client.close().unwrap();
//! ```
//!
//! ### Scoped Use
//!
//! The socket is closed when the client is dropped, but when there's a
//! bounded amount of work to do, `with_connection` makes the lifecycle
//! explicit: it connects, runs your code, and closes the client no matter
//! how your code returns.
//!
//! ```rust,no_run
//! use carbonate::prelude::*;
//! use carbonate::{GraphiteUdp, DEFAULT_PORT};
//!
//! let mut client = GraphiteUdp::from_host(("metrics.example.com", DEFAULT_PORT)).unwrap();
//! client.with_connection(|c| {
//!     c.send("batch.job.rows", "5000", 1609459200)?;
//!     c.send("batch.job.duration", "31.2", 1609459200)
//! }).unwrap();
//! ```
//!
//! ### Failures
//!
//! Each failed send is returned as a `MetricError` with the kind
//! `ErrorKind::SendError` and counted. `failures()` reports the number of
//! consecutive failures and resets to zero on the next successful send,
//! which makes it a cheap health signal for the embedding application.
//!
//! ```rust,no_run
//! use carbonate::prelude::*;
//! use carbonate::{ErrorKind, GraphiteUdp, DEFAULT_PORT};
//!
//! let mut client = GraphiteUdp::from_host(("metrics.example.com", DEFAULT_PORT)).unwrap();
//! client.connect().unwrap();
//!
//! if let Err(e) = client.send("some.metric", "1", 1609459200) {
//!     assert_eq!(ErrorKind::SendError, e.kind());
//!     eprintln!("{} consecutive failures, last: {}", client.failures(), e);
//! }
//! ```
//!
//! ### Custom Backends
//!
//! Code that reports metrics should depend on the `Graphite` trait rather
//! than on `GraphiteUdp`, so tests can swap in `SpyGraphite` and check
//! exactly which lines were written.
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use carbonate::prelude::*;
//! use carbonate::{MetricResult, SpyGraphite};
//!
//! fn report<G: Graphite>(client: &mut G, queue_depth: usize) -> MetricResult<()> {
//!     client.send("app.queue depth", &queue_depth.to_string(), 1609459200)
//! }
//!
//! let writer = Arc::new(Mutex::new(Vec::<u8>::new()));
//! let mut client = SpyGraphite::from(writer.clone());
//! client.connect().unwrap();
//! report(&mut client, 7).unwrap();
//!
//! assert_eq!(b"app.queue-depth 7 1609459200\n".to_vec(), *writer.lock().unwrap());
//! ```
//!
//! ## Logging
//!
//! Carbonate logs through the `log` facade: each outgoing line at `trace`
//! level and each failed send at `debug` level. Install whichever logger
//! your application already uses to see them.

/// Default port of the Carbon plaintext protocol.
pub const DEFAULT_PORT: u16 = 2003;

pub use self::encoding::Encoding;

pub use self::format::{format_line, sanitize};

pub use self::sinks::{Graphite, GraphiteUdp, GraphiteUdpBuilder, NopGraphite, SpyGraphite};

pub use self::types::{ErrorKind, MetricError, MetricResult};

mod encoding;
mod format;
pub mod prelude;
mod sinks;
mod types;
