// Carbonate - A minimal Graphite client for Rust!
//
// Copyright 2026 The Carbonate Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::types::{ErrorKind, MetricError, MetricResult};

/// Trait for clients that send measurements to a Carbon server.
///
/// Each call to `send` results in a single line in the Carbon plaintext
/// format. The name and value are sanitized (runs of whitespace become a
/// single `-`) and the timestamp is written as given, in seconds since the
/// Unix epoch. For example, sending the name `response time`, the value
/// `12.5 ms` and the timestamp `1609459200` produces:
///
/// ``` text
/// response-time 12.5-ms 1609459200
/// ```
///
/// Implementations move between two states. A client starts disconnected,
/// `connect` moves it to connected, and `close` moves it back. `send` is
/// only valid while connected and `connect` only while disconnected. `close`
/// is valid in either state.
///
/// Metrics reporting code should hold one instance of this trait, call
/// `connect` once before first use, `send` once per observation, and `close`
/// at shutdown. The `with_connection` method does the first and last steps
/// for callers that have a bounded amount of work to do.
pub trait Graphite {
    /// Acquire the resources needed to send metrics.
    ///
    /// # Failures
    ///
    /// * `AlreadyConnected` if this client is already connected. The existing
    ///   connection is left untouched and remains usable.
    /// * `ConnectError` if the underlying resources could not be acquired.
    fn connect(&mut self) -> MetricResult<()>;

    /// Send a single measurement.
    ///
    /// A successful send resets the failure count to zero. A failure to hand
    /// the measurement to the underlying transport increments the failure
    /// count before the error is returned.
    ///
    /// # Failures
    ///
    /// * `NotConnected` if `connect` has not been called, or the client has
    ///   been closed since. The failure count is not changed.
    /// * `SendError` if the underlying transport rejected the measurement.
    fn send(&mut self, name: &str, value: &str, timestamp: i64) -> MetricResult<()>;

    /// Release any resources held by this client.
    ///
    /// Closing a client that isn't connected does nothing. The failure count
    /// is not changed.
    fn close(&mut self) -> MetricResult<()>;

    /// Number of consecutive failed sends since the last successful one.
    fn failures(&self) -> u64;

    /// Is this client currently connected?
    fn is_connected(&self) -> bool;

    /// Connect, run the given function with the connected client, then close
    /// the client on every path out of the function.
    ///
    /// If the function returns an error, that error is returned even if
    /// closing the client also fails.
    ///
    /// # Example
    ///
    /// ```
    /// use carbonate::prelude::*;
    /// use carbonate::NopGraphite;
    ///
    /// let mut client = NopGraphite::new();
    /// client.with_connection(|c| {
    ///     c.send("some.metric", "1", 1609459200)?;
    ///     c.send("some.other", "2", 1609459200)
    /// }).unwrap();
    ///
    /// assert!(!client.is_connected());
    /// ```
    fn with_connection<F, T>(&mut self, f: F) -> MetricResult<T>
    where
        F: FnOnce(&mut Self) -> MetricResult<T>,
        Self: Sized,
    {
        self.connect()?;
        let res = f(self);
        let closed = self.close();
        let out = res?;
        closed?;
        Ok(out)
    }
}

impl<T> Graphite for Box<T>
where
    T: Graphite + ?Sized,
{
    fn connect(&mut self) -> MetricResult<()> {
        (**self).connect()
    }

    fn send(&mut self, name: &str, value: &str, timestamp: i64) -> MetricResult<()> {
        (**self).send(name, value, timestamp)
    }

    fn close(&mut self) -> MetricResult<()> {
        (**self).close()
    }

    fn failures(&self) -> u64 {
        (**self).failures()
    }

    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }
}

pub(crate) fn already_connected() -> MetricError {
    MetricError::from((ErrorKind::AlreadyConnected, "Already connected"))
}

pub(crate) fn not_connected() -> MetricError {
    MetricError::from((ErrorKind::NotConnected, "Not connected"))
}

/// Implementation of `Graphite` that discards all metrics.
///
/// It still enforces the connect/send/close state machine so that code
/// written against it behaves the same when switched to a real client.
/// Useful for disabling metric collection or unit tests.
#[derive(Debug, Clone, Default)]
pub struct NopGraphite {
    connected: bool,
}

impl NopGraphite {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Graphite for NopGraphite {
    fn connect(&mut self) -> MetricResult<()> {
        if self.connected {
            return Err(already_connected());
        }
        self.connected = true;
        Ok(())
    }

    #[allow(unused_variables)]
    fn send(&mut self, name: &str, value: &str, timestamp: i64) -> MetricResult<()> {
        if self.connected {
            Ok(())
        } else {
            Err(not_connected())
        }
    }

    fn close(&mut self) -> MetricResult<()> {
        self.connected = false;
        Ok(())
    }

    fn failures(&self) -> u64 {
        0
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}
