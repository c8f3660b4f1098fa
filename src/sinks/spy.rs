// Carbonate - A minimal Graphite client for Rust!
//
// Copyright 2026 The Carbonate Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt::{self, Debug, Formatter};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use log::{debug, trace};

use crate::encoding::Encoding;
use crate::format::format_line;
use crate::sinks::core::{already_connected, not_connected, Graphite};
use crate::types::{ErrorKind, MetricError, MetricResult};

/// `Graphite` implementation that writes all metrics to a shared `Write`
/// instance that callers retain a reference to.
///
/// This is not a general purpose client, rather it's meant for verifying
/// metrics written by embedding code during the course of tests. It follows
/// the same connect/send/close rules as `GraphiteUdp`: each line is encoded
/// with the configured character set and handed to the writer in a single
/// `write_all` call. A writer error counts as a failed send.
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use carbonate::prelude::*;
/// use carbonate::SpyGraphite;
///
/// let writer = Arc::new(Mutex::new(Vec::<u8>::new()));
/// let mut client = SpyGraphite::from(writer.clone());
///
/// client.connect().unwrap();
/// client.send("queue depth", "3", 1609459200).unwrap();
/// client.close().unwrap();
///
/// assert_eq!(b"queue-depth 3 1609459200\n".to_vec(), *writer.lock().unwrap());
/// ```
pub struct SpyGraphite {
    writer: Arc<Mutex<dyn Write + Send + 'static>>,
    encoding: Encoding,
    connected: bool,
    failures: u64,
}

impl SpyGraphite {
    pub fn from(writer: Arc<Mutex<dyn Write + Send + 'static>>) -> Self {
        Self::with_encoding(writer, Encoding::default())
    }

    pub fn with_encoding(writer: Arc<Mutex<dyn Write + Send + 'static>>, encoding: Encoding) -> Self {
        SpyGraphite {
            writer,
            encoding,
            connected: false,
            failures: 0,
        }
    }

    fn write_line(&self, bytes: &[u8]) -> io::Result<()> {
        // A writer poisoned by a panicking test is still fine to append to
        let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        writer.write_all(bytes)?;
        writer.flush()
    }
}

impl Graphite for SpyGraphite {
    fn connect(&mut self) -> MetricResult<()> {
        if self.connected {
            trace!("Already connected");
            return Err(already_connected());
        }
        self.connected = true;
        Ok(())
    }

    fn send(&mut self, name: &str, value: &str, timestamp: i64) -> MetricResult<()> {
        if !self.connected {
            return Err(not_connected());
        }

        let line = format_line(name, value, timestamp);
        trace!("Sending {}", line.trim_end());

        let bytes = self.encoding.encode(&line);
        match self.write_line(&bytes) {
            Ok(()) => {
                self.failures = 0;
                Ok(())
            }
            Err(e) => {
                self.failures = self.failures.saturating_add(1);
                debug!("Error while writing metric: {}", e);
                Err(MetricError::from((ErrorKind::SendError, e)))
            }
        }
    }

    fn close(&mut self) -> MetricResult<()> {
        self.connected = false;
        Ok(())
    }

    fn failures(&self) -> u64 {
        self.failures
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}

impl Debug for SpyGraphite {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpyGraphite")
            .field("writer", &"Mutex { ... }")
            .field("encoding", &self.encoding)
            .field("connected", &self.connected)
            .field("failures", &self.failures)
            .finish()
    }
}
