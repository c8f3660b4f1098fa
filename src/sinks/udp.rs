// Carbonate - A minimal Graphite client for Rust!
//
// Copyright 2026 The Carbonate Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

use log::{debug, trace};

use crate::encoding::Encoding;
use crate::format::format_line;
use crate::sinks::core::{already_connected, not_connected, Graphite};
use crate::types::{ErrorKind, MetricError, MetricResult};

/// Attempt to convert anything implementing the `ToSocketAddrs` trait
/// into a concrete `SocketAddr` instance, returning an `InvalidInput`
/// error if the address could not be parsed.
#[allow(clippy::needless_pass_by_value)]
fn get_addr<A: ToSocketAddrs>(addr: A) -> MetricResult<SocketAddr> {
    let mut addrs = addr
        .to_socket_addrs()
        .map_err(|e| MetricError::from((ErrorKind::InvalidInput, e)))?;

    match addrs.next() {
        Some(addr) => Ok(addr),
        None => Err(MetricError::from((
            ErrorKind::InvalidInput,
            "No socket addresses yielded",
        ))),
    }
}

/// Ephemeral local address in the same family as the remote address.
fn unspecified_for(addr: &SocketAddr) -> SocketAddr {
    match addr {
        SocketAddr::V4(_) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)),
        SocketAddr::V6(_) => SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0)),
    }
}

#[derive(Debug)]
enum Connection {
    Disconnected,
    Connected(UdpSocket),
}

/// Builder for creating and customizing a `GraphiteUdp` instance.
///
/// Use this when the defaults of `GraphiteUdp::new` aren't what you want.
///
/// # Example
///
/// ```no_run
/// use std::net::SocketAddr;
/// use carbonate::{Encoding, GraphiteUdp, DEFAULT_PORT};
///
/// let addr = SocketAddr::from(([10, 0, 0, 5], DEFAULT_PORT));
/// let client = GraphiteUdp::builder(addr)
///     .with_encoding(Encoding::Ascii)
///     .with_bind_addr(SocketAddr::from(([10, 0, 0, 2], 0)))
///     .with_nonblocking(true)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct GraphiteUdpBuilder {
    addr: SocketAddr,
    encoding: Encoding,
    bind_addr: Option<SocketAddr>,
    nonblocking: bool,
}

impl GraphiteUdpBuilder {
    fn new(addr: SocketAddr) -> Self {
        GraphiteUdpBuilder {
            addr,
            encoding: Encoding::default(),
            bind_addr: None,
            nonblocking: false,
        }
    }

    /// Set the character set used to encode each line.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set the local address the socket is bound to when connecting.
    ///
    /// Defaults to an ephemeral port on the unspecified address of the same
    /// family as the Carbon server's address.
    pub fn with_bind_addr(mut self, bind_addr: SocketAddr) -> Self {
        self.bind_addr = Some(bind_addr);
        self
    }

    /// Put the socket in non-blocking mode when connecting.
    ///
    /// A send that would block is then reported as a `SendError` and counts
    /// as a failure.
    pub fn with_nonblocking(mut self, nonblocking: bool) -> Self {
        self.nonblocking = nonblocking;
        self
    }

    /// Construct a new, disconnected, `GraphiteUdp` instance based on
    /// current settings.
    pub fn build(self) -> GraphiteUdp {
        GraphiteUdp {
            bind_addr: self.bind_addr.unwrap_or_else(|| unspecified_for(&self.addr)),
            addr: self.addr,
            encoding: self.encoding,
            nonblocking: self.nonblocking,
            conn: Connection::Disconnected,
            failures: 0,
        }
    }
}

/// Implementation of `Graphite` that sends each measurement to a Carbon
/// server as a single UDP datagram.
///
/// The socket is created by `connect` and released by `close` (or when the
/// client is dropped). It is bound to a local ephemeral port rather than
/// connected to the server; the server address is supplied with each packet.
///
/// Delivery is not guaranteed. The client never retries. A send that the
/// operating system refuses is counted in `failures()` and returned to the
/// caller, who decides whether to retry, alert, or drop the measurement.
///
/// Mutating operations take `&mut self`. Wrap the client in a `Mutex` to
/// share it between threads.
///
/// # Example
///
/// ```no_run
/// use carbonate::prelude::*;
/// use carbonate::{GraphiteUdp, DEFAULT_PORT};
///
/// let mut client = GraphiteUdp::from_host(("metrics.example.com", DEFAULT_PORT)).unwrap();
/// client.connect().unwrap();
/// client.send("servers.web01.load", "0.93", 1700000000).unwrap();
/// client.close().unwrap();
/// ```
#[derive(Debug)]
pub struct GraphiteUdp {
    addr: SocketAddr,
    bind_addr: SocketAddr,
    encoding: Encoding,
    nonblocking: bool,
    conn: Connection,
    failures: u64,
}

impl GraphiteUdp {
    /// Construct a new, disconnected, client for the Carbon server at the
    /// given address, encoding lines as UTF-8.
    pub fn new(addr: SocketAddr) -> GraphiteUdp {
        Self::builder(addr).build()
    }

    /// Construct a new, disconnected, client for the Carbon server at the
    /// given address, encoding lines with the given character set.
    pub fn with_encoding(addr: SocketAddr, encoding: Encoding) -> GraphiteUdp {
        Self::builder(addr).with_encoding(encoding).build()
    }

    /// Construct a new, disconnected, client after resolving the given host.
    ///
    /// The host is resolved once, here. The first address yielded is used
    /// for the lifetime of the client.
    ///
    /// # Failures
    ///
    /// This method may fail if:
    ///
    /// * It is unable to resolve the hostname of the Carbon server.
    /// * The host address is otherwise unable to be parsed
    pub fn from_host<A>(host: A) -> MetricResult<GraphiteUdp>
    where
        A: ToSocketAddrs,
    {
        get_addr(host).map(Self::new)
    }

    /// Create a builder for customizing a client for the Carbon server at
    /// the given address.
    pub fn builder(addr: SocketAddr) -> GraphiteUdpBuilder {
        GraphiteUdpBuilder::new(addr)
    }

    /// Address of the Carbon server metrics are sent to.
    pub fn endpoint(&self) -> SocketAddr {
        self.addr
    }

    /// Character set used to encode each line.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Local address of the socket, if connected.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        match self.conn {
            Connection::Connected(ref socket) => socket.local_addr().ok(),
            Connection::Disconnected => None,
        }
    }

    fn open_socket(&self) -> MetricResult<UdpSocket> {
        let socket = UdpSocket::bind(self.bind_addr).map_err(|e| MetricError::from((ErrorKind::ConnectError, e)))?;
        if self.nonblocking {
            socket
                .set_nonblocking(true)
                .map_err(|e| MetricError::from((ErrorKind::ConnectError, e)))?;
        }

        Ok(socket)
    }
}

impl Graphite for GraphiteUdp {
    fn connect(&mut self) -> MetricResult<()> {
        if let Connection::Connected(_) = self.conn {
            trace!("Already connected");
            return Err(already_connected());
        }

        self.conn = Connection::Connected(self.open_socket()?);
        Ok(())
    }

    fn send(&mut self, name: &str, value: &str, timestamp: i64) -> MetricResult<()> {
        let socket = match self.conn {
            Connection::Connected(ref socket) => socket,
            Connection::Disconnected => return Err(not_connected()),
        };

        let line = format_line(name, value, timestamp);
        trace!("Sending {}", line.trim_end());
        let bytes = self.encoding.encode(&line);

        match socket.send_to(&bytes, self.addr) {
            Ok(_) => {
                self.failures = 0;
                Ok(())
            }
            Err(e) => {
                self.failures = self.failures.saturating_add(1);
                debug!("Error while sending packet to {}: {}", self.addr, e);
                Err(MetricError::from((ErrorKind::SendError, e)))
            }
        }
    }

    fn close(&mut self) -> MetricResult<()> {
        // Dropping the socket closes it
        self.conn = Connection::Disconnected;
        Ok(())
    }

    fn failures(&self) -> u64 {
        self.failures
    }

    fn is_connected(&self) -> bool {
        matches!(self.conn, Connection::Connected(_))
    }
}
