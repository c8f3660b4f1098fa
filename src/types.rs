// Carbonate - A minimal Graphite client for Rust!
//
// Copyright 2026 The Carbonate Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::error;
use std::fmt;
use std::io;

/// Potential categories an error from this library falls into.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ErrorKind {
    /// An address or configuration value could not be used.
    InvalidInput,
    /// `connect` was called while a socket was already held.
    AlreadyConnected,
    /// The operating system refused to give us a socket.
    ConnectError,
    /// `send` was called without an open socket.
    NotConnected,
    /// The datagram could not be handed to the transport.
    SendError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ErrorKind::InvalidInput => "invalid input".fmt(f),
            ErrorKind::AlreadyConnected => "already connected".fmt(f),
            ErrorKind::ConnectError => "connect error".fmt(f),
            ErrorKind::NotConnected => "not connected".fmt(f),
            ErrorKind::SendError => "send error".fmt(f),
        }
    }
}

/// Error generated by this library potentially wrapping another
/// type of error (exposed via the `Error` trait).
#[derive(Debug)]
pub struct MetricError {
    repr: ErrorRepr,
}

#[derive(Debug)]
enum ErrorRepr {
    WithDescription(ErrorKind, &'static str),
    IoError(ErrorKind, io::Error),
}

impl MetricError {
    /// Return the kind of the error
    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            ErrorRepr::IoError(kind, _) => kind,
            ErrorRepr::WithDescription(kind, _) => kind,
        }
    }

    /// Return the underlying I/O error, if this error was caused by one
    pub fn io_error(&self) -> Option<&io::Error> {
        match self.repr {
            ErrorRepr::IoError(_, ref err) => Some(err),
            ErrorRepr::WithDescription(_, _) => None,
        }
    }
}

impl fmt::Display for MetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            ErrorRepr::IoError(kind, ref err) => write!(f, "{}: {}", kind, err),
            ErrorRepr::WithDescription(_, desc) => desc.fmt(f),
        }
    }
}

impl error::Error for MetricError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.repr {
            ErrorRepr::IoError(_, ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<(ErrorKind, io::Error)> for MetricError {
    fn from((kind, err): (ErrorKind, io::Error)) -> MetricError {
        MetricError {
            repr: ErrorRepr::IoError(kind, err),
        }
    }
}

impl From<(ErrorKind, &'static str)> for MetricError {
    fn from((kind, desc): (ErrorKind, &'static str)) -> MetricError {
        MetricError {
            repr: ErrorRepr::WithDescription(kind, desc),
        }
    }
}

pub type MetricResult<T> = Result<T, MetricError>;
