// Carbonate - A minimal Graphite client for Rust!
//
// Copyright 2026 The Carbonate Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::types::{ErrorKind, MetricError};

// Byte written in place of characters an encoding can't represent.
const REPLACEMENT: u8 = b'?';

/// Character set used to turn a metric line into the bytes of a datagram.
///
/// Carbon itself only deals in ASCII, so for well-behaved metric names every
/// encoding produces the same bytes. The choice only matters for names or
/// values that contain other characters. Characters the selected encoding
/// cannot represent are written as a single `?`.
///
/// Encodings can be picked by name, which is handy when the name comes from
/// configuration owned by the embedding application:
///
/// ```
/// use carbonate::Encoding;
///
/// let enc: Encoding = "ISO-8859-1".parse().unwrap();
/// assert_eq!(Encoding::Latin1, enc);
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Latin1,
    Ascii,
}

impl Encoding {
    /// Encode the given line, borrowing it when no conversion is needed.
    pub fn encode<'a>(&self, line: &'a str) -> Cow<'a, [u8]> {
        match *self {
            Encoding::Utf8 => Cow::Borrowed(line.as_bytes()),
            Encoding::Latin1 => Self::narrow(line, 0xFF),
            Encoding::Ascii => Self::narrow(line, 0x7F),
        }
    }

    /// Canonical name of this character set.
    pub fn name(&self) -> &'static str {
        match *self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Latin1 => "ISO-8859-1",
            Encoding::Ascii => "US-ASCII",
        }
    }

    fn narrow(line: &str, max: u32) -> Cow<'_, [u8]> {
        if line.is_ascii() {
            return Cow::Borrowed(line.as_bytes());
        }

        Cow::Owned(
            line.chars()
                .map(|c| {
                    let point = c as u32;
                    if point <= max {
                        point as u8
                    } else {
                        REPLACEMENT
                    }
                })
                .collect(),
        )
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

impl FromStr for Encoding {
    type Err = MetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "iso-8859-1" | "iso8859-1" | "iso_8859_1" | "latin1" | "latin-1" => Ok(Encoding::Latin1),
            "us-ascii" | "ascii" => Ok(Encoding::Ascii),
            _ => Err(MetricError::from((ErrorKind::InvalidInput, "Unsupported encoding"))),
        }
    }
}
