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
use std::fmt::Write;

// Replacement for each run of whitespace in a name or value.
const SEPARATOR: char = '-';

/// Characters treated as whitespace when sanitizing: space, tab, line
/// feed, vertical tab, form feed and carriage return.
#[inline]
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Replace every run of one or more whitespace characters with a single `-`.
///
/// Carbon splits each line on whitespace, so a space inside a metric name or
/// value would shift the remaining fields. The input is returned unchanged
/// (and unallocated) when it contains no whitespace.
///
/// ```
/// assert_eq!("response-time", carbonate::sanitize("response \t time"));
/// assert_eq!("12.5-ms", carbonate::sanitize("12.5 ms"));
/// ```
pub fn sanitize(s: &str) -> Cow<'_, str> {
    if !s.contains(is_separator) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut in_run = false;

    for c in s.chars() {
        if is_separator(c) {
            if !in_run {
                out.push(SEPARATOR);
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }

    Cow::Owned(out)
}

/// Build the plaintext line for a single measurement, including the
/// trailing newline.
///
/// ``` text
/// <name> <value> <timestamp>\n
/// ```
///
/// Name and value are sanitized, the timestamp is written as a decimal
/// integer.
pub fn format_line(name: &str, value: &str, timestamp: i64) -> String {
    let name = sanitize(name);
    let value = sanitize(value);

    let mut line = String::with_capacity(name.len() + 1 /* ' ' */ + value.len() + 1 /* ' ' */ + 20 /* ts */ + 1 /* \n */);
    line.push_str(&name);
    line.push(' ');
    line.push_str(&value);
    line.push(' ');
    // Writing into a String can't fail
    let _ = write!(line, "{}", timestamp);
    line.push('\n');
    line
}
