// Carbonate - A minimal Graphite client for Rust!
//
// Copyright 2026 The Carbonate Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Export commonly used parts of Carbonate for easy glob imports
//!
//! # Example
//!
//! ```
//! use carbonate::prelude::*;
//! use carbonate::NopGraphite;
//!
//! let mut client = NopGraphite::new();
//!
//! client.connect().unwrap();
//! client.send("some.gauge", "45", 1609459200).unwrap();
//! client.close().unwrap();
//! ```

pub use crate::sinks::Graphite;
