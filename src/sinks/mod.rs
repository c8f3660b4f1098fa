// Carbonate - A minimal Graphite client for Rust!
//
// Copyright 2026 The Carbonate Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod core;
mod spy;
mod udp;

pub use crate::sinks::core::{Graphite, NopGraphite};
pub use crate::sinks::spy::SpyGraphite;
pub use crate::sinks::udp::{GraphiteUdp, GraphiteUdpBuilder};
