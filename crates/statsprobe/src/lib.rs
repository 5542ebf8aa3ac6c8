//! Top-level facade crate for statsprobe.
//!
//! Re-exports the receiver contract and the in-memory registry so users can
//! depend on a single crate.

pub mod core {
    pub use statsprobe_core::*;
}

pub mod registry {
    pub use statsprobe_registry::*;
}

pub use statsprobe_core::{Counter, Gauge, NameKey, Stat, StatsReceiver, Verbosity};
pub use statsprobe_registry::InMemoryStatsReceiver;
