//! statsprobe in-memory registry.
//!
//! Captures every counter increment, stat sample, and gauge producer emitted
//! through `statsprobe_core::StatsReceiver` so that tests can assert on exact
//! values. Nothing leaves the process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod registry;

pub use config::{DisplaySection, DumpSection, RegistryConfig};
pub use registry::{
    histogram_detail_of, CounterHandle, GaugeHandle, GaugeProducer, InMemoryStatsReceiver,
    StatHandle, GAUGE_ABSENT, MAX_BUCKET_INDEX,
};
