//! statsprobe core: the metric-emission contract and the value types shared by
//! every receiver implementation.
//!
//! Instrumented code depends only on the traits in [`receiver`]; tests swap in
//! the in-memory registry from `statsprobe-registry` and read values back.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here so that emitting a
//! metric can never take down the code under test.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod histogram;
pub mod name;
pub mod receiver;
pub mod verbosity;

/// Shared result type.
pub use error::{Result, StatsError};
pub use histogram::{BucketAndCount, HistogramDetail};
pub use name::NameKey;
pub use receiver::{Counter, Gauge, Scoped, Stat, StatsReceiver};
pub use verbosity::Verbosity;
