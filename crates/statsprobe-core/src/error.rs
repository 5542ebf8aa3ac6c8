//! Shared error type across statsprobe crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Unified error type.
///
/// Recording and reading metrics never fails; only loading configuration and
/// writing a dump to an output sink can.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("dump write failed: {0}")]
    Io(#[from] std::io::Error),
}
