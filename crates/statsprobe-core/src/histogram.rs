//! Bucketed distribution value types.

use serde::Serialize;

/// Number of samples that fell into the half-open range `[lower, upper)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BucketAndCount {
    /// Inclusive lower bound.
    pub lower: i32,
    /// Exclusive upper bound, always `lower + 1`.
    pub upper: i32,
    /// Samples that fell in the range.
    pub count: u64,
}

/// Unit-width bucket counts for one stat, ascending by `lower`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HistogramDetail {
    /// One entry per non-empty bucket.
    pub counts: Vec<BucketAndCount>,
}

impl HistogramDetail {
    /// Total number of samples across all buckets.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|b| b.count).sum()
    }
}
