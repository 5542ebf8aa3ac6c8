//! Unit-width bucketing of stat samples.
//!
//! Derived on demand from the current samples; nothing is cached.

use std::collections::{BTreeMap, HashMap};

use statsprobe_core::{BucketAndCount, HistogramDetail};

use super::InMemoryStatsReceiver;

/// Exclusive upper bound on bucket indices. Samples at or past it land in
/// the top bucket `[MAX_BUCKET_INDEX - 1, MAX_BUCKET_INDEX)`.
pub const MAX_BUCKET_INDEX: i32 = i32::MAX;

fn bucket_index(v: f32) -> i32 {
    // NaN fails every comparison; route it to bucket 0 explicitly.
    if v.is_nan() || v < 0.0 {
        0
    } else if v >= MAX_BUCKET_INDEX as f32 {
        MAX_BUCKET_INDEX - 1
    } else {
        v as i32
    }
}

/// Bucket `samples` into `[n, n+1)` ranges, ascending by `n`.
pub fn histogram_detail_of(samples: &[f32]) -> HistogramDetail {
    let mut buckets: BTreeMap<i32, u64> = BTreeMap::new();
    for &v in samples {
        *buckets.entry(bucket_index(v)).or_insert(0) += 1;
    }
    HistogramDetail {
        counts: buckets
            .into_iter()
            .map(|(lower, count)| BucketAndCount {
                lower,
                upper: lower + 1,
                count,
            })
            .collect(),
    }
}

impl InMemoryStatsReceiver {
    /// Bucketed distribution of every stat, keyed by joined display name.
    ///
    /// Distinct keys that join to the same string collide here; one of them
    /// wins, unspecified which.
    pub fn histogram_details(&self) -> HashMap<String, HistogramDetail> {
        self.stores
            .stats
            .iter()
            .map(|e| (e.key().joined(), histogram_detail_of(e.value())))
            .collect()
    }
}
