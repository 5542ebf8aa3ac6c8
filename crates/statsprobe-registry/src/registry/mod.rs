//! In-memory stats receiver.
//!
//! Four independent `DashMap` stores hold counters, stat samples, gauge
//! producers, and verbosity tags. Each store is keyed by the structural
//! `NameKey`, never by its joined display string. Mutations on one key are
//! serialized by the owning shard's write lock; there is no lock spanning
//! stores, so registering a metric and tagging its verbosity are two separate
//! writes.

mod counter;
mod dump;
mod gauge;
mod histogram;
mod stat;

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use statsprobe_core::{NameKey, StatsReceiver, Verbosity};

use crate::config::RegistryConfig;

pub use counter::CounterHandle;
pub use gauge::{GaugeHandle, GaugeProducer, GAUGE_ABSENT};
pub use histogram::{histogram_detail_of, MAX_BUCKET_INDEX};
pub use stat::StatHandle;

pub(crate) struct Stores {
    pub(crate) counters: DashMap<NameKey, i64>,
    pub(crate) stats: DashMap<NameKey, Vec<f32>>,
    pub(crate) gauges: DashMap<NameKey, GaugeProducer>,
    pub(crate) verbosity: DashMap<NameKey, Verbosity>,
    pub(crate) cfg: RegistryConfig,
}

impl Stores {
    fn tag(&self, kind: &'static str, verbosity: Verbosity, name: &NameKey) {
        // Last registration wins.
        self.verbosity.insert(name.clone(), verbosity);
        tracing::trace!(%name, %verbosity, kind, "metric registered");
    }

    /// Clone the producer out so no shard lock is held while it runs.
    pub(crate) fn producer(&self, name: &NameKey) -> Option<GaugeProducer> {
        self.gauges.get(name).map(|p| Arc::clone(p.value()))
    }
}

/// Thread-safe registry capturing everything emitted through it.
///
/// Clones share the same stores.
#[derive(Clone)]
pub struct InMemoryStatsReceiver {
    stores: Arc<Stores>,
}

impl Default for InMemoryStatsReceiver {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStatsReceiver {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(cfg: RegistryConfig) -> Self {
        Self {
            stores: Arc::new(Stores {
                counters: DashMap::new(),
                stats: DashMap::new(),
                gauges: DashMap::new(),
                verbosity: DashMap::new(),
                cfg,
            }),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.stores.cfg
    }

    /// Snapshot of every counter that has been incremented.
    pub fn counters(&self) -> HashMap<NameKey, i64> {
        self.stores
            .counters
            .iter()
            .map(|e| (e.key().clone(), *e.value()))
            .collect()
    }

    /// Snapshot of every stat that has received a sample.
    pub fn stats(&self) -> HashMap<NameKey, Vec<f32>> {
        self.stores
            .stats
            .iter()
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect()
    }

    /// Currently installed gauge producers. Nothing is invoked.
    pub fn gauges(&self) -> HashMap<NameKey, GaugeProducer> {
        self.stores
            .gauges
            .iter()
            .map(|e| (e.key().clone(), Arc::clone(e.value())))
            .collect()
    }

    /// Verbosity tags. These survive `clear()`.
    pub fn verbosity(&self) -> HashMap<NameKey, Verbosity> {
        self.stores
            .verbosity
            .iter()
            .map(|e| (e.key().clone(), *e.value()))
            .collect()
    }

    pub fn counter_value(&self, name: impl Into<NameKey>) -> i64 {
        self.stores
            .counters
            .get(&name.into())
            .map(|v| *v.value())
            .unwrap_or(0)
    }

    pub fn stat_values(&self, name: impl Into<NameKey>) -> Vec<f32> {
        self.stores
            .stats
            .get(&name.into())
            .map(|v| v.value().clone())
            .unwrap_or_default()
    }

    /// Invoke the producer under `name`, if one is installed.
    pub fn gauge_value(&self, name: impl Into<NameKey>) -> Option<f32> {
        self.stores.producer(&name.into()).map(|f| f())
    }

    pub fn verbosity_of(&self, name: impl Into<NameKey>) -> Option<Verbosity> {
        self.stores.verbosity.get(&name.into()).map(|v| *v.value())
    }
}

impl StatsReceiver for InMemoryStatsReceiver {
    type Counter = CounterHandle;
    type Stat = StatHandle;
    type Gauge = GaugeHandle;

    fn counter_with(&self, verbosity: Verbosity, name: NameKey) -> CounterHandle {
        self.stores.tag("counter", verbosity, &name);
        CounterHandle::new(name, Arc::clone(&self.stores))
    }

    fn stat_with(&self, verbosity: Verbosity, name: NameKey) -> StatHandle {
        self.stores.tag("stat", verbosity, &name);
        StatHandle::new(name, Arc::clone(&self.stores))
    }

    fn add_gauge_with<F>(&self, verbosity: Verbosity, name: NameKey, producer: F) -> GaugeHandle
    where
        F: Fn() -> f32 + Send + Sync + 'static,
    {
        self.stores.tag("gauge", verbosity, &name);
        if self
            .stores
            .gauges
            .insert(name.clone(), Arc::new(producer))
            .is_some()
        {
            tracing::debug!(%name, "gauge producer replaced");
        } else {
            tracing::debug!(%name, "gauge installed");
        }
        GaugeHandle::new(name, Arc::clone(&self.stores))
    }
}

impl std::fmt::Display for InMemoryStatsReceiver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("InMemoryStatsReceiver")
    }
}
