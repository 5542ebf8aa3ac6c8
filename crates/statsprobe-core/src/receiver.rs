//! The metric-emission contract.
//!
//! Instrumented code is written against [`StatsReceiver`] and never names a
//! concrete backend. Handles are cheap to clone and may be shared across
//! threads; looking a name up twice yields two handles to the same metric.

use crate::name::NameKey;
use crate::verbosity::Verbosity;

/// Integer accumulator updated by signed deltas.
pub trait Counter: Send + Sync {
    fn incr(&self, delta: i64);

    fn incr_one(&self) {
        self.incr(1);
    }
}

/// Sink for floating-point samples.
pub trait Stat: Send + Sync {
    fn add(&self, value: f32);
}

/// Registration of a lazily evaluated value.
pub trait Gauge: Send + Sync {
    /// Deregister whatever producer currently occupies this gauge's name.
    fn remove(&self);
}

pub trait StatsReceiver: Send + Sync {
    type Counter: Counter;
    type Stat: Stat;
    type Gauge: Gauge;

    fn counter_with(&self, verbosity: Verbosity, name: NameKey) -> Self::Counter;

    fn stat_with(&self, verbosity: Verbosity, name: NameKey) -> Self::Stat;

    /// Install `producer` under `name`, replacing any producer already there.
    fn add_gauge_with<F>(&self, verbosity: Verbosity, name: NameKey, producer: F) -> Self::Gauge
    where
        F: Fn() -> f32 + Send + Sync + 'static;

    fn counter(&self, name: impl Into<NameKey>) -> Self::Counter {
        self.counter_with(Verbosity::Default, name.into())
    }

    fn stat(&self, name: impl Into<NameKey>) -> Self::Stat {
        self.stat_with(Verbosity::Default, name.into())
    }

    fn add_gauge<F>(&self, name: impl Into<NameKey>, producer: F) -> Self::Gauge
    where
        F: Fn() -> f32 + Send + Sync + 'static,
    {
        self.add_gauge_with(Verbosity::Default, name.into(), producer)
    }

    /// Install a gauge for the life of the receiver. The handle is dropped,
    /// so only a removal by name or a bulk reset takes it out again.
    fn provide_gauge<F>(&self, name: impl Into<NameKey>, producer: F)
    where
        F: Fn() -> f32 + Send + Sync + 'static,
    {
        let _ = self.add_gauge(name, producer);
    }

    /// A view that places `namespace` in front of every name.
    fn scope(&self, namespace: &str) -> Scoped<'_, Self>
    where
        Self: Sized,
    {
        Scoped::new(self, namespace)
    }
}

/// Receiver adapter that prefixes names with a fixed list of segments.
///
/// The namespace becomes a segment of its own; `scope("a").counter(["b"])`
/// and `counter(["a/b"])` address different metrics.
pub struct Scoped<'a, R> {
    inner: &'a R,
    prefix: Vec<String>,
}

impl<'a, R: StatsReceiver> Scoped<'a, R> {
    pub fn new(inner: &'a R, namespace: &str) -> Self {
        let prefix = if namespace.is_empty() {
            Vec::new()
        } else {
            vec![namespace.to_string()]
        };
        Self { inner, prefix }
    }

    /// Segments prepended to every name.
    pub fn prefix(&self) -> &[String] {
        &self.prefix
    }

    fn qualify(&self, name: NameKey) -> NameKey {
        if self.prefix.is_empty() {
            name
        } else {
            name.prefixed(&self.prefix)
        }
    }
}

impl<'a, R: StatsReceiver> StatsReceiver for Scoped<'a, R> {
    type Counter = R::Counter;
    type Stat = R::Stat;
    type Gauge = R::Gauge;

    fn counter_with(&self, verbosity: Verbosity, name: NameKey) -> Self::Counter {
        self.inner.counter_with(verbosity, self.qualify(name))
    }

    fn stat_with(&self, verbosity: Verbosity, name: NameKey) -> Self::Stat {
        self.inner.stat_with(verbosity, self.qualify(name))
    }

    fn add_gauge_with<F>(&self, verbosity: Verbosity, name: NameKey, producer: F) -> Self::Gauge
    where
        F: Fn() -> f32 + Send + Sync + 'static,
    {
        self.inner.add_gauge_with(verbosity, self.qualify(name), producer)
    }
}
