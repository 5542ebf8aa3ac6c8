use std::fmt;
use std::sync::Arc;

use statsprobe_core::{Gauge, NameKey};

use super::Stores;

/// A registered gauge producer.
pub type GaugeProducer = Arc<dyn Fn() -> f32 + Send + Sync>;

/// Reading of a gauge with no producer installed.
pub const GAUGE_ABSENT: f32 = -0.0;

/// Handle to a gauge slot.
///
/// The handle holds only the name. The producer lives in the registry until
/// it is removed or replaced, and is called afresh on every read.
#[derive(Clone)]
pub struct GaugeHandle {
    name: NameKey,
    stores: Arc<Stores>,
}

impl GaugeHandle {
    pub(crate) fn new(name: NameKey, stores: Arc<Stores>) -> Self {
        Self { name, stores }
    }

    pub fn name(&self) -> &NameKey {
        &self.name
    }

    /// Invoke the current producer, or return [`GAUGE_ABSENT`].
    pub fn read(&self) -> f32 {
        match self.stores.producer(&self.name) {
            Some(f) => f(),
            None => GAUGE_ABSENT,
        }
    }
}

impl Gauge for GaugeHandle {
    fn remove(&self) {
        if self.stores.gauges.remove(&self.name).is_some() {
            tracing::debug!(name = %self.name, "gauge removed");
        }
    }
}

impl fmt::Display for GaugeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gauge({}={})", self.name, self.read())
    }
}
