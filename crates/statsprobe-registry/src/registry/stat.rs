use std::fmt;
use std::sync::Arc;

use statsprobe_core::{NameKey, Stat};

use super::Stores;

/// Handle to one stat's sample sequence.
#[derive(Clone)]
pub struct StatHandle {
    name: NameKey,
    stores: Arc<Stores>,
}

impl StatHandle {
    pub(crate) fn new(name: NameKey, stores: Arc<Stores>) -> Self {
        Self { name, stores }
    }

    pub fn name(&self) -> &NameKey {
        &self.name
    }

    /// Every sample recorded so far, in insertion order.
    pub fn read(&self) -> Vec<f32> {
        self.stores
            .stats
            .get(&self.name)
            .map(|v| v.value().clone())
            .unwrap_or_default()
    }
}

impl Stat for StatHandle {
    fn add(&self, value: f32) {
        if let Some(mut samples) = self.stores.stats.get_mut(&self.name) {
            samples.push(value);
            return;
        }
        self.stores
            .stats
            .entry(self.name.clone())
            .or_default()
            .push(value);
    }
}

impl fmt::Display for StatHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let samples = self.read();
        write!(
            f,
            "Stat({}={})",
            self.name,
            format_samples(&samples, self.stores.cfg.display.stat_preview)
        )
    }
}

/// `[a,b,c]`, or `[a,b,c... (omitted N value(s))]` past `preview` samples.
pub(crate) fn format_samples(samples: &[f32], preview: usize) -> String {
    let shown = samples
        .iter()
        .take(preview)
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",");
    if samples.len() > preview {
        format!("[{shown}... (omitted {} value(s))]", samples.len() - preview)
    } else {
        format!("[{shown}]")
    }
}
