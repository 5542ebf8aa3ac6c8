use std::fmt;
use std::sync::Arc;

use statsprobe_core::{Counter, NameKey};

use super::Stores;

/// Handle to one counter entry. Cloning yields another handle to the same key.
#[derive(Clone)]
pub struct CounterHandle {
    name: NameKey,
    stores: Arc<Stores>,
}

impl CounterHandle {
    pub(crate) fn new(name: NameKey, stores: Arc<Stores>) -> Self {
        Self { name, stores }
    }

    pub fn name(&self) -> &NameKey {
        &self.name
    }

    /// Current total, 0 if never incremented.
    pub fn read(&self) -> i64 {
        self.stores
            .counters
            .get(&self.name)
            .map(|v| *v.value())
            .unwrap_or(0)
    }
}

impl Counter for CounterHandle {
    fn incr(&self, delta: i64) {
        // Read-modify-write happens under the shard write lock either way;
        // the fast path only skips cloning the key.
        if let Some(mut v) = self.stores.counters.get_mut(&self.name) {
            let next = v.wrapping_add(delta);
            *v = next;
            return;
        }
        let mut v = self.stores.counters.entry(self.name.clone()).or_insert(0);
        let next = v.wrapping_add(delta);
        *v = next;
    }
}

impl fmt::Display for CounterHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Counter({}={})", self.name, self.read())
    }
}
