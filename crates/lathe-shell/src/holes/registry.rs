use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::debug;

use lathe_common::HoleBounds;

/// A registry shared between the session, its observers, and rendering code.
pub type SharedHoleRegistry = Arc<Mutex<HoleRegistry>>;

/// Process-wide map from hole id to last-known bounds.
///
/// Purely local state: nothing in here talks to the host. Writes are
/// last-write-wins with no versioning; the most recent `update` call is
/// what `get` returns, full stop.
#[derive(Debug, Default)]
pub struct HoleRegistry {
    holes: HashMap<String, HoleBounds>,
}

impl HoleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a zeroed entry for `id`. Registering an id that is already
    /// present leaves its current bounds untouched.
    pub fn register(&mut self, id: &str) {
        if !self.holes.contains_key(id) {
            debug!(hole = id, "hole registered");
            self.holes.insert(id.to_string(), HoleBounds::ZERO);
        }
    }

    /// Remove the entry for `id`. No-op if absent.
    pub fn unregister(&mut self, id: &str) {
        if self.holes.remove(id).is_some() {
            debug!(hole = id, "hole unregistered");
        }
    }

    /// Overwrite the stored bounds unconditionally, inserting if absent.
    pub fn update(&mut self, id: &str, bounds: HoleBounds) {
        self.holes.insert(id.to_string(), bounds);
    }

    pub fn get(&self, id: &str) -> Option<HoleBounds> {
        self.holes.get(id).copied()
    }

    pub fn ids(&self) -> Vec<String> {
        self.holes.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.holes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }
}
