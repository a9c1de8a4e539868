//! # Safety Source Data Store
//!
//! Holds the most recent report for every [`SafetySourceKey`].
//!
//! ## Invariants
//!
//! - At most one report per key; a write replaces the previous report whole.
//! - A key has no entry until its first write, and never loses it again.
//! - One mutex guards the whole map. Every read and write takes it, so
//!   operations are totally ordered and no reader sees a half-written report.
//! - Reads hand out clones. Nothing outside the store can reach the map.
//!
//! The store performs no access control. Callers MUST pass requests through
//! an [`AccessGuard`](crate::ports::AccessGuard) first.

use parking_lot::Mutex;
use std::collections::HashMap;

use crate::domain::{SafetySourceData, SafetySourceKey};

/// In-memory, last-write-wins store of safety source data.
///
/// Contents live as long as the store; nothing is persisted.
#[derive(Debug, Default)]
pub struct SafetySourceDataStore {
    data: Mutex<HashMap<SafetySourceKey, SafetySourceData>>,
}

impl SafetySourceDataStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            data: Mutex::new(HashMap::new()),
        }
    }

    /// Inserts or replaces the report for `key`.
    pub fn put(&self, key: SafetySourceKey, data: SafetySourceData) {
        self.data.lock().insert(key, data);
    }

    /// Returns a copy of the report for `key`, or `None` if nothing was ever
    /// written there.
    pub fn get(&self, key: &SafetySourceKey) -> Option<SafetySourceData> {
        self.data.lock().get(key).cloned()
    }

    /// Number of keys holding a report.
    pub fn len(&self) -> usize {
        self.data.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
