//! Schema cache
//!
//! Keyed store for schema documents fetched through a `SchemaSource`. Values for
//! a key are deterministic, so concurrent writers racing on the same key are
//! harmless and the last write wins.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::ports::ModuleSchema;

#[derive(Debug, Default)]
pub struct SchemaCache {
    entries: Mutex<HashMap<String, ModuleSchema>>,
}

impl SchemaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache key for a lookup by module type.
    pub fn module_key(module_type: &str) -> String {
        format!("module:{module_type}")
    }

    pub fn get(&self, key: &str) -> Option<ModuleSchema> {
        self.lock().get(key).cloned()
    }

    pub fn set(&self, key: impl Into<String>, schema: ModuleSchema) {
        self.lock().insert(key.into(), schema);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave a half-written entry behind.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, ModuleSchema>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
