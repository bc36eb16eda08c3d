//! Cloneable handle for sharing one store across components.

use crate::{ConfigError, ConfigStore};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde_json::Value;
use std::sync::Arc;

/// A [`ConfigStore`] behind a reader-writer lock.
///
/// Clones share the same store, so a `set` through one handle is visible to
/// every reader immediately.
#[derive(Debug, Clone)]
pub struct SharedConfigStore {
    inner: Arc<RwLock<ConfigStore>>,
}

impl SharedConfigStore {
    pub fn new(store: ConfigStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, ConfigStore> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, ConfigStore> {
        self.inner.write()
    }

    /// Clone of the value at `keys`, if present.
    pub fn get(&self, keys: &[&str]) -> Option<Value> {
        self.inner.read().get(keys).cloned()
    }

    pub fn set(&self, value: impl Into<Value>, keys: &[&str]) -> Result<(), ConfigError> {
        self.inner.write().set(value, keys)
    }

    /// Persist under a read lock; concurrent readers are not blocked.
    pub fn save(&self) -> bool {
        self.inner.read().save()
    }
}

impl From<ConfigStore> for SharedConfigStore {
    fn from(store: ConfigStore) -> Self {
        Self::new(store)
    }
}
