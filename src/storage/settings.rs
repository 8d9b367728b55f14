//! Settings storage
//!
//! Typed load/save of module settings documents on top of a [`SettingsStore`].

use crate::storage::{SettingsStore, StorageError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Reads and writes module settings documents.
///
/// Loads are side-effect free: the same document can be loaded any number
/// of times, through a repository or directly, without interference.
#[derive(Clone)]
pub struct SettingsAccessor {
    store: Arc<dyn SettingsStore>,
}

impl SettingsAccessor {
    pub fn new(store: impl SettingsStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Accessor over a store the caller keeps a handle to
    pub fn from_shared(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Load and decode a module's settings document
    pub fn load<T: DeserializeOwned>(&self, module: &str) -> Result<T, StorageError> {
        let json = self.store.read(module)?;
        let settings = serde_json::from_str(&json).map_err(|source| StorageError::Malformed {
            module: module.to_string(),
            source,
        })?;

        tracing::debug!("Loaded settings for '{}'", module);
        Ok(settings)
    }

    /// Save a module's settings document
    pub fn save<T: Serialize>(&self, module: &str, settings: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(settings)?;
        self.store.write(module, &json)?;

        tracing::debug!("Saved settings for '{}'", module);
        Ok(())
    }

    pub fn settings_exists(&self, module: &str) -> bool {
        self.store.exists(module)
    }
}
