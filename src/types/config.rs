//! Configuration types
//!
//! Where the settings tree lives and how module documents are named.

use crate::storage::{get_data_dir, StorageError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the settings root directory
pub const ROOT_ENV_VAR: &str = "SETTINGS_SYNC_DIR";

/// Default file name of a module settings document
pub const DEFAULT_FILE_NAME: &str = "settings.json";

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Root of the settings tree (None = environment or platform data dir)
    #[serde(default)]
    pub root: Option<PathBuf>,
    /// File name of each module's document inside its directory
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: None,
            file_name: default_file_name(),
        }
    }
}

impl StoreConfig {
    /// Config rooted at an explicit directory
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            ..Self::default()
        }
    }

    /// Resolve the root directory.
    ///
    /// Explicit root first, then `SETTINGS_SYNC_DIR`, then the platform data dir.
    pub fn resolve_root(&self) -> Result<PathBuf, StorageError> {
        if let Some(root) = &self.root {
            return Ok(root.clone());
        }

        match std::env::var(ROOT_ENV_VAR) {
            Ok(dir) if !dir.trim().is_empty() => Ok(PathBuf::from(dir)),
            _ => get_data_dir(),
        }
    }
}
