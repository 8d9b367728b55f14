//! Persistent storage
//!
//! Named-document storage for module settings. A store only knows how to
//! read and write raw documents by module name; decoding and defaults live
//! in [`settings`] and [`crate::repository`].

pub mod file;
pub mod memory;
pub mod settings;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Settings for module '{0}' not found")]
    NotFound(String),
    #[error("Malformed settings for module '{module}': {source}")]
    Malformed {
        module: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Could not determine data directory")]
    DataDirUnavailable,
}

/// Backing store for module settings documents
pub trait SettingsStore: Send + Sync {
    /// Read the raw document for a module. `NotFound` if it does not exist.
    fn read(&self, module: &str) -> Result<String, StorageError>;

    /// Replace the raw document for a module.
    fn write(&self, module: &str, contents: &str) -> Result<(), StorageError>;

    fn exists(&self, module: &str) -> bool;
}

/// Platform data directory for settings
///
/// Windows: %LOCALAPPDATA%/SettingsSync/data
/// Linux: ~/.local/share/settingssync
/// macOS: ~/Library/Application Support/com.SettingsSync.SettingsSync
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    directories::ProjectDirs::from("com", "SettingsSync", "SettingsSync")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .ok_or(StorageError::DataDirUnavailable)
}
