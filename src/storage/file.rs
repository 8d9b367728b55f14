//! File system store
//!
//! Layout: `<root>/<module name>/<file name>`, one directory per module.

use crate::storage::{SettingsStore, StorageError};
use crate::types::config::StoreConfig;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
    file_name: String,
}

impl FileStore {
    /// Store rooted at `root` using the default `settings.json` file name
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::from_parts(root.into(), StoreConfig::default().file_name)
    }

    pub fn from_config(config: &StoreConfig) -> Result<Self, StorageError> {
        Ok(Self::from_parts(config.resolve_root()?, config.file_name.clone()))
    }

    fn from_parts(root: PathBuf, file_name: String) -> Self {
        Self { root, file_name }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a module's settings document
    pub fn settings_path(&self, module: &str) -> PathBuf {
        self.root.join(module).join(&self.file_name)
    }
}

impl SettingsStore for FileStore {
    fn read(&self, module: &str) -> Result<String, StorageError> {
        let path = self.settings_path(module);
        match fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!("Read settings from {}", path.display());
                Ok(contents)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StorageError::NotFound(module.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, module: &str, contents: &str) -> Result<(), StorageError> {
        let path = self.settings_path(module);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&path, contents)?;

        tracing::debug!("Wrote settings to {}", path.display());
        Ok(())
    }

    fn exists(&self, module: &str) -> bool {
        self.settings_path(module).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_document_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path());

        assert!(!store.exists("File Explorer"));
        let err = store.read("File Explorer").unwrap_err();
        assert!(matches!(err, StorageError::NotFound(module) if module == "File Explorer"));
    }

    #[test]
    fn test_write_creates_module_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path());

        store.write("File Explorer", "{}").expect("write succeeds");

        assert!(dir.path().join("File Explorer").join("settings.json").is_file());
        assert!(store.exists("File Explorer"));
        assert_eq!(store.read("File Explorer").expect("read succeeds"), "{}");
    }

    #[test]
    fn test_custom_file_name_from_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = StoreConfig {
            root: Some(dir.path().to_path_buf()),
            file_name: "prefs.json".to_string(),
        };
        let store = FileStore::from_config(&config).expect("config resolves");

        assert_eq!(
            store.settings_path("Sample"),
            dir.path().join("Sample").join("prefs.json")
        );
    }

    #[test]
    fn test_write_into_file_path_fails_with_io() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").expect("write blocker");

        let store = FileStore::new(&blocker);
        let err = store.write("Sample", "{}").unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
    }
}
