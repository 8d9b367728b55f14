//! In-memory store
//!
//! Keeps documents in a concurrent map and counts reads per module.

use crate::storage::{SettingsStore, StorageError};
use dashmap::DashMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: DashMap<String, String>,
    reads: DashMap<String, usize>,
    writes: DashMap<String, usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document without counting it as a write
    pub fn with_document(self, module: impl Into<String>, contents: impl Into<String>) -> Self {
        self.documents.insert(module.into(), contents.into());
        self
    }

    /// Number of `read` calls made for a module, found or not
    pub fn read_count(&self, module: &str) -> usize {
        self.reads.get(module).map(|count| *count).unwrap_or(0)
    }

    pub fn write_count(&self, module: &str) -> usize {
        self.writes.get(module).map(|count| *count).unwrap_or(0)
    }

    pub fn document(&self, module: &str) -> Option<String> {
        self.documents.get(module).map(|doc| doc.value().clone())
    }
}

impl SettingsStore for MemoryStore {
    fn read(&self, module: &str) -> Result<String, StorageError> {
        *self.reads.entry(module.to_string()).or_insert(0) += 1;
        self.document(module)
            .ok_or_else(|| StorageError::NotFound(module.to_string()))
    }

    fn write(&self, module: &str, contents: &str) -> Result<(), StorageError> {
        *self.writes.entry(module.to_string()).or_insert(0) += 1;
        self.documents.insert(module.to_string(), contents.to_string());
        Ok(())
    }

    fn exists(&self, module: &str) -> bool {
        self.documents.contains_key(module)
    }
}
