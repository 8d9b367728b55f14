//! Settings Sync Library
//!
//! Loads per-module settings documents, keeps one live copy per module in
//! memory and notifies the host process whenever a setting changes.

pub mod ipc;
pub mod logging;
pub mod modules;
pub mod repository;
pub mod storage;
pub mod types;
pub mod view_model;

pub use ipc::{DeliveryStatus, IpcError, IpcSender};
pub use repository::{RepositoryCache, SettingsRepository};
pub use storage::settings::SettingsAccessor;
pub use storage::{FileStore, MemoryStore, SettingsStore, StorageError};
pub use types::message::NotificationEnvelope;
pub use types::settings::{ModuleProperties, ModuleSettings};
