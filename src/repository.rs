//! Settings repositories
//!
//! A [`SettingsRepository`] lazily loads one module's settings and hands out
//! the same shared instance for the rest of its lifetime. A
//! [`RepositoryCache`] holds one repository per settings type.

use crate::storage::settings::SettingsAccessor;
use crate::storage::StorageError;
use crate::types::settings::{ModuleProperties, ModuleSettings};
use dashmap::DashMap;
use once_cell::sync::{Lazy, OnceCell};
use std::any::{Any, TypeId};
use std::sync::{Arc, RwLock};

/// Live settings shared between a repository and its view models
pub type SharedSettings<P> = Arc<RwLock<ModuleSettings<P>>>;

/// Cached holder of one module's settings.
///
/// The first successful [`settings`](Self::settings) call reads storage; every
/// later call returns the cached instance. Concurrent first calls block on a
/// single load and all observe its result.
pub struct SettingsRepository<P: ModuleProperties> {
    accessor: SettingsAccessor,
    settings: OnceCell<SharedSettings<P>>,
}

impl<P: ModuleProperties> SettingsRepository<P> {
    pub fn new(accessor: SettingsAccessor) -> Self {
        Self {
            accessor,
            settings: OnceCell::new(),
        }
    }

    /// Shared settings instance, loading it on first access.
    ///
    /// A missing document yields defaults, which are not written back.
    /// A malformed document is an error and nothing is cached.
    pub fn settings(&self) -> Result<SharedSettings<P>, StorageError> {
        self.settings
            .get_or_try_init(|| self.load())
            .map(Arc::clone)
    }

    pub fn is_loaded(&self) -> bool {
        self.settings.get().is_some()
    }

    pub fn module_name(&self) -> &'static str {
        P::MODULE_NAME
    }

    pub fn accessor(&self) -> &SettingsAccessor {
        &self.accessor
    }

    fn load(&self) -> Result<SharedSettings<P>, StorageError> {
        let settings = match self.accessor.load::<ModuleSettings<P>>(P::MODULE_NAME) {
            Ok(settings) => settings,
            Err(StorageError::NotFound(_)) => {
                tracing::info!("Settings for '{}' not found, using defaults", P::MODULE_NAME);
                ModuleSettings::default()
            }
            Err(e) => {
                tracing::error!("Failed to load settings for '{}': {}", P::MODULE_NAME, e);
                return Err(e);
            }
        };

        Ok(Arc::new(RwLock::new(settings)))
    }
}

static GLOBAL_CACHE: Lazy<RepositoryCache> = Lazy::new(RepositoryCache::new);

/// One repository per settings type
#[derive(Default)]
pub struct RepositoryCache {
    repositories: DashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl RepositoryCache {
    pub fn new() -> Self {
        Self {
            repositories: DashMap::new(),
        }
    }

    /// Process-wide cache, for hosts that do not thread their own through
    pub fn global() -> &'static RepositoryCache {
        &GLOBAL_CACHE
    }

    /// Repository for `P`, created with `accessor` on first request.
    ///
    /// Later requests return the existing repository and ignore `accessor`.
    pub fn get_instance<P: ModuleProperties>(
        &self,
        accessor: &SettingsAccessor,
    ) -> Arc<SettingsRepository<P>> {
        let entry = self
            .repositories
            .entry(TypeId::of::<P>())
            .or_insert_with(|| {
                Arc::new(SettingsRepository::<P>::new(accessor.clone())) as Arc<dyn Any + Send + Sync>
            })
            .value()
            .clone();

        entry
            .downcast::<SettingsRepository<P>>()
            .ok()
            .expect("repository cache entry type matches its TypeId key")
    }

    pub fn len(&self) -> usize {
        self.repositories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, SettingsStore};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct Sample {
        enabled: bool,
        level: u32,
    }

    impl Default for Sample {
        fn default() -> Self {
            Self {
                enabled: true,
                level: 4,
            }
        }
    }

    impl ModuleProperties for Sample {
        const MODULE_NAME: &'static str = "Sample";
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Other {
        flag: bool,
    }

    impl ModuleProperties for Other {
        const MODULE_NAME: &'static str = "Other";
    }

    fn accessor_over(store: &Arc<MemoryStore>) -> SettingsAccessor {
        SettingsAccessor::from_shared(store.clone())
    }

    #[test]
    fn test_missing_document_yields_defaults_without_write_back() {
        let store = Arc::new(MemoryStore::new());
        let repository = SettingsRepository::<Sample>::new(accessor_over(&store));

        let settings = repository.settings().expect("defaults substituted");
        let settings = settings.read().expect("settings lock poisoned");

        assert_eq!(settings.properties(), &Sample::default());
        assert_eq!(settings.name(), "Sample");
        assert_eq!(store.write_count("Sample"), 0);
        assert!(!store.exists("Sample"));
    }

    #[test]
    fn test_sequential_access_loads_once() {
        let store = Arc::new(
            MemoryStore::new().with_document("Sample", r#"{"properties": {"enabled": false}}"#),
        );
        let repository = SettingsRepository::<Sample>::new(accessor_over(&store));
        assert!(!repository.is_loaded());

        let first = repository.settings().expect("first access");
        let second = repository.settings().expect("second access");

        assert!(Arc::ptr_eq(&first, &second));
        assert!(repository.is_loaded());
        assert_eq!(store.read_count("Sample"), 1);
        assert!(!first.read().expect("settings lock poisoned").properties().enabled);
    }

    #[test]
    fn test_concurrent_first_access_loads_once() {
        let store = Arc::new(MemoryStore::new().with_document("Sample", r#"{"properties": {}}"#));
        let repository = SettingsRepository::<Sample>::new(accessor_over(&store));

        let instances: Vec<SharedSettings<Sample>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| repository.settings().expect("load succeeds")))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("thread panicked"))
                .collect()
        });

        assert_eq!(store.read_count("Sample"), 1);
        assert!(instances.iter().all(|s| Arc::ptr_eq(s, &instances[0])));
    }

    #[test]
    fn test_in_memory_copy_is_authoritative_after_load() {
        let store = Arc::new(MemoryStore::new());
        let repository = SettingsRepository::<Sample>::new(accessor_over(&store));

        repository
            .settings()
            .expect("defaults")
            .write()
            .expect("settings lock poisoned")
            .properties_mut()
            .level = 9;
        store
            .write("Sample", r#"{"properties": {"level": 1}}"#)
            .expect("write succeeds");

        let settings = repository.settings().expect("cached");
        assert_eq!(settings.read().expect("settings lock poisoned").properties().level, 9);
        assert_eq!(store.read_count("Sample"), 1);
    }

    #[test]
    fn test_malformed_document_fails_closed() {
        let store = Arc::new(
            MemoryStore::new().with_document("Sample", r#"{"properties": {"level": "max"}}"#),
        );
        let repository = SettingsRepository::<Sample>::new(accessor_over(&store));

        assert!(matches!(repository.settings(), Err(StorageError::Malformed { .. })));
        assert!(!repository.is_loaded());
    }

    #[test]
    fn test_cache_returns_same_repository_per_type() {
        let store = Arc::new(MemoryStore::new());
        let cache = RepositoryCache::new();
        let accessor = accessor_over(&store);

        let first = cache.get_instance::<Sample>(&accessor);
        let second = cache.get_instance::<Sample>(&accessor);
        let other = cache.get_instance::<Other>(&accessor);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(other.module_name(), "Other");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_global_cache_is_shared() {
        let accessor = accessor_over(&Arc::new(MemoryStore::new()));

        let first = RepositoryCache::global().get_instance::<Other>(&accessor);
        let second = RepositoryCache::global().get_instance::<Other>(&accessor);

        assert!(Arc::ptr_eq(&first, &second));
        assert!(!RepositoryCache::global().is_empty());
    }

    #[test]
    fn test_fresh_cache_per_consumer_is_isolated() {
        let store = Arc::new(MemoryStore::new());
        let accessor = accessor_over(&store);

        RepositoryCache::new()
            .get_instance::<Sample>(&accessor)
            .settings()
            .expect("defaults");
        RepositoryCache::new()
            .get_instance::<Sample>(&accessor)
            .settings()
            .expect("defaults");

        assert_eq!(store.read_count("Sample"), 2);
    }
}
