//! Settings view models
//!
//! A view model binds to a repository's live settings, exposes the module's
//! properties, and notifies the host process on every change. It never
//! writes to storage; persisting on change is the host's job.

pub mod power_preview;

pub use power_preview::PowerPreviewViewModel;

use crate::ipc::{self, DeliveryStatus, IpcSender};
use crate::repository::{SettingsRepository, SharedSettings};
use crate::storage::StorageError;
use crate::types::message::NotificationEnvelope;
use crate::types::settings::ModuleProperties;
use std::sync::{Arc, Mutex};

/// Apply `mutate` to `properties` and describe the result.
///
/// `mutate` returns whether it changed anything. Returns the notification
/// carrying the full post-change properties, or `None` for a no-op.
pub fn apply<P: Clone>(
    properties: &mut P,
    module_name: &str,
    mutate: impl FnOnce(&mut P) -> bool,
) -> Option<NotificationEnvelope<P>> {
    if mutate(properties) {
        Some(NotificationEnvelope::new(module_name, properties.clone()))
    } else {
        None
    }
}

/// Generic view model over one module's shared settings
pub struct SettingsViewModel<P: ModuleProperties> {
    settings: SharedSettings<P>,
    sender: Arc<dyn IpcSender>,
    // held from mutation through send; notifications leave in commit order
    dispatch: Mutex<()>,
}

impl<P: ModuleProperties> SettingsViewModel<P> {
    /// Bind to the repository's settings, loading them if needed.
    ///
    /// Fails if the settings cannot be loaded; there is no partial view model.
    pub fn new(
        repository: &SettingsRepository<P>,
        sender: Arc<dyn IpcSender>,
    ) -> Result<Self, StorageError> {
        let settings = repository.settings()?;
        Ok(Self {
            settings,
            sender,
            dispatch: Mutex::new(()),
        })
    }

    pub fn module_name(&self) -> &'static str {
        P::MODULE_NAME
    }

    /// Read the current properties. No I/O, no notification.
    pub fn read<R>(&self, f: impl FnOnce(&P) -> R) -> R {
        let settings = self.settings.read().expect("settings lock poisoned");
        f(settings.properties())
    }

    pub fn snapshot(&self) -> P {
        self.read(P::clone)
    }

    /// Mutate the properties and, if anything changed, send one notification.
    ///
    /// The change is committed before sending and is kept whatever the
    /// delivery outcome. Writers are serialized up to and including the send,
    /// so the last notification delivered always matches the in-memory state.
    /// The settings lock is released before sending; a sender may read.
    pub fn update(&self, mutate: impl FnOnce(&mut P) -> bool) -> DeliveryStatus {
        let _dispatch = self.dispatch.lock().expect("dispatch mutex poisoned");

        let envelope = {
            let mut settings = self.settings.write().expect("settings lock poisoned");
            apply(settings.properties_mut(), P::MODULE_NAME, mutate)
        };

        match envelope {
            Some(envelope) => ipc::dispatch(self.sender.as_ref(), &envelope),
            None => DeliveryStatus::Unchanged,
        }
    }
}
