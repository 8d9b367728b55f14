//! File Explorer preview view model

use crate::ipc::{DeliveryStatus, IpcSender};
use crate::modules::power_preview::{PowerPreviewProperties, PreviewFlag};
use crate::repository::SettingsRepository;
use crate::storage::StorageError;
use crate::view_model::SettingsViewModel;
use std::sync::Arc;

/// View model for the File Explorer preview toggles
pub struct PowerPreviewViewModel {
    inner: SettingsViewModel<PowerPreviewProperties>,
}

impl PowerPreviewViewModel {
    pub fn new(
        repository: &SettingsRepository<PowerPreviewProperties>,
        sender: Arc<dyn IpcSender>,
    ) -> Result<Self, StorageError> {
        Ok(Self {
            inner: SettingsViewModel::new(repository, sender)?,
        })
    }

    pub fn flag(&self, flag: PreviewFlag) -> bool {
        self.inner.read(|props| props.get(flag))
    }

    pub fn set_flag(&self, flag: PreviewFlag, value: bool) -> DeliveryStatus {
        tracing::debug!("Setting {} to {}", flag, value);
        self.inner.update(|props| props.set(flag, value))
    }

    pub fn md_render_enabled(&self) -> bool {
        self.flag(PreviewFlag::MdPreview)
    }

    pub fn set_md_render_enabled(&self, value: bool) -> DeliveryStatus {
        self.set_flag(PreviewFlag::MdPreview, value)
    }

    pub fn svg_render_enabled(&self) -> bool {
        self.flag(PreviewFlag::SvgPreview)
    }

    pub fn set_svg_render_enabled(&self, value: bool) -> DeliveryStatus {
        self.set_flag(PreviewFlag::SvgPreview, value)
    }

    pub fn svg_thumbnail_enabled(&self) -> bool {
        self.flag(PreviewFlag::SvgThumbnail)
    }

    pub fn set_svg_thumbnail_enabled(&self, value: bool) -> DeliveryStatus {
        self.set_flag(PreviewFlag::SvgThumbnail, value)
    }

    pub fn properties(&self) -> PowerPreviewProperties {
        self.inner.snapshot()
    }
}
