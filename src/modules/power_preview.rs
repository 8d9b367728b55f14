//! File Explorer preview settings
//!
//! Toggles for the Markdown and SVG preview handlers and the SVG thumbnail
//! provider.

use crate::types::settings::ModuleProperties;
use serde::{Deserialize, Serialize};

/// Canonical module name of the preview handlers
pub const MODULE_NAME: &str = "File Explorer";

/// Preview handler toggles.
///
/// Every flag defaults to enabled. Flags missing from a document read as
/// their default; unknown keys are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerPreviewProperties {
    /// SVG preview pane handler
    #[serde(
        rename = "svg-previewer-toggle-setting",
        with = "super::property::bool_property"
    )]
    pub enable_svg_preview: bool,
    /// SVG thumbnail provider
    #[serde(
        rename = "svg-thumbnail-toggle-setting",
        with = "super::property::bool_property"
    )]
    pub enable_svg_thumbnail: bool,
    /// Markdown preview pane handler
    #[serde(
        rename = "md-previewer-toggle-setting",
        with = "super::property::bool_property"
    )]
    pub enable_md_preview: bool,
}

impl Default for PowerPreviewProperties {
    fn default() -> Self {
        Self {
            enable_svg_preview: true,
            enable_svg_thumbnail: true,
            enable_md_preview: true,
        }
    }
}

impl ModuleProperties for PowerPreviewProperties {
    const MODULE_NAME: &'static str = MODULE_NAME;
}

/// Addressable flags of [`PowerPreviewProperties`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreviewFlag {
    MdPreview,
    SvgPreview,
    SvgThumbnail,
}

impl PreviewFlag {
    pub const ALL: [PreviewFlag; 3] = [
        PreviewFlag::MdPreview,
        PreviewFlag::SvgPreview,
        PreviewFlag::SvgThumbnail,
    ];
}

impl std::fmt::Display for PreviewFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreviewFlag::MdPreview => write!(f, "md-preview"),
            PreviewFlag::SvgPreview => write!(f, "svg-preview"),
            PreviewFlag::SvgThumbnail => write!(f, "svg-thumbnail"),
        }
    }
}

impl PowerPreviewProperties {
    pub fn get(&self, flag: PreviewFlag) -> bool {
        match flag {
            PreviewFlag::MdPreview => self.enable_md_preview,
            PreviewFlag::SvgPreview => self.enable_svg_preview,
            PreviewFlag::SvgThumbnail => self.enable_svg_thumbnail,
        }
    }

    /// Set a flag, returning whether its value changed
    pub fn set(&mut self, flag: PreviewFlag, value: bool) -> bool {
        let slot = match flag {
            PreviewFlag::MdPreview => &mut self.enable_md_preview,
            PreviewFlag::SvgPreview => &mut self.enable_svg_preview,
            PreviewFlag::SvgThumbnail => &mut self.enable_svg_thumbnail,
        };
        let changed = *slot != value;
        *slot = value;
        changed
    }
}
