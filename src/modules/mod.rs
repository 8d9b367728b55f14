//! Module settings payloads
//!
//! One submodule per settings-bearing module.

pub mod power_preview;
mod property;

pub use power_preview::{PowerPreviewProperties, PreviewFlag};
