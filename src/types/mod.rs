//! Shared type definitions
//!
//! Settings documents, notification messages and store configuration.

pub mod config;
pub mod message;
pub mod settings;
