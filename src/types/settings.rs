//! Module settings document
//!
//! The `{version, name, properties}` envelope every module persists, plus the
//! trait a module's property payload implements.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A module's property payload.
///
/// `Default` must produce the documented default of every field: it is what a
/// missing document, or a field missing from an older document, reads as.
pub trait ModuleProperties:
    Serialize + DeserializeOwned + Default + Clone + Send + Sync + 'static
{
    /// Canonical module name; also the storage key and the IPC routing key
    const MODULE_NAME: &'static str;

    /// Version string written into freshly created documents
    const SCHEMA_VERSION: &'static str = "1.0";
}

/// One module's persisted configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "RawModuleSettings<P>",
    bound(deserialize = "P: ModuleProperties")
)]
pub struct ModuleSettings<P> {
    version: String,
    name: String,
    properties: P,
}

/// Decode shape: every field optional, unknown keys ignored.
#[derive(Deserialize)]
struct RawModuleSettings<P> {
    version: Option<String>,
    name: Option<String>,
    properties: Option<P>,
}

impl<P: ModuleProperties> From<RawModuleSettings<P>> for ModuleSettings<P> {
    fn from(raw: RawModuleSettings<P>) -> Self {
        if let Some(name) = raw.name.as_deref() {
            if name != P::MODULE_NAME {
                tracing::warn!(
                    "Settings document names module '{}', expected '{}'; using canonical name",
                    name,
                    P::MODULE_NAME
                );
            }
        }

        Self {
            version: raw
                .version
                .unwrap_or_else(|| P::SCHEMA_VERSION.to_string()),
            name: P::MODULE_NAME.to_string(),
            properties: raw.properties.unwrap_or_default(),
        }
    }
}

impl<P: ModuleProperties> Default for ModuleSettings<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<P: ModuleProperties> ModuleSettings<P> {
    /// Wrap a payload with the canonical name and current schema version
    pub fn new(properties: P) -> Self {
        Self {
            version: P::SCHEMA_VERSION.to_string(),
            name: P::MODULE_NAME.to_string(),
            properties,
        }
    }
}

impl<P> ModuleSettings<P> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Version of the tool that last wrote the document (informational)
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn properties(&self) -> &P {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut P {
        &mut self.properties
    }

    pub fn into_properties(self) -> P {
        self.properties
    }
}
