//! Notification message types
//!
//! The envelope sent to the host process after a settings change, and its
//! wire form `{"powertoysSetting": {"<module>": {"properties": {...}}}}`.

use crate::ipc::IpcError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A settings-change notification for one module.
///
/// The payload is the full property set after the change, not a diff.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationEnvelope<P> {
    module_name: String,
    payload: P,
}

#[derive(Serialize)]
struct OutboundMessage<'a, P> {
    #[serde(rename = "powertoysSetting")]
    modules: BTreeMap<&'a str, OutboundModule<'a, P>>,
}

#[derive(Serialize)]
struct OutboundModule<'a, P> {
    properties: &'a P,
}

#[derive(Deserialize)]
struct InboundMessage<P> {
    #[serde(rename = "powertoysSetting")]
    modules: HashMap<String, InboundModule<P>>,
}

#[derive(Deserialize)]
struct InboundModule<P> {
    properties: P,
}

impl<P> NotificationEnvelope<P> {
    pub fn new(module_name: impl Into<String>, payload: P) -> Self {
        Self {
            module_name: module_name.into(),
            payload,
        }
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn into_payload(self) -> P {
        self.payload
    }
}

impl<P: Serialize> NotificationEnvelope<P> {
    /// Serialize to the wire form handed to the IPC sender
    pub fn to_message(&self) -> Result<String, serde_json::Error> {
        let mut modules = BTreeMap::new();
        modules.insert(
            self.module_name.as_str(),
            OutboundModule {
                properties: &self.payload,
            },
        );
        serde_json::to_string(&OutboundMessage { modules })
    }
}

impl<P: DeserializeOwned> NotificationEnvelope<P> {
    /// Decode a wire message. Exactly one module entry is accepted.
    pub fn from_message(message: &str) -> Result<Self, IpcError> {
        let inbound: InboundMessage<P> = serde_json::from_str(message)?;
        let count = inbound.modules.len();
        if count != 1 {
            return Err(IpcError::ModuleCount(count));
        }

        inbound
            .modules
            .into_iter()
            .next()
            .map(|(module_name, module)| Self::new(module_name, module.properties))
            .ok_or(IpcError::ModuleCount(0))
    }
}
