//! Host notification channel
//!
//! The transport itself lives outside this crate; all we see is a sender that
//! takes one serialized message and returns a status code.

use crate::types::message::NotificationEnvelope;
use serde::Serialize;
use thiserror::Error;

/// IPC errors
#[derive(Debug, Error)]
pub enum IpcError {
    #[error("Transport failed: {0}")]
    Transport(String),
    #[error("Malformed notification: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Notification must name exactly one module, found {0}")]
    ModuleCount(usize),
}

/// Sends one serialized notification to the host process.
///
/// The returned status code is advisory and never interpreted here. Plain
/// `Fn(&str) -> i32` closures implement this trait and never fail outright.
pub trait IpcSender: Send + Sync {
    fn send(&self, message: &str) -> Result<i32, IpcError>;
}

impl<F> IpcSender for F
where
    F: Fn(&str) -> i32 + Send + Sync,
{
    fn send(&self, message: &str) -> Result<i32, IpcError> {
        Ok(self(message))
    }
}

/// Outcome of a property write, as far as the notification is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    /// Value already held; nothing changed, nothing sent
    Unchanged,
    /// Sender was invoked and returned this status code
    Delivered(i32),
    /// Notification could not be encoded or the sender failed outright
    Failed,
}

impl DeliveryStatus {
    /// Whether the sender was called and returned a zero status
    pub fn is_ok(&self) -> bool {
        matches!(self, DeliveryStatus::Delivered(0))
    }
}

/// Encode an envelope and hand it to the sender.
///
/// Failures are logged and reported in the returned status, never propagated:
/// the in-memory change has already been committed by the caller.
pub fn dispatch<P: Serialize>(
    sender: &dyn IpcSender,
    envelope: &NotificationEnvelope<P>,
) -> DeliveryStatus {
    let message = match envelope.to_message() {
        Ok(message) => message,
        Err(e) => {
            tracing::error!(
                "Failed to encode notification for '{}': {}",
                envelope.module_name(),
                e
            );
            return DeliveryStatus::Failed;
        }
    };

    match sender.send(&message) {
        Ok(0) => {
            tracing::debug!("Sent settings notification for '{}'", envelope.module_name());
            DeliveryStatus::Delivered(0)
        }
        Ok(status) => {
            tracing::warn!(
                "Settings notification for '{}' returned status {}",
                envelope.module_name(),
                status
            );
            DeliveryStatus::Delivered(status)
        }
        Err(e) => {
            tracing::error!(
                "Failed to send settings notification for '{}': {}",
                envelope.module_name(),
                e
            );
            DeliveryStatus::Failed
        }
    }
}
