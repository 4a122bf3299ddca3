//! Push sender port - Delegates notification delivery to the hosted
//! messaging service.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the push delivery service.
#[derive(Debug, Error)]
pub enum PushError {
    /// The device token is no longer valid and should be dropped.
    #[error("device token rejected")]
    TokenRejected,

    /// The messaging service could not be reached.
    #[error("push service unavailable: {0}")]
    Unavailable(String),
}

/// Port for sending a push notification to one device.
///
/// Delivery, batching, and retries are the hosted service's concern;
/// this port is fire-and-forget from the application's perspective.
#[async_trait]
pub trait PushSender: Send + Sync {
    /// Sends a notification to a device token.
    async fn send(&self, token: &str, title: &str, body: &str) -> Result<(), PushError>;
}
