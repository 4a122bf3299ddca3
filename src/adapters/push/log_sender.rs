//! Logging push sender for development and tests.

use async_trait::async_trait;

use crate::ports::{PushError, PushSender};

/// Logs notifications instead of delivering them.
pub struct LogSender;

#[async_trait]
impl PushSender for LogSender {
    async fn send(&self, token: &str, title: &str, body: &str) -> Result<(), PushError> {
        tracing::info!(token, title, body, "push notification (log only)");
        Ok(())
    }
}
