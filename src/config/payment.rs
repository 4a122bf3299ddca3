//! Billing provider configuration.

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

/// Billing webhook settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Shared secret used to verify webhook signatures.
    pub webhook_secret: Secret<String>,
}

impl PaymentConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.webhook_secret.expose_secret().is_empty() {
            return Err(ValidationError::invalid(
                "payment",
                "webhook_secret",
                "must be set",
            ));
        }
        Ok(())
    }
}
