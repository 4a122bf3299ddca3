//! Configuration error types.

use thiserror::Error;

/// Errors loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

/// Errors from semantic validation of loaded configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid {section}.{field}: {reason}")]
    Invalid {
        section: &'static str,
        field: &'static str,
        reason: String,
    },
}

impl ValidationError {
    pub fn invalid(
        section: &'static str,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::Invalid {
            section,
            field,
            reason: reason.into(),
        }
    }
}
