//! AI provider configuration.

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

/// Anthropic provider settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Anthropic API key.
    pub anthropic_api_key: Secret<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl AiConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.anthropic_api_key.expose_secret().starts_with("sk-ant-") {
            return Err(ValidationError::invalid(
                "ai",
                "anthropic_api_key",
                "expected an sk-ant- key",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::invalid(
                "ai",
                "timeout_secs",
                "must be nonzero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(key: &str) -> AiConfig {
        AiConfig {
            anthropic_api_key: Secret::new(key.to_string()),
            model: default_model(),
            timeout_secs: 60,
        }
    }

    #[test]
    fn anthropic_keys_are_accepted() {
        assert!(config("sk-ant-abc123").validate().is_ok());
    }

    #[test]
    fn other_keys_are_rejected() {
        assert!(config("sk-proj-abc123").validate().is_err());
    }
}
