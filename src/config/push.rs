//! Push relay configuration.

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

/// Push relay settings. When no endpoint is configured, notifications
/// are logged instead of delivered.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PushConfig {
    #[serde(default)]
    pub relay_endpoint: Option<String>,
    #[serde(default)]
    pub relay_api_key: Option<Secret<String>>,
}

impl PushConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match (&self.relay_endpoint, &self.relay_api_key) {
            (Some(endpoint), Some(key)) => {
                if !endpoint.starts_with("https://") {
                    return Err(ValidationError::invalid(
                        "push",
                        "relay_endpoint",
                        "must be an https:// URL",
                    ));
                }
                if key.expose_secret().is_empty() {
                    return Err(ValidationError::invalid(
                        "push",
                        "relay_api_key",
                        "must be non-empty",
                    ));
                }
                Ok(())
            }
            (None, None) => Ok(()),
            _ => Err(ValidationError::invalid(
                "push",
                "relay_endpoint",
                "endpoint and api key must be set together",
            )),
        }
    }

    /// True when a real relay is configured.
    pub fn is_configured(&self) -> bool {
        self.relay_endpoint.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_relay_is_valid() {
        assert!(PushConfig::default().validate().is_ok());
    }

    #[test]
    fn endpoint_without_key_is_invalid() {
        let config = PushConfig {
            relay_endpoint: Some("https://push.example.com".to_string()),
            relay_api_key: None,
        };
        assert!(config.validate().is_err());
    }
}
