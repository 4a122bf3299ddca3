//! Authentication configuration.

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Session token verification settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret shared with the auth service.
    pub jwt_secret: Secret<String>,
    #[serde(default = "default_audience")]
    pub audience: String,
}

fn default_audience() -> String {
    "duet-api".to_string()
}

impl AuthConfig {
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::invalid("auth", "jwt_secret", "must be set"));
        }
        if *environment == Environment::Production && secret.len() < 32 {
            return Err(ValidationError::invalid(
                "auth",
                "jwt_secret",
                "must be at least 32 bytes in production",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_secret_fails_in_production() {
        let config = AuthConfig {
            jwt_secret: Secret::new("short".to_string()),
            audience: default_audience(),
        };
        assert!(config.validate(&Environment::Development).is_ok());
        assert!(config.validate(&Environment::Production).is_err());
    }
}
