//! Token verifier port - Validates bearer tokens into authenticated users.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Port for validating bearer tokens.
///
/// The HTTP middleware depends on this trait only, so swapping the
/// identity provider (or using a mock in tests) never touches routing.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Validates a raw bearer token and extracts the user.
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
