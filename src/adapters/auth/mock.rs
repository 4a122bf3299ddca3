//! Mock token verifier for tests.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::TokenVerifier;

/// Accepts any token of the form `user:<id>` and rejects the rest.
pub struct MockVerifier;

#[async_trait]
impl TokenVerifier for MockVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let id = token
            .strip_prefix("user:")
            .ok_or(AuthError::InvalidToken)?;
        let user_id = UserId::new(id).map_err(|_| AuthError::InvalidToken)?;
        let email = format!("{}@example.com", id);
        Ok(AuthenticatedUser::new(user_id, email, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn prefixed_tokens_are_accepted() {
        let user = MockVerifier.verify("user:alice").await.unwrap();
        assert_eq!(user.id.as_str(), "alice");
    }

    #[tokio::test]
    async fn other_tokens_are_rejected() {
        assert!(MockVerifier.verify("alice").await.is_err());
    }
}
