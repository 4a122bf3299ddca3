//! JWT token verifier (HS256).

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::TokenVerifier;

/// Claims we read from the session token.
#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    email: Option<String>,
    name: Option<String>,
    #[allow(dead_code)]
    exp: usize,
}

/// Verifies HS256-signed session tokens issued by the app's auth
/// service.
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    /// Creates a verifier for tokens signed with `secret` and addressed
    /// to `audience`.
    pub fn new(secret: &Secret<String>, audience: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[audience]);
        Self {
            key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl TokenVerifier for JwtVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<Claims>(token, &self.key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            }
        })?;

        let claims = data.claims;
        let id = UserId::new(claims.sub).map_err(|_| AuthError::MissingClaim("sub".to_string()))?;
        let email = claims
            .email
            .ok_or_else(|| AuthError::MissingClaim("email".to_string()))?;

        Ok(AuthenticatedUser::new(id, email, claims.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestClaims {
        sub: String,
        email: String,
        name: Option<String>,
        aud: String,
        exp: usize,
    }

    const SECRET: &str = "test-signing-secret";
    const AUDIENCE: &str = "duet-api";

    fn sign(claims: &TestClaims) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    fn verifier() -> JwtVerifier {
        JwtVerifier::new(&Secret::new(SECRET.to_string()), AUDIENCE)
    }

    fn far_future() -> usize {
        4_000_000_000
    }

    #[tokio::test]
    async fn valid_token_yields_user() {
        let token = sign(&TestClaims {
            sub: "user-1".to_string(),
            email: "ada@example.com".to_string(),
            name: Some("Ada".to_string()),
            aud: AUDIENCE.to_string(),
            exp: far_future(),
        });

        let user = verifier().verify(&token).await.unwrap();
        assert_eq!(user.id.as_str(), "user-1");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.display_name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let token = sign(&TestClaims {
            sub: "user-1".to_string(),
            email: "ada@example.com".to_string(),
            name: None,
            aud: AUDIENCE.to_string(),
            exp: 1_000, // 1970
        });

        let err = verifier().verify(&token).await.unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));
    }

    #[tokio::test]
    async fn wrong_audience_is_rejected() {
        let token = sign(&TestClaims {
            sub: "user-1".to_string(),
            email: "ada@example.com".to_string(),
            name: None,
            aud: "someone-else".to_string(),
            exp: far_future(),
        });

        let err = verifier().verify(&token).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let err = verifier().verify("not.a.jwt").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }
}
