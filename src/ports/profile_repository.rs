//! Profile repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::UserProfile;

/// Port for persisting user profiles.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Creates a new profile. Fails on duplicate user.
    async fn create(&self, profile: &UserProfile) -> Result<(), DomainError>;

    /// Replaces an existing profile.
    async fn update(&self, profile: &UserProfile) -> Result<(), DomainError>;

    /// Finds a profile by user.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError>;

    /// Deletes a profile. Missing profiles are not an error.
    async fn delete(&self, user_id: &UserId) -> Result<(), DomainError>;
}
