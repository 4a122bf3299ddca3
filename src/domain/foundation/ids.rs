//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for a user, as issued by the auth provider.
///
/// Opaque non-empty string rather than a UUID because the subject claim
/// format is owned by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a UserId from an auth subject. Must be non-empty.
    pub fn new(subject: impl Into<String>) -> Result<Self, ValidationError> {
        let subject = subject.into();
        if subject.trim().is_empty() {
            return Err(ValidationError::empty_field("user_id"));
        }
        Ok(Self(subject))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

uuid_id! {
    /// Unique identifier for a couple link.
    CoupleId
}

uuid_id! {
    /// Unique identifier for a partner invite.
    InviteId
}

uuid_id! {
    /// Unique identifier for a generated suggestion batch.
    SuggestionId
}

uuid_id! {
    /// Unique identifier for a feedback record.
    FeedbackId
}

uuid_id! {
    /// Unique identifier for a thought bubble.
    ThoughtId
}

uuid_id! {
    /// Unique identifier for a chat message.
    ChatMessageId
}

uuid_id! {
    /// Unique identifier for a wellbeing check-in.
    CheckinId
}

uuid_id! {
    /// Unique identifier for a subscription record.
    SubscriptionId
}
