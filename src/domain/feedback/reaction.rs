//! Feedback reactions to shown suggestions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, FeedbackId, Timestamp, UserId, ValidationError};
use crate::domain::suggestion::{ActivityCategory, Intensity};

/// A user's reaction to a shown suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Love,
    Like,
    Maybe,
    Pass,
}

impl Reaction {
    /// All reactions, warmest first.
    pub const ALL: [Reaction; 4] = [
        Reaction::Love,
        Reaction::Like,
        Reaction::Maybe,
        Reaction::Pass,
    ];

    /// Whether this reaction signals positive interest.
    pub fn is_positive(&self) -> bool {
        matches!(self, Reaction::Love | Reaction::Like)
    }
}

/// One recorded reaction, appended to the user's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    id: FeedbackId,
    user_id: UserId,
    category: ActivityCategory,
    intensity: Intensity,
    suggestion_title: String,
    reaction: Reaction,
    created_at: Timestamp,
}

impl FeedbackRecord {
    /// Creates a feedback record for a shown suggestion.
    pub fn new(
        user_id: UserId,
        category: ActivityCategory,
        intensity: Intensity,
        suggestion_title: impl Into<String>,
        reaction: Reaction,
    ) -> Result<Self, DomainError> {
        let suggestion_title = suggestion_title.into();
        if suggestion_title.trim().is_empty() {
            return Err(ValidationError::empty_field("suggestion_title").into());
        }
        Ok(Self {
            id: FeedbackId::new(),
            user_id,
            category,
            intensity,
            suggestion_title,
            reaction,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstructs a record from persisted state.
    pub fn restore(
        id: FeedbackId,
        user_id: UserId,
        category: ActivityCategory,
        intensity: Intensity,
        suggestion_title: String,
        reaction: Reaction,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            category,
            intensity,
            suggestion_title,
            reaction,
            created_at,
        }
    }

    pub fn id(&self) -> FeedbackId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn category(&self) -> ActivityCategory {
        self.category
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    pub fn suggestion_title(&self) -> &str {
        &self.suggestion_title
    }

    pub fn reaction(&self) -> Reaction {
        self.reaction
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
