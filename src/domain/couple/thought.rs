//! Thought bubbles: short notes sent to a partner.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ThoughtId, Timestamp, UserId, ValidationError};

/// Maximum length of a thought bubble body.
pub const MAX_THOUGHT_LEN: usize = 280;

/// A short note from one partner to the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThoughtBubble {
    id: ThoughtId,
    from: UserId,
    to: UserId,
    body: String,
    created_at: Timestamp,
    read_at: Option<Timestamp>,
}

impl ThoughtBubble {
    /// Creates a thought bubble. The body must be non-empty and within
    /// the length cap.
    pub fn new(from: UserId, to: UserId, body: impl Into<String>) -> Result<Self, DomainError> {
        let body = body.into();
        if body.trim().is_empty() {
            return Err(ValidationError::empty_field("body").into());
        }
        if body.chars().count() > MAX_THOUGHT_LEN {
            return Err(ValidationError::out_of_range(
                "body",
                1,
                MAX_THOUGHT_LEN as i32,
                body.chars().count() as i32,
            )
            .into());
        }
        if from == to {
            return Err(DomainError::validation("to", "Cannot send a thought to yourself"));
        }
        Ok(Self {
            id: ThoughtId::new(),
            from,
            to,
            body,
            created_at: Timestamp::now(),
            read_at: None,
        })
    }

    /// Reconstructs a thought from persisted state.
    pub fn restore(
        id: ThoughtId,
        from: UserId,
        to: UserId,
        body: String,
        created_at: Timestamp,
        read_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            from,
            to,
            body,
            created_at,
            read_at,
        }
    }

    pub fn id(&self) -> ThoughtId {
        self.id
    }

    pub fn from(&self) -> &UserId {
        &self.from
    }

    pub fn to(&self) -> &UserId {
        &self.to
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn read_at(&self) -> Option<Timestamp> {
        self.read_at
    }

    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }

    /// Marks the thought read. Idempotent: the first read wins.
    pub fn mark_read(&mut self, now: Timestamp) {
        if self.read_at.is_none() {
            self.read_at = Some(now);
        }
    }
}
