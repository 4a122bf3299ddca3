//! Wellbeing module - Relationship check-in records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CheckinId, DomainError, Timestamp, UserId, ValidationError};

/// Self-reported mood at check-in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Low,
    Okay,
    Good,
    Great,
}

/// One relationship check-in, appended to a per-user history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckinRecord {
    id: CheckinId,
    user_id: UserId,
    mood: Mood,
    /// How connected the user feels to their partner, 1..=5.
    connection: u8,
    note: Option<String>,
    created_at: Timestamp,
}

impl CheckinRecord {
    pub fn new(
        user_id: UserId,
        mood: Mood,
        connection: u8,
        note: Option<String>,
    ) -> Result<Self, DomainError> {
        if !(1..=5).contains(&connection) {
            return Err(
                ValidationError::out_of_range("connection", 1, 5, connection as i32).into(),
            );
        }
        Ok(Self {
            id: CheckinId::new(),
            user_id,
            mood,
            connection,
            note,
            created_at: Timestamp::now(),
        })
    }

    /// Reconstructs a record from persisted state.
    pub fn restore(
        id: CheckinId,
        user_id: UserId,
        mood: Mood,
        connection: u8,
        note: Option<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            mood,
            connection,
            note,
            created_at,
        }
    }

    pub fn id(&self) -> CheckinId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn connection(&self) -> u8 {
        self.connection
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_must_be_one_to_five() {
        let user = UserId::new("u").unwrap();
        assert!(CheckinRecord::new(user.clone(), Mood::Good, 0, None).is_err());
        assert!(CheckinRecord::new(user.clone(), Mood::Good, 6, None).is_err());
        assert!(CheckinRecord::new(user, Mood::Good, 3, None).is_ok());
    }
}
