//! Request/response DTOs for wellbeing endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::wellbeing::{CheckinRecord, Mood};

#[derive(Debug, Deserialize)]
pub struct RecordCheckinRequest {
    pub mood: Mood,
    pub connection: u8,
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckinResponse {
    pub id: String,
    pub mood: Mood,
    pub connection: u8,
    pub note: Option<String>,
    pub created_at: Timestamp,
}

impl From<CheckinRecord> for CheckinResponse {
    fn from(record: CheckinRecord) -> Self {
        Self {
            id: record.id().to_string(),
            mood: record.mood(),
            connection: record.connection(),
            note: record.note().map(|n| n.to_string()),
            created_at: record.created_at(),
        }
    }
}
