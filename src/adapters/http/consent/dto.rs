//! Request/response DTOs for consent endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::consent::{ConsentKind, ConsentRecord};
use crate::domain::foundation::Timestamp;

#[derive(Debug, Deserialize)]
pub struct RecordConsentRequest {
    pub kind: ConsentKind,
    pub granted: bool,
}

#[derive(Debug, Serialize)]
pub struct ConsentResponse {
    pub kind: ConsentKind,
    pub granted: bool,
    pub recorded_at: Timestamp,
}

impl From<ConsentRecord> for ConsentResponse {
    fn from(record: ConsentRecord) -> Self {
        Self {
            kind: record.kind,
            granted: record.granted,
            recorded_at: record.recorded_at,
        }
    }
}
