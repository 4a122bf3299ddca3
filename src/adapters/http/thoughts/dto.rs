//! Request/response DTOs for thought bubble endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::couple::ThoughtBubble;
use crate::domain::foundation::Timestamp;

#[derive(Debug, Deserialize)]
pub struct SendThoughtRequest {
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct ThoughtResponse {
    pub id: String,
    pub from: String,
    pub body: String,
    pub created_at: Timestamp,
    pub read_at: Option<Timestamp>,
}

impl From<ThoughtBubble> for ThoughtResponse {
    fn from(thought: ThoughtBubble) -> Self {
        Self {
            id: thought.id().to_string(),
            from: thought.from().to_string(),
            body: thought.body().to_string(),
            created_at: thought.created_at(),
            read_at: thought.read_at(),
        }
    }
}
