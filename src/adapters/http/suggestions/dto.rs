//! Request/response DTOs for suggestion endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::blueprint::Blueprint;
use crate::domain::suggestion::{ActivityCategory, Intensity, Suggestion, SuggestionBatch};

#[derive(Debug, Deserialize)]
pub struct GenerateSuggestionsRequest {
    pub category: ActivityCategory,
    pub intensity: Option<Intensity>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionDto {
    pub title: String,
    pub body: String,
    pub estimated_time: String,
    pub emoji: String,
    pub intensity: Intensity,
}

impl From<Suggestion> for SuggestionDto {
    fn from(s: Suggestion) -> Self {
        Self {
            title: s.title,
            body: s.body,
            estimated_time: s.estimated_time,
            emoji: s.emoji,
            intensity: s.intensity,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SuggestionBatchResponse {
    pub category: ActivityCategory,
    pub intensity: Intensity,
    pub user_blueprint: Blueprint,
    pub partner_blueprint: Blueprint,
    pub suggestions: Vec<SuggestionDto>,
}

impl From<SuggestionBatch> for SuggestionBatchResponse {
    fn from(batch: SuggestionBatch) -> Self {
        Self {
            category: batch.category,
            intensity: batch.intensity,
            user_blueprint: batch.user_blueprint,
            partner_blueprint: batch.partner_blueprint,
            suggestions: batch
                .suggestions
                .into_iter()
                .map(SuggestionDto::from)
                .collect(),
        }
    }
}
