//! Request/response DTOs for feedback endpoints.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::application::handlers::feedback::PreferenceSummary;
use crate::domain::feedback::{CategoryCounts, FeedbackRecord, Reaction};
use crate::domain::foundation::Timestamp;
use crate::domain::suggestion::{ActivityCategory, Intensity};

#[derive(Debug, Deserialize)]
pub struct RecordFeedbackRequest {
    pub category: ActivityCategory,
    pub intensity: Intensity,
    pub suggestion_title: String,
    pub reaction: Reaction,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub id: String,
    pub category: ActivityCategory,
    pub reaction: Reaction,
    pub created_at: Timestamp,
}

impl From<FeedbackRecord> for FeedbackResponse {
    fn from(record: FeedbackRecord) -> Self {
        Self {
            id: record.id().to_string(),
            category: record.category(),
            reaction: record.reaction(),
            created_at: record.created_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PreferenceSummaryResponse {
    pub display_name: Option<String>,
    pub categories: BTreeMap<ActivityCategory, CategoryCounts>,
    pub favorites: Vec<ActivityCategory>,
}

impl From<PreferenceSummary> for PreferenceSummaryResponse {
    fn from(summary: PreferenceSummary) -> Self {
        Self {
            display_name: summary.display_name,
            categories: summary.profile.categories,
            favorites: summary.favorites,
        }
    }
}
