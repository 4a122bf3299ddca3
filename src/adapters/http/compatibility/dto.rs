//! Response DTOs for compatibility endpoints.

use serde::Serialize;

use crate::domain::blueprint::Blueprint;
use crate::domain::compatibility::CompatibilityAnalysis;
use crate::domain::suggestion::ActivityCategory;

#[derive(Debug, Serialize)]
pub struct CompatibilityResponse {
    pub user_blueprint: Blueprint,
    pub partner_blueprint: Blueprint,
    pub score: u8,
    pub what_works: Vec<String>,
    pub what_doesnt: Vec<String>,
    pub how_to_proceed: String,
    pub recommended_categories: Vec<ActivityCategory>,
    pub conflict_areas: Vec<String>,
    pub strengths: Vec<String>,
}

impl From<CompatibilityAnalysis> for CompatibilityResponse {
    fn from(analysis: CompatibilityAnalysis) -> Self {
        let entry = analysis.entry;
        Self {
            user_blueprint: analysis.user_blueprint,
            partner_blueprint: analysis.partner_blueprint,
            score: entry.score,
            what_works: entry.what_works,
            what_doesnt: entry.what_doesnt,
            how_to_proceed: entry.how_to_proceed,
            recommended_categories: entry.recommended_categories,
            conflict_areas: entry.conflict_areas,
            strengths: entry.strengths,
        }
    }
}
