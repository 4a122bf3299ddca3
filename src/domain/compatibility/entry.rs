//! Compatibility entry value object.

use serde::{Deserialize, Serialize};

use crate::domain::blueprint::Blueprint;
use crate::domain::suggestion::ActivityCategory;

/// Hand-authored compatibility insights for an ordered blueprint pair.
///
/// Entries are static configuration data shipped with the application,
/// not user data. (A, B) and (B, A) are authored independently: the
/// prose addresses the holder of the first category, so neither ordering
/// is derived from the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityEntry {
    /// Compatibility score in [0, 100].
    pub score: u8,
    /// What tends to work well for this pairing.
    pub what_works: Vec<String>,
    /// What tends to cause friction.
    pub what_doesnt: Vec<String>,
    /// A short suggestion for how the couple should proceed.
    pub how_to_proceed: String,
    /// Activity categories recommended for this pairing.
    pub recommended_categories: Vec<ActivityCategory>,
    /// Areas where conflict is likely.
    pub conflict_areas: Vec<String>,
    /// Strengths the pairing can lean on.
    pub strengths: Vec<String>,
}

/// A compatibility analysis: the matched entry plus the pair it was
/// looked up for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityAnalysis {
    pub user_blueprint: Blueprint,
    pub partner_blueprint: Blueprint,
    pub entry: CompatibilityEntry,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_serializes_with_category_labels() {
        let entry = CompatibilityEntry {
            score: 80,
            what_works: vec!["slow mornings".to_string()],
            what_doesnt: vec![],
            how_to_proceed: "talk first".to_string(),
            recommended_categories: vec![ActivityCategory::Sensory],
            conflict_areas: vec![],
            strengths: vec!["patience".to_string()],
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["score"], 80);
        assert_eq!(json["recommended_categories"][0], "sensory");
    }
}
