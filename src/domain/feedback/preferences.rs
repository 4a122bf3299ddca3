//! Preference aggregation from feedback history.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{FeedbackRecord, Reaction};
use crate::domain::suggestion::ActivityCategory;

/// Per-category reaction tallies derived from a user's feedback history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub love: u32,
    pub like: u32,
    pub maybe: u32,
    pub pass: u32,
}

impl CategoryCounts {
    fn record(&mut self, reaction: Reaction) {
        match reaction {
            Reaction::Love => self.love += 1,
            Reaction::Like => self.like += 1,
            Reaction::Maybe => self.maybe += 1,
            Reaction::Pass => self.pass += 1,
        }
    }

    /// Total reactions in this category.
    pub fn total(&self) -> u32 {
        self.love + self.like + self.maybe + self.pass
    }

    /// Positive reactions in this category.
    pub fn positive(&self) -> u32 {
        self.love + self.like
    }
}

/// A user's derived preference profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceProfile {
    /// BTreeMap keeps category ordering stable in API responses.
    pub categories: BTreeMap<ActivityCategory, CategoryCounts>,
}

impl PreferenceProfile {
    /// Builds a preference profile from a feedback history.
    pub fn from_history(records: &[FeedbackRecord]) -> Self {
        let mut profile = Self::default();
        for record in records {
            profile.record(record.category(), record.reaction());
        }
        profile
    }

    /// Records one reaction.
    pub fn record(&mut self, category: ActivityCategory, reaction: Reaction) {
        self.categories.entry(category).or_default().record(reaction);
    }

    /// Returns the tallies for a category, zeroed if never seen.
    pub fn counts(&self, category: ActivityCategory) -> CategoryCounts {
        self.categories.get(&category).cloned().unwrap_or_default()
    }

    /// Categories ranked by positive reactions, most loved first.
    /// Categories with no positive reactions are omitted.
    pub fn favorites(&self) -> Vec<ActivityCategory> {
        let mut ranked: Vec<_> = self
            .categories
            .iter()
            .filter(|(_, counts)| counts.positive() > 0)
            .map(|(category, counts)| (*category, counts.positive()))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.into_iter().map(|(category, _)| category).collect()
    }
}
