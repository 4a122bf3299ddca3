//! Suggestion content types.

use serde::{Deserialize, Serialize};

use super::ActivityCategory;
use crate::domain::blueprint::Blueprint;

/// Desired heat level for generated suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Sweet,
    Flirty,
    Spicy,
    Wild,
}

impl Intensity {
    /// All intensities from mildest to boldest.
    pub const ALL: [Intensity; 4] = [
        Intensity::Sweet,
        Intensity::Flirty,
        Intensity::Spicy,
        Intensity::Wild,
    ];

    /// Returns the lowercase label used in storage and API payloads.
    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Sweet => "sweet",
            Intensity::Flirty => "flirty",
            Intensity::Spicy => "spicy",
            Intensity::Wild => "wild",
        }
    }

    /// Parses an intensity from its lowercase label.
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.label() == label)
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One generated suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub body: String,
    /// Rough time estimate, e.g. "15 min".
    pub estimated_time: String,
    pub emoji: String,
    pub intensity: Intensity,
}

/// A batch of suggestions generated for one request, as cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionBatch {
    pub category: ActivityCategory,
    pub intensity: Intensity,
    pub user_blueprint: Blueprint,
    pub partner_blueprint: Blueprint,
    pub suggestions: Vec<Suggestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_parse_roundtrips() {
        for i in Intensity::ALL {
            assert_eq!(Intensity::parse(i.label()), Some(i));
        }
    }

    #[test]
    fn intensity_orders_mild_to_bold() {
        assert!(Intensity::Sweet < Intensity::Wild);
    }

    #[test]
    fn suggestion_serializes_intensity_lowercase() {
        let s = Suggestion {
            title: "Slow dance".to_string(),
            body: "Put on one song and dance in the kitchen.".to_string(),
            estimated_time: "10 min".to_string(),
            emoji: "💃".to_string(),
            intensity: Intensity::Sweet,
        };
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["intensity"], "sweet");
    }
}
