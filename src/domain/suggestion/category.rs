//! Activity categories for suggestion content.

use serde::{Deserialize, Serialize};

/// The fixed set of activity categories suggestions are filed under.
///
/// Feedback aggregation and the weekly suggestion cache are both keyed
/// by these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    /// Build-up, tease, and delayed gratification.
    Anticipation,
    /// Taste, scent, texture, sound, and ambiance.
    Sensory,
    /// Direct physical touch and massage.
    Touch,
    /// Games, dares, and structured play.
    Play,
    /// Roleplay, scenarios, and imagination.
    Fantasy,
    /// Conversation, rituals, and emotional closeness.
    Connection,
}

impl ActivityCategory {
    /// All categories in canonical order.
    pub const ALL: [ActivityCategory; 6] = [
        ActivityCategory::Anticipation,
        ActivityCategory::Sensory,
        ActivityCategory::Touch,
        ActivityCategory::Play,
        ActivityCategory::Fantasy,
        ActivityCategory::Connection,
    ];

    /// Returns the lowercase label used in storage and API payloads.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityCategory::Anticipation => "anticipation",
            ActivityCategory::Sensory => "sensory",
            ActivityCategory::Touch => "touch",
            ActivityCategory::Play => "play",
            ActivityCategory::Fantasy => "fantasy",
            ActivityCategory::Connection => "connection",
        }
    }

    /// Parses a category from its lowercase label.
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_labels() {
        for c in ActivityCategory::ALL {
            assert_eq!(ActivityCategory::parse(c.label()), Some(c));
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(ActivityCategory::parse("chores"), None);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&ActivityCategory::Anticipation).unwrap();
        assert_eq!(json, "\"anticipation\"");
    }
}
