//! The five blueprint categories.

use serde::{Deserialize, Serialize};

/// A blueprint category: one of five fixed personality/preference types
/// used to tag users and drive content selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Blueprint {
    /// Thrives on anticipation, tease, and space before touch.
    Energetic,
    /// Engaged through the senses: taste, scent, texture, ambiance.
    Sensual,
    /// Direct, straightforward, enthusiastic about the act itself.
    Sexual,
    /// Drawn to play with power, taboo, and agreed-upon edges.
    Kinky,
    /// Fluent in all of the above, shifting with mood and context.
    Shapeshifter,
}

impl Blueprint {
    /// All categories in canonical order.
    ///
    /// The order is load-bearing: it is the tie-break for score ranking
    /// and the iteration order of the compatibility matrix.
    pub const ALL: [Blueprint; 5] = [
        Blueprint::Energetic,
        Blueprint::Sensual,
        Blueprint::Sexual,
        Blueprint::Kinky,
        Blueprint::Shapeshifter,
    ];

    /// Returns the display name for this category.
    pub fn display_name(&self) -> &'static str {
        match self {
            Blueprint::Energetic => "Energetic",
            Blueprint::Sensual => "Sensual",
            Blueprint::Sexual => "Sexual",
            Blueprint::Kinky => "Kinky",
            Blueprint::Shapeshifter => "Shapeshifter",
        }
    }

    /// Parses a category from its lowercase label.
    ///
    /// Returns `None` for unknown labels; callers decide the fallback.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "energetic" => Some(Blueprint::Energetic),
            "sensual" => Some(Blueprint::Sensual),
            "sexual" => Some(Blueprint::Sexual),
            "kinky" => Some(Blueprint::Kinky),
            "shapeshifter" => Some(Blueprint::Shapeshifter),
            _ => None,
        }
    }

    /// Returns the lowercase label used in storage and API payloads.
    pub fn label(&self) -> &'static str {
        match self {
            Blueprint::Energetic => "energetic",
            Blueprint::Sensual => "sensual",
            Blueprint::Sexual => "sexual",
            Blueprint::Kinky => "kinky",
            Blueprint::Shapeshifter => "shapeshifter",
        }
    }
}

impl std::fmt::Display for Blueprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
