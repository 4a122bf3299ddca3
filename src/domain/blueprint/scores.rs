//! Per-category blueprint scores and primary/secondary derivation.

use serde::{Deserialize, Serialize};

use super::Blueprint;

/// Five non-negative scores, one per blueprint category.
///
/// The relative ranking of the scores determines a user's primary and
/// secondary categories. Absolute values only matter for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintScores {
    pub energetic: u32,
    pub sensual: u32,
    pub sexual: u32,
    pub kinky: u32,
    pub shapeshifter: u32,
}

impl BlueprintScores {
    /// Creates scores with every category at zero.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns the score for a category.
    pub fn get(&self, category: Blueprint) -> u32 {
        match category {
            Blueprint::Energetic => self.energetic,
            Blueprint::Sensual => self.sensual,
            Blueprint::Sexual => self.sexual,
            Blueprint::Kinky => self.kinky,
            Blueprint::Shapeshifter => self.shapeshifter,
        }
    }

    /// Adds points to a category, saturating on overflow.
    pub fn add(&mut self, category: Blueprint, points: u32) {
        let slot = match category {
            Blueprint::Energetic => &mut self.energetic,
            Blueprint::Sensual => &mut self.sensual,
            Blueprint::Sexual => &mut self.sexual,
            Blueprint::Kinky => &mut self.kinky,
            Blueprint::Shapeshifter => &mut self.shapeshifter,
        };
        *slot = slot.saturating_add(points);
    }

    /// Returns the categories ranked by score, highest first.
    ///
    /// Ties resolve to canonical category order so the ranking is
    /// deterministic for equal inputs.
    pub fn ranked(&self) -> [Blueprint; 5] {
        let mut order = Blueprint::ALL;
        order.sort_by(|a, b| self.get(*b).cmp(&self.get(*a)).then(a.cmp(b)));
        order
    }

    /// The highest-scoring category.
    pub fn primary(&self) -> Blueprint {
        self.ranked()[0]
    }

    /// The second-highest-scoring category.
    pub fn secondary(&self) -> Blueprint {
        self.ranked()[1]
    }

    /// Total points across all categories.
    pub fn total(&self) -> u32 {
        Blueprint::ALL.iter().map(|b| self.get(*b)).sum()
    }
}
