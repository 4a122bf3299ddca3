//! GetPreferenceSummary - Query handler for derived preferences.

use std::sync::Arc;

use crate::domain::feedback::PreferenceProfile;
use crate::domain::foundation::{DomainError, UserId};
use crate::domain::suggestion::ActivityCategory;
use crate::ports::{FeedbackRepository, ProfileRepository};

/// How much history feeds the aggregation.
const HISTORY_WINDOW: usize = 500;

/// Query for a user's preference summary.
#[derive(Debug, Clone)]
pub struct GetPreferenceSummaryQuery {
    pub user_id: UserId,
}

/// The aggregated result: tallies plus ranked favorites.
#[derive(Debug, Clone)]
pub struct PreferenceSummary {
    pub profile: PreferenceProfile,
    pub favorites: Vec<ActivityCategory>,
    pub display_name: Option<String>,
}

/// Handler for preference summaries.
pub struct GetPreferenceSummaryHandler {
    profiles: Arc<dyn ProfileRepository>,
    feedback: Arc<dyn FeedbackRepository>,
}

impl GetPreferenceSummaryHandler {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        feedback: Arc<dyn FeedbackRepository>,
    ) -> Self {
        Self { profiles, feedback }
    }

    pub async fn handle(
        &self,
        query: GetPreferenceSummaryQuery,
    ) -> Result<PreferenceSummary, DomainError> {
        // Independent reads, issued together.
        let (profile, history) = futures::try_join!(
            self.profiles.find_by_user(&query.user_id),
            self.feedback.history_for_user(&query.user_id, HISTORY_WINDOW),
        )?;

        let preference_profile = PreferenceProfile::from_history(&history);
        let favorites = preference_profile.favorites();

        Ok(PreferenceSummary {
            profile: preference_profile,
            favorites,
            display_name: profile.map(|p| p.display_name().to_string()),
        })
    }
}
