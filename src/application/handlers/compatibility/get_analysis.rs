//! GetAnalysis - Query handler for the couple's compatibility analysis.

use std::sync::Arc;

use crate::domain::compatibility::{self, CompatibilityAnalysis};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::{AnalysisCache, CoupleRepository, ProfileRepository};

/// Query for the compatibility analysis of a user and their partner.
#[derive(Debug, Clone)]
pub struct GetAnalysisQuery {
    pub user_id: UserId,
}

/// Handler for compatibility analyses.
///
/// The analysis itself is a constant-time matrix lookup; the cache
/// exists because clients re-request it on every screen load.
pub struct GetAnalysisHandler {
    profiles: Arc<dyn ProfileRepository>,
    couples: Arc<dyn CoupleRepository>,
    cache: Arc<dyn AnalysisCache>,
}

impl GetAnalysisHandler {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        couples: Arc<dyn CoupleRepository>,
        cache: Arc<dyn AnalysisCache>,
    ) -> Self {
        Self {
            profiles,
            couples,
            cache,
        }
    }

    pub async fn handle(&self, query: GetAnalysisQuery) -> Result<CompatibilityAnalysis, DomainError> {
        let profile = self
            .profiles
            .find_by_user(&query.user_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ProfileNotFound, "Profile not found"))?;
        let user_blueprint = profile.primary_blueprint().ok_or_else(|| {
            DomainError::validation("quiz", "Complete the quiz to see compatibility")
        })?;

        let link = self
            .couples
            .find_link_for_user(&query.user_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::CoupleNotFound, "Connect a partner first")
            })?;
        let partner_id = link
            .partner_of(&query.user_id)
            .ok_or_else(|| DomainError::new(ErrorCode::Forbidden, "Not part of this couple"))?;

        let partner = self
            .profiles
            .find_by_user(partner_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::ProfileNotFound, "Partner profile not found")
            })?;
        let partner_blueprint = partner.primary_blueprint().ok_or_else(|| {
            DomainError::validation("quiz", "Your partner hasn't completed the quiz yet")
        })?;

        let now = Timestamp::now();
        if let Some(cached) = self
            .cache
            .get_fresh(user_blueprint, partner_blueprint, now)
            .await?
        {
            return Ok(cached);
        }

        let analysis = compatibility::analyze(user_blueprint, partner_blueprint);
        if let Err(e) = self.cache.put(&analysis, now).await {
            tracing::warn!(error = %e, "analysis cache write failed");
        }
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{
        InMemoryAnalysisCache, InMemoryCouples, InMemoryProfiles,
    };
    use crate::domain::blueprint::{Agreement, Blueprint, QuizAnswer};
    use crate::domain::couple::CoupleLink;
    use crate::domain::user::UserProfile;
    use crate::ports::ProfileRepository as _;

    fn user(n: &str) -> UserId {
        UserId::new(n).unwrap()
    }

    fn profile_with_blueprint(name: &str, category: Blueprint) -> UserProfile {
        let mut profile =
            UserProfile::new(user(name), format!("{}@x.c", name), name.to_uppercase()).unwrap();
        profile
            .apply_quiz(vec![QuizAnswer {
                category,
                agreement: Agreement::StronglyAgree,
            }])
            .unwrap();
        profile
    }

    async fn linked_fixture() -> (Arc<InMemoryProfiles>, Arc<InMemoryCouples>) {
        let profiles = Arc::new(InMemoryProfiles::default());
        let mut a = profile_with_blueprint("a", Blueprint::Sensual);
        let mut b = profile_with_blueprint("b", Blueprint::Sensual);
        let link = CoupleLink::new(user("a"), user("b")).unwrap();
        a.link_partner(user("b"), link.id()).unwrap();
        b.link_partner(user("a"), link.id()).unwrap();
        profiles.create(&a).await.unwrap();
        profiles.create(&b).await.unwrap();
        (profiles, Arc::new(InMemoryCouples::with_link(link)))
    }

    #[tokio::test]
    async fn matched_sensual_pair_scores_95() {
        let (profiles, couples) = linked_fixture().await;
        let handler =
            GetAnalysisHandler::new(profiles, couples, Arc::new(InMemoryAnalysisCache::default()));

        let analysis = handler
            .handle(GetAnalysisQuery { user_id: user("a") })
            .await
            .unwrap();
        assert_eq!(analysis.entry.score, 95);
        assert!(!analysis.entry.strengths.is_empty());
    }

    #[tokio::test]
    async fn second_read_comes_from_cache() {
        let (profiles, couples) = linked_fixture().await;
        let cache = Arc::new(InMemoryAnalysisCache::default());
        let handler = GetAnalysisHandler::new(profiles, couples, cache.clone());

        let first = handler
            .handle(GetAnalysisQuery { user_id: user("a") })
            .await
            .unwrap();
        let cached = cache
            .get_fresh(
                first.user_blueprint,
                first.partner_blueprint,
                Timestamp::now(),
            )
            .await
            .unwrap();
        assert_eq!(cached, Some(first));
    }

    #[tokio::test]
    async fn no_partner_is_an_error() {
        let profiles = Arc::new(InMemoryProfiles::with(profile_with_blueprint(
            "solo",
            Blueprint::Kinky,
        )));
        let handler = GetAnalysisHandler::new(
            profiles,
            Arc::new(InMemoryCouples::default()),
            Arc::new(InMemoryAnalysisCache::default()),
        );

        let err = handler
            .handle(GetAnalysisQuery {
                user_id: user("solo"),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::CoupleNotFound);
    }

    #[tokio::test]
    async fn quizless_user_is_told_to_finish_the_quiz() {
        let profiles = Arc::new(InMemoryProfiles::with(
            UserProfile::new(user("new"), "n@x.c", "N").unwrap(),
        ));
        let handler = GetAnalysisHandler::new(
            profiles,
            Arc::new(InMemoryCouples::default()),
            Arc::new(InMemoryAnalysisCache::default()),
        );

        let err = handler
            .handle(GetAnalysisQuery { user_id: user("new") })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }
}
