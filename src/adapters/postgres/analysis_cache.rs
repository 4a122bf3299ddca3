//! PostgreSQL adapter for the compatibility analysis cache.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::blueprint::Blueprint;
use crate::domain::compatibility::CompatibilityAnalysis;
use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::{AnalysisCache, SUGGESTION_CACHE_DAYS};

use super::{db_err, json_err};

/// PostgreSQL implementation of AnalysisCache.
pub struct PgAnalysisCache {
    pool: PgPool,
}

impl PgAnalysisCache {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalysisCache for PgAnalysisCache {
    async fn get_fresh(
        &self,
        user_blueprint: Blueprint,
        partner_blueprint: Blueprint,
        now: Timestamp,
    ) -> Result<Option<CompatibilityAnalysis>, DomainError> {
        let oldest = now.minus_days(SUGGESTION_CACHE_DAYS);
        let row = sqlx::query(
            r#"
            SELECT analysis FROM analysis_cache
            WHERE user_blueprint = $1 AND partner_blueprint = $2 AND cached_at >= $3
            "#,
        )
        .bind(user_blueprint.label())
        .bind(partner_blueprint.label())
        .bind(*oldest.as_datetime())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.map(|r| {
            let value: serde_json::Value = r.get("analysis");
            serde_json::from_value(value).map_err(json_err)
        })
        .transpose()
    }

    async fn put(
        &self,
        analysis: &CompatibilityAnalysis,
        now: Timestamp,
    ) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO analysis_cache (user_blueprint, partner_blueprint, analysis, cached_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_blueprint, partner_blueprint)
            DO UPDATE SET analysis = EXCLUDED.analysis, cached_at = EXCLUDED.cached_at
            "#,
        )
        .bind(analysis.user_blueprint.label())
        .bind(analysis.partner_blueprint.label())
        .bind(serde_json::to_value(analysis).map_err(json_err)?)
        .bind(*now.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }
}
