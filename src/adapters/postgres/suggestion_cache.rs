//! PostgreSQL adapter for the weekly suggestion cache.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::blueprint::Blueprint;
use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::suggestion::{ActivityCategory, Intensity, SuggestionBatch};
use crate::ports::{SuggestionCache, SUGGESTION_CACHE_DAYS};

use super::{db_err, json_err};

/// PostgreSQL implementation of SuggestionCache.
pub struct PgSuggestionCache {
    pool: PgPool,
}

impl PgSuggestionCache {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SuggestionCache for PgSuggestionCache {
    async fn get_fresh(
        &self,
        category: ActivityCategory,
        intensity: Intensity,
        user_blueprint: Blueprint,
        partner_blueprint: Blueprint,
        now: Timestamp,
    ) -> Result<Option<SuggestionBatch>, DomainError> {
        let oldest = now.minus_days(SUGGESTION_CACHE_DAYS);
        let row = sqlx::query(
            r#"
            SELECT batch FROM suggestion_cache
            WHERE category = $1 AND intensity = $2
              AND user_blueprint = $3 AND partner_blueprint = $4
              AND cached_at >= $5
            "#,
        )
        .bind(category.label())
        .bind(intensity.label())
        .bind(user_blueprint.label())
        .bind(partner_blueprint.label())
        .bind(*oldest.as_datetime())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.map(|r| {
            let value: serde_json::Value = r.get("batch");
            serde_json::from_value(value).map_err(json_err)
        })
        .transpose()
    }

    async fn put(&self, batch: &SuggestionBatch, now: Timestamp) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO suggestion_cache (
                category, intensity, user_blueprint, partner_blueprint, batch, cached_at
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (category, intensity, user_blueprint, partner_blueprint)
            DO UPDATE SET batch = EXCLUDED.batch, cached_at = EXCLUDED.cached_at
            "#,
        )
        .bind(batch.category.label())
        .bind(batch.intensity.label())
        .bind(batch.user_blueprint.label())
        .bind(batch.partner_blueprint.label())
        .bind(serde_json::to_value(batch).map_err(json_err)?)
        .bind(*now.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }
}
