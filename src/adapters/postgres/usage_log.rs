//! PostgreSQL adapter for UsageTracker.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{CompletionPurpose, UsageEvent, UsageTracker};

use super::db_err;

/// PostgreSQL implementation of the AI usage log.
pub struct PgUsageLog {
    pool: PgPool,
}

impl PgUsageLog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn purpose_to_db(purpose: CompletionPurpose) -> &'static str {
        match purpose {
            CompletionPurpose::Suggestions => "suggestions",
            CompletionPurpose::Companion => "companion",
        }
    }
}

#[async_trait]
impl UsageTracker for PgUsageLog {
    async fn record(&self, event: UsageEvent) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO usage_log (
                user_id, purpose, model, prompt_tokens, completion_tokens, occurred_at
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(event.user_id.as_str())
        .bind(Self::purpose_to_db(event.purpose))
        .bind(&event.model)
        .bind(event.usage.prompt_tokens as i32)
        .bind(event.usage.completion_tokens as i32)
        .bind(*event.occurred_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    async fn total_tokens_for_user(&self, user_id: &UserId) -> Result<u64, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT COALESCE(SUM(prompt_tokens + completion_tokens), 0) AS total
            FROM usage_log WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(db_err)?;

        let total: i64 = row.get("total");
        Ok(total.max(0) as u64)
    }
}
