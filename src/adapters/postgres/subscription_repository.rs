//! PostgreSQL adapter for SubscriptionRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, SubscriptionId, Timestamp, UserId};
use crate::domain::subscription::{SubscriptionRecord, SubscriptionStatus};
use crate::ports::SubscriptionRepository;

use super::db_err;

/// PostgreSQL implementation of SubscriptionRepository.
pub struct PgSubscriptionRepository {
    pool: PgPool,
}

impl PgSubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn status_to_db(status: SubscriptionStatus) -> &'static str {
        match status {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::PastDue => "past_due",
            SubscriptionStatus::Cancelled => "cancelled",
            SubscriptionStatus::Expired => "expired",
        }
    }

    fn status_from_db(s: &str) -> Result<SubscriptionStatus, DomainError> {
        match s {
            "active" => Ok(SubscriptionStatus::Active),
            "past_due" => Ok(SubscriptionStatus::PastDue),
            "cancelled" => Ok(SubscriptionStatus::Cancelled),
            "expired" => Ok(SubscriptionStatus::Expired),
            other => Err(DomainError::new(
                ErrorCode::InternalError,
                format!("unknown subscription status in storage: {}", other),
            )),
        }
    }

    fn from_row(row: &sqlx::postgres::PgRow) -> Result<SubscriptionRecord, DomainError> {
        let status: String = row.get("status");
        Ok(SubscriptionRecord::restore(
            SubscriptionId::from_uuid(row.get("id")),
            UserId::new(row.get::<String, _>("user_id"))?,
            row.get("plan"),
            Self::status_from_db(&status)?,
            Timestamp::from_datetime(row.get("current_period_end")),
            row.get("external_ref"),
            Timestamp::from_datetime(row.get("updated_at")),
        ))
    }
}

#[async_trait]
impl SubscriptionRepository for PgSubscriptionRepository {
    async fn upsert(&self, record: &SubscriptionRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO subscriptions (
                id, user_id, plan, status, current_period_end, external_ref, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id) DO UPDATE SET
                plan = EXCLUDED.plan,
                status = EXCLUDED.status,
                current_period_end = EXCLUDED.current_period_end,
                external_ref = EXCLUDED.external_ref,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(*record.id().as_uuid())
        .bind(record.user_id().as_str())
        .bind(record.plan())
        .bind(Self::status_to_db(record.status()))
        .bind(*record.current_period_end().as_datetime())
        .bind(record.external_ref())
        .bind(*record.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<SubscriptionRecord>, DomainError> {
        let row = sqlx::query("SELECT * FROM subscriptions WHERE user_id = $1")
            .bind(user_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        row.map(|r| Self::from_row(&r)).transpose()
    }

    async fn has_processed_event(&self, event_id: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT 1 AS present FROM billing_events WHERE event_id = $1")
            .bind(event_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(row.is_some())
    }

    async fn mark_event_processed(&self, event_id: &str) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO billing_events (event_id, processed_at)
            VALUES ($1, NOW())
            ON CONFLICT (event_id) DO NOTHING
            "#,
        )
        .bind(event_id)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    async fn delete_for_user(&self, user_id: &UserId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM subscriptions WHERE user_id = $1")
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
