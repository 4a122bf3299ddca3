//! PostgreSQL adapter for FeedbackRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::feedback::{FeedbackRecord, Reaction};
use crate::domain::foundation::{DomainError, ErrorCode, FeedbackId, Timestamp, UserId};
use crate::domain::suggestion::{ActivityCategory, Intensity};
use crate::ports::FeedbackRepository;

use super::db_err;

/// PostgreSQL implementation of FeedbackRepository.
pub struct PgFeedbackRepository {
    pool: PgPool,
}

impl PgFeedbackRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn reaction_to_db(reaction: Reaction) -> &'static str {
        match reaction {
            Reaction::Love => "love",
            Reaction::Like => "like",
            Reaction::Maybe => "maybe",
            Reaction::Pass => "pass",
        }
    }

    fn reaction_from_db(s: &str) -> Result<Reaction, DomainError> {
        match s {
            "love" => Ok(Reaction::Love),
            "like" => Ok(Reaction::Like),
            "maybe" => Ok(Reaction::Maybe),
            "pass" => Ok(Reaction::Pass),
            other => Err(DomainError::new(
                ErrorCode::InternalError,
                format!("unknown reaction in storage: {}", other),
            )),
        }
    }

    fn from_row(row: &sqlx::postgres::PgRow) -> Result<FeedbackRecord, DomainError> {
        let category: String = row.get("category");
        let intensity: String = row.get("intensity");
        let reaction: String = row.get("reaction");

        Ok(FeedbackRecord::restore(
            FeedbackId::from_uuid(row.get("id")),
            UserId::new(row.get::<String, _>("user_id"))?,
            ActivityCategory::parse(&category).ok_or_else(|| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("unknown category in storage: {}", category),
                )
            })?,
            Intensity::parse(&intensity).ok_or_else(|| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("unknown intensity in storage: {}", intensity),
                )
            })?,
            row.get("suggestion_title"),
            Self::reaction_from_db(&reaction)?,
            Timestamp::from_datetime(row.get("created_at")),
        ))
    }
}

#[async_trait]
impl FeedbackRepository for PgFeedbackRepository {
    async fn append(&self, record: &FeedbackRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO feedback (
                id, user_id, category, intensity, suggestion_title, reaction, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(*record.id().as_uuid())
        .bind(record.user_id().as_str())
        .bind(record.category().label())
        .bind(record.intensity().label())
        .bind(record.suggestion_title())
        .bind(Self::reaction_to_db(record.reaction()))
        .bind(*record.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    async fn history_for_user(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<FeedbackRecord>, DomainError> {
        let rows = sqlx::query(
            "SELECT * FROM feedback WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2",
        )
        .bind(user_id.as_str())
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter().map(Self::from_row).collect()
    }

    async fn delete_for_user(&self, user_id: &UserId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM feedback WHERE user_id = $1")
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
