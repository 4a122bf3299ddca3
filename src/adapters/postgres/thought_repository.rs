//! PostgreSQL adapter for ThoughtRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::couple::ThoughtBubble;
use crate::domain::foundation::{DomainError, ThoughtId, Timestamp, UserId};
use crate::ports::ThoughtRepository;

use super::db_err;

/// PostgreSQL implementation of ThoughtRepository.
pub struct PgThoughtRepository {
    pool: PgPool,
}

impl PgThoughtRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn from_row(row: &sqlx::postgres::PgRow) -> Result<ThoughtBubble, DomainError> {
        Ok(ThoughtBubble::restore(
            ThoughtId::from_uuid(row.get("id")),
            UserId::new(row.get::<String, _>("from_user"))?,
            UserId::new(row.get::<String, _>("to_user"))?,
            row.get("body"),
            Timestamp::from_datetime(row.get("created_at")),
            row.get::<Option<chrono::DateTime<chrono::Utc>>, _>("read_at")
                .map(Timestamp::from_datetime),
        ))
    }
}

#[async_trait]
impl ThoughtRepository for PgThoughtRepository {
    async fn append(&self, thought: &ThoughtBubble) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO thoughts (id, from_user, to_user, body, created_at, read_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(*thought.id().as_uuid())
        .bind(thought.from().as_str())
        .bind(thought.to().as_str())
        .bind(thought.body())
        .bind(*thought.created_at().as_datetime())
        .bind(thought.read_at().map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    async fn find(&self, id: ThoughtId) -> Result<Option<ThoughtBubble>, DomainError> {
        let row = sqlx::query("SELECT * FROM thoughts WHERE id = $1")
            .bind(*id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        row.map(|r| Self::from_row(&r)).transpose()
    }

    async fn update(&self, thought: &ThoughtBubble) -> Result<(), DomainError> {
        sqlx::query("UPDATE thoughts SET read_at = $2 WHERE id = $1")
            .bind(*thought.id().as_uuid())
            .bind(thought.read_at().map(|t| *t.as_datetime()))
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn received_by(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<ThoughtBubble>, DomainError> {
        let rows = sqlx::query(
            "SELECT * FROM thoughts WHERE to_user = $1 ORDER BY created_at DESC LIMIT $2",
        )
        .bind(user_id.as_str())
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter().map(Self::from_row).collect()
    }

    async fn delete_for_user(&self, user_id: &UserId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM thoughts WHERE from_user = $1 OR to_user = $1")
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
