//! PostgreSQL adapter for ConsentRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::consent::{ConsentKind, ConsentRecord};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::ConsentRepository;

use super::db_err;

/// PostgreSQL implementation of ConsentRepository.
pub struct PgConsentRepository {
    pool: PgPool,
}

impl PgConsentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn kind_to_db(kind: ConsentKind) -> &'static str {
        match kind {
            ConsentKind::Terms => "terms",
            ConsentKind::ExplicitContent => "explicit_content",
            ConsentKind::AiPersonalization => "ai_personalization",
            ConsentKind::Marketing => "marketing",
        }
    }

    fn kind_from_db(s: &str) -> Result<ConsentKind, DomainError> {
        match s {
            "terms" => Ok(ConsentKind::Terms),
            "explicit_content" => Ok(ConsentKind::ExplicitContent),
            "ai_personalization" => Ok(ConsentKind::AiPersonalization),
            "marketing" => Ok(ConsentKind::Marketing),
            other => Err(DomainError::new(
                ErrorCode::InternalError,
                format!("unknown consent kind in storage: {}", other),
            )),
        }
    }
}

#[async_trait]
impl ConsentRepository for PgConsentRepository {
    async fn append(&self, record: &ConsentRecord) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO consents (user_id, kind, granted, recorded_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(record.user_id.as_str())
        .bind(Self::kind_to_db(record.kind))
        .bind(record.granted)
        .bind(*record.recorded_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    async fn history_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ConsentRecord>, DomainError> {
        let rows = sqlx::query(
            "SELECT * FROM consents WHERE user_id = $1 ORDER BY recorded_at ASC",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter()
            .map(|row| {
                let kind: String = row.get("kind");
                Ok(ConsentRecord {
                    user_id: UserId::new(row.get::<String, _>("user_id"))?,
                    kind: Self::kind_from_db(&kind)?,
                    granted: row.get("granted"),
                    recorded_at: Timestamp::from_datetime(row.get("recorded_at")),
                })
            })
            .collect()
    }

    async fn delete_for_user(&self, user_id: &UserId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM consents WHERE user_id = $1")
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
