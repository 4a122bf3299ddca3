//! PostgreSQL adapter for WellbeingRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{CheckinId, DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::wellbeing::{CheckinRecord, Mood};
use crate::ports::WellbeingRepository;

use super::db_err;

/// PostgreSQL implementation of WellbeingRepository.
pub struct PgWellbeingRepository {
    pool: PgPool,
}

impl PgWellbeingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn mood_to_db(mood: Mood) -> &'static str {
        match mood {
            Mood::Low => "low",
            Mood::Okay => "okay",
            Mood::Good => "good",
            Mood::Great => "great",
        }
    }

    fn mood_from_db(s: &str) -> Result<Mood, DomainError> {
        match s {
            "low" => Ok(Mood::Low),
            "okay" => Ok(Mood::Okay),
            "good" => Ok(Mood::Good),
            "great" => Ok(Mood::Great),
            other => Err(DomainError::new(
                ErrorCode::InternalError,
                format!("unknown mood in storage: {}", other),
            )),
        }
    }

    fn from_row(row: &sqlx::postgres::PgRow) -> Result<CheckinRecord, DomainError> {
        let mood: String = row.get("mood");
        Ok(CheckinRecord::restore(
            CheckinId::from_uuid(row.get("id")),
            UserId::new(row.get::<String, _>("user_id"))?,
            Self::mood_from_db(&mood)?,
            row.get::<i32, _>("connection") as u8,
            row.get("note"),
            Timestamp::from_datetime(row.get("created_at")),
        ))
    }
}

#[async_trait]
impl WellbeingRepository for PgWellbeingRepository {
    async fn append(&self, record: &CheckinRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO wellbeing_checkins (id, user_id, mood, connection, note, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(*record.id().as_uuid())
        .bind(record.user_id().as_str())
        .bind(Self::mood_to_db(record.mood()))
        .bind(record.connection() as i32)
        .bind(record.note())
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
    ) -> Result<Vec<CheckinRecord>, DomainError> {
        let rows = sqlx::query(
            "SELECT * FROM wellbeing_checkins WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2",
        )
        .bind(user_id.as_str())
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter().map(Self::from_row).collect()
    }

    async fn delete_for_user(&self, user_id: &UserId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM wellbeing_checkins WHERE user_id = $1")
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
