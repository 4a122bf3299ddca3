//! PostgreSQL adapter for ProfileRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{CoupleId, DomainError, Timestamp, UserId};
use crate::domain::user::UserProfile;
use crate::ports::ProfileRepository;

use super::{db_err, json_err};

/// PostgreSQL implementation of ProfileRepository.
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn from_row(row: &sqlx::postgres::PgRow) -> Result<UserProfile, DomainError> {
        let user_id: String = row.get("user_id");
        let quiz_answers: serde_json::Value = row.get("quiz_answers");
        let scores: Option<serde_json::Value> = row.get("scores");
        let partner_id: Option<String> = row.get("partner_id");
        let couple_id: Option<uuid::Uuid> = row.get("couple_id");

        let partner_id = partner_id
            .map(UserId::new)
            .transpose()
            .map_err(DomainError::from)?;

        Ok(UserProfile::restore(
            UserId::new(user_id)?,
            row.get("email"),
            row.get("display_name"),
            serde_json::from_value(quiz_answers).map_err(json_err)?,
            scores
                .map(serde_json::from_value)
                .transpose()
                .map_err(json_err)?,
            partner_id,
            couple_id.map(CoupleId::from_uuid),
            row.get::<Option<chrono::DateTime<chrono::Utc>>, _>("trial_started_at")
                .map(Timestamp::from_datetime),
            row.get::<Option<chrono::DateTime<chrono::Utc>>, _>("trial_ends_at")
                .map(Timestamp::from_datetime),
            Timestamp::from_datetime(row.get("created_at")),
            Timestamp::from_datetime(row.get("updated_at")),
        ))
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn create(&self, profile: &UserProfile) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO profiles (
                user_id, email, display_name, quiz_answers, scores,
                partner_id, couple_id, trial_started_at, trial_ends_at,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(profile.user_id().as_str())
        .bind(profile.email())
        .bind(profile.display_name())
        .bind(serde_json::to_value(profile.quiz_answers()).map_err(json_err)?)
        .bind(
            profile
                .scores()
                .map(serde_json::to_value)
                .transpose()
                .map_err(json_err)?,
        )
        .bind(profile.partner_id().map(|p| p.as_str()))
        .bind(profile.couple_id().map(|c| *c.as_uuid()))
        .bind(profile.trial_started_at().map(|t| *t.as_datetime()))
        .bind(profile.trial_ends_at().map(|t| *t.as_datetime()))
        .bind(*profile.created_at().as_datetime())
        .bind(*profile.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }

    async fn update(&self, profile: &UserProfile) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            UPDATE profiles SET
                email = $2, display_name = $3, quiz_answers = $4, scores = $5,
                partner_id = $6, couple_id = $7, trial_started_at = $8,
                trial_ends_at = $9, updated_at = $10
            WHERE user_id = $1
            "#,
        )
        .bind(profile.user_id().as_str())
        .bind(profile.email())
        .bind(profile.display_name())
        .bind(serde_json::to_value(profile.quiz_answers()).map_err(json_err)?)
        .bind(
            profile
                .scores()
                .map(serde_json::to_value)
                .transpose()
                .map_err(json_err)?,
        )
        .bind(profile.partner_id().map(|p| p.as_str()))
        .bind(profile.couple_id().map(|c| *c.as_uuid()))
        .bind(profile.trial_started_at().map(|t| *t.as_datetime()))
        .bind(profile.trial_ends_at().map(|t| *t.as_datetime()))
        .bind(*profile.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        let row = sqlx::query("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        row.map(|r| Self::from_row(&r)).transpose()
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM profiles WHERE user_id = $1")
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
