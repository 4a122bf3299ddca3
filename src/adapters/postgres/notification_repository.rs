//! PostgreSQL adapter for NotificationRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::notification::{DeviceToken, NotificationPreferences};
use crate::ports::NotificationRepository;

use super::{db_err, json_err};

/// PostgreSQL implementation of NotificationRepository.
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    async fn get_preferences(
        &self,
        user_id: &UserId,
    ) -> Result<Option<NotificationPreferences>, DomainError> {
        let row = sqlx::query("SELECT preferences FROM notification_prefs WHERE user_id = $1")
            .bind(user_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        row.map(|r| {
            let value: serde_json::Value = r.get("preferences");
            serde_json::from_value(value).map_err(json_err)
        })
        .transpose()
    }

    async fn put_preferences(
        &self,
        user_id: &UserId,
        preferences: &NotificationPreferences,
    ) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO notification_prefs (user_id, preferences)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO UPDATE SET preferences = EXCLUDED.preferences
            "#,
        )
        .bind(user_id.as_str())
        .bind(serde_json::to_value(preferences).map_err(json_err)?)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    async fn register_device(&self, token: &DeviceToken) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO device_tokens (token, user_id, platform, registered_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (token) DO UPDATE SET
                user_id = EXCLUDED.user_id,
                platform = EXCLUDED.platform,
                registered_at = EXCLUDED.registered_at
            "#,
        )
        .bind(&token.token)
        .bind(token.user_id.as_str())
        .bind(&token.platform)
        .bind(*token.registered_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    async fn devices_for_user(&self, user_id: &UserId) -> Result<Vec<DeviceToken>, DomainError> {
        let rows = sqlx::query("SELECT * FROM device_tokens WHERE user_id = $1")
            .bind(user_id.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;

        rows.iter()
            .map(|row| {
                Ok(DeviceToken {
                    user_id: UserId::new(row.get::<String, _>("user_id"))?,
                    token: row.get("token"),
                    platform: row.get("platform"),
                    registered_at: Timestamp::from_datetime(row.get("registered_at")),
                })
            })
            .collect()
    }

    async fn delete_for_user(&self, user_id: &UserId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM notification_prefs WHERE user_id = $1")
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        sqlx::query("DELETE FROM device_tokens WHERE user_id = $1")
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
