//! PostgreSQL adapter for ChatRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::chat::{ChatMessage, ChatRole};
use crate::domain::foundation::{ChatMessageId, DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::ChatRepository;

use super::db_err;

/// PostgreSQL implementation of ChatRepository.
pub struct PgChatRepository {
    pool: PgPool,
}

impl PgChatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn role_to_db(role: ChatRole) -> &'static str {
        match role {
            ChatRole::User => "user",
            ChatRole::Companion => "companion",
        }
    }

    fn role_from_db(s: &str) -> Result<ChatRole, DomainError> {
        match s {
            "user" => Ok(ChatRole::User),
            "companion" => Ok(ChatRole::Companion),
            other => Err(DomainError::new(
                ErrorCode::InternalError,
                format!("unknown chat role in storage: {}", other),
            )),
        }
    }

    fn from_row(row: &sqlx::postgres::PgRow) -> Result<ChatMessage, DomainError> {
        let role: String = row.get("role");
        Ok(ChatMessage::restore(
            ChatMessageId::from_uuid(row.get("id")),
            UserId::new(row.get::<String, _>("user_id"))?,
            Self::role_from_db(&role)?,
            row.get("body"),
            Timestamp::from_datetime(row.get("created_at")),
        ))
    }
}

#[async_trait]
impl ChatRepository for PgChatRepository {
    async fn append(&self, message: &ChatMessage) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO chat_messages (id, user_id, role, body, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(*message.id().as_uuid())
        .bind(message.user_id().as_str())
        .bind(Self::role_to_db(message.role()))
        .bind(message.body())
        .bind(*message.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    async fn recent_for_user(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, DomainError> {
        // Newest N, returned oldest-first for prompt assembly.
        let rows = sqlx::query(
            r#"
            SELECT * FROM (
                SELECT * FROM chat_messages
                WHERE user_id = $1
                ORDER BY created_at DESC
                LIMIT $2
            ) recent ORDER BY created_at ASC
            "#,
        )
        .bind(user_id.as_str())
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        rows.iter().map(Self::from_row).collect()
    }

    async fn delete_for_user(&self, user_id: &UserId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM chat_messages WHERE user_id = $1")
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
