//! PostgreSQL adapter for CoupleRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::couple::{CoupleLink, PartnerInvite};
use crate::domain::foundation::{CoupleId, DomainError, InviteId, Timestamp, UserId};
use crate::ports::CoupleRepository;

use super::{db_err, json_err};

/// PostgreSQL implementation of CoupleRepository.
pub struct PgCoupleRepository {
    pool: PgPool,
}

impl PgCoupleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn invite_from_row(row: &sqlx::postgres::PgRow) -> Result<PartnerInvite, DomainError> {
        Ok(PartnerInvite::restore(
            InviteId::from_uuid(row.get("id")),
            row.get("code"),
            UserId::new(row.get::<String, _>("inviter"))?,
            Timestamp::from_datetime(row.get("created_at")),
            Timestamp::from_datetime(row.get("expires_at")),
            row.get("redeemed"),
        ))
    }

    fn link_from_row(row: &sqlx::postgres::PgRow) -> Result<CoupleLink, DomainError> {
        let shared: serde_json::Value = row.get("shared");
        Ok(CoupleLink::restore(
            CoupleId::from_uuid(row.get("id")),
            UserId::new(row.get::<String, _>("user_a"))?,
            UserId::new(row.get::<String, _>("user_b"))?,
            serde_json::from_value(shared).map_err(json_err)?,
            Timestamp::from_datetime(row.get("created_at")),
        ))
    }
}

#[async_trait]
impl CoupleRepository for PgCoupleRepository {
    async fn create_invite(&self, invite: &PartnerInvite) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO couple_invites (id, code, inviter, created_at, expires_at, redeemed)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(*invite.id().as_uuid())
        .bind(invite.code())
        .bind(invite.inviter().as_str())
        .bind(*invite.created_at().as_datetime())
        .bind(*invite.expires_at().as_datetime())
        .bind(invite.is_redeemed())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    async fn find_invite_by_code(
        &self,
        code: &str,
    ) -> Result<Option<PartnerInvite>, DomainError> {
        let row = sqlx::query("SELECT * FROM couple_invites WHERE code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        row.map(|r| Self::invite_from_row(&r)).transpose()
    }

    async fn update_invite(&self, invite: &PartnerInvite) -> Result<(), DomainError> {
        sqlx::query("UPDATE couple_invites SET redeemed = $2 WHERE id = $1")
            .bind(*invite.id().as_uuid())
            .bind(invite.is_redeemed())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn create_link(&self, link: &CoupleLink) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO couples (id, user_a, user_b, shared, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(*link.id().as_uuid())
        .bind(link.user_a().as_str())
        .bind(link.user_b().as_str())
        .bind(serde_json::to_value(link.shared()).map_err(json_err)?)
        .bind(*link.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    async fn find_link_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<CoupleLink>, DomainError> {
        let row = sqlx::query("SELECT * FROM couples WHERE user_a = $1 OR user_b = $1")
            .bind(user_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        row.map(|r| Self::link_from_row(&r)).transpose()
    }

    async fn update_link(&self, link: &CoupleLink) -> Result<(), DomainError> {
        sqlx::query("UPDATE couples SET shared = $2 WHERE id = $1")
            .bind(*link.id().as_uuid())
            .bind(serde_json::to_value(link.shared()).map_err(json_err)?)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn delete_link(&self, couple_id: CoupleId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM couples WHERE id = $1")
            .bind(*couple_id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}
