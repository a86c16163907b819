//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use sms_core::entities::{Member, MemberWithGroup};
use sms_core::traits::{MemberRepository, RepoResult};

use crate::models::{MemberModel, MemberWithGroupModel};

use super::error::{group_not_found, map_db_error, map_fk_violation, member_not_found};

const MEMBER_COLUMNS: &str =
    "id, name, phone, email, group_id, active, join_date, created_at, updated_at";

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<MemberWithGroup>> {
        let results = sqlx::query_as::<_, MemberWithGroupModel>(
            r"
            SELECT m.id, m.name, m.phone, m.email, m.group_id, m.active,
                   m.join_date, m.created_at, m.updated_at,
                   g.id AS g_id, g.name AS g_name, g.description AS g_description,
                   g.color AS g_color, g.created_at AS g_created_at,
                   g.updated_at AS g_updated_at
            FROM members m
            LEFT JOIN groups g ON g.id = m.group_id
            ORDER BY m.name, m.id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(MemberWithGroup::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Member::from))
    }

    #[instrument(skip(self, group_ids))]
    async fn find_active_by_groups(&self, group_ids: &[Uuid]) -> RepoResult<Vec<Member>> {
        if group_ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, MemberModel>(&format!(
            r"
            SELECT {MEMBER_COLUMNS}
            FROM members
            WHERE group_id = ANY($1) AND active = TRUE
            ORDER BY name, id
            "
        ))
        .bind(group_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Member::from).collect())
    }

    #[instrument(skip(self, member_ids))]
    async fn find_active_by_ids(&self, member_ids: &[Uuid]) -> RepoResult<Vec<Member>> {
        if member_ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, MemberModel>(&format!(
            r"
            SELECT {MEMBER_COLUMNS}
            FROM members
            WHERE id = ANY($1) AND active = TRUE
            ORDER BY name, id
            "
        ))
        .bind(member_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Member::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, member: &Member) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO members (id, name, phone, email, group_id, active, join_date,
                                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(member.id)
        .bind(&member.name)
        .bind(&member.phone)
        .bind(&member.email)
        .bind(member.group_id)
        .bind(member.active)
        .bind(member.join_date)
        .bind(member.created_at)
        .bind(member.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match member.group_id {
            Some(group_id) => map_fk_violation(e, || group_not_found(group_id)),
            None => map_db_error(e),
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, member: &Member) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE members
            SET name = $2, phone = $3, email = $4, group_id = $5, active = $6,
                join_date = $7, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(member.id)
        .bind(&member.name)
        .bind(&member.phone)
        .bind(&member.email)
        .bind(member.group_id)
        .bind(member.active)
        .bind(member.join_date)
        .execute(&self.pool)
        .await
        .map_err(|e| match member.group_id {
            Some(group_id) => map_fk_violation(e, || group_not_found(group_id)),
            None => map_db_error(e),
        })?;

        if result.rows_affected() == 0 {
            return Err(member_not_found(member.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(member_not_found(id));
        }

        Ok(())
    }
}
