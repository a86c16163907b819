//! PostgreSQL implementation of GroupRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use sms_core::entities::Group;
use sms_core::traits::{GroupRepository, RepoResult};

use crate::models::{GroupModel, GroupWithCountModel};

use super::error::{group_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of GroupRepository
#[derive(Clone)]
pub struct PgGroupRepository {
    pool: PgPool,
}

impl PgGroupRepository {
    /// Create a new PgGroupRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupRepository for PgGroupRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Group>> {
        let results = sqlx::query_as::<_, GroupModel>(
            r"
            SELECT id, name, description, color, created_at, updated_at
            FROM groups
            ORDER BY name, id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Group::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Group>> {
        let result = sqlx::query_as::<_, GroupModel>(
            r"
            SELECT id, name, description, color, created_at, updated_at
            FROM groups
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Group::from))
    }

    #[instrument(skip(self))]
    async fn find_all_with_member_counts(&self) -> RepoResult<Vec<(Group, i64)>> {
        // Single grouped join instead of one count query per group
        let results = sqlx::query_as::<_, GroupWithCountModel>(
            r"
            SELECT g.id, g.name, g.description, g.color, g.created_at, g.updated_at,
                   COUNT(m.id) FILTER (WHERE m.active) AS member_count
            FROM groups g
            LEFT JOIN members m ON m.group_id = g.id
            GROUP BY g.id
            ORDER BY g.name, g.id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(<(Group, i64)>::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, group: &Group) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO groups (id, name, description, color, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(group.id)
        .bind(&group.name)
        .bind(&group.description)
        .bind(&group.color)
        .bind(group.created_at)
        .bind(group.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                sms_core::DomainError::GroupNameTaken(group.name.clone())
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, group: &Group) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE groups
            SET name = $2, description = $3, color = $4, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(group.id)
        .bind(&group.name)
        .bind(&group.description)
        .bind(&group.color)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                sms_core::DomainError::GroupNameTaken(group.name.clone())
            })
        })?;

        if result.rows_affected() == 0 {
            return Err(group_not_found(group.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        // Members and message links reference groups with ON DELETE SET NULL,
        // so the delete orphans rather than cascades
        let result = sqlx::query("DELETE FROM groups WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(group_not_found(id));
        }

        Ok(())
    }
}
