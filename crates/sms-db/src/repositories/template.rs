//! PostgreSQL implementation of TemplateRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use sms_core::entities::SmsTemplate;
use sms_core::traits::{RepoResult, TemplateRepository};

use crate::models::TemplateModel;

use super::error::map_db_error;

/// PostgreSQL implementation of TemplateRepository
#[derive(Clone)]
pub struct PgTemplateRepository {
    pool: PgPool,
}

impl PgTemplateRepository {
    /// Create a new PgTemplateRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TemplateRepository for PgTemplateRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<SmsTemplate>> {
        let results = sqlx::query_as::<_, TemplateModel>(
            r"
            SELECT id, name, content, category, created_at, updated_at
            FROM sms_templates
            ORDER BY name, id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(SmsTemplate::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<SmsTemplate>> {
        let result = sqlx::query_as::<_, TemplateModel>(
            r"
            SELECT id, name, content, category, created_at, updated_at
            FROM sms_templates
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(SmsTemplate::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, template: &SmsTemplate) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO sms_templates (id, name, content, category, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(template.id)
        .bind(&template.name)
        .bind(&template.content)
        .bind(&template.category)
        .bind(template.created_at)
        .bind(template.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
