//! Template database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the sms_templates table
#[derive(Debug, Clone, FromRow)]
pub struct TemplateModel {
    pub id: Uuid,
    pub name: String,
    pub content: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
