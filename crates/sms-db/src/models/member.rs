//! Member database models

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the members table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub group_id: Option<Uuid>,
    pub active: bool,
    pub join_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MemberModel {
    /// Check if the member has a group reference
    #[inline]
    pub fn has_group(&self) -> bool {
        self.group_id.is_some()
    }
}

/// Member row with its group left-joined in
///
/// The group columns are all nullable; `g_id` decides whether a group row
/// was present (a member's own `group_id` may dangle after a group delete).
#[derive(Debug, Clone, FromRow)]
pub struct MemberWithGroupModel {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub group_id: Option<Uuid>,
    pub active: bool,
    pub join_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub g_id: Option<Uuid>,
    pub g_name: Option<String>,
    pub g_description: Option<String>,
    pub g_color: Option<String>,
    pub g_created_at: Option<DateTime<Utc>>,
    pub g_updated_at: Option<DateTime<Utc>>,
}
