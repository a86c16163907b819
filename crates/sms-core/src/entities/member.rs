//! Member entity - an individual SMS recipient

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Group;

/// Member entity
///
/// The phone number is an opaque string; no format validation is applied at
/// this layer. A member belongs to at most one group, and the group
/// reference may dangle after a group delete (projections render "No Group").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
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

impl Member {
    /// Create a new active Member with a fresh id, joining today
    pub fn new(name: String, phone: String, group_id: Option<Uuid>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            phone,
            email: None,
            group_id,
            active: true,
            join_date: now.date_naive(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the member belongs to the given group
    #[inline]
    pub fn is_in_group(&self, group_id: Uuid) -> bool {
        self.group_id == Some(group_id)
    }

    /// Mark the member inactive (excluded from all sends)
    pub fn deactivate(&mut self) {
        self.active = false;
        self.updated_at = Utc::now();
    }

    /// Mark the member active again
    pub fn activate(&mut self) {
        self.active = true;
        self.updated_at = Utc::now();
    }
}

/// Member with its joined group, as returned by member listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberWithGroup {
    pub member: Member,
    pub group: Option<Group>,
}

impl MemberWithGroup {
    /// Display name for the member's group
    ///
    /// A missing or orphaned group reference renders as "No Group".
    pub fn group_name(&self) -> &str {
        self.group.as_ref().map_or("No Group", |g| g.name.as_str())
    }
}
