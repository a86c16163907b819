//! Request DTOs for service operations
//!
//! All request DTOs implement `Deserialize`, and `Validate` where input
//! validation applies.

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use sms_core::entities::{Group, Member, SmsTemplate};

// ============================================================================
// Member Requests
// ============================================================================

/// Create member request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewMember {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 32, message = "Phone must be 1-32 characters"))]
    pub phone: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    /// Group to place the member in, if any
    pub group_id: Option<Uuid>,

    #[serde(default = "default_active")]
    pub active: bool,

    /// Defaults to today when omitted
    pub join_date: Option<NaiveDate>,
}

fn default_active() -> bool {
    true
}

impl NewMember {
    /// Build the domain entity, filling in defaults
    pub fn into_member(self) -> Member {
        let mut member = Member::new(self.name, self.phone, self.group_id);
        member.email = self.email;
        member.active = self.active;
        if let Some(join_date) = self.join_date {
            member.join_date = join_date;
        }
        member
    }
}

/// Update member request (partial update)
///
/// `group_id` uses a double `Option`: `None` leaves the assignment
/// untouched, `Some(None)` moves the member out of their group.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMember {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 32, message = "Phone must be 1-32 characters"))]
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub group_id: Option<Option<Uuid>>,

    pub active: Option<bool>,

    pub join_date: Option<NaiveDate>,
}

impl UpdateMember {
    /// Apply the requested changes to an existing member
    pub fn apply(self, member: &mut Member) {
        if let Some(name) = self.name {
            member.name = name;
        }
        if let Some(phone) = self.phone {
            member.phone = phone;
        }
        if let Some(email) = self.email {
            member.email = Some(email);
        }
        if let Some(group_id) = self.group_id {
            member.group_id = group_id;
        }
        if let Some(active) = self.active {
            member.active = active;
        }
        if let Some(join_date) = self.join_date {
            member.join_date = join_date;
        }
        member.updated_at = chrono::Utc::now();
    }
}

// ============================================================================
// Group Requests
// ============================================================================

/// Create group request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewGroup {
    #[validate(length(min = 1, max = 100, message = "Group name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    /// Display color, defaults to blue
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "blue".to_string()
}

impl NewGroup {
    /// Build the domain entity
    pub fn into_group(self) -> Group {
        let mut group = Group::new(self.name, self.color);
        group.description = self.description;
        group
    }
}

// ============================================================================
// Template Requests
// ============================================================================

/// Create template request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewTemplate {
    #[validate(length(min = 1, max = 100, message = "Template name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "Template content is required"))]
    pub content: String,

    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "general".to_string()
}

impl NewTemplate {
    /// Build the domain entity
    pub fn into_template(self) -> SmsTemplate {
        SmsTemplate::new(self.name, self.content, self.category)
    }
}
