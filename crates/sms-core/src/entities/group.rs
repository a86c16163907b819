//! Group entity - a named collection that members may belong to

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Group entity
///
/// The color tag is presentation-only and treated as an opaque string.
/// The active member count is derived at query time and never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Group {
    /// Create a new Group with a fresh id
    pub fn new(name: String, color: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description: None,
            color,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the group name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Update the group description
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }

    /// Check if the group name is usable (non-empty after trimming)
    #[inline]
    pub fn has_valid_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}
