//! SMS template entity - reusable message content

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// SMS template entity
///
/// Templates are read-only inputs to message composition; the dispatch
/// flow never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsTemplate {
    pub id: Uuid,
    pub name: String,
    pub content: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SmsTemplate {
    /// Create a new SmsTemplate with a fresh id
    pub fn new(name: String, content: String, category: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            content,
            category,
            created_at: now,
            updated_at: now,
        }
    }
}
