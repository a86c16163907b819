//! Message database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the messages table
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: Uuid,
    pub content: String,
    pub status: String,
    pub total_recipients: i32,
    pub delivered_count: i32,
    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MessageModel {
    /// Check if the message was ever sent
    #[inline]
    pub fn is_sent(&self) -> bool {
        self.sent_at.is_some()
    }
}

/// Join row for the batched name projections: one associated name per link
#[derive(Debug, Clone, FromRow)]
pub struct LinkedNameModel {
    pub message_id: Uuid,
    pub name: String,
}
