//! Message entity and its association link records
//!
//! A Message is a single bulk-send event with aggregate counters. The link
//! records tie it to the groups it was addressed to and the members it was
//! delivered to. All three are written once, as an atomic unit, and are
//! never edited afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Character budget of a single SMS unit
pub const SMS_UNIT_LEN: usize = 160;

/// Error when parsing a status value from its text form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status value: {0}")]
pub struct StatusParseError(pub String);

/// Aggregate status of a bulk-send event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Pending,
    Sent,
    Failed,
}

impl MessageStatus {
    /// Text form used in the database
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Sent => "sent",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "sent" => Ok(Self::Sent),
            "failed" => Ok(Self::Failed),
            other => Err(StatusParseError(other.to_string())),
        }
    }
}

/// Per-recipient delivery status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Pending,
    Sent,
    Failed,
    Delivered,
}

impl DeliveryStatus {
    /// Text form used in the database
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Sent => "sent",
            Self::Failed => "failed",
            Self::Delivered => "delivered",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "sent" => Ok(Self::Sent),
            "failed" => Ok(Self::Failed),
            "delivered" => Ok(Self::Delivered),
            other => Err(StatusParseError(other.to_string())),
        }
    }
}

/// Message entity
///
/// Invariants: `total_recipients` equals the recipient-link row count at
/// creation time and is never recomputed; `delivered_count` never exceeds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub content: String,
    pub status: MessageStatus,
    pub total_recipients: i32,
    pub delivered_count: i32,
    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Message {
    /// Create a message recorded as sent to `recipient_count` recipients
    ///
    /// Delivery is simulated as immediate, so the delivered counter starts
    /// equal to the recipient total.
    pub fn new_sent(content: String, recipient_count: i32, sent_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            status: MessageStatus::Sent,
            total_recipients: recipient_count,
            delivered_count: recipient_count,
            sent_at: Some(sent_at),
            created_at: sent_at,
            updated_at: sent_at,
        }
    }

    /// Check if message content is empty after trimming
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Number of SMS units this content occupies
    pub fn segment_count(&self) -> usize {
        let chars = self.content.chars().count();
        if chars == 0 {
            0
        } else {
            chars.div_ceil(SMS_UNIT_LEN)
        }
    }

    /// Get a truncated preview of the content (for listings)
    pub fn preview(&self, max_len: usize) -> &str {
        if self.content.len() <= max_len {
            &self.content
        } else {
            let mut end = max_len;
            while !self.content.is_char_boundary(end) && end > 0 {
                end -= 1;
            }
            &self.content[..end]
        }
    }
}

/// Link record: "this message was addressed to this group"
///
/// Purely informational; group membership was expanded once, at send time,
/// and the link is never re-expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageGroupLink {
    pub id: Uuid,
    pub message_id: Uuid,
    pub group_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl MessageGroupLink {
    /// Create a new group link
    pub fn new(message_id: Uuid, group_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            message_id,
            group_id,
            created_at: Utc::now(),
        }
    }
}

/// Link record: one delivery of a message to one member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecipientLink {
    pub id: Uuid,
    pub message_id: Uuid,
    pub member_id: Uuid,
    pub status: DeliveryStatus,
    pub delivered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl MessageRecipientLink {
    /// Create a link already marked delivered (simulated immediate delivery)
    pub fn delivered(message_id: Uuid, member_id: Uuid, delivered_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message_id,
            member_id,
            status: DeliveryStatus::Delivered,
            delivered_at: Some(delivered_at),
            created_at: delivered_at,
        }
    }
}
