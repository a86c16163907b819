//! View DTOs returned by projections

use serde::Serialize;

use sms_core::entities::{Group, Message};

/// Message enriched with the display names of its targeted groups and
/// resolved recipients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageView {
    #[serde(flatten)]
    pub message: Message,

    /// Names of groups the message targeted; deleted groups are omitted
    pub groups: Vec<String>,

    /// Names of members the message reached; deleted members are omitted
    pub recipients: Vec<String>,
}

/// Group with its derived active member count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupWithCount {
    #[serde(flatten)]
    pub group: Group,

    /// Count of active members only
    pub member_count: i64,
}
