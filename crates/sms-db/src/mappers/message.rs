//! Message entity <-> model mapper

use sms_core::entities::{Message, StatusParseError};

use crate::models::MessageModel;

/// Convert MessageModel to Message entity
///
/// Fallible: the status column is text in the database and a row with an
/// unknown status value is rejected rather than silently coerced.
impl TryFrom<MessageModel> for Message {
    type Error = StatusParseError;

    fn try_from(model: MessageModel) -> Result<Self, Self::Error> {
        Ok(Message {
            id: model.id,
            content: model.content,
            status: model.status.parse()?,
            total_recipients: model.total_recipients,
            delivered_count: model.delivered_count,
            sent_at: model.sent_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
