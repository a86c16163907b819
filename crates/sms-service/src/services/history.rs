//! History projection
//!
//! Joins stored messages with the display names of their targeted groups
//! and delivered recipients. Name lookups are batched across the whole
//! message set rather than issued per message.

use std::collections::HashMap;

use tracing::instrument;
use uuid::Uuid;

use sms_core::entities::Message;

use crate::dto::MessageView;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Projects messages into history views
#[derive(Debug)]
pub struct HistoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HistoryService<'a> {
    /// Create a new history service
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Project the full message history, newest first
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<MessageView>> {
        let messages = self.ctx.message_repo().find_all().await?;
        self.project_all(messages).await
    }

    /// Project a single message
    #[instrument(skip(self, message), fields(message_id = %message.id))]
    pub async fn project(&self, message: Message) -> ServiceResult<MessageView> {
        let mut views = self.project_all(vec![message]).await?;
        views
            .pop()
            .ok_or_else(|| ServiceError::internal("projection dropped its only message"))
    }

    /// Project a batch of messages, preserving their order
    ///
    /// Links whose group or member has since been deleted are silently
    /// omitted; the message row itself always survives.
    pub async fn project_all(&self, messages: Vec<Message>) -> ServiceResult<Vec<MessageView>> {
        if messages.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = messages.iter().map(|m| m.id).collect();
        let group_names = self.ctx.message_repo().group_names_for(&ids).await?;
        let recipient_names = self.ctx.message_repo().recipient_names_for(&ids).await?;

        let mut groups_by_message: HashMap<Uuid, Vec<String>> = HashMap::new();
        for (message_id, name) in group_names {
            groups_by_message.entry(message_id).or_default().push(name);
        }
        let mut recipients_by_message: HashMap<Uuid, Vec<String>> = HashMap::new();
        for (message_id, name) in recipient_names {
            recipients_by_message
                .entry(message_id)
                .or_default()
                .push(name);
        }

        Ok(messages
            .into_iter()
            .map(|message| {
                let groups = groups_by_message.remove(&message.id).unwrap_or_default();
                let recipients = recipients_by_message
                    .remove(&message.id)
                    .unwrap_or_default();
                MessageView {
                    message,
                    groups,
                    recipients,
                }
            })
            .collect())
    }
}
