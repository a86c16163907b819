//! Message dispatch
//!
//! Validates the outgoing message, resolves its recipients, and hands the
//! message row plus link rows to the store as one atomic write.

use std::collections::HashSet;

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use sms_core::entities::{Message, MessageGroupLink, MessageRecipientLink};
use sms_core::DomainError;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::recipient::RecipientResolver;

/// Dispatches messages to resolved recipients
#[derive(Debug)]
pub struct DispatchService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DispatchService<'a> {
    /// Create a new dispatch service
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send a message to the union of the selected groups and members
    ///
    /// Rejects blank content and empty recipient sets before any write.
    /// On success the message is recorded as sent with one delivered link
    /// per recipient and one link per targeted group; the store applies the
    /// whole batch atomically.
    #[instrument(skip(self, content, group_ids, member_ids), fields(
        groups = group_ids.len(),
        members = member_ids.len(),
    ))]
    pub async fn send_message(
        &self,
        content: &str,
        group_ids: &[Uuid],
        member_ids: &[Uuid],
    ) -> ServiceResult<Message> {
        if content.trim().is_empty() {
            return Err(ServiceError::validation("Message content is empty"));
        }

        let recipients = RecipientResolver::new(self.ctx)
            .resolve(group_ids, member_ids)
            .await?;
        if recipients.is_empty() {
            return Err(DomainError::NoRecipients.into());
        }

        let now = Utc::now();
        let recipient_count = i32::try_from(recipients.len())
            .map_err(|_| ServiceError::internal("recipient count exceeds i32"))?;
        let message = Message::new_sent(content.to_string(), recipient_count, now);

        // A group selected twice still yields a single link row
        let mut seen_groups = HashSet::with_capacity(group_ids.len());
        let group_links: Vec<MessageGroupLink> = group_ids
            .iter()
            .filter(|id| seen_groups.insert(**id))
            .map(|&group_id| MessageGroupLink::new(message.id, group_id))
            .collect();

        let recipient_links: Vec<MessageRecipientLink> = recipients
            .iter()
            .map(|member| MessageRecipientLink::delivered(message.id, member.id, now))
            .collect();

        self.ctx
            .message_repo()
            .create_dispatch(&message, &group_links, &recipient_links)
            .await?;

        info!(
            message_id = %message.id,
            recipients = recipients.len(),
            groups = group_links.len(),
            "Message dispatched"
        );

        Ok(message)
    }
}
