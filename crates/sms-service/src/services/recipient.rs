//! Recipient resolution
//!
//! Turns a selection of groups and individual members into the concrete,
//! deduplicated set of active members a message will reach.

use std::collections::HashSet;

use tracing::instrument;
use uuid::Uuid;

use sms_core::entities::Member;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Resolves group and member selections into concrete recipients
#[derive(Debug)]
pub struct RecipientResolver<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RecipientResolver<'a> {
    /// Create a new resolver
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve the union of group members and directly selected members
    ///
    /// Inactive members never appear in the result, even when selected
    /// directly. Members reached through both a group and a direct selection
    /// appear once, at their first occurrence. An empty selection resolves
    /// to an empty set without touching the store.
    #[instrument(skip(self, group_ids, member_ids), fields(
        groups = group_ids.len(),
        members = member_ids.len(),
    ))]
    pub async fn resolve(
        &self,
        group_ids: &[Uuid],
        member_ids: &[Uuid],
    ) -> ServiceResult<Vec<Member>> {
        if group_ids.is_empty() && member_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut recipients = self.ctx.member_repo().find_active_by_groups(group_ids).await?;
        recipients.extend(self.ctx.member_repo().find_active_by_ids(member_ids).await?);

        // Union dedup, keeping the first occurrence of each member
        let mut seen = HashSet::with_capacity(recipients.len());
        recipients.retain(|member| seen.insert(member.id));

        Ok(recipients)
    }
}
