//! Member management

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use sms_core::entities::{Member, MemberWithGroup};
use sms_core::DomainError;

use crate::dto::{NewMember, UpdateMember};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Member CRUD operations
#[derive(Debug)]
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new member service
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all members with their joined groups
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<MemberWithGroup>> {
        Ok(self.ctx.member_repo().find_all().await?)
    }

    /// Create a member
    ///
    /// A referenced group must exist; the reference may dangle later if the
    /// group is deleted.
    #[instrument(skip(self, req))]
    pub async fn create(&self, req: NewMember) -> ServiceResult<Member> {
        req.validate()?;

        if let Some(group_id) = req.group_id {
            self.ensure_group_exists(group_id).await?;
        }

        let member = req.into_member();
        self.ctx.member_repo().create(&member).await?;

        info!(member_id = %member.id, "Member created");
        Ok(member)
    }

    /// Apply a partial update to a member
    #[instrument(skip(self, req))]
    pub async fn update(&self, id: Uuid, req: UpdateMember) -> ServiceResult<Member> {
        req.validate()?;

        let mut member = self
            .ctx
            .member_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MemberNotFound(id))?;

        if let Some(Some(group_id)) = req.group_id {
            self.ensure_group_exists(group_id).await?;
        }

        req.apply(&mut member);
        self.ctx.member_repo().update(&member).await?;

        info!(member_id = %member.id, "Member updated");
        Ok(member)
    }

    /// Delete a member
    ///
    /// Past message history keeps the message rows; the recipient links
    /// simply stop resolving to a name.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.member_repo().delete(id).await?;
        info!(member_id = %id, "Member deleted");
        Ok(())
    }

    async fn ensure_group_exists(&self, group_id: Uuid) -> ServiceResult<()> {
        self.ctx
            .group_repo()
            .find_by_id(group_id)
            .await?
            .ok_or(DomainError::GroupNotFound(group_id))?;
        Ok(())
    }
}
