//! Group management

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use sms_core::entities::Group;

use crate::dto::{GroupWithCount, NewGroup};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Group CRUD operations
#[derive(Debug)]
pub struct GroupService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GroupService<'a> {
    /// Create a new group service
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all groups with their active member counts
    #[instrument(skip(self))]
    pub async fn list_with_counts(&self) -> ServiceResult<Vec<GroupWithCount>> {
        let groups = self.ctx.group_repo().find_all_with_member_counts().await?;
        Ok(groups
            .into_iter()
            .map(|(group, member_count)| GroupWithCount {
                group,
                member_count,
            })
            .collect())
    }

    /// Create a group
    ///
    /// Duplicate names surface as a conflict from the store.
    #[instrument(skip(self, req))]
    pub async fn create(&self, req: NewGroup) -> ServiceResult<Group> {
        req.validate()?;

        let group = req.into_group();
        self.ctx.group_repo().create(&group).await?;

        info!(group_id = %group.id, "Group created");
        Ok(group)
    }

    /// Delete a group
    ///
    /// Members of the group become ungrouped; past messages targeting it
    /// keep their rows and drop the group name from projections.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.group_repo().delete(id).await?;
        info!(group_id = %id, "Group deleted");
        Ok(())
    }
}
