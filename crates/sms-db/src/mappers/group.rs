//! Group entity <-> model mapper

use sms_core::entities::Group;

use crate::models::{GroupModel, GroupWithCountModel};

/// Convert GroupModel to Group entity
impl From<GroupModel> for Group {
    fn from(model: GroupModel) -> Self {
        Group {
            id: model.id,
            name: model.name,
            description: model.description,
            color: model.color,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert a counted join row into the entity plus its derived count
impl From<GroupWithCountModel> for (Group, i64) {
    fn from(model: GroupWithCountModel) -> Self {
        (
            Group {
                id: model.id,
                name: model.name,
                description: model.description,
                color: model.color,
                created_at: model.created_at,
                updated_at: model.updated_at,
            },
            model.member_count,
        )
    }
}
