//! Member entity <-> model mapper

use sms_core::entities::{Group, Member, MemberWithGroup};

use crate::models::{MemberModel, MemberWithGroupModel};

/// Convert MemberModel to Member entity
impl From<MemberModel> for Member {
    fn from(model: MemberModel) -> Self {
        Member {
            id: model.id,
            name: model.name,
            phone: model.phone,
            email: model.email,
            group_id: model.group_id,
            active: model.active,
            join_date: model.join_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert a left-joined row into the member plus its optional group
impl From<MemberWithGroupModel> for MemberWithGroup {
    fn from(model: MemberWithGroupModel) -> Self {
        let group = match (
            model.g_id,
            model.g_name,
            model.g_color,
            model.g_created_at,
            model.g_updated_at,
        ) {
            (Some(id), Some(name), Some(color), Some(created_at), Some(updated_at)) => {
                Some(Group {
                    id,
                    name,
                    description: model.g_description,
                    color,
                    created_at,
                    updated_at,
                })
            }
            _ => None,
        };

        MemberWithGroup {
            member: Member {
                id: model.id,
                name: model.name,
                phone: model.phone,
                email: model.email,
                group_id: model.group_id,
                active: model.active,
                join_date: model.join_date,
                created_at: model.created_at,
                updated_at: model.updated_at,
            },
            group,
        }
    }
}
