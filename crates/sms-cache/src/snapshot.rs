//! Snapshot of the synced dataset

use uuid::Uuid;

use sms_core::entities::{MemberWithGroup, SmsTemplate};
use sms_service::dto::{GroupWithCount, MessageView};

/// One consistent view of the whole dataset
///
/// Snapshots are immutable once published; readers hold an `Arc` and are
/// never blocked by a refresh in flight. The version increases with every
/// successful refresh.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub groups: Vec<GroupWithCount>,
    pub members: Vec<MemberWithGroup>,
    pub messages: Vec<MessageView>,
    pub templates: Vec<SmsTemplate>,
    pub version: u64,
}

impl Snapshot {
    /// The empty snapshot published before the first refresh
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a group by id
    pub fn find_group(&self, id: Uuid) -> Option<&GroupWithCount> {
        self.groups.iter().find(|g| g.group.id == id)
    }

    /// Look up a member by id
    pub fn find_member(&self, id: Uuid) -> Option<&MemberWithGroup> {
        self.members.iter().find(|m| m.member.id == id)
    }

    /// Count of active members across the dataset
    pub fn active_member_count(&self) -> usize {
        self.members.iter().filter(|m| m.member.active).count()
    }
}
