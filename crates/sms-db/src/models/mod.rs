//! Database models - `FromRow` structs mirroring table and join shapes

mod group;
mod member;
mod message;
mod template;

pub use group::{GroupModel, GroupWithCountModel};
pub use member::{MemberModel, MemberWithGroupModel};
pub use message::{LinkedNameModel, MessageModel};
pub use template::TemplateModel;
