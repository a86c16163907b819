//! Repository traits (ports)

mod repositories;

pub use repositories::{
    GroupRepository, MemberRepository, MessageRepository, RepoResult, TemplateRepository,
};
