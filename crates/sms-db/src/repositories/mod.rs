//! Repository implementations for PostgreSQL

mod error;
mod group;
mod member;
mod message;
mod template;

pub use group::PgGroupRepository;
pub use member::PgMemberRepository;
pub use message::PgMessageRepository;
pub use template::PgTemplateRepository;
