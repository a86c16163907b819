//! # sms-core
//!
//! Domain layer containing entities, domain errors, and repository traits.
//! This crate has zero dependencies on infrastructure (database, cache, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    DeliveryStatus, Group, Member, MemberWithGroup, Message, MessageGroupLink,
    MessageRecipientLink, MessageStatus, SmsTemplate, StatusParseError,
};
pub use error::DomainError;
pub use traits::{
    GroupRepository, MemberRepository, MessageRepository, RepoResult, TemplateRepository,
};
