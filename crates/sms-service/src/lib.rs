//! # sms-service
//!
//! Application layer containing the recipient resolver, the message
//! dispatcher, the history projector, and the CRUD services around them.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{GroupWithCount, MessageView, NewGroup, NewMember, NewTemplate, UpdateMember};
pub use services::{
    DispatchService, GroupService, HistoryService, MemberService, RecipientResolver,
    ServiceContext, ServiceError, ServiceResult, TemplateService,
};
