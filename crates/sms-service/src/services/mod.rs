//! Service layer
//!
//! Services hold the application flows: recipient resolution, message
//! dispatch, history projection, and the CRUD operations around members,
//! groups, and templates. Each service borrows a [`ServiceContext`] and is
//! cheap to construct per call.

pub mod context;
pub mod dispatch;
pub mod error;
pub mod group;
pub mod history;
pub mod member;
pub mod recipient;
pub mod template;

pub use context::ServiceContext;
pub use dispatch::DispatchService;
pub use error::{ServiceError, ServiceResult};
pub use group::GroupService;
pub use history::HistoryService;
pub use member::MemberService;
pub use recipient::RecipientResolver;
pub use template::TemplateService;
