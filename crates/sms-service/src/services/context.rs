//! Service context - dependency container for services
//!
//! Holds the repositories behind trait objects so services stay agnostic of
//! the storage backend.

use std::sync::Arc;

use sms_core::traits::{
    GroupRepository, MemberRepository, MessageRepository, TemplateRepository,
};

/// Service context containing all dependencies
///
/// Passed by reference to every service. Cloning is cheap; the repositories
/// are shared behind `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    group_repo: Arc<dyn GroupRepository>,
    member_repo: Arc<dyn MemberRepository>,
    message_repo: Arc<dyn MessageRepository>,
    template_repo: Arc<dyn TemplateRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        group_repo: Arc<dyn GroupRepository>,
        member_repo: Arc<dyn MemberRepository>,
        message_repo: Arc<dyn MessageRepository>,
        template_repo: Arc<dyn TemplateRepository>,
    ) -> Self {
        Self {
            group_repo,
            member_repo,
            message_repo,
            template_repo,
        }
    }

    /// Get the group repository
    pub fn group_repo(&self) -> &dyn GroupRepository {
        self.group_repo.as_ref()
    }

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the template repository
    pub fn template_repo(&self) -> &dyn TemplateRepository {
        self.template_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}
