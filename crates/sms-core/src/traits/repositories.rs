//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs from the persistence engine, and
//! the infrastructure layer provides the implementation. Every operation may
//! fail with a transport-level `DomainError::StoreUnavailable`; callers must
//! treat that as recoverable-and-reportable, never fatal.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{
    Group, Member, MemberWithGroup, Message, MessageGroupLink, MessageRecipientLink, SmsTemplate,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Group Repository
// ============================================================================

#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// List all groups, ordered by name
    async fn find_all(&self) -> RepoResult<Vec<Group>>;

    /// Find group by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Group>>;

    /// List all groups with their active-member counts, in one round trip
    ///
    /// The count is derived at query time and never stored.
    async fn find_all_with_member_counts(&self) -> RepoResult<Vec<(Group, i64)>>;

    /// Create a new group
    async fn create(&self, group: &Group) -> RepoResult<()>;

    /// Update an existing group
    async fn update(&self, group: &Group) -> RepoResult<()>;

    /// Delete a group
    ///
    /// Members referencing the group are not cascaded; their group reference
    /// is left dangling and surfaces as "No Group" in projections.
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// List all members with their joined group, ordered by name
    async fn find_all(&self) -> RepoResult<Vec<MemberWithGroup>>;

    /// Find member by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Member>>;

    /// List active members belonging to any of the given groups
    async fn find_active_by_groups(&self, group_ids: &[Uuid]) -> RepoResult<Vec<Member>>;

    /// List active members among the given member ids
    ///
    /// Inactive members are filtered out even when explicitly selected.
    async fn find_active_by_ids(&self, member_ids: &[Uuid]) -> RepoResult<Vec<Member>>;

    /// Create a new member
    async fn create(&self, member: &Member) -> RepoResult<()>;

    /// Update an existing member
    async fn update(&self, member: &Member) -> RepoResult<()>;

    /// Delete a member
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// List all messages, newest first
    async fn find_all(&self) -> RepoResult<Vec<Message>>;

    /// Find message by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Message>>;

    /// Persist a message together with its group and recipient links
    ///
    /// The three inserts commit or fail as one unit. A failure whose rollback
    /// cannot be confirmed surfaces as `DomainError::PartialWrite`.
    async fn create_dispatch(
        &self,
        message: &Message,
        group_links: &[MessageGroupLink],
        recipient_links: &[MessageRecipientLink],
    ) -> RepoResult<()>;

    /// Resolve group names for the given messages, in one round trip
    ///
    /// Returns `(message_id, group_name)` pairs. Links whose group has been
    /// deleted are silently omitted.
    async fn group_names_for(&self, message_ids: &[Uuid]) -> RepoResult<Vec<(Uuid, String)>>;

    /// Resolve recipient names for the given messages, in one round trip
    ///
    /// Returns `(message_id, member_name)` pairs. Links whose member has been
    /// deleted are silently omitted.
    async fn recipient_names_for(&self, message_ids: &[Uuid]) -> RepoResult<Vec<(Uuid, String)>>;
}

// ============================================================================
// Template Repository
// ============================================================================

#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// List all templates, ordered by name
    async fn find_all(&self) -> RepoResult<Vec<SmsTemplate>>;

    /// Find template by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<SmsTemplate>>;

    /// Create a new template
    async fn create(&self, template: &SmsTemplate) -> RepoResult<()>;
}
