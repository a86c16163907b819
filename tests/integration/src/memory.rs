//! In-memory repository implementations
//!
//! Mirrors the relational semantics of the PostgreSQL repositories: name
//! uniqueness on groups, foreign-key checks on writes, set-null behavior on
//! deletes, and all-or-nothing dispatch writes. Failure injection flags let
//! tests simulate an unavailable store.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use uuid::Uuid;

use sms_core::entities::{
    Group, Member, MemberWithGroup, Message, MessageGroupLink, MessageRecipientLink, SmsTemplate,
};
use sms_core::traits::{
    GroupRepository, MemberRepository, MessageRepository, RepoResult, TemplateRepository,
};
use sms_core::DomainError;
use sms_service::services::ServiceContext;

#[derive(Default)]
struct Tables {
    groups: Vec<Group>,
    members: Vec<Member>,
    messages: Vec<Message>,
    group_links: Vec<MessageGroupLink>,
    recipient_links: Vec<MessageRecipientLink>,
    templates: Vec<SmsTemplate>,
}

/// In-memory store implementing every repository trait
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    fail_reads: AtomicBool,
    fail_dispatch: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Build a service context backed by this store
    pub fn context(self: &Arc<Self>) -> ServiceContext {
        ServiceContext::new(
            self.clone(),
            self.clone(),
            self.clone(),
            self.clone(),
        )
    }

    /// Make every read fail with a transport error
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make the next dispatch writes fail with a transport error
    pub fn set_fail_dispatch(&self, fail: bool) {
        self.fail_dispatch.store(fail, Ordering::SeqCst);
    }

    /// Insert a group directly, bypassing the service layer
    pub fn seed_group(&self, group: &Group) {
        self.tables.lock().groups.push(group.clone());
    }

    /// Insert a member directly, bypassing the service layer
    pub fn seed_member(&self, member: &Member) {
        self.tables.lock().members.push(member.clone());
    }

    /// Fetch a stored message by id
    pub fn get_message(&self, id: Uuid) -> Option<Message> {
        self.tables.lock().messages.iter().find(|m| m.id == id).cloned()
    }

    /// Count of stored messages
    pub fn message_count(&self) -> usize {
        self.tables.lock().messages.len()
    }

    /// Count of stored recipient link rows
    pub fn recipient_link_count(&self) -> usize {
        self.tables.lock().recipient_links.len()
    }

    /// Count of stored group link rows
    pub fn group_link_count(&self) -> usize {
        self.tables.lock().group_links.len()
    }

    fn check_reads(&self) -> RepoResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::StoreUnavailable(
                "connection refused".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl GroupRepository for MemoryStore {
    async fn find_all(&self) -> RepoResult<Vec<Group>> {
        self.check_reads()?;
        let mut groups = self.tables.lock().groups.clone();
        groups.sort_by(|a, b| (&a.name, a.id).cmp(&(&b.name, b.id)));
        Ok(groups)
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Group>> {
        self.check_reads()?;
        Ok(self.tables.lock().groups.iter().find(|g| g.id == id).cloned())
    }

    async fn find_all_with_member_counts(&self) -> RepoResult<Vec<(Group, i64)>> {
        self.check_reads()?;
        let tables = self.tables.lock();
        let mut result: Vec<(Group, i64)> = tables
            .groups
            .iter()
            .map(|group| {
                let count = tables
                    .members
                    .iter()
                    .filter(|m| m.active && m.group_id == Some(group.id))
                    .count() as i64;
                (group.clone(), count)
            })
            .collect();
        result.sort_by(|a, b| (&a.0.name, a.0.id).cmp(&(&b.0.name, b.0.id)));
        Ok(result)
    }

    async fn create(&self, group: &Group) -> RepoResult<()> {
        self.check_reads()?;
        let mut tables = self.tables.lock();
        if tables.groups.iter().any(|g| g.name == group.name) {
            return Err(DomainError::GroupNameTaken(group.name.clone()));
        }
        tables.groups.push(group.clone());
        Ok(())
    }

    async fn update(&self, group: &Group) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        if tables
            .groups
            .iter()
            .any(|g| g.id != group.id && g.name == group.name)
        {
            return Err(DomainError::GroupNameTaken(group.name.clone()));
        }
        match tables.groups.iter_mut().find(|g| g.id == group.id) {
            Some(existing) => {
                *existing = group.clone();
                Ok(())
            }
            None => Err(DomainError::GroupNotFound(group.id)),
        }
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        tables.groups.retain(|g| g.id != id);
        // Set-null on delete: members drop the assignment, link rows stay
        for member in &mut tables.members {
            if member.group_id == Some(id) {
                member.group_id = None;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl MemberRepository for MemoryStore {
    async fn find_all(&self) -> RepoResult<Vec<MemberWithGroup>> {
        self.check_reads()?;
        let tables = self.tables.lock();
        let mut result: Vec<MemberWithGroup> = tables
            .members
            .iter()
            .map(|member| {
                let group = member
                    .group_id
                    .and_then(|gid| tables.groups.iter().find(|g| g.id == gid).cloned());
                MemberWithGroup {
                    member: member.clone(),
                    group,
                }
            })
            .collect();
        result.sort_by(|a, b| {
            (&a.member.name, a.member.id).cmp(&(&b.member.name, b.member.id))
        });
        Ok(result)
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Member>> {
        self.check_reads()?;
        Ok(self.tables.lock().members.iter().find(|m| m.id == id).cloned())
    }

    async fn find_active_by_groups(&self, group_ids: &[Uuid]) -> RepoResult<Vec<Member>> {
        self.check_reads()?;
        if group_ids.is_empty() {
            return Ok(Vec::new());
        }
        let tables = self.tables.lock();
        let mut result: Vec<Member> = tables
            .members
            .iter()
            .filter(|m| m.active && m.group_id.is_some_and(|gid| group_ids.contains(&gid)))
            .cloned()
            .collect();
        result.sort_by(|a, b| (&a.name, a.id).cmp(&(&b.name, b.id)));
        Ok(result)
    }

    async fn find_active_by_ids(&self, member_ids: &[Uuid]) -> RepoResult<Vec<Member>> {
        self.check_reads()?;
        if member_ids.is_empty() {
            return Ok(Vec::new());
        }
        let tables = self.tables.lock();
        let mut result: Vec<Member> = tables
            .members
            .iter()
            .filter(|m| m.active && member_ids.contains(&m.id))
            .cloned()
            .collect();
        result.sort_by(|a, b| (&a.name, a.id).cmp(&(&b.name, b.id)));
        Ok(result)
    }

    async fn create(&self, member: &Member) -> RepoResult<()> {
        self.check_reads()?;
        let mut tables = self.tables.lock();
        if let Some(gid) = member.group_id {
            if !tables.groups.iter().any(|g| g.id == gid) {
                return Err(DomainError::GroupNotFound(gid));
            }
        }
        tables.members.push(member.clone());
        Ok(())
    }

    async fn update(&self, member: &Member) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        if let Some(gid) = member.group_id {
            if !tables.groups.iter().any(|g| g.id == gid) {
                return Err(DomainError::GroupNotFound(gid));
            }
        }
        match tables.members.iter_mut().find(|m| m.id == member.id) {
            Some(existing) => {
                *existing = member.clone();
                Ok(())
            }
            None => Err(DomainError::MemberNotFound(member.id)),
        }
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        // Recipient link rows survive; their names simply stop resolving
        self.tables.lock().members.retain(|m| m.id != id);
        Ok(())
    }
}

#[async_trait]
impl MessageRepository for MemoryStore {
    async fn find_all(&self) -> RepoResult<Vec<Message>> {
        self.check_reads()?;
        let mut messages = self.tables.lock().messages.clone();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(messages)
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Message>> {
        self.check_reads()?;
        Ok(self
            .tables
            .lock()
            .messages
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn create_dispatch(
        &self,
        message: &Message,
        group_links: &[MessageGroupLink],
        recipient_links: &[MessageRecipientLink],
    ) -> RepoResult<()> {
        if self.fail_dispatch.load(Ordering::SeqCst) {
            return Err(DomainError::StoreUnavailable(
                "connection reset mid-write".to_string(),
            ));
        }

        let mut tables = self.tables.lock();

        // Validate everything before touching any table; the whole batch
        // lands or none of it does
        for link in group_links {
            if !tables.groups.iter().any(|g| g.id == link.group_id) {
                return Err(DomainError::StoreUnavailable(format!(
                    "foreign key violation: group {}",
                    link.group_id
                )));
            }
        }
        let mut seen = std::collections::HashSet::new();
        for link in recipient_links {
            if !tables.members.iter().any(|m| m.id == link.member_id) {
                return Err(DomainError::StoreUnavailable(format!(
                    "foreign key violation: member {}",
                    link.member_id
                )));
            }
            if !seen.insert(link.member_id) {
                return Err(DomainError::StoreUnavailable(format!(
                    "unique violation: member {} linked twice",
                    link.member_id
                )));
            }
        }

        tables.messages.push(message.clone());
        tables.group_links.extend_from_slice(group_links);
        tables.recipient_links.extend_from_slice(recipient_links);
        Ok(())
    }

    async fn group_names_for(&self, message_ids: &[Uuid]) -> RepoResult<Vec<(Uuid, String)>> {
        self.check_reads()?;
        if message_ids.is_empty() {
            return Ok(Vec::new());
        }
        let tables = self.tables.lock();
        let mut result: Vec<(Uuid, String)> = tables
            .group_links
            .iter()
            .filter(|link| message_ids.contains(&link.message_id))
            .filter_map(|link| {
                tables
                    .groups
                    .iter()
                    .find(|g| g.id == link.group_id)
                    .map(|g| (link.message_id, g.name.clone()))
            })
            .collect();
        result.sort_by(|a, b| a.1.cmp(&b.1));
        Ok(result)
    }

    async fn recipient_names_for(&self, message_ids: &[Uuid]) -> RepoResult<Vec<(Uuid, String)>> {
        self.check_reads()?;
        if message_ids.is_empty() {
            return Ok(Vec::new());
        }
        let tables = self.tables.lock();
        let mut result: Vec<(Uuid, String)> = tables
            .recipient_links
            .iter()
            .filter(|link| message_ids.contains(&link.message_id))
            .filter_map(|link| {
                tables
                    .members
                    .iter()
                    .find(|m| m.id == link.member_id)
                    .map(|m| (link.message_id, m.name.clone()))
            })
            .collect();
        result.sort_by(|a, b| a.1.cmp(&b.1));
        Ok(result)
    }
}

#[async_trait]
impl TemplateRepository for MemoryStore {
    async fn find_all(&self) -> RepoResult<Vec<SmsTemplate>> {
        self.check_reads()?;
        let mut templates = self.tables.lock().templates.clone();
        templates.sort_by(|a, b| (&a.name, a.id).cmp(&(&b.name, b.id)));
        Ok(templates)
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<SmsTemplate>> {
        self.check_reads()?;
        Ok(self
            .tables
            .lock()
            .templates
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn create(&self, template: &SmsTemplate) -> RepoResult<()> {
        self.check_reads()?;
        self.tables.lock().templates.push(template.clone());
        Ok(())
    }
}
