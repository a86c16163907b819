//! Write-through snapshot store
//!
//! Wraps the service layer behind a single synced snapshot. Reads are
//! lock-cheap clones of an `Arc`; mutations run one at a time behind an
//! async gate and republish the whole snapshot from the store on success.
//! A failed mutation or refresh keeps the previous snapshot and latches
//! the error until cleared.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use sms_core::entities::{Group, Member, Message, SmsTemplate};
use sms_service::dto::{NewGroup, NewMember, NewTemplate, UpdateMember};
use sms_service::services::{
    DispatchService, GroupService, HistoryService, MemberService, ServiceContext, ServiceError,
    ServiceResult, TemplateService,
};

use crate::snapshot::Snapshot;

struct CacheState {
    snapshot: Arc<Snapshot>,
    loading: bool,
    last_error: Option<String>,
}

/// Synced snapshot store over the service layer
pub struct SyncStore {
    ctx: ServiceContext,
    state: RwLock<CacheState>,
    // Serializes refreshes and mutations; readers never wait on it
    refresh_gate: Mutex<()>,
    version: AtomicU64,
}

impl SyncStore {
    /// Create a store publishing the empty snapshot
    pub fn new(ctx: ServiceContext) -> Self {
        Self {
            ctx,
            state: RwLock::new(CacheState {
                snapshot: Arc::new(Snapshot::empty()),
                loading: false,
                last_error: None,
            }),
            refresh_gate: Mutex::new(()),
            version: AtomicU64::new(0),
        }
    }

    /// Get the underlying service context
    pub fn context(&self) -> &ServiceContext {
        &self.ctx
    }

    /// Get the current snapshot
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.state.read().snapshot)
    }

    /// Whether a refresh or mutation is in flight
    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    /// The most recent error, if any
    pub fn last_error(&self) -> Option<String> {
        self.state.read().last_error.clone()
    }

    /// Clear the latched error
    pub fn clear_error(&self) {
        self.state.write().last_error = None;
    }

    // ========================================================================
    // Refresh
    // ========================================================================

    /// Reload the full snapshot from the store
    ///
    /// Returns whether the refresh succeeded. On failure the previous
    /// snapshot stays published and the error is latched.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> bool {
        let _gate = self.refresh_gate.lock().await;
        self.set_loading(true);

        let ok = match self.load_snapshot().await {
            Ok(snapshot) => {
                info!(version = snapshot.version, "Snapshot refreshed");
                self.publish(snapshot);
                true
            }
            Err(e) => {
                warn!(error = %e, "Snapshot refresh failed");
                self.record_error(&e);
                false
            }
        };

        self.set_loading(false);
        ok
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Create a member and resync
    pub async fn add_member(&self, req: NewMember) -> ServiceResult<Member> {
        let _gate = self.refresh_gate.lock().await;
        self.set_loading(true);
        let result = MemberService::new(&self.ctx).create(req).await;
        let result = self.write_through(result).await;
        self.set_loading(false);
        result
    }

    /// Apply a partial member update and resync
    pub async fn update_member(&self, id: Uuid, req: UpdateMember) -> ServiceResult<Member> {
        let _gate = self.refresh_gate.lock().await;
        self.set_loading(true);
        let result = MemberService::new(&self.ctx).update(id, req).await;
        let result = self.write_through(result).await;
        self.set_loading(false);
        result
    }

    /// Delete a member and resync
    pub async fn delete_member(&self, id: Uuid) -> ServiceResult<()> {
        let _gate = self.refresh_gate.lock().await;
        self.set_loading(true);
        let result = MemberService::new(&self.ctx).delete(id).await;
        let result = self.write_through(result).await;
        self.set_loading(false);
        result
    }

    /// Create a group and resync
    pub async fn add_group(&self, req: NewGroup) -> ServiceResult<Group> {
        let _gate = self.refresh_gate.lock().await;
        self.set_loading(true);
        let result = GroupService::new(&self.ctx).create(req).await;
        let result = self.write_through(result).await;
        self.set_loading(false);
        result
    }

    /// Delete a group and resync
    ///
    /// The group's members become ungrouped; their rows survive.
    pub async fn delete_group(&self, id: Uuid) -> ServiceResult<()> {
        let _gate = self.refresh_gate.lock().await;
        self.set_loading(true);
        let result = GroupService::new(&self.ctx).delete(id).await;
        let result = self.write_through(result).await;
        self.set_loading(false);
        result
    }

    /// Dispatch a message and resync
    pub async fn send_message(
        &self,
        content: &str,
        group_ids: &[Uuid],
        member_ids: &[Uuid],
    ) -> ServiceResult<Message> {
        let _gate = self.refresh_gate.lock().await;
        self.set_loading(true);
        let result = DispatchService::new(&self.ctx)
            .send_message(content, group_ids, member_ids)
            .await;
        let result = self.write_through(result).await;
        self.set_loading(false);
        result
    }

    /// Create a template and resync
    pub async fn add_template(&self, req: NewTemplate) -> ServiceResult<SmsTemplate> {
        let _gate = self.refresh_gate.lock().await;
        self.set_loading(true);
        let result = TemplateService::new(&self.ctx).create(req).await;
        let result = self.write_through(result).await;
        self.set_loading(false);
        result
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Resync after a mutation
    ///
    /// A mutation that failed records its error and is returned as-is. A
    /// mutation that succeeded still returns `Ok` even when the follow-up
    /// refresh fails; the snapshot merely goes stale and the refresh error
    /// is latched.
    async fn write_through<T>(&self, result: ServiceResult<T>) -> ServiceResult<T> {
        match result {
            Ok(value) => {
                match self.load_snapshot().await {
                    Ok(snapshot) => self.publish(snapshot),
                    Err(e) => {
                        warn!(error = %e, "Resync after mutation failed");
                        self.record_error(&e);
                    }
                }
                Ok(value)
            }
            Err(e) => {
                self.record_error(&e);
                Err(e)
            }
        }
    }

    async fn load_snapshot(&self) -> ServiceResult<Snapshot> {
        let groups = GroupService::new(&self.ctx).list_with_counts().await?;
        let members = MemberService::new(&self.ctx).list().await?;
        let messages = HistoryService::new(&self.ctx).list().await?;
        let templates = TemplateService::new(&self.ctx).list().await?;

        let version = self.version.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(Snapshot {
            groups,
            members,
            messages,
            templates,
            version,
        })
    }

    fn publish(&self, snapshot: Snapshot) {
        self.state.write().snapshot = Arc::new(snapshot);
    }

    fn set_loading(&self, loading: bool) {
        self.state.write().loading = loading;
    }

    fn record_error(&self, error: &ServiceError) {
        self.state.write().last_error = Some(error.to_string());
    }
}

impl std::fmt::Debug for SyncStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("SyncStore")
            .field("version", &state.snapshot.version)
            .field("loading", &state.loading)
            .field("last_error", &state.last_error)
            .finish()
    }
}
