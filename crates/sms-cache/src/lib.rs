//! # sms-cache
//!
//! In-memory data-sync cache over the service layer.
//!
//! ## Features
//!
//! - **Snapshot Store**: One immutable snapshot of groups, members,
//!   messages, and templates behind an `Arc`
//! - **Write-Through Mutations**: Every successful mutation refreshes the
//!   whole snapshot from the store
//! - **Error Latch**: Failed operations keep the previous snapshot and
//!   record a human-readable error until cleared
//!
//! ## Example
//!
//! ```ignore
//! use sms_cache::SyncStore;
//!
//! let store = SyncStore::new(ctx);
//! store.refresh().await;
//!
//! let message = store.send_message("Service at 10am", &group_ids, &[]).await?;
//! let snapshot = store.snapshot();
//! assert!(!snapshot.messages.is_empty());
//! ```

pub mod snapshot;
pub mod store;

pub use snapshot::Snapshot;
pub use store::SyncStore;
