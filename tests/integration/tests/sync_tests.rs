//! Sync store tests
//!
//! Drive the write-through snapshot store end to end over the in-memory
//! repositories.

use integration_tests::{fixtures, MemoryStore};
use sms_cache::SyncStore;
use sms_service::dto::UpdateMember;

#[tokio::test]
async fn test_refresh_after_seeding() {
    let store = MemoryStore::new();
    let group = fixtures::group("Youth");
    store.seed_group(&group);
    let member = fixtures::member("Alice", Some(group.id));
    store.seed_member(&member);

    let sync = SyncStore::new(store.context());
    assert_eq!(sync.snapshot().version, 0);

    assert!(sync.refresh().await);
    let snapshot = sync.snapshot();
    assert_eq!(snapshot.version, 1);
    assert_eq!(snapshot.groups.len(), 1);
    assert_eq!(snapshot.members.len(), 1);
    assert_eq!(snapshot.find_group(group.id).unwrap().member_count, 1);
}

#[tokio::test]
async fn test_mutations_resync_the_snapshot() {
    let store = MemoryStore::new();
    let sync = SyncStore::new(store.context());

    let group = sync
        .add_group(fixtures::new_group_request("Choir"))
        .await
        .unwrap();
    let member = sync
        .add_member(fixtures::new_member_request("Alice", Some(group.id)))
        .await
        .unwrap();

    let snapshot = sync.snapshot();
    assert_eq!(snapshot.find_group(group.id).unwrap().member_count, 1);
    assert_eq!(snapshot.find_member(member.id).unwrap().group_name(), group.name);

    // Deactivating the member drops them from the group count
    let update = UpdateMember {
        active: Some(false),
        ..UpdateMember::default()
    };
    sync.update_member(member.id, update).await.unwrap();

    let snapshot = sync.snapshot();
    assert_eq!(snapshot.find_group(group.id).unwrap().member_count, 0);
    assert_eq!(snapshot.active_member_count(), 0);
}

#[tokio::test]
async fn test_send_message_lands_in_snapshot_history() {
    let store = MemoryStore::new();
    let sync = SyncStore::new(store.context());

    let group = sync
        .add_group(fixtures::new_group_request("Elders"))
        .await
        .unwrap();
    sync.add_member(fixtures::new_member_request("Alice", Some(group.id)))
        .await
        .unwrap();
    sync.add_member(fixtures::new_member_request("Bob", Some(group.id)))
        .await
        .unwrap();

    let message = sync
        .send_message("Meeting moved to 7pm", &[group.id], &[])
        .await
        .unwrap();
    assert_eq!(message.total_recipients, 2);

    let snapshot = sync.snapshot();
    assert_eq!(snapshot.messages.len(), 1);
    let view = &snapshot.messages[0];
    assert_eq!(view.message.id, message.id);
    assert_eq!(view.groups, vec![group.name.clone()]);
    assert_eq!(view.recipients.len(), 2);
}

#[tokio::test]
async fn test_failed_send_keeps_snapshot_and_latches_error() {
    let store = MemoryStore::new();
    let sync = SyncStore::new(store.context());

    let group = sync
        .add_group(fixtures::new_group_request("Quiet"))
        .await
        .unwrap();
    let version_before = sync.snapshot().version;

    // No active members resolve, so the send is rejected before any write
    let result = sync.send_message("anyone there?", &[group.id], &[]).await;
    assert!(result.is_err());

    let snapshot = sync.snapshot();
    assert_eq!(snapshot.version, version_before);
    assert!(snapshot.messages.is_empty());
    assert!(sync.last_error().unwrap().contains("No recipients"));

    sync.clear_error();
    assert!(sync.last_error().is_none());
}

#[tokio::test]
async fn test_delete_group_ungroups_members_in_snapshot() {
    let store = MemoryStore::new();
    let sync = SyncStore::new(store.context());

    let group = sync
        .add_group(fixtures::new_group_request("Transient"))
        .await
        .unwrap();
    let member = sync
        .add_member(fixtures::new_member_request("Alice", Some(group.id)))
        .await
        .unwrap();
    sync.send_message("farewell", &[group.id], &[]).await.unwrap();

    sync.delete_group(group.id).await.unwrap();

    let snapshot = sync.snapshot();
    assert!(snapshot.find_group(group.id).is_none());
    let listed = snapshot.find_member(member.id).unwrap();
    assert_eq!(listed.group_name(), "No Group");
    // History keeps the message; only the group name disappears
    assert_eq!(snapshot.messages.len(), 1);
    assert!(snapshot.messages[0].groups.is_empty());
}

#[tokio::test]
async fn test_templates_sync_through_store() {
    let store = MemoryStore::new();
    let sync = SyncStore::new(store.context());

    let template = sync
        .add_template(fixtures::new_template_request("Welcome"))
        .await
        .unwrap();

    let snapshot = sync.snapshot();
    assert_eq!(snapshot.templates.len(), 1);
    assert_eq!(snapshot.templates[0].id, template.id);
}
