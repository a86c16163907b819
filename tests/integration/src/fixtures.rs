//! Test fixtures and data generators
//!
//! Provides reusable test data builders with unique names per call.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use sms_core::entities::{Group, Member};
use sms_service::dto::{NewGroup, NewMember, NewTemplate};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A group entity with a unique name
pub fn group(name: &str) -> Group {
    Group::new(format!("{name}-{}", unique_suffix()), "blue".to_string())
}

/// An active member entity
pub fn member(name: &str, group_id: Option<Uuid>) -> Member {
    let suffix = unique_suffix();
    let mut member = Member::new(
        name.to_string(),
        format!("555-{suffix:04}"),
        group_id,
    );
    member.email = Some(format!("{}{suffix}@example.com", name.to_lowercase()));
    member
}

/// An inactive member entity
pub fn inactive_member(name: &str, group_id: Option<Uuid>) -> Member {
    let mut m = member(name, group_id);
    m.deactivate();
    m
}

/// A create-member request with a unique phone
pub fn new_member_request(name: &str, group_id: Option<Uuid>) -> NewMember {
    NewMember {
        name: name.to_string(),
        phone: format!("555-{:04}", unique_suffix()),
        email: None,
        group_id,
        active: true,
        join_date: None,
    }
}

/// A create-group request with a unique name
pub fn new_group_request(name: &str) -> NewGroup {
    NewGroup {
        name: format!("{name}-{}", unique_suffix()),
        description: None,
        color: "blue".to_string(),
    }
}

/// A create-template request
pub fn new_template_request(name: &str) -> NewTemplate {
    NewTemplate {
        name: format!("{name}-{}", unique_suffix()),
        content: "Sunday service starts at 10am.".to_string(),
        category: "reminder".to_string(),
    }
}
