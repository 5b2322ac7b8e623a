// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use time::OffsetDateTime;

use crate::{Actor, AuditAction, AuditLogEntry, ENTITY_DEPARTMENT};

#[test]
fn test_actor_creation_requires_all_fields() {
    let actor: Actor = Actor::new(String::from("admin-123"), String::from("admin"));

    assert_eq!(actor.id, "admin-123");
    assert_eq!(actor.actor_type, "admin");
}

#[test]
fn test_system_and_admin_actor_constructors() {
    assert_eq!(Actor::system("SYSTEM").actor_type, "system");
    assert_eq!(Actor::admin("admin-1").actor_type, "admin");
    assert_eq!(Actor::admin("admin-1").id, "admin-1");
}

#[test]
fn test_audit_action_storage_names() {
    assert_eq!(
        AuditAction::ManagerAutoAssigned.as_str(),
        "MANAGER_AUTO_ASSIGNED"
    );
    assert_eq!(
        AuditAction::ManagerManuallyAssigned.to_string(),
        "MANAGER_MANUALLY_ASSIGNED"
    );
    assert_eq!(
        AuditAction::from_str("MANUAL_MANAGER_ASSIGNMENT_TRIGGER").unwrap(),
        AuditAction::ManualManagerAssignmentTrigger
    );
    assert!(AuditAction::from_str("MANAGER_REMOVED").is_err());
}

#[test]
fn test_audit_entry_creation_requires_all_fields() {
    let timestamp: OffsetDateTime = OffsetDateTime::UNIX_EPOCH;
    let entry: AuditLogEntry = AuditLogEntry::new(
        AuditAction::ManagerAutoAssigned,
        ENTITY_DEPARTMENT,
        "d-legal",
        Actor::system("SYSTEM"),
        String::from("Manager Ann automatically assigned to department Legal"),
        timestamp,
    );

    assert_eq!(entry.entry_id, None);
    assert_eq!(entry.action, AuditAction::ManagerAutoAssigned);
    assert_eq!(entry.entity, "Department");
    assert_eq!(entry.entity_id, "d-legal");
    assert_eq!(entry.performed_by.id, "SYSTEM");
    assert_eq!(entry.timestamp, timestamp);
}

#[test]
fn test_entry_id_is_attached_without_changing_content() {
    let entry: AuditLogEntry = AuditLogEntry::new(
        AuditAction::ManagerAutoAssigned,
        ENTITY_DEPARTMENT,
        "d-legal",
        Actor::system("SYSTEM"),
        String::from("details"),
        OffsetDateTime::UNIX_EPOCH,
    );

    let persisted: AuditLogEntry = entry.clone().with_entry_id(42);

    assert_eq!(persisted.entry_id, Some(42));
    assert_eq!(persisted.details, entry.details);
    assert_eq!(persisted.action, entry.action);
}
