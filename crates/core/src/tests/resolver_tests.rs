// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use mgr_assign_audit::{AuditAction, AuditLogEntry, ENTITY_DEPARTMENT};
use mgr_assign_domain::{AlertScenario, DepartmentStatus, Notification};

use crate::{
    CoreError, Engine, EngineConfig, InMemoryStore, ResolutionAction, ResolutionOutcome,
    StoreError,
};

use super::helpers::{
    FailingStore, create_department, create_employee, create_engine, create_manager, create_store,
    dept_id, inactive, unread_count, user_id,
};

#[test]
fn test_single_manager_is_auto_assigned() {
    let mut engine: Engine<InMemoryStore> = create_engine(
        vec![create_department("legal", "Legal")],
        vec![create_manager("m1", "Alice", "legal")],
    );

    let outcome: ResolutionOutcome = engine.resolve_department(&dept_id("legal"));

    assert_eq!(outcome.action, ResolutionAction::AutoAssigned);
    assert_eq!(outcome.assigned_manager_id, Some(user_id("m1")));
    assert_eq!(
        outcome.message,
        "Manager Alice automatically assigned to department Legal"
    );
    assert_eq!(
        engine.store().department(&dept_id("legal")).unwrap().manager_id,
        Some(user_id("m1"))
    );

    let entries: &[AuditLogEntry] = engine.store().audit_entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, AuditAction::ManagerAutoAssigned);
    assert_eq!(entries[0].entity, ENTITY_DEPARTMENT);
    assert_eq!(entries[0].entity_id, "legal");
    assert_eq!(entries[0].performed_by.id, "SYSTEM");
    assert_eq!(entries[0].performed_by.actor_type, "system");
}

#[test]
fn test_auto_assign_uses_configured_system_actor() {
    let store: InMemoryStore = create_store(
        vec![create_department("legal", "Legal")],
        vec![create_manager("m1", "Alice", "legal")],
    );
    let config: EngineConfig = EngineConfig::default().with_system_actor("reconciler");
    let mut engine: Engine<InMemoryStore> = Engine::with_config(store, config);

    engine.resolve_department(&dept_id("legal"));

    assert_eq!(
        engine.store().audit_entries()[0].performed_by.id,
        "reconciler"
    );
}

#[test]
fn test_single_manager_with_assignment_is_no_action() {
    let mut engine: Engine<InMemoryStore> = create_engine(
        vec![create_department("legal", "Legal").with_manager(user_id("m1"))],
        vec![create_manager("m1", "Alice", "legal")],
    );

    let outcome: ResolutionOutcome = engine.resolve_department(&dept_id("legal"));

    assert_eq!(outcome.action, ResolutionAction::NoAction);
    assert!(!outcome.failed);
    assert!(engine.store().audit_entries().is_empty());
}

#[test]
fn test_stale_assignment_with_single_manager_is_not_reconciled() {
    // The assigned manager is someone else entirely.
    let mut engine: Engine<InMemoryStore> = create_engine(
        vec![create_department("legal", "Legal").with_manager(user_id("old"))],
        vec![
            create_manager("m1", "Alice", "legal"),
            create_manager("old", "Oscar", "finance"),
        ],
    );

    let outcome: ResolutionOutcome = engine.resolve_department(&dept_id("legal"));

    assert_eq!(outcome.action, ResolutionAction::NoAction);
    assert_eq!(
        engine.store().department(&dept_id("legal")).unwrap().manager_id,
        Some(user_id("old"))
    );
}

#[test]
fn test_no_managers_raises_alert() {
    let mut engine: Engine<InMemoryStore> = create_engine(
        vec![create_department("legal", "Legal")],
        vec![
            create_employee("e1", "Eve", "legal"),
            inactive(create_manager("m1", "Alice", "legal")),
        ],
    );

    let outcome: ResolutionOutcome = engine.resolve_department(&dept_id("legal"));

    assert_eq!(outcome.action, ResolutionAction::NotificationCreated);
    assert_eq!(outcome.scenario, Some(AlertScenario::NoManagers));
    assert_eq!(outcome.eligible_managers, 0);

    let notifications: &[Notification] = engine.store().notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "No Manager Available for Legal");
    assert_eq!(
        notifications[0].message,
        "Department \"Legal\" has no managers. Please create a new manager or reassign an existing manager from another department."
    );
    assert_eq!(notifications[0].payload.department_code, "LEGAL");
    assert!(notifications[0].payload.available_managers.is_empty());
}

#[test]
fn test_no_managers_leaves_stale_assignment_untouched() {
    let mut engine: Engine<InMemoryStore> = create_engine(
        vec![create_department("legal", "Legal").with_manager(user_id("m1"))],
        vec![inactive(create_manager("m1", "Alice", "legal"))],
    );

    let outcome: ResolutionOutcome = engine.resolve_department(&dept_id("legal"));

    assert_eq!(outcome.action, ResolutionAction::NotificationCreated);
    assert_eq!(
        engine.store().department(&dept_id("legal")).unwrap().manager_id,
        Some(user_id("m1"))
    );
    assert_eq!(
        engine.store().notifications()[0].payload.current_manager_id,
        Some(user_id("m1"))
    );
}

#[test]
fn test_multiple_managers_without_assignment() {
    let mut engine: Engine<InMemoryStore> = create_engine(
        vec![create_department("legal", "Legal")],
        vec![
            create_manager("m1", "Alice", "legal"),
            create_manager("m2", "Bob", "legal"),
        ],
    );

    let outcome: ResolutionOutcome = engine.resolve_department(&dept_id("legal"));

    assert_eq!(outcome.action, ResolutionAction::NotificationCreated);
    assert_eq!(outcome.scenario, Some(AlertScenario::MultipleManagers));
    assert_eq!(outcome.eligible_managers, 2);
    assert_eq!(
        outcome.message,
        "Department \"Legal\" has 2 managers. Please select which manager should be assigned to this department."
    );
    assert_eq!(
        engine.store().department(&dept_id("legal")).unwrap().manager_id,
        None
    );

    let notification: &Notification = &engine.store().notifications()[0];
    assert_eq!(notification.title, "Multiple Managers Available for Legal");
    assert_eq!(notification.payload.available_managers.len(), 2);
    assert_eq!(notification.payload.available_managers[0].name, "Alice");
}

#[test]
fn test_multiple_managers_with_assignment_names_primary() {
    let mut engine: Engine<InMemoryStore> = create_engine(
        vec![create_department("legal", "Legal").with_manager(user_id("m2"))],
        vec![
            create_manager("m1", "Alice", "legal"),
            create_manager("m2", "Bob", "legal"),
            create_manager("m3", "Carol", "legal"),
        ],
    );

    let outcome: ResolutionOutcome = engine.resolve_department(&dept_id("legal"));

    assert_eq!(
        outcome.message,
        "Department \"Legal\" has 3 active managers but only \"Bob\" is assigned as the primary manager. Please review and reassign if needed."
    );
    assert_eq!(
        engine.store().department(&dept_id("legal")).unwrap().manager_id,
        Some(user_id("m2"))
    );
}

#[test]
fn test_repeated_resolution_is_idempotent() {
    let mut engine: Engine<InMemoryStore> = create_engine(
        vec![
            create_department("legal", "Legal"),
            create_department("ops", "Operations"),
            create_department("hr", "Human Resources"),
        ],
        vec![
            create_manager("m1", "Alice", "legal"),
            create_manager("m2", "Bob", "ops"),
            create_manager("m3", "Carol", "ops"),
        ],
    );

    assert_eq!(
        engine.resolve_department(&dept_id("legal")).action,
        ResolutionAction::AutoAssigned
    );
    assert_eq!(
        engine.resolve_department(&dept_id("legal")).action,
        ResolutionAction::NoAction
    );

    for _ in 0..3 {
        engine.resolve_department(&dept_id("ops"));
        engine.resolve_department(&dept_id("hr"));
    }
    assert_eq!(
        engine.resolve_department(&dept_id("ops")).action,
        ResolutionAction::NotificationExists
    );
    assert_eq!(unread_count(engine.store(), "ops"), 1);
    assert_eq!(unread_count(engine.store(), "hr"), 1);
    assert_eq!(engine.store().audit_entries().len(), 1);
}

#[test]
fn test_missing_department_is_no_action() {
    let mut engine: Engine<InMemoryStore> = create_engine(vec![], vec![]);

    let outcome: ResolutionOutcome = engine.resolve_department(&dept_id("ghost"));

    assert_eq!(outcome.action, ResolutionAction::NoAction);
    assert_eq!(outcome.message, "Department not found");
    assert!(!outcome.failed);
}

#[test]
fn test_inactive_department_is_still_resolved_on_request() {
    let mut engine: Engine<InMemoryStore> = create_engine(
        vec![create_department("legal", "Legal").with_status(DepartmentStatus::Inactive)],
        vec![create_manager("m1", "Alice", "legal")],
    );

    let outcome: ResolutionOutcome = engine.resolve_department(&dept_id("legal"));

    assert_eq!(outcome.action, ResolutionAction::AutoAssigned);
}

#[test]
fn test_store_failure_is_contained_and_counted() {
    let mut store: FailingStore = FailingStore::new(create_store(
        vec![create_department("legal", "Legal")],
        vec![create_manager("m1", "Alice", "legal")],
    ));
    store.failing_department = Some(dept_id("legal"));
    let mut engine: Engine<FailingStore> = Engine::new(store);

    let outcome: ResolutionOutcome = engine.resolve_department(&dept_id("legal"));

    assert_eq!(outcome.action, ResolutionAction::NoAction);
    assert!(outcome.failed);
    assert_eq!(engine.metrics().resolution_failures, 1);
    assert_eq!(engine.metrics().resolutions, 1);
}

#[test]
fn test_try_resolve_surfaces_store_failure() {
    let mut store: FailingStore = FailingStore::new(create_store(
        vec![create_department("legal", "Legal")],
        vec![],
    ));
    store.failing_department = Some(dept_id("legal"));
    let mut engine: Engine<FailingStore> = Engine::new(store);

    let result: Result<ResolutionOutcome, CoreError> =
        engine.try_resolve_department(&dept_id("legal"));

    assert!(matches!(
        result,
        Err(CoreError::Store(StoreError::Backend(_)))
    ));
    assert_eq!(engine.metrics().resolutions, 0);
}

#[test]
fn test_audit_failure_does_not_undo_assignment() {
    let mut store: FailingStore = FailingStore::new(create_store(
        vec![create_department("legal", "Legal")],
        vec![create_manager("m1", "Alice", "legal")],
    ));
    store.fail_audit = true;
    let mut engine: Engine<FailingStore> = Engine::new(store);

    let outcome: ResolutionOutcome = engine.resolve_department(&dept_id("legal"));

    assert_eq!(outcome.action, ResolutionAction::AutoAssigned);
    assert!(!outcome.failed);
    assert_eq!(
        engine.store().inner.department(&dept_id("legal")).unwrap().manager_id,
        Some(user_id("m1"))
    );
    assert_eq!(engine.metrics().audit_failures, 1);
    assert_eq!(engine.metrics().auto_assigned, 1);
}

#[test]
fn test_metrics_track_outcomes() {
    let mut engine: Engine<InMemoryStore> = create_engine(
        vec![
            create_department("legal", "Legal"),
            create_department("hr", "Human Resources"),
        ],
        vec![create_manager("m1", "Alice", "legal")],
    );

    engine.resolve_department(&dept_id("legal"));
    engine.resolve_department(&dept_id("hr"));
    engine.resolve_department(&dept_id("hr"));

    assert_eq!(engine.metrics().resolutions, 3);
    assert_eq!(engine.metrics().auto_assigned, 1);
    assert_eq!(engine.metrics().notifications_created, 1);
    assert_eq!(engine.metrics().notifications_existing, 1);
    assert_eq!(engine.metrics().resolution_failures, 0);
}
