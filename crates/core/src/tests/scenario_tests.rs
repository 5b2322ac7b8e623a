// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end flows driven through the lifecycle hooks, the way the
//! surrounding application would drive them.

use mgr_assign_domain::{AlertScenario, NotificationStatus, User};

use crate::{Engine, HookReport, InMemoryStore, ResolutionAction, ResolutionOutcome};

use super::helpers::{
    create_department, create_engine, create_manager, dept_id, inactive, unread_count, user_id,
};

#[test]
fn test_legal_department_walkthrough() {
    let mut engine: Engine<InMemoryStore> =
        create_engine(vec![create_department("legal", "Legal")], vec![]);

    // No managers yet.
    let first: ResolutionOutcome = engine.resolve_department(&dept_id("legal"));
    assert_eq!(first.action, ResolutionAction::NotificationCreated);
    assert_eq!(first.scenario, Some(AlertScenario::NoManagers));

    // First manager joins.
    let m1: User = create_manager("m1", "Alice", "legal");
    engine.store_mut().insert_user(m1.clone());
    let report: HookReport = engine.after_user_created(&m1);
    assert_eq!(report.outcomes[0].action, ResolutionAction::AutoAssigned);
    assert_eq!(
        engine.store().department(&dept_id("legal")).unwrap().manager_id,
        Some(user_id("m1"))
    );

    // An administrator dismisses the stale "no managers" alert.
    engine
        .store_mut()
        .set_notification_status(first.notification_id.unwrap(), NotificationStatus::Dismissed)
        .unwrap();

    // Second manager joins.
    let m2: User = create_manager("m2", "Bob", "legal");
    engine.store_mut().insert_user(m2.clone());
    let report: HookReport = engine.after_user_created(&m2);
    let outcome: &ResolutionOutcome = &report.outcomes[0];
    assert_eq!(outcome.action, ResolutionAction::NotificationCreated);
    assert_eq!(outcome.scenario, Some(AlertScenario::MultipleManagers));
    assert_eq!(
        outcome.message,
        "Department \"Legal\" has 2 active managers but only \"Alice\" is assigned as the primary manager. Please review and reassign if needed."
    );

    // Second manager is deactivated. Alice stays primary.
    let m2_inactive: User = inactive(m2.clone());
    engine.store_mut().insert_user(m2_inactive.clone());
    let report: HookReport = engine.after_user_updated(&m2, &m2_inactive);
    assert_eq!(report.outcomes[0].action, ResolutionAction::NoAction);
    assert_eq!(
        engine.store().department(&dept_id("legal")).unwrap().manager_id,
        Some(user_id("m1"))
    );
    assert_eq!(unread_count(engine.store(), "legal"), 1);
    assert_eq!(engine.store().audit_entries().len(), 1);
}

#[test]
fn test_undismissed_alert_suppresses_scenario_change() {
    let mut engine: Engine<InMemoryStore> =
        create_engine(vec![create_department("legal", "Legal")], vec![]);
    engine.resolve_department(&dept_id("legal"));

    for (id, name) in [("m1", "Alice"), ("m2", "Bob")] {
        let manager: User = create_manager(id, name, "legal");
        engine.store_mut().insert_user(manager.clone());
        engine.after_user_created(&manager);
    }

    let outcome: ResolutionOutcome = engine.resolve_department(&dept_id("legal"));
    assert_eq!(outcome.action, ResolutionAction::NotificationExists);
    assert_eq!(unread_count(engine.store(), "legal"), 1);
}

#[test]
fn test_manager_transfer_between_departments() {
    let m1: User = create_manager("m1", "Alice", "a");
    let mut engine: Engine<InMemoryStore> = create_engine(
        vec![
            create_department("a", "Alpha").with_manager(user_id("m1")),
            create_department("b", "Beta").with_manager(user_id("m2")),
        ],
        vec![m1.clone(), create_manager("m2", "Bob", "b")],
    );

    let moved: User = create_manager("m1", "Alice", "b");
    engine.store_mut().insert_user(moved.clone());
    let report: HookReport = engine.after_user_updated(&m1, &moved);

    assert_eq!(report.enqueued, vec![dept_id("a"), dept_id("b")]);
    assert_eq!(report.outcomes[0].scenario, Some(AlertScenario::NoManagers));
    assert_eq!(
        report.outcomes[1].scenario,
        Some(AlertScenario::MultipleManagers)
    );
    // Department A keeps its stale assignment, B keeps its primary.
    assert_eq!(
        engine.store().department(&dept_id("a")).unwrap().manager_id,
        Some(user_id("m1"))
    );
    assert_eq!(
        engine.store().department(&dept_id("b")).unwrap().manager_id,
        Some(user_id("m2"))
    );
}

#[test]
fn test_drop_to_single_unassigned_manager_auto_assigns() {
    let mut engine: Engine<InMemoryStore> = create_engine(
        vec![create_department("legal", "Legal")],
        vec![
            create_manager("m1", "Alice", "legal"),
            create_manager("m2", "Bob", "legal"),
        ],
    );
    engine.resolve_department(&dept_id("legal"));

    let m2: User = create_manager("m2", "Bob", "legal");
    let m2_inactive: User = inactive(m2.clone());
    engine.store_mut().insert_user(m2_inactive.clone());
    let report: HookReport = engine.after_user_updated(&m2, &m2_inactive);

    assert_eq!(report.outcomes[0].action, ResolutionAction::AutoAssigned);
    assert_eq!(
        engine.store().department(&dept_id("legal")).unwrap().manager_id,
        Some(user_id("m1"))
    );
}
