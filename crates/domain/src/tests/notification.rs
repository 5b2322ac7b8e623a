// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use time::OffsetDateTime;

use crate::{
    AlertPayload, AlertScenario, Department, DepartmentId, NewAlert, Notification,
    NotificationStatus, Role, User, UserId,
};

fn legal() -> Department {
    Department::new(DepartmentId::new("d-legal"), "LEG", "Legal")
}

#[test]
fn test_scenario_titles() {
    assert_eq!(
        AlertScenario::NoManagers.title_for("Legal"),
        "No Manager Available for Legal"
    );
    assert_eq!(
        AlertScenario::MultipleManagers.title_for("Legal"),
        "Multiple Managers Available for Legal"
    );
}

#[test]
fn test_scenario_and_status_parse() {
    assert_eq!(
        AlertScenario::from_str("MULTIPLE_MANAGERS").unwrap(),
        AlertScenario::MultipleManagers
    );
    assert!(AlertScenario::from_str("SOME_MANAGERS").is_err());
    assert_eq!(
        NotificationStatus::from_str("DISMISSED").unwrap(),
        NotificationStatus::Dismissed
    );
}

#[test]
fn test_payload_snapshot_captures_pool_and_current_manager() {
    let department: Department = legal().with_manager(UserId::new("m-1"));
    let pool: Vec<User> = vec![
        User::new(UserId::new("m-1"), "Ann", "ann@example.com", Role::Manager),
        User::new(UserId::new("m-2"), "Bob", "bob@example.com", Role::Manager),
    ];

    let payload: AlertPayload =
        AlertPayload::snapshot(&department, AlertScenario::MultipleManagers, &pool);

    assert_eq!(payload.department_id, DepartmentId::new("d-legal"));
    assert_eq!(payload.department_code, "LEG");
    assert_eq!(payload.available_managers.len(), 2);
    assert_eq!(payload.available_managers[1].name, "Bob");
    assert_eq!(payload.current_manager_id, Some(UserId::new("m-1")));
}

#[test]
fn test_payload_serializes_with_camel_case_keys() {
    let payload: AlertPayload = AlertPayload::snapshot(&legal(), AlertScenario::NoManagers, &[]);
    let json: String = serde_json::to_string(&payload).unwrap();

    assert!(json.contains("\"departmentId\":\"d-legal\""));
    assert!(json.contains("\"scenario\":\"NO_MANAGERS\""));
    assert!(json.contains("\"availableManagers\":[]"));
}

#[test]
fn test_new_notification_starts_unread() {
    let department: Department = legal();
    let alert: NewAlert = NewAlert {
        department_id: department.id.clone(),
        scenario: AlertScenario::NoManagers,
        title: AlertScenario::NoManagers.title_for(&department.name),
        message: String::from("no managers"),
        payload: AlertPayload::snapshot(&department, AlertScenario::NoManagers, &[]),
    };

    let notification: Notification =
        Notification::from_new(7, alert, OffsetDateTime::UNIX_EPOCH);

    assert_eq!(notification.id, 7);
    assert!(notification.is_unread());
    assert_eq!(notification.status, NotificationStatus::Unread);
}
