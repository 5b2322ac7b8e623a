// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use crate::{Department, DepartmentId, DepartmentStatus, DomainError, Role, User, UserId, UserStatus};

#[test]
fn test_department_id_parse_trims_whitespace() {
    let id: DepartmentId = DepartmentId::parse("  dept-legal ").unwrap();
    assert_eq!(id.as_str(), "dept-legal");
}

#[test]
fn test_department_id_parse_rejects_blank() {
    let result: Result<DepartmentId, DomainError> = DepartmentId::parse("   ");
    assert!(matches!(
        result,
        Err(DomainError::InvalidIdentifier {
            kind: "department",
            ..
        })
    ));
}

#[test]
fn test_user_id_parse_rejects_empty() {
    assert!(UserId::parse("").is_err());
    assert_eq!(UserId::parse("u-1").unwrap(), UserId::new("u-1"));
}

#[test]
fn test_role_round_trips_through_storage_form() {
    for role in [Role::Admin, Role::Manager, Role::Employee] {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
    assert_eq!(
        Role::from_str("manager"),
        Err(DomainError::InvalidRole(String::from("manager")))
    );
}

#[test]
fn test_status_parsing_is_case_sensitive() {
    assert_eq!(UserStatus::from_str("ACTIVE").unwrap(), UserStatus::Active);
    assert!(UserStatus::from_str("Active").is_err());
    assert_eq!(
        DepartmentStatus::from_str("INACTIVE").unwrap(),
        DepartmentStatus::Inactive
    );
    assert!(DepartmentStatus::from_str("CLOSED").is_err());
}

#[test]
fn test_new_department_is_active_and_unassigned() {
    let department: Department = Department::new(DepartmentId::new("d-1"), "LEG", "Legal");

    assert!(department.is_active());
    assert_eq!(department.manager_id, None);
    assert_eq!(department.code, "LEG");
}

#[test]
fn test_department_builders() {
    let department: Department = Department::new(DepartmentId::new("d-1"), "LEG", "Legal")
        .with_status(DepartmentStatus::Inactive)
        .with_manager(UserId::new("u-1"));

    assert!(!department.is_active());
    assert_eq!(department.manager_id, Some(UserId::new("u-1")));
}

#[test]
fn test_user_builders() {
    let user: User = User::new(UserId::new("u-1"), "Ada", "ada@example.com", Role::Manager)
        .with_status(UserStatus::Inactive)
        .in_department(DepartmentId::new("d-1"));

    assert!(!user.is_active());
    assert_eq!(user.department_id, Some(DepartmentId::new("d-1")));
}

#[test]
fn test_identifiers_serialize_transparently() {
    let json: String = serde_json::to_string(&DepartmentId::new("d-1")).unwrap();
    assert_eq!(json, "\"d-1\"");

    let role_json: String = serde_json::to_string(&Role::Manager).unwrap();
    assert_eq!(role_json, "\"MANAGER\"");
}
