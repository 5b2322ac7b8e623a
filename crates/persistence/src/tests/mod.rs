// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use mgr_assign_domain::{
    AlertPayload, AlertScenario, Department, DepartmentId, NewAlert, Role, User, UserId,
};

use crate::Persistence;

pub fn dept_id(id: &str) -> DepartmentId {
    DepartmentId::new(id)
}

pub fn user_id(id: &str) -> UserId {
    UserId::new(id)
}

pub fn create_test_department(id: &str, name: &str) -> Department {
    Department::new(dept_id(id), id.to_uppercase(), name)
}

pub fn create_test_manager(id: &str, name: &str, department: &str) -> User {
    User::new(user_id(id), name, format!("{id}@example.com"), Role::Manager)
        .in_department(dept_id(department))
}

pub fn create_test_employee(id: &str, name: &str, department: &str) -> User {
    User::new(user_id(id), name, format!("{id}@example.com"), Role::Employee)
        .in_department(dept_id(department))
}

/// Builds a "no managers" alert for a department, as the engine would.
pub fn create_test_alert(department: &Department) -> NewAlert {
    NewAlert {
        department_id: department.id.clone(),
        scenario: AlertScenario::NoManagers,
        title: AlertScenario::NoManagers.title_for(&department.name),
        message: format!("Department \"{}\" has no active managers.", department.name),
        payload: AlertPayload::snapshot(department, AlertScenario::NoManagers, &[]),
    }
}

/// Opens an in-memory database seeded with the given rows.
///
/// Departments are written first so users can reference them.
pub fn create_test_persistence(departments: &[Department], users: &[User]) -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    for department in departments {
        persistence.create_department(department).unwrap();
    }
    for user in users {
        persistence.create_user(user).unwrap();
    }
    persistence
}
