// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use mgr_assign_domain::{Department, DepartmentId, UserId, validate_department_fields};
use tracing::{debug, info};

use crate::diesel_schema::departments;
use crate::error::PersistenceError;

/// Inserts a new department.
///
/// # Errors
///
/// Returns an error if:
/// - The code or name is blank
/// - A department with the same identifier or code exists
/// - The referenced manager does not exist
pub fn insert_department(
    conn: &mut SqliteConnection,
    department: &Department,
) -> Result<(), PersistenceError> {
    validate_department_fields(&department.code, &department.name)
        .map_err(|e| PersistenceError::InvalidData(e.to_string()))?;

    diesel::insert_into(departments::table)
        .values((
            departments::department_id.eq(department.id.as_str()),
            departments::code.eq(&department.code),
            departments::name.eq(&department.name),
            departments::status.eq(department.status.as_str()),
            departments::manager_id.eq(department.manager_id.as_ref().map(UserId::as_str)),
        ))
        .execute(conn)?;

    info!(department_id = %department.id, "Department created");
    Ok(())
}

/// Replaces every column of an existing department.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the department does not exist, or
/// a constraint error if the new values are rejected.
pub fn update_department(
    conn: &mut SqliteConnection,
    department: &Department,
) -> Result<(), PersistenceError> {
    validate_department_fields(&department.code, &department.name)
        .map_err(|e| PersistenceError::InvalidData(e.to_string()))?;

    let updated: usize = diesel::update(
        departments::table.filter(departments::department_id.eq(department.id.as_str())),
    )
    .set((
        departments::code.eq(&department.code),
        departments::name.eq(&department.name),
        departments::status.eq(department.status.as_str()),
        departments::manager_id.eq(department.manager_id.as_ref().map(UserId::as_str)),
    ))
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "department {}",
            department.id
        )));
    }
    debug!(department_id = %department.id, "Department updated");
    Ok(())
}

/// Sets a department's primary manager.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the department does not exist, or
/// `PersistenceError::ForeignKeyViolation` if the manager does not exist.
pub fn set_manager_id(
    conn: &mut SqliteConnection,
    id: &DepartmentId,
    manager_id: &UserId,
) -> Result<(), PersistenceError> {
    let updated: usize =
        diesel::update(departments::table.filter(departments::department_id.eq(id.as_str())))
            .set(departments::manager_id.eq(Some(manager_id.as_str())))
            .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("department {id}")));
    }
    info!(department_id = %id, manager_id = %manager_id, "Department manager set");
    Ok(())
}

/// Deletes a department. Its alerts are deleted with it and its users are
/// left without a department.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the department does not exist.
pub fn delete_department(
    conn: &mut SqliteConnection,
    id: &DepartmentId,
) -> Result<(), PersistenceError> {
    let deleted: usize =
        diesel::delete(departments::table.filter(departments::department_id.eq(id.as_str())))
            .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!("department {id}")));
    }
    info!(department_id = %id, "Department deleted");
    Ok(())
}
