// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use mgr_assign_domain::{Department, DepartmentId, DepartmentStatus};

use crate::data_models::DepartmentRow;
use crate::diesel_schema::departments;
use crate::error::PersistenceError;

/// Retrieves a department by identifier.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be decoded.
pub fn get_department(
    conn: &mut SqliteConnection,
    id: &DepartmentId,
) -> Result<Option<Department>, PersistenceError> {
    departments::table
        .filter(departments::department_id.eq(id.as_str()))
        .select(DepartmentRow::as_select())
        .first::<DepartmentRow>(conn)
        .optional()?
        .map(DepartmentRow::into_domain)
        .transpose()
}

/// Lists every department, ordered by identifier.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn list_departments(conn: &mut SqliteConnection) -> Result<Vec<Department>, PersistenceError> {
    departments::table
        .order(departments::department_id.asc())
        .select(DepartmentRow::as_select())
        .load::<DepartmentRow>(conn)?
        .into_iter()
        .map(DepartmentRow::into_domain)
        .collect()
}

/// Lists every `ACTIVE` department, ordered by identifier.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn list_active_departments(
    conn: &mut SqliteConnection,
) -> Result<Vec<Department>, PersistenceError> {
    departments::table
        .filter(departments::status.eq(DepartmentStatus::Active.as_str()))
        .order(departments::department_id.asc())
        .select(DepartmentRow::as_select())
        .load::<DepartmentRow>(conn)?
        .into_iter()
        .map(DepartmentRow::into_domain)
        .collect()
}
