// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use mgr_assign_domain::{DepartmentId, Role, User, UserId, UserStatus};

use crate::data_models::UserRow;
use crate::diesel_schema::users;
use crate::error::PersistenceError;

/// Retrieves a user by identifier.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be decoded.
pub fn get_user(conn: &mut SqliteConnection, id: &UserId) -> Result<Option<User>, PersistenceError> {
    users::table
        .filter(users::user_id.eq(id.as_str()))
        .select(UserRow::as_select())
        .first::<UserRow>(conn)
        .optional()?
        .map(UserRow::into_domain)
        .transpose()
}

/// Lists the eligible managers of a department, ordered by name.
///
/// Eligible means exactly `role = MANAGER`, `status = ACTIVE` and
/// `department_id = id`.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn list_eligible_managers(
    conn: &mut SqliteConnection,
    id: &DepartmentId,
) -> Result<Vec<User>, PersistenceError> {
    users::table
        .filter(users::department_id.eq(id.as_str()))
        .filter(users::role.eq(Role::Manager.as_str()))
        .filter(users::status.eq(UserStatus::Active.as_str()))
        .order((users::name.asc(), users::user_id.asc()))
        .select(UserRow::as_select())
        .load::<UserRow>(conn)?
        .into_iter()
        .map(UserRow::into_domain)
        .collect()
}

/// Lists every `ACTIVE` manager in every department, ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn list_active_managers(conn: &mut SqliteConnection) -> Result<Vec<User>, PersistenceError> {
    users::table
        .filter(users::role.eq(Role::Manager.as_str()))
        .filter(users::status.eq(UserStatus::Active.as_str()))
        .order((users::name.asc(), users::user_id.asc()))
        .select(UserRow::as_select())
        .load::<UserRow>(conn)?
        .into_iter()
        .map(UserRow::into_domain)
        .collect()
}

/// Lists every user, ordered by identifier.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn list_users(conn: &mut SqliteConnection) -> Result<Vec<User>, PersistenceError> {
    users::table
        .order(users::user_id.asc())
        .select(UserRow::as_select())
        .load::<UserRow>(conn)?
        .into_iter()
        .map(UserRow::into_domain)
        .collect()
}
