// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use mgr_assign_domain::{DepartmentId, User, UserId};
use tracing::{debug, info};

use crate::diesel_schema::users;
use crate::error::PersistenceError;

/// Inserts a new user.
///
/// # Errors
///
/// Returns an error if a user with the same identifier exists or the
/// referenced department does not exist.
pub fn insert_user(conn: &mut SqliteConnection, user: &User) -> Result<(), PersistenceError> {
    diesel::insert_into(users::table)
        .values((
            users::user_id.eq(user.id.as_str()),
            users::name.eq(&user.name),
            users::email.eq(&user.email),
            users::role.eq(user.role.as_str()),
            users::status.eq(user.status.as_str()),
            users::department_id.eq(user.department_id.as_ref().map(DepartmentId::as_str)),
        ))
        .execute(conn)?;

    info!(user_id = %user.id, role = %user.role, "User created");
    Ok(())
}

/// Replaces every column of an existing user.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the user does not exist.
pub fn update_user(conn: &mut SqliteConnection, user: &User) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(users::table.filter(users::user_id.eq(user.id.as_str())))
        .set((
            users::name.eq(&user.name),
            users::email.eq(&user.email),
            users::role.eq(user.role.as_str()),
            users::status.eq(user.status.as_str()),
            users::department_id.eq(user.department_id.as_ref().map(DepartmentId::as_str)),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("user {}", user.id)));
    }
    debug!(user_id = %user.id, "User updated");
    Ok(())
}

/// Deletes a user. Departments it managed lose their primary manager.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the user does not exist.
pub fn delete_user(conn: &mut SqliteConnection, id: &UserId) -> Result<(), PersistenceError> {
    let deleted: usize =
        diesel::delete(users::table.filter(users::user_id.eq(id.as_str()))).execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!("user {id}")));
    }
    info!(user_id = %id, "User deleted");
    Ok(())
}
