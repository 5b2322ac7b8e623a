// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use mgr_assign_domain::{DepartmentId, MANAGER_ASSIGNMENT, Notification, NotificationStatus};

use crate::data_models::NotificationRow;
use crate::diesel_schema::notifications;
use crate::error::PersistenceError;

/// Finds the outstanding manager assignment alert for a department.
///
/// Matches on the `department_id` column, never on payload contents.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be decoded.
pub fn find_unread_assignment_alert(
    conn: &mut SqliteConnection,
    department_id: &DepartmentId,
) -> Result<Option<Notification>, PersistenceError> {
    notifications::table
        .filter(notifications::department_id.eq(department_id.as_str()))
        .filter(notifications::notification_type.eq(MANAGER_ASSIGNMENT))
        .filter(notifications::status.eq(NotificationStatus::Unread.as_str()))
        .order(notifications::notification_id.asc())
        .select(NotificationRow::as_select())
        .first::<NotificationRow>(conn)
        .optional()?
        .map(NotificationRow::into_domain)
        .transpose()
}

/// Retrieves an alert by identifier.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no such alert exists.
pub fn get_notification(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Notification, PersistenceError> {
    notifications::table
        .filter(notifications::notification_id.eq(id))
        .select(NotificationRow::as_select())
        .first::<NotificationRow>(conn)?
        .into_domain()
}

/// Lists alerts in creation order, optionally for one department only.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn list_notifications(
    conn: &mut SqliteConnection,
    department_id: Option<&DepartmentId>,
) -> Result<Vec<Notification>, PersistenceError> {
    let mut query = notifications::table
        .filter(notifications::notification_type.eq(MANAGER_ASSIGNMENT))
        .order(notifications::notification_id.asc())
        .select(NotificationRow::as_select())
        .into_boxed();
    if let Some(department_id) = department_id {
        query = query.filter(notifications::department_id.eq(department_id.as_str()));
    }

    query
        .load::<NotificationRow>(conn)?
        .into_iter()
        .map(NotificationRow::into_domain)
        .collect()
}
