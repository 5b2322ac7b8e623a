// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use mgr_assign_domain::{
    ALERT_PRIORITY, ALERT_TARGET_ROLE, MANAGER_ASSIGNMENT, NewAlert, NotificationStatus,
};
use time::OffsetDateTime;
use tracing::debug;

use crate::backend::PersistenceBackend;
use crate::data_models::format_timestamp;
use crate::diesel_schema::notifications;
use crate::error::PersistenceError;

/// Inserts a new `UNREAD` manager assignment alert.
///
/// # Returns
///
/// The identifier assigned by the database.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the department already has
/// an unread alert, or `PersistenceError::ForeignKeyViolation` if the
/// department does not exist.
pub fn insert_alert(
    conn: &mut SqliteConnection,
    alert: &NewAlert,
    created_at: OffsetDateTime,
) -> Result<i64, PersistenceError> {
    let payload_json: String = serde_json::to_string(&alert.payload)?;
    let created_at: String = format_timestamp(created_at)?;

    diesel::insert_into(notifications::table)
        .values((
            notifications::department_id.eq(alert.department_id.as_str()),
            notifications::notification_type.eq(MANAGER_ASSIGNMENT),
            notifications::scenario.eq(alert.scenario.as_str()),
            notifications::status.eq(NotificationStatus::Unread.as_str()),
            notifications::priority.eq(ALERT_PRIORITY),
            notifications::target_role.eq(ALERT_TARGET_ROLE),
            notifications::title.eq(&alert.title),
            notifications::message.eq(&alert.message),
            notifications::payload_json.eq(&payload_json),
            notifications::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    let notification_id: i64 = conn.get_last_insert_rowid()?;
    debug!(
        notification_id,
        department_id = %alert.department_id,
        scenario = %alert.scenario,
        "Alert inserted"
    );
    Ok(notification_id)
}

/// Moves an alert to a new inbox status.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the alert does not exist, or
/// `PersistenceError::UniqueViolation` if re-opening it would leave two
/// unread alerts for its department.
pub fn set_notification_status(
    conn: &mut SqliteConnection,
    id: i64,
    status: NotificationStatus,
) -> Result<(), PersistenceError> {
    let updated: usize =
        diesel::update(notifications::table.filter(notifications::notification_id.eq(id)))
            .set(notifications::status.eq(status.as_str()))
            .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("notification {id}")));
    }
    debug!(notification_id = id, status = %status, "Alert status changed");
    Ok(())
}
