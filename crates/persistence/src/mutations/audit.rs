// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use mgr_assign_audit::AuditLogEntry;
use tracing::debug;

use crate::backend::PersistenceBackend;
use crate::data_models::format_timestamp;
use crate::diesel_schema::audit_log;
use crate::error::PersistenceError;

/// Appends an audit entry.
///
/// # Returns
///
/// The entry ID assigned by the database.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be encoded or the insert fails.
pub fn insert_audit_entry(
    conn: &mut SqliteConnection,
    entry: &AuditLogEntry,
) -> Result<i64, PersistenceError> {
    let created_at: String = format_timestamp(entry.timestamp)?;

    diesel::insert_into(audit_log::table)
        .values((
            audit_log::action.eq(entry.action.as_str()),
            audit_log::entity.eq(&entry.entity),
            audit_log::entity_id.eq(&entry.entity_id),
            audit_log::performed_by.eq(&entry.performed_by.id),
            audit_log::actor_type.eq(&entry.performed_by.actor_type),
            audit_log::details.eq(&entry.details),
            audit_log::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    let entry_id: i64 = conn.get_last_insert_rowid()?;
    debug!(entry_id, action = %entry.action, "Audit entry persisted");
    Ok(entry_id)
}
