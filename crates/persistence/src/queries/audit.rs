// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use mgr_assign_audit::AuditLogEntry;

use crate::data_models::AuditLogRow;
use crate::diesel_schema::audit_log;
use crate::error::PersistenceError;

/// Lists every audit entry in append order.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn list_audit_entries(
    conn: &mut SqliteConnection,
) -> Result<Vec<AuditLogEntry>, PersistenceError> {
    audit_log::table
        .order(audit_log::entry_id.asc())
        .select(AuditLogRow::as_select())
        .load::<AuditLogRow>(conn)?
        .into_iter()
        .map(AuditLogRow::into_domain)
        .collect()
}

/// Lists the audit entries recorded against one entity, in append order.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn list_audit_entries_for(
    conn: &mut SqliteConnection,
    entity: &str,
    entity_id: &str,
) -> Result<Vec<AuditLogEntry>, PersistenceError> {
    audit_log::table
        .filter(audit_log::entity.eq(entity))
        .filter(audit_log::entity_id.eq(entity_id))
        .order(audit_log::entry_id.asc())
        .select(AuditLogRow::as_select())
        .load::<AuditLogRow>(conn)?
        .into_iter()
        .map(AuditLogRow::into_domain)
        .collect()
}
