// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use mgr_assign_audit::{Actor, AuditAction, AuditLogEntry};
use time::OffsetDateTime;
use tracing::{debug, error};

use crate::engine::Engine;
use crate::ports::ReconcileStore;

impl<S: ReconcileStore> Engine<S> {
    /// Appends an audit entry stamped with the current UTC time.
    ///
    /// Audit failures never propagate: they are logged, counted in
    /// [`crate::ReconcileMetrics::audit_failures`] and reported as `None`.
    /// The mutation being audited has already happened and stays in place.
    pub fn record(
        &mut self,
        action: AuditAction,
        entity: &str,
        entity_id: &str,
        performed_by: Actor,
        details: String,
    ) -> Option<i64> {
        let entry: AuditLogEntry = AuditLogEntry::new(
            action,
            entity,
            entity_id,
            performed_by,
            details,
            OffsetDateTime::now_utc(),
        );

        match self.store.append_entry(&entry) {
            Ok(entry_id) => {
                debug!(entry_id, action = %action, entity, entity_id, "Recorded audit entry");
                Some(entry_id)
            }
            Err(err) => {
                self.metrics.audit_failures += 1;
                error!(
                    action = %action,
                    entity,
                    entity_id,
                    error = %err,
                    "Failed to record audit entry"
                );
                None
            }
        }
    }
}
