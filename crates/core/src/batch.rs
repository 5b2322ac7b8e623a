// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use mgr_assign_audit::{Actor, AuditAction, ENTITY_SYSTEM, MANUAL_TRIGGER_ENTITY_ID};
use mgr_assign_domain::Department;
use tracing::{error, info};

use crate::engine::Engine;
use crate::outcome::{BatchSummary, ResolutionOutcome};
use crate::ports::ReconcileStore;

impl<S: ReconcileStore> Engine<S> {
    /// Resolves every active department independently.
    ///
    /// A failing department is counted in `errors` and does not stop the
    /// sweep. If the department list itself cannot be read, the summary is
    /// empty with `errors = 1`.
    pub fn resolve_all(&mut self) -> BatchSummary {
        let departments: Vec<Department> = match self.store.list_active_departments() {
            Ok(departments) => departments,
            Err(err) => {
                error!(error = %err, "Failed to list active departments");
                return BatchSummary {
                    errors: 1,
                    ..BatchSummary::default()
                };
            }
        };

        let mut summary: BatchSummary = BatchSummary {
            total_departments: departments.len(),
            ..BatchSummary::default()
        };
        for department in departments {
            let outcome: ResolutionOutcome = self.resolve_department(&department.id);
            summary.record(department.name, outcome);
        }

        info!(
            total = summary.total_departments,
            auto_assigned = summary.auto_assigned,
            notifications_created = summary.notifications_created,
            notifications_existing = summary.notifications_existing,
            errors = summary.errors,
            "Completed reconciliation sweep"
        );
        summary
    }

    /// Runs an operator-requested sweep and audits it.
    ///
    /// The audit entry is written even when the sweep reports errors.
    pub fn trigger_manual_sweep(&mut self, performed_by: &str) -> BatchSummary {
        info!(performed_by, "Manual reconciliation sweep requested");
        let summary: BatchSummary = self.resolve_all();
        self.record(
            AuditAction::ManualManagerAssignmentTrigger,
            ENTITY_SYSTEM,
            MANUAL_TRIGGER_ENTITY_ID,
            Actor::admin(performed_by),
            summary.describe(),
        );
        summary
    }
}
