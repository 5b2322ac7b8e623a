// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use mgr_assign_audit::{Actor, AuditAction, ENTITY_DEPARTMENT};
use mgr_assign_domain::{AlertPayload, AlertScenario, Department, DepartmentId, User, UserId};
use tracing::{debug, error, info, warn};

use crate::engine::Engine;
use crate::error::CoreError;
use crate::outcome::{AlertEnsured, ResolutionOutcome};
use crate::ports::ReconcileStore;

impl<S: ReconcileStore> Engine<S> {
    /// Resolves a department's manager assignment.
    ///
    /// With the department's eligible-manager pool `E`:
    ///
    /// - `|E| = 1` and no manager set: the manager is assigned and audited.
    /// - `|E| = 1` and a manager set (any manager): nothing happens.
    /// - `|E| > 1`: a `MULTIPLE_MANAGERS` alert is ensured.
    /// - `|E| = 0`: a `NO_MANAGERS` alert is ensured. A stale assignment is
    ///   left untouched.
    ///
    /// Store failures are contained: they are logged, counted, and reported
    /// as a failed `NO_ACTION` outcome.
    pub fn resolve_department(&mut self, department_id: &DepartmentId) -> ResolutionOutcome {
        let outcome: ResolutionOutcome = match self.try_resolve_department(department_id) {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(department_id = %department_id, error = %err, "Department resolution failed");
                ResolutionOutcome::failed(department_id.clone(), &err)
            }
        };
        self.metrics.observe(&outcome);
        outcome
    }

    /// Resolves a department, surfacing store failures to the caller.
    ///
    /// Unlike [`Engine::resolve_department`] this does not update the metrics.
    ///
    /// # Errors
    ///
    /// Returns an error if any store read or write fails. An audit write
    /// failure is not an error.
    pub fn try_resolve_department(
        &mut self,
        department_id: &DepartmentId,
    ) -> Result<ResolutionOutcome, CoreError> {
        let Some(department) = self.store.find_department(department_id)? else {
            warn!(department_id = %department_id, "Department not found");
            return Ok(ResolutionOutcome::no_action(
                department_id.clone(),
                "Department not found",
            ));
        };

        let eligible: Vec<User> = self.store.list_eligible_managers(department_id)?;
        debug!(
            department_id = %department_id,
            eligible = eligible.len(),
            has_manager = department.manager_id.is_some(),
            "Loaded eligible managers"
        );

        match (eligible.as_slice(), department.manager_id.as_ref()) {
            ([manager], None) => self.auto_assign(&department, manager),
            ([_], Some(_)) => Ok(ResolutionOutcome::no_action(
                department.id.clone(),
                "Department already has an assigned manager",
            )
            .with_eligible_managers(1)),
            ([], _) => {
                let message: String = no_managers_message(&department.name);
                self.raise_alert(&department, AlertScenario::NoManagers, message, &eligible)
            }
            (_, current) => {
                let current_name: Option<String> = match current {
                    Some(manager_id) => Some(self.manager_display_name(manager_id)?),
                    None => None,
                };
                let message: String = multiple_managers_message(
                    &department.name,
                    eligible.len(),
                    current_name.as_deref(),
                );
                self.raise_alert(
                    &department,
                    AlertScenario::MultipleManagers,
                    message,
                    &eligible,
                )
            }
        }
    }

    fn auto_assign(
        &mut self,
        department: &Department,
        manager: &User,
    ) -> Result<ResolutionOutcome, CoreError> {
        self.store.update_manager_id(&department.id, &manager.id)?;
        info!(
            department_id = %department.id,
            manager_id = %manager.id,
            "Automatically assigned primary manager"
        );

        let details: String = format!(
            "Manager {} automatically assigned to department {}",
            manager.name, department.name
        );
        let actor: Actor = self.system_actor();
        self.record(
            AuditAction::ManagerAutoAssigned,
            ENTITY_DEPARTMENT,
            department.id.as_str(),
            actor,
            details.clone(),
        );

        Ok(ResolutionOutcome::auto_assigned(
            department.id.clone(),
            manager.id.clone(),
            details,
        ))
    }

    fn raise_alert(
        &mut self,
        department: &Department,
        scenario: AlertScenario,
        message: String,
        eligible: &[User],
    ) -> Result<ResolutionOutcome, CoreError> {
        let payload: AlertPayload = AlertPayload::snapshot(department, scenario, eligible);
        let ensured: AlertEnsured = self.ensure_alert(department, scenario, message, payload)?;
        if !ensured.created && ensured.notification.scenario != scenario {
            debug!(
                department_id = %department.id,
                wanted = %scenario,
                existing = %ensured.notification.scenario,
                "Unread alert for another scenario is still open"
            );
        }
        Ok(ResolutionOutcome::alert(
            &ensured.notification,
            ensured.created,
            eligible.len(),
        ))
    }

    fn manager_display_name(&mut self, manager_id: &UserId) -> Result<String, CoreError> {
        Ok(self
            .store
            .find_user(manager_id)?
            .map_or_else(|| manager_id.to_string(), |user| user.name))
    }
}

/// Builds the alert message for a department without eligible managers.
#[must_use]
pub fn no_managers_message(department_name: &str) -> String {
    format!(
        "Department \"{department_name}\" has no managers. Please create a new manager or reassign an existing manager from another department."
    )
}

/// Builds the alert message for a department with several eligible managers.
#[must_use]
pub fn multiple_managers_message(
    department_name: &str,
    count: usize,
    current_manager_name: Option<&str>,
) -> String {
    current_manager_name.map_or_else(
        || {
            format!(
                "Department \"{department_name}\" has {count} managers. Please select which manager should be assigned to this department."
            )
        },
        |manager| {
            format!(
                "Department \"{department_name}\" has {count} active managers but only \"{manager}\" is assigned as the primary manager. Please review and reassign if needed."
            )
        },
    )
}
