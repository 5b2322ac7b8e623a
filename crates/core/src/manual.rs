// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use mgr_assign_audit::{Actor, AuditAction, ENTITY_DEPARTMENT};
use mgr_assign_domain::{
    Department, DepartmentId, DomainError, User, UserId, validate_manager_candidate,
};
use tracing::info;

use crate::engine::Engine;
use crate::error::CoreError;
use crate::outcome::ManualAssignment;
use crate::ports::ReconcileStore;

impl<S: ReconcileStore> Engine<S> {
    /// Sets a department's primary manager on an administrator's behalf.
    ///
    /// The manager may belong to any department. The engine never reverts a
    /// manual assignment.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The manager does not exist, is not a `MANAGER`, or is not `ACTIVE`
    /// - The department does not exist
    /// - The store cannot be read or written
    pub fn assign_manager_manually(
        &mut self,
        department_id: &DepartmentId,
        manager_id: &UserId,
        admin_id: &str,
    ) -> Result<ManualAssignment, CoreError> {
        let manager: User =
            self.store
                .find_user(manager_id)?
                .ok_or_else(|| DomainError::InvalidManager {
                    user_id: manager_id.to_string(),
                    reason: String::from("user does not exist"),
                })?;
        validate_manager_candidate(&manager)?;

        let department: Department = self
            .store
            .find_department(department_id)?
            .ok_or_else(|| DomainError::DepartmentNotFound(department_id.to_string()))?;

        self.store.update_manager_id(&department.id, &manager.id)?;
        info!(
            department_id = %department.id,
            manager_id = %manager.id,
            admin_id,
            "Manually assigned primary manager"
        );

        let message: String = format!(
            "Manager {} successfully assigned to department {}",
            manager.name, department.name
        );
        self.record(
            AuditAction::ManagerManuallyAssigned,
            ENTITY_DEPARTMENT,
            department.id.as_str(),
            Actor::admin(admin_id),
            message.clone(),
        );

        Ok(ManualAssignment {
            department_id: department.id,
            manager_id: manager.id,
            message,
        })
    }
}
