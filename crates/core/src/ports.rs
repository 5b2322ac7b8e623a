// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Repository ports consumed by the reconciliation engine.
//!
//! The engine never talks to a database directly. Everything it reads or
//! writes goes through these traits, so the same logic runs against the
//! `SQLite` persistence adapter and against [`crate::InMemoryStore`].

use mgr_assign_audit::AuditLogEntry;
use mgr_assign_domain::{Department, DepartmentId, NewAlert, Notification, User, UserId};

use crate::error::StoreError;

/// Read/write access to departments and users.
pub trait DepartmentRepository {
    /// Looks up a department by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried. A missing department
    /// is `Ok(None)`.
    fn find_department(&mut self, id: &DepartmentId) -> Result<Option<Department>, StoreError>;

    /// Looks up a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried. A missing user is
    /// `Ok(None)`.
    fn find_user(&mut self, id: &UserId) -> Result<Option<User>, StoreError>;

    /// Lists the eligible managers of a department.
    ///
    /// Implementations must apply exactly `role = MANAGER`,
    /// `status = ACTIVE`, `department_id = id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn list_eligible_managers(&mut self, id: &DepartmentId) -> Result<Vec<User>, StoreError>;

    /// Sets a department's primary manager.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the department does not exist, or a
    /// backend error if the write fails.
    fn update_manager_id(
        &mut self,
        id: &DepartmentId,
        manager_id: &UserId,
    ) -> Result<(), StoreError>;

    /// Lists every `ACTIVE` department.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn list_active_departments(&mut self) -> Result<Vec<Department>, StoreError>;

    /// Lists every department whatever its status.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn list_all_departments(&mut self) -> Result<Vec<Department>, StoreError>;

    /// Lists every `ACTIVE` user with `role = MANAGER` across all
    /// departments, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn list_active_managers(&mut self) -> Result<Vec<User>, StoreError>;
}

/// Creation and lookup of manager assignment alerts.
pub trait NotificationStore {
    /// Finds the outstanding (`UNREAD`) manager assignment alert for a department.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn find_unread_assignment_alert(
        &mut self,
        department_id: &DepartmentId,
    ) -> Result<Option<Notification>, StoreError>;

    /// Creates a new `UNREAD` manager assignment alert.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateAlert` if the store enforces alert
    /// uniqueness and an unread alert already exists for the department.
    fn create_alert(&mut self, alert: &NewAlert) -> Result<Notification, StoreError>;
}

/// Append-only audit trail.
pub trait AuditStore {
    /// Appends an entry and returns its store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be written.
    fn append_entry(&mut self, entry: &AuditLogEntry) -> Result<i64, StoreError>;
}

/// Everything the engine needs from a store.
pub trait ReconcileStore: DepartmentRepository + NotificationStore + AuditStore {}

impl<T> ReconcileStore for T where T: DepartmentRepository + NotificationStore + AuditStore {}
