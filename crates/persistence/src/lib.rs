// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` persistence for the manager assignment engine.
//!
//! [`Persistence`] implements every repository port the engine consumes,
//! plus the department and user writes the surrounding application needs.
//! The schema is embedded as Diesel migrations and applied on open.
//!
//! ## Alert uniqueness
//!
//! The `notifications` table carries a partial unique index on
//! `(department_id, notification_type) WHERE status = 'UNREAD'`. A second
//! unread alert for a department is rejected by the database, and the port
//! implementation reports it as `StoreError::DuplicateAlert` so the engine
//! can re-read the winner.
//!
//! ## Testing
//!
//! Each call to [`Persistence::new_in_memory`] opens a separate shared-cache
//! in-memory database. No external infrastructure is needed.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use mgr_assign_audit::AuditLogEntry;
use mgr_assign_domain::{
    Department, DepartmentId, Notification, NotificationStatus, User, UserId,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod ports;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

use backend::PersistenceBackend;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter over a single `SQLite` connection.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persistence").finish_non_exhaustive()
    }
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives its own database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        conn.verify_foreign_key_enforcement()?;
        conn.verify_alert_uniqueness()?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        conn.verify_foreign_key_enforcement()?;
        conn.verify_alert_uniqueness()?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_foreign_key_enforcement()
    }

    /// Verifies that the schema enforces one unread alert per department.
    ///
    /// # Errors
    ///
    /// Returns an error if the uniqueness index is missing.
    pub fn verify_alert_uniqueness(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_alert_uniqueness()
    }

    // ========================================================================
    // Departments
    // ========================================================================

    /// Inserts a new department.
    ///
    /// # Errors
    ///
    /// Returns an error if the department is invalid or conflicts with an
    /// existing one.
    pub fn create_department(&mut self, department: &Department) -> Result<(), PersistenceError> {
        mutations::departments::insert_department(&mut self.conn, department)
    }

    /// Replaces an existing department.
    ///
    /// # Errors
    ///
    /// Returns an error if the department does not exist or is invalid.
    pub fn update_department(&mut self, department: &Department) -> Result<(), PersistenceError> {
        mutations::departments::update_department(&mut self.conn, department)
    }

    /// Deletes a department and its alerts.
    ///
    /// # Errors
    ///
    /// Returns an error if the department does not exist.
    pub fn delete_department(&mut self, id: &DepartmentId) -> Result<(), PersistenceError> {
        mutations::departments::delete_department(&mut self.conn, id)
    }

    /// Retrieves a department.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_department(
        &mut self,
        id: &DepartmentId,
    ) -> Result<Option<Department>, PersistenceError> {
        queries::departments::get_department(&mut self.conn, id)
    }

    /// Lists every department, active or not.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_departments(&mut self) -> Result<Vec<Department>, PersistenceError> {
        queries::departments::list_departments(&mut self.conn)
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// Inserts a new user.
    ///
    /// # Errors
    ///
    /// Returns an error if the user conflicts with an existing one or
    /// references a missing department.
    pub fn create_user(&mut self, user: &User) -> Result<(), PersistenceError> {
        mutations::users::insert_user(&mut self.conn, user)
    }

    /// Replaces an existing user.
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist.
    pub fn update_user(&mut self, user: &User) -> Result<(), PersistenceError> {
        mutations::users::update_user(&mut self.conn, user)
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist.
    pub fn delete_user(&mut self, id: &UserId) -> Result<(), PersistenceError> {
        mutations::users::delete_user(&mut self.conn, id)
    }

    /// Retrieves a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_user(&mut self, id: &UserId) -> Result<Option<User>, PersistenceError> {
        queries::users::get_user(&mut self.conn, id)
    }

    /// Lists every user.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_users(&mut self) -> Result<Vec<User>, PersistenceError> {
        queries::users::list_users(&mut self.conn)
    }

    // ========================================================================
    // Notifications
    // ========================================================================

    /// Retrieves an alert.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if no such alert exists.
    pub fn get_notification(&mut self, id: i64) -> Result<Notification, PersistenceError> {
        queries::notifications::get_notification(&mut self.conn, id)
    }

    /// Lists alerts, optionally for one department only.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_notifications(
        &mut self,
        department_id: Option<&DepartmentId>,
    ) -> Result<Vec<Notification>, PersistenceError> {
        queries::notifications::list_notifications(&mut self.conn, department_id)
    }

    /// Moves an alert to a new inbox status (read, dismissed).
    ///
    /// # Errors
    ///
    /// Returns an error if the alert does not exist or re-opening it would
    /// leave two unread alerts for its department.
    pub fn set_notification_status(
        &mut self,
        id: i64,
        status: NotificationStatus,
    ) -> Result<(), PersistenceError> {
        mutations::notifications::set_notification_status(&mut self.conn, id, status)
    }

    // ========================================================================
    // Audit
    // ========================================================================

    /// Lists every audit entry in append order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_audit_entries(&mut self) -> Result<Vec<AuditLogEntry>, PersistenceError> {
        queries::audit::list_audit_entries(&mut self.conn)
    }

    /// Lists the audit entries for one entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_audit_entries_for(
        &mut self,
        entity: &str,
        entity_id: &str,
    ) -> Result<Vec<AuditLogEntry>, PersistenceError> {
        queries::audit::list_audit_entries_for(&mut self.conn, entity, entity_id)
    }
}
