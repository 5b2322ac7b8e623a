// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Engine repository ports over `SQLite`.

use mgr_assign::{AuditStore, DepartmentRepository, NotificationStore, StoreError};
use mgr_assign_audit::AuditLogEntry;
use mgr_assign_domain::{Department, DepartmentId, NewAlert, Notification, User, UserId};
use time::OffsetDateTime;

use crate::error::PersistenceError;
use crate::{Persistence, mutations, queries};

impl DepartmentRepository for Persistence {
    fn find_department(&mut self, id: &DepartmentId) -> Result<Option<Department>, StoreError> {
        Ok(queries::departments::get_department(&mut self.conn, id)?)
    }

    fn find_user(&mut self, id: &UserId) -> Result<Option<User>, StoreError> {
        Ok(queries::users::get_user(&mut self.conn, id)?)
    }

    fn list_eligible_managers(&mut self, id: &DepartmentId) -> Result<Vec<User>, StoreError> {
        Ok(queries::users::list_eligible_managers(&mut self.conn, id)?)
    }

    fn update_manager_id(
        &mut self,
        id: &DepartmentId,
        manager_id: &UserId,
    ) -> Result<(), StoreError> {
        Ok(mutations::departments::set_manager_id(
            &mut self.conn,
            id,
            manager_id,
        )?)
    }

    fn list_active_departments(&mut self) -> Result<Vec<Department>, StoreError> {
        Ok(queries::departments::list_active_departments(&mut self.conn)?)
    }

    fn list_all_departments(&mut self) -> Result<Vec<Department>, StoreError> {
        Ok(queries::departments::list_departments(&mut self.conn)?)
    }

    fn list_active_managers(&mut self) -> Result<Vec<User>, StoreError> {
        Ok(queries::users::list_active_managers(&mut self.conn)?)
    }
}

impl NotificationStore for Persistence {
    fn find_unread_assignment_alert(
        &mut self,
        department_id: &DepartmentId,
    ) -> Result<Option<Notification>, StoreError> {
        Ok(queries::notifications::find_unread_assignment_alert(
            &mut self.conn,
            department_id,
        )?)
    }

    fn create_alert(&mut self, alert: &NewAlert) -> Result<Notification, StoreError> {
        let created_at: OffsetDateTime = OffsetDateTime::now_utc();
        let id: i64 = match mutations::notifications::insert_alert(&mut self.conn, alert, created_at)
        {
            Ok(id) => id,
            Err(PersistenceError::UniqueViolation(_)) => {
                return Err(StoreError::DuplicateAlert {
                    department_id: alert.department_id.clone(),
                });
            }
            Err(err) => return Err(err.into()),
        };
        Ok(queries::notifications::get_notification(&mut self.conn, id)?)
    }
}

impl AuditStore for Persistence {
    fn append_entry(&mut self, entry: &AuditLogEntry) -> Result<i64, StoreError> {
        Ok(mutations::audit::insert_audit_entry(&mut self.conn, entry)?)
    }
}
