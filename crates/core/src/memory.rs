// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use mgr_assign_audit::AuditLogEntry;
use mgr_assign_domain::{
    Department, DepartmentId, NewAlert, Notification, NotificationStatus, Role, User, UserId,
    UserStatus, is_eligible_manager,
};
use time::OffsetDateTime;

use crate::error::StoreError;
use crate::ports::{AuditStore, DepartmentRepository, NotificationStore};

/// A store held entirely in memory.
///
/// Enforces the same unread-alert uniqueness as the `SQLite` store. Useful
/// for embedding applications without a database and for tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    departments: BTreeMap<DepartmentId, Department>,
    users: BTreeMap<UserId, User>,
    notifications: Vec<Notification>,
    audit_log: Vec<AuditLogEntry>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a department.
    pub fn insert_department(&mut self, department: Department) {
        self.departments.insert(department.id.clone(), department);
    }

    /// Inserts or replaces a user.
    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    /// Removes a user. Any department it managed loses its primary manager.
    pub fn remove_user(&mut self, id: &UserId) -> Option<User> {
        let removed: Option<User> = self.users.remove(id);
        if removed.is_some() {
            for department in self.departments.values_mut() {
                if department.manager_id.as_ref() == Some(id) {
                    department.manager_id = None;
                }
            }
        }
        removed
    }

    #[must_use]
    pub fn department(&self, id: &DepartmentId) -> Option<&Department> {
        self.departments.get(id)
    }

    #[must_use]
    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.get(id)
    }

    /// Every alert ever created, in creation order.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Every audit entry, in append order.
    #[must_use]
    pub fn audit_entries(&self) -> &[AuditLogEntry] {
        &self.audit_log
    }

    /// Moves an alert to a new inbox status.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the alert does not exist, or
    /// `StoreError::DuplicateAlert` if re-opening it would leave two unread
    /// alerts for its department.
    pub fn set_notification_status(
        &mut self,
        id: i64,
        status: NotificationStatus,
    ) -> Result<(), StoreError> {
        let department_id: DepartmentId = self
            .notifications
            .iter()
            .find(|notification| notification.id == id)
            .map(|notification| notification.department_id.clone())
            .ok_or_else(|| StoreError::NotFound(format!("notification {id}")))?;

        if status == NotificationStatus::Unread
            && self.notifications.iter().any(|notification| {
                notification.id != id
                    && notification.department_id == department_id
                    && notification.is_unread()
            })
        {
            return Err(StoreError::DuplicateAlert { department_id });
        }

        for notification in &mut self.notifications {
            if notification.id == id {
                notification.status = status;
            }
        }
        Ok(())
    }
}

impl DepartmentRepository for InMemoryStore {
    fn find_department(&mut self, id: &DepartmentId) -> Result<Option<Department>, StoreError> {
        Ok(self.departments.get(id).cloned())
    }

    fn find_user(&mut self, id: &UserId) -> Result<Option<User>, StoreError> {
        Ok(self.users.get(id).cloned())
    }

    fn list_eligible_managers(&mut self, id: &DepartmentId) -> Result<Vec<User>, StoreError> {
        let mut managers: Vec<User> = self
            .users
            .values()
            .filter(|user| is_eligible_manager(user, id))
            .cloned()
            .collect();
        managers.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(managers)
    }

    fn update_manager_id(
        &mut self,
        id: &DepartmentId,
        manager_id: &UserId,
    ) -> Result<(), StoreError> {
        if !self.users.contains_key(manager_id) {
            return Err(StoreError::NotFound(format!("user {manager_id}")));
        }
        let department: &mut Department = self
            .departments
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(format!("department {id}")))?;
        department.manager_id = Some(manager_id.clone());
        Ok(())
    }

    fn list_active_departments(&mut self) -> Result<Vec<Department>, StoreError> {
        Ok(self
            .departments
            .values()
            .filter(|department| department.is_active())
            .cloned()
            .collect())
    }

    fn list_all_departments(&mut self) -> Result<Vec<Department>, StoreError> {
        Ok(self.departments.values().cloned().collect())
    }

    fn list_active_managers(&mut self) -> Result<Vec<User>, StoreError> {
        let mut managers: Vec<User> = self
            .users
            .values()
            .filter(|user| user.role == Role::Manager && user.status == UserStatus::Active)
            .cloned()
            .collect();
        managers.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(managers)
    }
}

impl NotificationStore for InMemoryStore {
    fn find_unread_assignment_alert(
        &mut self,
        department_id: &DepartmentId,
    ) -> Result<Option<Notification>, StoreError> {
        Ok(self
            .notifications
            .iter()
            .find(|notification| {
                &notification.department_id == department_id && notification.is_unread()
            })
            .cloned())
    }

    fn create_alert(&mut self, alert: &NewAlert) -> Result<Notification, StoreError> {
        if self.notifications.iter().any(|notification| {
            notification.department_id == alert.department_id && notification.is_unread()
        }) {
            return Err(StoreError::DuplicateAlert {
                department_id: alert.department_id.clone(),
            });
        }

        let id: i64 = i64::try_from(self.notifications.len())
            .map_err(|err| StoreError::Backend(err.to_string()))?
            + 1;
        let notification: Notification =
            Notification::from_new(id, alert.clone(), OffsetDateTime::now_utc());
        self.notifications.push(notification.clone());
        Ok(notification)
    }
}

impl AuditStore for InMemoryStore {
    fn append_entry(&mut self, entry: &AuditLogEntry) -> Result<i64, StoreError> {
        let entry_id: i64 = i64::try_from(self.audit_log.len())
            .map_err(|err| StoreError::Backend(err.to_string()))?
            + 1;
        self.audit_log.push(entry.clone().with_entry_id(entry_id));
        Ok(entry_id)
    }
}
