// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use mgr_assign_audit::AuditLogEntry;
use mgr_assign_domain::{
    Department, DepartmentId, NewAlert, Notification, Role, User, UserId, UserStatus,
};

use crate::{
    AuditStore, DepartmentRepository, Engine, InMemoryStore, NotificationStore, StoreError,
};

pub fn dept_id(id: &str) -> DepartmentId {
    DepartmentId::new(id)
}

pub fn user_id(id: &str) -> UserId {
    UserId::new(id)
}

pub fn create_department(id: &str, name: &str) -> Department {
    Department::new(dept_id(id), id.to_uppercase(), name)
}

pub fn create_manager(id: &str, name: &str, department: &str) -> User {
    User::new(
        user_id(id),
        name,
        format!("{id}@example.com"),
        Role::Manager,
    )
    .in_department(dept_id(department))
}

pub fn create_employee(id: &str, name: &str, department: &str) -> User {
    User::new(
        user_id(id),
        name,
        format!("{id}@example.com"),
        Role::Employee,
    )
    .in_department(dept_id(department))
}

pub fn inactive(user: User) -> User {
    user.with_status(UserStatus::Inactive)
}

pub fn create_store(departments: Vec<Department>, users: Vec<User>) -> InMemoryStore {
    let mut store: InMemoryStore = InMemoryStore::new();
    for department in departments {
        store.insert_department(department);
    }
    for user in users {
        store.insert_user(user);
    }
    store
}

pub fn create_engine(departments: Vec<Department>, users: Vec<User>) -> Engine<InMemoryStore> {
    Engine::new(create_store(departments, users))
}

pub fn unread_count(store: &InMemoryStore, department: &str) -> usize {
    store
        .notifications()
        .iter()
        .filter(|notification| {
            notification.department_id == dept_id(department) && notification.is_unread()
        })
        .count()
}

/// An in-memory store with switchable failures.
#[derive(Debug, Default)]
pub struct FailingStore {
    pub inner: InMemoryStore,
    /// `list_eligible_managers` fails for this department.
    pub failing_department: Option<DepartmentId>,
    pub fail_listing: bool,
    pub fail_audit: bool,
    pub fail_user_lookup: bool,
    /// The next `create_alert` loses a race against a concurrent writer.
    pub race_on_create: bool,
}

impl FailingStore {
    pub fn new(inner: InMemoryStore) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }
}

impl DepartmentRepository for FailingStore {
    fn find_department(&mut self, id: &DepartmentId) -> Result<Option<Department>, StoreError> {
        self.inner.find_department(id)
    }

    fn find_user(&mut self, id: &UserId) -> Result<Option<User>, StoreError> {
        if self.fail_user_lookup {
            return Err(StoreError::Backend(String::from("user lookup unavailable")));
        }
        self.inner.find_user(id)
    }

    fn list_eligible_managers(&mut self, id: &DepartmentId) -> Result<Vec<User>, StoreError> {
        if self.failing_department.as_ref() == Some(id) {
            return Err(StoreError::Backend(format!("cannot read managers of {id}")));
        }
        self.inner.list_eligible_managers(id)
    }

    fn update_manager_id(
        &mut self,
        id: &DepartmentId,
        manager_id: &UserId,
    ) -> Result<(), StoreError> {
        self.inner.update_manager_id(id, manager_id)
    }

    fn list_active_departments(&mut self) -> Result<Vec<Department>, StoreError> {
        if self.fail_listing {
            return Err(StoreError::Backend(String::from("department listing unavailable")));
        }
        self.inner.list_active_departments()
    }

    fn list_all_departments(&mut self) -> Result<Vec<Department>, StoreError> {
        if self.fail_listing {
            return Err(StoreError::Backend(String::from("department listing unavailable")));
        }
        self.inner.list_all_departments()
    }

    fn list_active_managers(&mut self) -> Result<Vec<User>, StoreError> {
        self.inner.list_active_managers()
    }
}

impl NotificationStore for FailingStore {
    fn find_unread_assignment_alert(
        &mut self,
        department_id: &DepartmentId,
    ) -> Result<Option<Notification>, StoreError> {
        self.inner.find_unread_assignment_alert(department_id)
    }

    fn create_alert(&mut self, alert: &NewAlert) -> Result<Notification, StoreError> {
        if self.race_on_create {
            self.race_on_create = false;
            self.inner.create_alert(alert)?;
        }
        self.inner.create_alert(alert)
    }
}

impl AuditStore for FailingStore {
    fn append_entry(&mut self, entry: &AuditLogEntry) -> Result<i64, StoreError> {
        if self.fail_audit {
            return Err(StoreError::Backend(String::from("audit log unavailable")));
        }
        self.inner.append_entry(entry)
    }
}
