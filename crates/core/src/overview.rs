// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use mgr_assign_domain::{
    Department, DepartmentId, ManagerPoolCategory, ManagerSummary, User, UserId,
};
use serde::{Deserialize, Serialize};

use crate::engine::Engine;
use crate::error::CoreError;
use crate::ports::ReconcileStore;

/// One department's row in the assignment overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentOverview {
    pub department_id: DepartmentId,
    pub code: String,
    pub name: String,
    pub manager_id: Option<UserId>,
    pub eligible_managers: Vec<ManagerSummary>,
    pub category: ManagerPoolCategory,
    /// `true` unless exactly one eligible manager exists and a primary
    /// manager is set.
    pub needs_attention: bool,
}

/// Department counts per pool category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewSummary {
    pub total_departments: usize,
    pub no_managers: usize,
    pub single_manager: usize,
    pub multiple_managers: usize,
    pub needs_attention: usize,
}

/// Read-only snapshot of every active department's assignment state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    pub summary: OverviewSummary,
    pub departments: Vec<DepartmentOverview>,
}

/// A department a manager is currently primary manager of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedDepartment {
    pub department_id: DepartmentId,
    pub code: String,
    pub name: String,
}

impl From<&Department> for ManagedDepartment {
    fn from(department: &Department) -> Self {
        Self {
            department_id: department.id.clone(),
            code: department.code.clone(),
            name: department.name.clone(),
        }
    }
}

/// An active manager who can be assigned to any department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableManager {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// The department the manager belongs to.
    pub current_department_id: Option<DepartmentId>,
    /// Display name of that department, when it exists.
    pub current_department: Option<String>,
    /// `true` when the manager is primary manager of at least one department.
    pub is_currently_managing: bool,
    pub managed_departments: Vec<ManagedDepartment>,
}

impl<S: ReconcileStore> Engine<S> {
    /// Lists every active manager in every department as a candidate for
    /// manual assignment. Nothing is written.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn available_managers(&mut self) -> Result<Vec<AvailableManager>, CoreError> {
        let departments: BTreeMap<DepartmentId, Department> = self
            .store
            .list_all_departments()?
            .into_iter()
            .map(|department| (department.id.clone(), department))
            .collect();

        let managers: Vec<AvailableManager> = self
            .store
            .list_active_managers()?
            .into_iter()
            .map(|manager| {
                let managed_departments: Vec<ManagedDepartment> = departments
                    .values()
                    .filter(|department| department.manager_id.as_ref() == Some(&manager.id))
                    .map(ManagedDepartment::from)
                    .collect();
                let current_department: Option<String> = manager
                    .department_id
                    .as_ref()
                    .and_then(|department_id| departments.get(department_id))
                    .map(|department| department.name.clone());

                AvailableManager {
                    is_currently_managing: !managed_departments.is_empty(),
                    current_department,
                    current_department_id: manager.department_id,
                    id: manager.id,
                    name: manager.name,
                    email: manager.email,
                    managed_departments,
                }
            })
            .collect();

        Ok(managers)
    }

    /// Builds the assignment overview. Nothing is written.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn assignment_overview(&mut self) -> Result<Overview, CoreError> {
        let mut overview: Overview = Overview::default();

        for department in self.store.list_active_departments()? {
            let eligible: Vec<User> = self.store.list_eligible_managers(&department.id)?;
            let category: ManagerPoolCategory = ManagerPoolCategory::from_count(eligible.len());
            let needs_attention: bool = eligible.len() != 1 || department.manager_id.is_none();

            match category {
                ManagerPoolCategory::NoManagers => overview.summary.no_managers += 1,
                ManagerPoolCategory::SingleManager => overview.summary.single_manager += 1,
                ManagerPoolCategory::MultipleManagers => overview.summary.multiple_managers += 1,
            }
            if needs_attention {
                overview.summary.needs_attention += 1;
            }
            overview.summary.total_departments += 1;

            overview.departments.push(DepartmentOverview {
                department_id: department.id,
                code: department.code,
                name: department.name,
                manager_id: department.manager_id,
                eligible_managers: eligible.iter().map(ManagerSummary::from).collect(),
                category,
                needs_attention,
            });
        }

        Ok(overview)
    }
}
