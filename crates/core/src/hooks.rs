// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lifecycle hooks.
//!
//! The embedding application calls a hook after it has committed a change to
//! a user or a department. Each hook works out which departments the change
//! can affect, queues them in the engine's outbox, and (in
//! [`HookMode::Immediate`](crate::HookMode::Immediate)) drains the outbox
//! before returning. Hooks never fail toward the caller.

use mgr_assign_domain::{
    Department, DepartmentId, Role, User, UserId, UserStatus, manager_pool_of,
};
use tracing::{debug, error, info, warn};

use crate::engine::Engine;
use crate::outbox::{ResolutionReason, ResolutionRequest};
use crate::outcome::{HookReport, ResolutionOutcome};
use crate::ports::ReconcileStore;

/// Departments affected by the creation of a user.
#[must_use]
pub fn requests_for_user_created(user: &User) -> Vec<ResolutionRequest> {
    manager_pool_of(user)
        .map(|department_id| {
            ResolutionRequest::new(department_id.clone(), ResolutionReason::ManagerAdded)
        })
        .into_iter()
        .collect()
}

/// Departments affected by the deletion of a user.
#[must_use]
pub fn requests_for_user_deleted(user: &User) -> Vec<ResolutionRequest> {
    manager_pool_of(user)
        .map(|department_id| {
            ResolutionRequest::new(department_id.clone(), ResolutionReason::ManagerRemoved)
        })
        .into_iter()
        .collect()
}

/// Departments affected by an update to a user.
///
/// Old departments come before new ones and each department appears once.
#[must_use]
pub fn requests_for_user_updated(previous: &User, current: &User) -> Vec<ResolutionRequest> {
    let mut requests: Vec<ResolutionRequest> = Vec::new();
    let mut push = |department_id: &DepartmentId, reason: ResolutionReason| {
        if !requests
            .iter()
            .any(|request| &request.department_id == department_id)
        {
            requests.push(ResolutionRequest::new(department_id.clone(), reason));
        }
    };

    let is_manager: bool = current.role == Role::Manager;
    let is_active: bool = current.status == UserStatus::Active;

    // A demotion alone is not a trigger; the next sweep picks it up.
    if is_manager && is_active && previous.department_id != current.department_id {
        match (&previous.department_id, &current.department_id) {
            (Some(from), Some(to)) => {
                push(from, ResolutionReason::ManagerTransferredOut);
                push(to, ResolutionReason::ManagerTransferredIn);
            }
            (Some(from), None) => push(from, ResolutionReason::ManagerRemoved),
            (None, Some(to)) => push(to, ResolutionReason::ManagerAdded),
            (None, None) => {}
        }
    }

    if previous.role != Role::Manager && is_manager && is_active {
        if let Some(department_id) = &current.department_id {
            push(department_id, ResolutionReason::ManagerAdded);
        }
    }

    if is_manager && previous.status != current.status {
        let department_id: Option<&DepartmentId> = current
            .department_id
            .as_ref()
            .or(previous.department_id.as_ref());
        if let Some(department_id) = department_id {
            push(department_id, ResolutionReason::ManagerStatusChanged);
        }
    }

    requests
}

/// Departments affected by the creation of a department.
#[must_use]
pub fn requests_for_department_created(department: &Department) -> Vec<ResolutionRequest> {
    vec![ResolutionRequest::new(
        department.id.clone(),
        ResolutionReason::DepartmentCreated,
    )]
}

/// Departments affected by an update to a department.
///
/// Only reactivation triggers resolution. A changed primary manager is an
/// administrator's decision and is never re-resolved.
#[must_use]
pub fn requests_for_department_updated(
    previous: &Department,
    current: &Department,
) -> Vec<ResolutionRequest> {
    if !previous.is_active() && current.is_active() {
        vec![ResolutionRequest::new(
            current.id.clone(),
            ResolutionReason::DepartmentReactivated,
        )]
    } else {
        Vec::new()
    }
}

impl<S: ReconcileStore> Engine<S> {
    /// Call after a user has been created.
    pub fn after_user_created(&mut self, user: &User) -> HookReport {
        self.run_hook("after_user_created", requests_for_user_created(user))
    }

    /// Call after a user has been updated, with the before and after images.
    pub fn after_user_updated(&mut self, previous: &User, current: &User) -> HookReport {
        debug!(
            user_id = %current.id,
            previous_role = %previous.role,
            role = %current.role,
            previous_status = %previous.status,
            status = %current.status,
            "Processing user update"
        );
        self.run_hook(
            "after_user_updated",
            requests_for_user_updated(previous, current),
        )
    }

    /// Call after a user has been deleted, with the last known image.
    pub fn after_user_deleted(&mut self, user: &User) -> HookReport {
        self.run_hook("after_user_deleted", requests_for_user_deleted(user))
    }

    /// Call after a department has been created.
    pub fn after_department_created(&mut self, department: &Department) -> HookReport {
        self.run_hook(
            "after_department_created",
            requests_for_department_created(department),
        )
    }

    /// Call after a department has been updated, with the before and after images.
    pub fn after_department_updated(
        &mut self,
        previous: &Department,
        current: &Department,
    ) -> HookReport {
        if previous.manager_id != current.manager_id {
            info!(
                department_id = %current.id,
                previous_manager_id = ?previous.manager_id.as_ref().map(UserId::as_str),
                manager_id = ?current.manager_id.as_ref().map(UserId::as_str),
                "Department primary manager changed manually"
            );
        }
        self.run_hook(
            "after_department_updated",
            requests_for_department_updated(previous, current),
        )
    }

    /// Resolves every queued department in FIFO order.
    pub fn drain_outbox(&mut self) -> Vec<ResolutionOutcome> {
        let mut outcomes: Vec<ResolutionOutcome> = Vec::with_capacity(self.outbox.len());
        while let Some(request) = self.outbox.pop() {
            debug!(
                department_id = %request.department_id,
                reason = ?request.reason,
                "Draining resolution request"
            );
            outcomes.push(self.resolve_department(&request.department_id));
        }
        outcomes
    }

    /// Resolves the department of a manager whose status changed.
    ///
    /// When `department_id` is `None` the manager's current department is
    /// looked up. Always resolves before returning, whatever the hook mode.
    pub fn handle_manager_status_change(
        &mut self,
        manager_id: &UserId,
        new_status: UserStatus,
        department_id: Option<&DepartmentId>,
    ) -> Vec<ResolutionOutcome> {
        let department_id: DepartmentId = match department_id {
            Some(department_id) => department_id.clone(),
            None => match self.store.find_user(manager_id) {
                Ok(Some(User {
                    department_id: Some(department_id),
                    ..
                })) => department_id,
                Ok(_) => {
                    warn!(
                        manager_id = %manager_id,
                        "Manager has no department, nothing to resolve"
                    );
                    return Vec::new();
                }
                Err(err) => {
                    self.metrics.hook_failures += 1;
                    error!(manager_id = %manager_id, error = %err, "Failed to look up manager");
                    return Vec::new();
                }
            },
        };

        info!(
            manager_id = %manager_id,
            status = %new_status,
            department_id = %department_id,
            "Handling manager status change"
        );
        self.outbox.push(ResolutionRequest::new(
            department_id,
            ResolutionReason::ManagerStatusChanged,
        ));
        self.drain_outbox()
    }

    /// Resolves both departments involved in a manager transfer, source first.
    pub fn handle_manager_transfer(
        &mut self,
        manager_id: &UserId,
        from: &DepartmentId,
        to: &DepartmentId,
    ) -> Vec<ResolutionOutcome> {
        info!(
            manager_id = %manager_id,
            from = %from,
            to = %to,
            "Handling manager transfer"
        );
        self.outbox.push(ResolutionRequest::new(
            from.clone(),
            ResolutionReason::ManagerTransferredOut,
        ));
        self.outbox.push(ResolutionRequest::new(
            to.clone(),
            ResolutionReason::ManagerTransferredIn,
        ));
        self.drain_outbox()
    }

    fn run_hook(&mut self, hook: &str, requests: Vec<ResolutionRequest>) -> HookReport {
        let mut enqueued: Vec<DepartmentId> = Vec::with_capacity(requests.len());
        for request in requests {
            let department_id: DepartmentId = request.department_id.clone();
            if self.outbox.push(request) {
                enqueued.push(department_id);
            } else {
                debug!(hook, department_id = %department_id, "Department already pending");
            }
        }

        let outcomes: Vec<ResolutionOutcome> = if self.drains_immediately() {
            self.drain_outbox()
        } else {
            Vec::new()
        };

        let report: HookReport = HookReport {
            hook: hook.to_string(),
            enqueued,
            outcomes,
        };
        if report.has_failures() {
            self.metrics.hook_failures += 1;
            error!(hook, "Hook processing reported failures");
        } else {
            debug!(
                hook,
                enqueued = report.enqueued.len(),
                processed = report.outcomes.len(),
                "Hook processed"
            );
        }
        report
    }
}
