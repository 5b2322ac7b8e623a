// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use mgr_assign_domain::{AlertScenario, DepartmentId, Notification, UserId};
use serde::{Deserialize, Serialize};

/// What a single department resolution did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolutionAction {
    /// Nothing changed.
    NoAction,
    /// The sole eligible manager was set as primary manager.
    AutoAssigned,
    /// A new alert was raised.
    NotificationCreated,
    /// An unread alert for the department already existed.
    NotificationExists,
}

impl ResolutionAction {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoAction => "NO_ACTION",
            Self::AutoAssigned => "AUTO_ASSIGNED",
            Self::NotificationCreated => "NOTIFICATION_CREATED",
            Self::NotificationExists => "NOTIFICATION_EXISTS",
        }
    }
}

impl std::fmt::Display for ResolutionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of resolving one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionOutcome {
    /// The department that was resolved.
    pub department_id: DepartmentId,
    /// What happened.
    pub action: ResolutionAction,
    /// Human-readable summary.
    pub message: String,
    /// Size of the eligible-manager pool that drove the decision.
    pub eligible_managers: usize,
    /// The alert scenario, for notification outcomes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<AlertScenario>,
    /// The alert that was created or found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_id: Option<i64>,
    /// The manager set by an auto-assignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_manager_id: Option<UserId>,
    /// Whether resolution failed and was contained as a no-op.
    pub failed: bool,
}

impl ResolutionOutcome {
    /// A no-op outcome.
    #[must_use]
    pub fn no_action(department_id: DepartmentId, message: impl Into<String>) -> Self {
        Self {
            department_id,
            action: ResolutionAction::NoAction,
            message: message.into(),
            eligible_managers: 0,
            scenario: None,
            notification_id: None,
            assigned_manager_id: None,
            failed: false,
        }
    }

    /// A contained failure, reported as a no-op.
    #[must_use]
    pub fn failed(department_id: DepartmentId, error: &impl std::fmt::Display) -> Self {
        Self {
            failed: true,
            ..Self::no_action(department_id, format!("Resolution failed: {error}"))
        }
    }

    /// An auto-assignment outcome.
    #[must_use]
    pub fn auto_assigned(
        department_id: DepartmentId,
        manager_id: UserId,
        message: impl Into<String>,
    ) -> Self {
        Self {
            action: ResolutionAction::AutoAssigned,
            eligible_managers: 1,
            assigned_manager_id: Some(manager_id),
            ..Self::no_action(department_id, message)
        }
    }

    /// An alert outcome, created or already existing.
    ///
    /// Scenario and message are the stored alert's, so an existing alert
    /// raised for another scenario is reported as it is.
    #[must_use]
    pub fn alert(notification: &Notification, created: bool, eligible_managers: usize) -> Self {
        let action: ResolutionAction = if created {
            ResolutionAction::NotificationCreated
        } else {
            ResolutionAction::NotificationExists
        };
        Self {
            action,
            eligible_managers,
            scenario: Some(notification.scenario),
            notification_id: Some(notification.id),
            ..Self::no_action(
                notification.department_id.clone(),
                notification.message.clone(),
            )
        }
    }

    /// Returns this outcome with the pool size recorded.
    #[must_use]
    pub fn with_eligible_managers(mut self, eligible_managers: usize) -> Self {
        self.eligible_managers = eligible_managers;
        self
    }
}

/// The result of an alert deduplication check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertEnsured {
    /// Whether a new alert was written.
    pub created: bool,
    /// The new alert, or the existing one that suppressed creation.
    pub notification: Notification,
}

/// One department's entry in a batch summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentResult {
    /// The department display name.
    pub department_name: String,
    /// The resolution outcome.
    pub outcome: ResolutionOutcome,
}

/// Aggregate result of a batch sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Number of active departments visited.
    pub total_departments: usize,
    /// Departments that were auto-assigned.
    pub auto_assigned: usize,
    /// Alerts newly raised.
    pub notifications_created: usize,
    /// Departments whose alert already existed.
    pub notifications_existing: usize,
    /// Departments whose resolution failed, plus listing failures.
    pub errors: usize,
    /// Per-department results.
    pub results: Vec<DepartmentResult>,
}

impl BatchSummary {
    /// Folds one department's outcome into the summary.
    pub fn record(&mut self, department_name: String, outcome: ResolutionOutcome) {
        if outcome.failed {
            self.errors += 1;
        } else {
            match outcome.action {
                ResolutionAction::AutoAssigned => self.auto_assigned += 1,
                ResolutionAction::NotificationCreated => self.notifications_created += 1,
                ResolutionAction::NotificationExists => self.notifications_existing += 1,
                ResolutionAction::NoAction => {}
            }
        }
        self.results.push(DepartmentResult {
            department_name,
            outcome,
        });
    }

    /// One-line description of the sweep.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "Processed {} departments: {} auto-assigned, {} notifications created",
            self.total_departments, self.auto_assigned, self.notifications_created
        )
    }
}

/// What a lifecycle hook did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookReport {
    /// The hook that ran (e.g., `after_user_updated`).
    pub hook: String,
    /// Departments the hook queued for resolution. A department that was
    /// already pending is not listed.
    pub enqueued: Vec<DepartmentId>,
    /// Outcomes of any resolution performed before returning.
    pub outcomes: Vec<ResolutionOutcome>,
}

impl HookReport {
    /// Returns whether any processed resolution failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|outcome| outcome.failed)
    }
}

/// The result of an administrator's manual assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualAssignment {
    /// The department.
    pub department_id: DepartmentId,
    /// The manager now set as primary.
    pub manager_id: UserId,
    /// Human-readable summary.
    pub message: String,
}
