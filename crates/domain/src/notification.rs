// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Department, DepartmentId, User, UserId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// The notification type used for every manager assignment alert.
pub const MANAGER_ASSIGNMENT: &str = "MANAGER_ASSIGNMENT";

/// Alerts are always raised at high priority.
pub const ALERT_PRIORITY: &str = "HIGH";

/// Alerts are always addressed to administrators.
pub const ALERT_TARGET_ROLE: &str = "ADMIN";

/// Why a department needs administrator attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertScenario {
    /// The department has no eligible manager.
    NoManagers,
    /// The department has more than one eligible manager.
    MultipleManagers,
}

impl AlertScenario {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoManagers => "NO_MANAGERS",
            Self::MultipleManagers => "MULTIPLE_MANAGERS",
        }
    }

    /// Builds the alert title for a department.
    #[must_use]
    pub fn title_for(&self, department_name: &str) -> String {
        match self {
            Self::NoManagers => format!("No Manager Available for {department_name}"),
            Self::MultipleManagers => {
                format!("Multiple Managers Available for {department_name}")
            }
        }
    }
}

impl FromStr for AlertScenario {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NO_MANAGERS" => Ok(Self::NoManagers),
            "MULTIPLE_MANAGERS" => Ok(Self::MultipleManagers),
            _ => Err(DomainError::InvalidScenario(s.to_string())),
        }
    }
}

impl std::fmt::Display for AlertScenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inbox state of a notification.
///
/// The reconciliation engine only ever creates `Unread` notifications.
/// The other states are reached through the administrator inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationStatus {
    /// Not yet seen. At most one per department.
    Unread,
    /// Seen by an administrator.
    Read,
    /// Dismissed by an administrator.
    Dismissed,
}

impl NotificationStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unread => "UNREAD",
            Self::Read => "READ",
            Self::Dismissed => "DISMISSED",
        }
    }
}

impl FromStr for NotificationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNREAD" => Ok(Self::Unread),
            "READ" => Ok(Self::Read),
            "DISMISSED" => Ok(Self::Dismissed),
            _ => Err(DomainError::InvalidNotificationStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A manager as captured in an alert payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerSummary {
    /// The manager's user identifier.
    pub id: UserId,
    /// The manager's display name.
    pub name: String,
    /// The manager's email.
    pub email: String,
}

impl From<&User> for ManagerSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Structured alert payload.
///
/// Captures the department and its eligible-manager pool at the moment the
/// alert was raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertPayload {
    /// The department the alert concerns.
    pub department_id: DepartmentId,
    /// The department name at alert time.
    pub department_name: String,
    /// The department code at alert time.
    pub department_code: String,
    /// The alert scenario.
    pub scenario: AlertScenario,
    /// Eligible managers at alert time.
    pub available_managers: Vec<ManagerSummary>,
    /// The primary manager at alert time, if any.
    pub current_manager_id: Option<UserId>,
}

impl AlertPayload {
    /// Builds a payload snapshot for a department.
    #[must_use]
    pub fn snapshot(department: &Department, scenario: AlertScenario, eligible: &[User]) -> Self {
        Self {
            department_id: department.id.clone(),
            department_name: department.name.clone(),
            department_code: department.code.clone(),
            scenario,
            available_managers: eligible.iter().map(ManagerSummary::from).collect(),
            current_manager_id: department.manager_id.clone(),
        }
    }
}

/// A request to create a new manager assignment alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAlert {
    /// The department the alert concerns.
    pub department_id: DepartmentId,
    /// The alert scenario.
    pub scenario: AlertScenario,
    /// Short human-readable title.
    pub title: String,
    /// Full human-readable message.
    pub message: String,
    /// Structured payload.
    pub payload: AlertPayload,
}

/// A persisted manager assignment alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Store-assigned identifier.
    pub id: i64,
    /// The department the alert concerns.
    pub department_id: DepartmentId,
    /// The alert scenario.
    pub scenario: AlertScenario,
    /// Inbox status.
    pub status: NotificationStatus,
    /// Short human-readable title.
    pub title: String,
    /// Full human-readable message.
    pub message: String,
    /// Structured payload.
    pub payload: AlertPayload,
    /// When the alert was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Notification {
    /// Materializes a new alert with a store-assigned identifier.
    #[must_use]
    pub fn from_new(id: i64, alert: NewAlert, created_at: OffsetDateTime) -> Self {
        Self {
            id,
            department_id: alert.department_id,
            scenario: alert.scenario,
            status: NotificationStatus::Unread,
            title: alert.title,
            message: alert.message,
            payload: alert.payload,
            created_at,
        }
    }

    /// Returns whether this alert is still outstanding.
    #[must_use]
    pub fn is_unread(&self) -> bool {
        self.status == NotificationStatus::Unread
    }
}
