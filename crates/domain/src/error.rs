// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier is empty or otherwise malformed.
    InvalidIdentifier {
        /// The kind of identifier (e.g., "department", "user").
        kind: &'static str,
        /// The rejected value.
        value: String,
    },
    /// A role string did not match a known role.
    InvalidRole(String),
    /// A user status string did not match a known status.
    InvalidUserStatus(String),
    /// A department status string did not match a known status.
    InvalidDepartmentStatus(String),
    /// An alert scenario string did not match a known scenario.
    InvalidScenario(String),
    /// A notification status string did not match a known status.
    InvalidNotificationStatus(String),
    /// An audit action string did not match a known action.
    InvalidAuditAction(String),
    /// The department does not exist.
    DepartmentNotFound(String),
    /// The user does not exist.
    UserNotFound(String),
    /// The selected user cannot act as a primary manager.
    InvalidManager {
        /// The rejected user.
        user_id: String,
        /// Why the user was rejected.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIdentifier { kind, value } => {
                write!(f, "Invalid {kind} identifier: '{value}'")
            }
            Self::InvalidRole(value) => write!(f, "Invalid role: {value}"),
            Self::InvalidUserStatus(value) => write!(f, "Invalid user status: {value}"),
            Self::InvalidDepartmentStatus(value) => {
                write!(f, "Invalid department status: {value}")
            }
            Self::InvalidScenario(value) => write!(f, "Invalid alert scenario: {value}"),
            Self::InvalidNotificationStatus(value) => {
                write!(f, "Invalid notification status: {value}")
            }
            Self::InvalidAuditAction(value) => write!(f, "Invalid audit action: {value}"),
            Self::DepartmentNotFound(id) => write!(f, "Department '{id}' not found"),
            Self::UserNotFound(id) => write!(f, "User '{id}' not found"),
            Self::InvalidManager { user_id, reason } => {
                write!(f, "User '{user_id}' cannot be assigned as manager: {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
