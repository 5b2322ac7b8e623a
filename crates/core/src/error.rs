// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use mgr_assign_domain::{DepartmentId, DomainError};

/// Errors reported by store implementations behind the repository ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A referenced record does not exist.
    NotFound(String),
    /// An unread assignment alert already exists for the department.
    ///
    /// Stores that enforce alert uniqueness report this when a concurrent
    /// writer inserted an alert between the lookup and the insert.
    DuplicateAlert {
        /// The department that already has an outstanding alert.
        department_id: DepartmentId,
    },
    /// The underlying storage failed.
    Backend(String),
    /// A stored value could not be encoded or decoded.
    Serialization(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::DuplicateAlert { department_id } => {
                write!(
                    f,
                    "An unread manager assignment alert already exists for department {department_id}"
                )
            }
            Self::Backend(msg) => write!(f, "Store backend error: {msg}"),
            Self::Serialization(msg) => write!(f, "Store serialization error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Errors that can occur inside the reconciliation engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A repository operation failed.
    Store(StoreError),
    /// A domain rule was violated.
    DomainViolation(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "Store failure: {err}"),
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::DomainViolation(err) => Some(err),
        }
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
