// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{DepartmentId, Role, User, UserStatus};
use serde::{Deserialize, Serialize};

/// Returns whether a user is an eligible manager for a department.
///
/// Eligibility is exactly `role = MANAGER`, `status = ACTIVE` and membership
/// in the department. Nothing else is considered.
#[must_use]
pub fn is_eligible_manager(user: &User, department_id: &DepartmentId) -> bool {
    user.role == Role::Manager
        && user.status == UserStatus::Active
        && user.department_id.as_ref() == Some(department_id)
}

/// Returns the department whose manager pool this user belongs to, if any.
#[must_use]
pub fn manager_pool_of(user: &User) -> Option<&DepartmentId> {
    if user.role == Role::Manager && user.status == UserStatus::Active {
        user.department_id.as_ref()
    } else {
        None
    }
}

/// Coarse classification of a department's eligible-manager pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ManagerPoolCategory {
    /// No eligible managers.
    NoManagers,
    /// Exactly one eligible manager.
    SingleManager,
    /// Two or more eligible managers.
    MultipleManagers,
}

impl ManagerPoolCategory {
    /// Classifies a pool by its size.
    #[must_use]
    pub const fn from_count(count: usize) -> Self {
        match count {
            0 => Self::NoManagers,
            1 => Self::SingleManager,
            _ => Self::MultipleManagers,
        }
    }

    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoManagers => "NO_MANAGERS",
            Self::SingleManager => "SINGLE_MANAGER",
            Self::MultipleManagers => "MULTIPLE_MANAGERS",
        }
    }
}

impl std::fmt::Display for ManagerPoolCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
