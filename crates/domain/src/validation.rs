// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Role, User, UserStatus};

/// Validates that a user may be set as a department's primary manager.
///
/// # Arguments
///
/// * `user` - The candidate manager
///
/// # Errors
///
/// Returns `DomainError::InvalidManager` if:
/// - The user does not have the `MANAGER` role
/// - The user is not `ACTIVE`
pub fn validate_manager_candidate(user: &User) -> Result<(), DomainError> {
    if user.role != Role::Manager {
        return Err(DomainError::InvalidManager {
            user_id: user.id.to_string(),
            reason: format!("role is {}, expected MANAGER", user.role),
        });
    }

    if user.status != UserStatus::Active {
        return Err(DomainError::InvalidManager {
            user_id: user.id.to_string(),
            reason: String::from("user is not active"),
        });
    }

    Ok(())
}

/// Validates the free-text fields of a department.
///
/// # Errors
///
/// Returns `DomainError::InvalidIdentifier` if the code or name is blank.
pub fn validate_department_fields(code: &str, name: &str) -> Result<(), DomainError> {
    if code.trim().is_empty() {
        return Err(DomainError::InvalidIdentifier {
            kind: "department code",
            value: code.to_string(),
        });
    }
    if name.trim().is_empty() {
        return Err(DomainError::InvalidIdentifier {
            kind: "department name",
            value: name.to_string(),
        });
    }
    Ok(())
}
