// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod eligibility;
mod error;
mod notification;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use eligibility::{ManagerPoolCategory, is_eligible_manager, manager_pool_of};
pub use error::DomainError;
pub use notification::{
    ALERT_PRIORITY, ALERT_TARGET_ROLE, AlertPayload, AlertScenario, MANAGER_ASSIGNMENT,
    ManagerSummary, NewAlert, Notification, NotificationStatus,
};
pub use types::{Department, DepartmentId, DepartmentStatus, Role, User, UserId, UserStatus};
pub use validation::{validate_department_fields, validate_manager_candidate};
