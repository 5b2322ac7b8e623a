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

//! Manager assignment reconciliation.
//!
//! Given a department and its pool of eligible managers, the [`Engine`]
//! decides whether to assign the sole manager automatically, raise a
//! "no manager" alert, or raise a "multiple managers" alert. At most one
//! unread alert exists per department, and every automatic assignment is
//! recorded in the audit trail.

mod batch;
mod config;
mod dedup;
mod engine;
mod error;
mod hooks;
mod manual;
mod memory;
mod metrics;
mod outbox;
mod outcome;
mod overview;
mod ports;
mod recorder;
mod resolver;

#[cfg(test)]
mod tests;

pub use config::{DEFAULT_SYSTEM_ACTOR, EngineConfig, HookMode};
pub use engine::Engine;
pub use error::{CoreError, StoreError};
pub use hooks::{
    requests_for_department_created, requests_for_department_updated, requests_for_user_created,
    requests_for_user_deleted, requests_for_user_updated,
};
pub use memory::InMemoryStore;
pub use metrics::ReconcileMetrics;
pub use outbox::{Outbox, ResolutionReason, ResolutionRequest};
pub use outcome::{
    AlertEnsured, BatchSummary, DepartmentResult, HookReport, ManualAssignment, ResolutionAction,
    ResolutionOutcome,
};
pub use overview::{
    AvailableManager, DepartmentOverview, ManagedDepartment, Overview, OverviewSummary,
};
pub use ports::{AuditStore, DepartmentRepository, NotificationStore, ReconcileStore};
pub use resolver::{multiple_managers_message, no_managers_message};
