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
    clippy::all
)]

#[cfg(test)]
mod tests;

use mgr_assign_domain::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Represents the entity performing an action.
///
/// An actor is either the reconciliation engine itself or an administrator
/// acting through the surrounding application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (`system` or `admin`).
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }

    /// Creates the actor used for automatic engine actions.
    #[must_use]
    pub fn system(id: &str) -> Self {
        Self::new(id.to_string(), String::from("system"))
    }

    /// Creates an administrator actor.
    #[must_use]
    pub fn admin(id: &str) -> Self {
        Self::new(id.to_string(), String::from("admin"))
    }
}

/// The action an audit entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    /// The engine set a department's primary manager automatically.
    ManagerAutoAssigned,
    /// An administrator set a department's primary manager.
    ManagerManuallyAssigned,
    /// An operator triggered a full reconciliation sweep.
    ManualManagerAssignmentTrigger,
}

impl AuditAction {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ManagerAutoAssigned => "MANAGER_AUTO_ASSIGNED",
            Self::ManagerManuallyAssigned => "MANAGER_MANUALLY_ASSIGNED",
            Self::ManualManagerAssignmentTrigger => "MANUAL_MANAGER_ASSIGNMENT_TRIGGER",
        }
    }
}

impl FromStr for AuditAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MANAGER_AUTO_ASSIGNED" => Ok(Self::ManagerAutoAssigned),
            "MANAGER_MANUALLY_ASSIGNED" => Ok(Self::ManagerManuallyAssigned),
            "MANUAL_MANAGER_ASSIGNMENT_TRIGGER" => Ok(Self::ManualManagerAssignmentTrigger),
            _ => Err(DomainError::InvalidAuditAction(s.to_string())),
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity name recorded for department-scoped entries.
pub const ENTITY_DEPARTMENT: &str = "Department";

/// Entity name recorded for system-wide entries.
pub const ENTITY_SYSTEM: &str = "System";

/// Entity identifier recorded for operator-triggered sweeps.
pub const MANUAL_TRIGGER_ENTITY_ID: &str = "MANUAL_TRIGGER";

/// An immutable, append-only audit record.
///
/// Every automatic change to a department's primary manager produces exactly
/// one entry. Entries are never updated once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// Store-assigned identifier. `None` until persisted.
    pub entry_id: Option<i64>,
    /// What happened.
    pub action: AuditAction,
    /// The kind of entity affected (e.g., `Department`).
    pub entity: String,
    /// The identifier of the affected entity.
    pub entity_id: String,
    /// Who performed the action.
    pub performed_by: Actor,
    /// Human-readable description.
    pub details: String,
    /// When the action happened (UTC).
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl AuditLogEntry {
    /// Creates a new, unpersisted audit entry.
    ///
    /// # Arguments
    ///
    /// * `action` - The action performed
    /// * `entity` - The kind of entity affected
    /// * `entity_id` - The affected entity's identifier
    /// * `performed_by` - The actor responsible
    /// * `details` - Human-readable description
    /// * `timestamp` - When the action happened
    #[must_use]
    pub fn new(
        action: AuditAction,
        entity: &str,
        entity_id: &str,
        performed_by: Actor,
        details: String,
        timestamp: OffsetDateTime,
    ) -> Self {
        Self {
            entry_id: None,
            action,
            entity: entity.to_string(),
            entity_id: entity_id.to_string(),
            performed_by,
            details,
            timestamp,
        }
    }

    /// Returns a copy of this entry carrying its persisted identifier.
    #[must_use]
    pub fn with_entry_id(mut self, entry_id: i64) -> Self {
        self.entry_id = Some(entry_id);
        self
    }
}
