// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types and their conversions to domain values.
//!
//! Enumerations are stored as their canonical text and timestamps as RFC 3339
//! text. Every conversion back to a domain value is fallible because the
//! database cannot be trusted to hold only valid text.

use diesel::prelude::*;
use mgr_assign_audit::{Actor, AuditAction, AuditLogEntry};
use mgr_assign_domain::{
    AlertPayload, AlertScenario, Department, DepartmentId, DepartmentStatus, Notification,
    NotificationStatus, Role, User, UserId, UserStatus,
};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::diesel_schema::{audit_log, departments, notifications, users};
use crate::error::PersistenceError;

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = departments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DepartmentRow {
    pub department_id: String,
    pub code: String,
    pub name: String,
    pub status: String,
    pub manager_id: Option<String>,
}

impl DepartmentRow {
    pub fn into_domain(self) -> Result<Department, PersistenceError> {
        let status: DepartmentStatus = self.status.parse()?;
        let mut department: Department =
            Department::new(DepartmentId::new(self.department_id), self.code, self.name)
                .with_status(status);
        department.manager_id = self.manager_id.map(UserId::new);
        Ok(department)
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRow {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub department_id: Option<String>,
}

impl UserRow {
    pub fn into_domain(self) -> Result<User, PersistenceError> {
        let role: Role = self.role.parse()?;
        let status: UserStatus = self.status.parse()?;
        let mut user: User =
            User::new(UserId::new(self.user_id), self.name, self.email, role).with_status(status);
        user.department_id = self.department_id.map(DepartmentId::new);
        Ok(user)
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = notifications)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NotificationRow {
    pub notification_id: i64,
    pub department_id: String,
    pub scenario: String,
    pub status: String,
    pub title: String,
    pub message: String,
    pub payload_json: String,
    pub created_at: String,
}

impl NotificationRow {
    pub fn into_domain(self) -> Result<Notification, PersistenceError> {
        let scenario: AlertScenario = self.scenario.parse()?;
        let status: NotificationStatus = self.status.parse()?;
        let payload: AlertPayload = serde_json::from_str(&self.payload_json)?;
        Ok(Notification {
            id: self.notification_id,
            department_id: DepartmentId::new(self.department_id),
            scenario,
            status,
            title: self.title,
            message: self.message,
            payload,
            created_at: parse_timestamp(&self.created_at)?,
        })
    }
}

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = audit_log)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AuditLogRow {
    pub entry_id: i64,
    pub action: String,
    pub entity: String,
    pub entity_id: String,
    pub performed_by: String,
    pub actor_type: String,
    pub details: String,
    pub created_at: String,
}

impl AuditLogRow {
    pub fn into_domain(self) -> Result<AuditLogEntry, PersistenceError> {
        let action: AuditAction = self.action.parse()?;
        Ok(AuditLogEntry::new(
            action,
            &self.entity,
            &self.entity_id,
            Actor::new(self.performed_by, self.actor_type),
            self.details,
            parse_timestamp(&self.created_at)?,
        )
        .with_entry_id(self.entry_id))
    }
}

pub fn format_timestamp(timestamp: OffsetDateTime) -> Result<String, PersistenceError> {
    Ok(timestamp.format(&Rfc3339)?)
}

pub fn parse_timestamp(text: &str) -> Result<OffsetDateTime, PersistenceError> {
    Ok(OffsetDateTime::parse(text, &Rfc3339)?)
}
