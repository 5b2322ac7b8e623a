// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use mgr_assign_domain::{AlertPayload, AlertScenario, Department, NewAlert, Notification};
use tracing::{debug, info};

use crate::engine::Engine;
use crate::error::{CoreError, StoreError};
use crate::outcome::AlertEnsured;
use crate::ports::ReconcileStore;

impl<S: ReconcileStore> Engine<S> {
    /// Guarantees an outstanding manager assignment alert for a department.
    ///
    /// If an `UNREAD` alert already exists for the department it is returned
    /// with `created = false`, whatever its scenario. Otherwise a new alert is
    /// created. A store that rejects the insert with
    /// [`StoreError::DuplicateAlert`] lost a race with a concurrent writer;
    /// the winner is re-read and returned with `created = false`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn ensure_alert(
        &mut self,
        department: &Department,
        scenario: AlertScenario,
        message: String,
        payload: AlertPayload,
    ) -> Result<AlertEnsured, CoreError> {
        if let Some(existing) = self.store.find_unread_assignment_alert(&department.id)? {
            debug!(
                department_id = %department.id,
                notification_id = existing.id,
                scenario = %existing.scenario,
                "Unread assignment alert already exists"
            );
            return Ok(AlertEnsured {
                created: false,
                notification: existing,
            });
        }

        let alert: NewAlert = NewAlert {
            department_id: department.id.clone(),
            scenario,
            title: scenario.title_for(&department.name),
            message,
            payload,
        };

        match self.store.create_alert(&alert) {
            Ok(notification) => {
                info!(
                    department_id = %department.id,
                    notification_id = notification.id,
                    scenario = %scenario,
                    "Created manager assignment alert"
                );
                Ok(AlertEnsured {
                    created: true,
                    notification,
                })
            }
            Err(StoreError::DuplicateAlert { department_id }) => {
                debug!(
                    department_id = %department_id,
                    "Lost alert creation race, re-reading winner"
                );
                let winner: Notification = self
                    .store
                    .find_unread_assignment_alert(&department_id)?
                    .ok_or_else(|| {
                        StoreError::NotFound(format!(
                            "unread assignment alert for department {department_id}"
                        ))
                    })?;
                Ok(AlertEnsured {
                    created: false,
                    notification: winner,
                })
            }
            Err(err) => Err(err.into()),
        }
    }
}
