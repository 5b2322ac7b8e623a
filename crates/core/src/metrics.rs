// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

use crate::outcome::{ResolutionAction, ResolutionOutcome};

/// Counters describing what the engine has done since it was created.
///
/// Failures the engine contains (instead of propagating) are counted here so
/// they remain observable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileMetrics {
    /// Department resolutions attempted.
    pub resolutions: u64,
    /// Automatic manager assignments.
    pub auto_assigned: u64,
    /// Alerts newly raised.
    pub notifications_created: u64,
    /// Alerts suppressed because one was already outstanding.
    pub notifications_existing: u64,
    /// Resolutions that failed and were contained.
    pub resolution_failures: u64,
    /// Audit entries that could not be written.
    pub audit_failures: u64,
    /// Hook invocations whose processing reported a failure.
    pub hook_failures: u64,
}

impl ReconcileMetrics {
    pub(crate) const fn observe(&mut self, outcome: &ResolutionOutcome) {
        self.resolutions += 1;
        if outcome.failed {
            self.resolution_failures += 1;
            return;
        }
        match outcome.action {
            ResolutionAction::AutoAssigned => self.auto_assigned += 1,
            ResolutionAction::NotificationCreated => self.notifications_created += 1,
            ResolutionAction::NotificationExists => self.notifications_existing += 1,
            ResolutionAction::NoAction => {}
        }
    }
}
