// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::VecDeque;

use mgr_assign_domain::DepartmentId;
use serde::{Deserialize, Serialize};

/// Why a department was queued for resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionReason {
    /// A manager joined the department.
    ManagerAdded,
    /// A manager was deleted or left the department without joining another.
    ManagerRemoved,
    /// A manager moved into the department from elsewhere.
    ManagerTransferredIn,
    /// A manager moved out of the department.
    ManagerTransferredOut,
    /// A manager's status changed.
    ManagerStatusChanged,
    /// The department was created.
    DepartmentCreated,
    /// The department was reactivated.
    DepartmentReactivated,
}

/// A pending request to resolve one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionRequest {
    /// The department to resolve.
    pub department_id: DepartmentId,
    /// What triggered the request.
    pub reason: ResolutionReason,
}

impl ResolutionRequest {
    /// Creates a new request.
    #[must_use]
    pub const fn new(department_id: DepartmentId, reason: ResolutionReason) -> Self {
        Self {
            department_id,
            reason,
        }
    }
}

/// In-process FIFO queue between lifecycle hooks and the resolver.
///
/// A department appears at most once among pending requests; enqueueing it
/// again while it is still pending is a no-op.
#[derive(Debug, Clone, Default)]
pub struct Outbox {
    pending: VecDeque<ResolutionRequest>,
}

impl Outbox {
    /// Creates an empty outbox.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    /// Queues a request. Returns `false` if the department was already pending.
    pub fn push(&mut self, request: ResolutionRequest) -> bool {
        if self
            .pending
            .iter()
            .any(|pending| pending.department_id == request.department_id)
        {
            return false;
        }
        self.pending.push_back(request);
        true
    }

    /// Takes the oldest pending request.
    pub fn pop(&mut self) -> Option<ResolutionRequest> {
        self.pending.pop_front()
    }

    /// Number of pending requests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Iterates pending requests in queue order.
    pub fn iter(&self) -> impl Iterator<Item = &ResolutionRequest> {
        self.pending.iter()
    }
}
