// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use mgr_assign::CoreError;
use mgr_assign_domain::DomainError;
use mgr_assign_persistence::PersistenceError;
use thiserror::Error;

/// Errors surfaced to the operator.
#[derive(Debug, Error)]
pub enum CliError {
    /// The database could not be opened or a direct query failed.
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// The engine rejected an operation.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An argument was not a valid identifier.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] DomainError),

    /// An import file could not be read.
    #[error("failed to read {path}: {source}")]
    ReadImport {
        path: String,
        source: std::io::Error,
    },

    /// An import file or output value could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A sweep task panicked or was cancelled.
    #[error("sweep task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// The watch interval was zero.
    #[error("watch interval must be at least one second")]
    InvalidInterval,
}
