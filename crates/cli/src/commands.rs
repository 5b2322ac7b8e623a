// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command execution.
//!
//! Every one-shot command returns a JSON value for the caller to print.
//! `watch` owns its loop and prints one summary line per sweep.

use mgr_assign::{BatchSummary, Engine, HookReport, ReconcileMetrics, ResolutionOutcome};
use mgr_assign_domain::{Department, DepartmentId, NotificationStatus, User, UserId};
use mgr_assign_persistence::Persistence;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{Interval, MissedTickBehavior};
use tracing::{error, info};

use crate::args::{Args, Command};
use crate::error::CliError;

/// The engine as the CLI runs it.
pub type CliEngine = Engine<Persistence>;

/// Opens the configured database and wraps it in an engine.
///
/// # Errors
///
/// Returns an error if the database cannot be opened.
pub fn open_engine(args: &Args) -> Result<CliEngine, CliError> {
    let persistence: Persistence = if let Some(path) = &args.database {
        info!(path = %path.display(), "Using file-based database");
        Persistence::new_with_file(path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };
    Ok(Engine::with_config(persistence, args.engine_config()))
}

/// Runs a one-shot command.
///
/// `Watch` performs a single periodic pass here; the looping form is
/// [`watch`].
///
/// # Errors
///
/// Returns an error if an argument is not a valid identifier, the engine
/// rejects the operation, or the database cannot be read.
pub fn execute(engine: &mut CliEngine, command: &Command) -> Result<Value, CliError> {
    let report: Value = match command {
        Command::Sweep { performed_by } => {
            serde_json::to_value(engine.trigger_manual_sweep(performed_by))?
        }
        Command::Watch { .. } => serde_json::to_value(engine.resolve_all())?,
        Command::Resolve { department_id } => {
            let department_id: DepartmentId = DepartmentId::parse(department_id)?;
            serde_json::to_value(engine.resolve_department(&department_id))?
        }
        Command::Overview => serde_json::to_value(engine.assignment_overview()?)?,
        Command::Managers => serde_json::to_value(engine.available_managers()?)?,
        Command::Assign {
            department_id,
            manager_id,
            admin,
        } => {
            let department_id: DepartmentId = DepartmentId::parse(department_id)?;
            let manager_id: UserId = UserId::parse(manager_id)?;
            serde_json::to_value(engine.assign_manager_manually(
                &department_id,
                &manager_id,
                admin,
            )?)?
        }
        Command::Import { path } => {
            let document: ImportDocument = read_import(path)?;
            serde_json::to_value(import_directory(engine, &document)?)?
        }
        Command::Alerts { department } => {
            let department_id: Option<DepartmentId> =
                department.as_deref().map(DepartmentId::parse).transpose()?;
            serde_json::to_value(
                engine
                    .store_mut()
                    .list_notifications(department_id.as_ref())?,
            )?
        }
        Command::Dismiss { notification_id } => {
            let store: &mut Persistence = engine.store_mut();
            store.set_notification_status(*notification_id, NotificationStatus::Dismissed)?;
            info!(notification_id, "Alert dismissed");
            serde_json::to_value(store.get_notification(*notification_id)?)?
        }
        Command::Audit => serde_json::to_value(engine.store_mut().list_audit_entries()?)?,
    };
    Ok(report)
}

/// Departments and users to load with `import`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDocument {
    /// Departments to create.
    #[serde(default)]
    pub departments: Vec<Department>,
    /// Users to create.
    #[serde(default)]
    pub users: Vec<User>,
}

/// What `import` wrote and resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Departments written.
    pub departments: usize,
    /// Users written.
    pub users: usize,
    /// One report per creation hook, departments first.
    pub hooks: Vec<HookReport>,
    /// Outcomes of requests still queued after the hooks ran.
    pub drained: Vec<ResolutionOutcome>,
}

fn read_import(path: &Path) -> Result<ImportDocument, CliError> {
    let text: String = std::fs::read_to_string(path).map_err(|source| CliError::ReadImport {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

/// Writes a directory snapshot, then runs the creation hooks.
///
/// Departments are written without their primary manager first so that
/// users can reference them; the primary managers are set once every user
/// exists. Hooks run after all rows are written.
///
/// # Errors
///
/// Returns an error if any row is rejected. Rows written before the failure
/// are kept.
pub fn import_directory(
    engine: &mut CliEngine,
    document: &ImportDocument,
) -> Result<ImportReport, CliError> {
    let store: &mut Persistence = engine.store_mut();
    for department in &document.departments {
        let mut unmanaged: Department = department.clone();
        unmanaged.manager_id = None;
        store.create_department(&unmanaged)?;
    }
    for user in &document.users {
        store.create_user(user)?;
    }
    for department in document
        .departments
        .iter()
        .filter(|department| department.manager_id.is_some())
    {
        store.update_department(department)?;
    }
    info!(
        departments = document.departments.len(),
        users = document.users.len(),
        "Directory imported"
    );

    let mut hooks: Vec<HookReport> =
        Vec::with_capacity(document.departments.len() + document.users.len());
    for department in &document.departments {
        hooks.push(engine.after_department_created(department));
    }
    for user in &document.users {
        hooks.push(engine.after_user_created(user));
    }

    Ok(ImportReport {
        departments: document.departments.len(),
        users: document.users.len(),
        hooks,
        drained: engine.drain_outbox(),
    })
}

/// Resolves every active department every `interval_secs` seconds until
/// Ctrl-C, printing each sweep summary as one JSON line.
///
/// Sweeps run on the blocking pool; the engine is shared with them behind a
/// mutex.
///
/// # Errors
///
/// Returns an error if the interval is zero, a sweep task panics, or a
/// summary cannot be encoded.
pub async fn watch(engine: CliEngine, interval_secs: u64) -> Result<ReconcileMetrics, CliError> {
    if interval_secs == 0 {
        return Err(CliError::InvalidInterval);
    }

    let engine: Arc<Mutex<CliEngine>> = Arc::new(Mutex::new(engine));
    let mut ticker: Interval = tokio::time::interval(Duration::from_secs(interval_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    info!(interval_secs, "Starting periodic reconciliation");

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let shared: Arc<Mutex<CliEngine>> = Arc::clone(&engine);
                let summary: BatchSummary =
                    tokio::task::spawn_blocking(move || shared.blocking_lock().resolve_all())
                        .await?;
                println!("{}", serde_json::to_string(&summary)?);
            }
            result = &mut shutdown => {
                if let Err(err) = result {
                    error!(error = %err, "Failed to listen for Ctrl+C");
                }
                info!("Received Ctrl+C, stopping periodic reconciliation");
                break;
            }
        }
    }

    let metrics: ReconcileMetrics = *engine.lock().await.metrics();
    Ok(metrics)
}
