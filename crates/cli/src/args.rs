// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::{Parser, Subcommand};
use mgr_assign::{DEFAULT_SYSTEM_ACTOR, EngineConfig, HookMode};
use std::path::PathBuf;

/// Default identifier recorded for operator-triggered sweeps.
pub const DEFAULT_OPERATOR: &str = "cli";

/// mgr-assign - keeps every department's primary manager in step with its
/// pool of active managers
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the `SQLite` database file. If not provided, uses an in-memory database.
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    /// Actor identifier recorded on automatic assignments
    #[arg(long, global = true, default_value = DEFAULT_SYSTEM_ACTOR)]
    pub system_actor: String,

    /// Queue resolutions during `import` and resolve them in one pass at the end
    #[arg(long, global = true)]
    pub deferred: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Builds the engine configuration these flags describe.
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        let hook_mode: HookMode = if self.deferred {
            HookMode::Deferred
        } else {
            HookMode::Immediate
        };
        EngineConfig::default()
            .with_system_actor(self.system_actor.clone())
            .with_hook_mode(hook_mode)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Resolve every active department once and audit the sweep
    Sweep {
        /// Identifier recorded as having triggered the sweep
        #[arg(long, default_value = DEFAULT_OPERATOR)]
        performed_by: String,
    },

    /// Resolve every active department periodically until Ctrl-C
    Watch {
        /// Seconds between sweeps
        #[arg(long, default_value_t = 300)]
        interval_secs: u64,
    },

    /// Resolve a single department
    Resolve {
        /// The department identifier
        department_id: String,
    },

    /// Show each active department's manager pool and whether it needs attention
    Overview,

    /// List every active manager who can be assigned to a department
    Managers,

    /// Set a department's primary manager
    Assign {
        /// The department identifier
        department_id: String,
        /// The manager's user identifier
        manager_id: String,
        /// The administrator performing the assignment
        #[arg(long)]
        admin: String,
    },

    /// Load departments and users from a JSON file and run the creation hooks
    Import {
        /// Path to a JSON document with `departments` and `users` arrays
        path: PathBuf,
    },

    /// List manager assignment alerts
    Alerts {
        /// Only list alerts for this department
        #[arg(long)]
        department: Option<String>,
    },

    /// Mark an alert as dismissed
    Dismiss {
        /// The alert identifier
        notification_id: i64,
    },

    /// List the audit trail
    Audit,
}
