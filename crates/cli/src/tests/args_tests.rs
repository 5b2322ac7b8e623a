// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::Parser;
use mgr_assign::{EngineConfig, HookMode};

use super::parse;
use crate::args::{Args, Command, DEFAULT_OPERATOR};

#[test]
fn test_defaults() {
    let args: Args = parse(&["overview"]);

    assert_eq!(args.database, None);
    assert_eq!(args.command, Command::Overview);
    assert_eq!(args.engine_config(), EngineConfig::default());
}

#[test]
fn test_sweep_defaults_performed_by() {
    let args: Args = parse(&["sweep"]);
    assert_eq!(
        args.command,
        Command::Sweep {
            performed_by: DEFAULT_OPERATOR.to_string()
        }
    );
}

#[test]
fn test_global_flags_after_subcommand() {
    let args: Args = parse(&[
        "resolve",
        "legal",
        "--database",
        "/tmp/mgr.db",
        "--system-actor",
        "reconciler",
        "--deferred",
    ]);

    assert_eq!(
        args.command,
        Command::Resolve {
            department_id: String::from("legal")
        }
    );
    assert_eq!(
        args.database.as_deref(),
        Some(std::path::Path::new("/tmp/mgr.db"))
    );
    let config: EngineConfig = args.engine_config();
    assert_eq!(config.system_actor, "reconciler");
    assert_eq!(config.hook_mode, HookMode::Deferred);
}

#[test]
fn test_assign_requires_admin() {
    let result = Args::try_parse_from(["mgr-assign", "assign", "legal", "m1"]);
    assert!(result.is_err());

    let args: Args = parse(&["assign", "legal", "m1", "--admin", "admin-1"]);
    assert_eq!(
        args.command,
        Command::Assign {
            department_id: String::from("legal"),
            manager_id: String::from("m1"),
            admin: String::from("admin-1"),
        }
    );
}

#[test]
fn test_watch_interval() {
    let args: Args = parse(&["watch", "--interval-secs", "30"]);
    assert_eq!(args.command, Command::Watch { interval_secs: 30 });

    let args: Args = parse(&["watch"]);
    assert_eq!(args.command, Command::Watch { interval_secs: 300 });
}
