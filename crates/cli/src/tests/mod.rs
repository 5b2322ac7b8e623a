// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod args_tests;

use clap::Parser;
use mgr_assign::Engine;
use mgr_assign_domain::{Department, DepartmentId, Role, User, UserId};
use mgr_assign_persistence::Persistence;

use crate::args::Args;
use crate::commands::CliEngine;

pub fn parse(argv: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("mgr-assign").chain(argv.iter().copied())).unwrap()
}

pub fn create_test_department(id: &str, name: &str) -> Department {
    Department::new(DepartmentId::new(id), id.to_uppercase(), name)
}

pub fn create_test_manager(id: &str, name: &str, department: &str) -> User {
    User::new(UserId::new(id), name, format!("{id}@example.com"), Role::Manager)
        .in_department(DepartmentId::new(department))
}

pub fn create_test_engine(args: &Args) -> CliEngine {
    Engine::with_config(Persistence::new_in_memory().unwrap(), args.engine_config())
}
