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
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod commands;
mod error;

#[cfg(test)]
mod tests;

use clap::Parser;
use mgr_assign::ReconcileMetrics;
use serde_json::Value;
use tracing::info;

use args::{Args, Command};
use commands::CliEngine;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args: Args = Args::parse();

    // Logs go to stderr; stdout carries the JSON report.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Initializing mgr-assign");

    let mut engine: CliEngine = commands::open_engine(&args)?;

    if let Command::Watch { interval_secs } = &args.command {
        let metrics: ReconcileMetrics = commands::watch(engine, *interval_secs).await?;
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    } else {
        let report: Value = commands::execute(&mut engine, &args.command)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
