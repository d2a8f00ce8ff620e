// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # picore
//!
//! Command-line hardware report for Raspberry Pi class boards.
//!
//! ## Usage
//! ```bash
//! # Board model and serial number
//! picore board
//!
//! # Processor attributes, raw units, as JSON
//! picore cpu --raw --json
//!
//! # Current SoC temperature
//! picore sensors
//!
//! # Reference processors known to the catalog
//! picore catalog
//!
//! # Everything, with timing
//! picore report
//! ```

mod commands;

use anyhow::Context;
use clap::{Parser, Subcommand};
use pi_core::{CoreConfig, PiCore, UnitMode};
use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "picore",
    about = "Hardware attribute report for Raspberry Pi class boards",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Refuse to run on a virtual machine.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show board model, serial number, and host platform.
    Board,

    /// Show processor attributes.
    Cpu {
        /// Report clock speeds in MHz and cache sizes in bytes.
        #[arg(long)]
        raw: bool,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show live sensor readings.
    Sensors,

    /// List the reference processors in the loaded catalog.
    Catalog,

    /// Show every attribute and how long resolution took.
    Report {
        /// Report clock speeds in MHz and cache sizes in bytes.
        #[arg(long)]
        raw: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let started = Instant::now();
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => CoreConfig::from_file(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => CoreConfig::default(),
    };
    config.debug_mode |= cli.debug;
    tracing::debug!("configuration: {config:?}");

    let core = PiCore::init(config).context("cannot start on this host")?;

    match cli.command {
        Commands::Board => commands::board::execute(&core),
        Commands::Cpu { raw, json } => {
            commands::cpu::execute(&core, UnitMode::from_raw_flag(raw), json)
        }
        Commands::Sensors => commands::sensors::execute(&core),
        Commands::Catalog => commands::catalog::execute(&core),
        Commands::Report { raw } => {
            commands::report::execute(&core, UnitMode::from_raw_flag(raw), started)
        }
    }
}
