// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

pub mod board;
pub mod catalog;
pub mod cpu;
pub mod report;
pub mod sensors;

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` overrides the verbosity flag.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Formats an optional attribute, printing `unknown` for `None`.
pub fn or_unknown<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "unknown".to_string(), |v| v.to_string())
}

/// Unit suffix for clock speeds in the given mode.
pub fn clock_unit(mode: pi_core::UnitMode) -> &'static str {
    match mode {
        pi_core::UnitMode::Aliased => "GHz",
        pi_core::UnitMode::Raw => "MHz",
    }
}

pub fn banner(title: &str) {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║{:^54}║", format!("picore · {title}"));
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
}
