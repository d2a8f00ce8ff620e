// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `picore report` command: board, processor, and sensors in one pass,
//! followed by the total time taken.

use pi_core::{PiCore, UnitMode};
use std::time::Instant;

pub fn execute(core: &PiCore, mode: UnitMode, started: Instant) -> anyhow::Result<()> {
    super::banner("Hardware Report");

    super::board::print_board(core);
    let cpu = core.processor();
    super::cpu::print_report(&cpu.report(mode));
    super::cpu::print_sources(cpu.sources());
    super::sensors::print_sensors(core);

    println!("  Finished in {:.5} s", started.elapsed().as_secs_f64());
    println!();
    Ok(())
}
