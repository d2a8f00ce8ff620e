// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `picore sensors` command: live SoC temperature.
//!
//! Works off-device too: an unreadable thermal zone prints `unknown`.

use pi_core::PiCore;

pub fn execute(core: &PiCore) -> anyhow::Result<()> {
    super::banner("Sensors");
    print_sensors(core);
    Ok(())
}

pub(crate) fn print_sensors(core: &PiCore) {
    println!("  Thermal");
    match core.sensors().thermal() {
        Some(reading) => {
            println!(
                "   Temperature:   {:.1} C  {}",
                reading.cpu_temp_celsius,
                temp_bar(reading.cpu_temp_celsius as f64)
            );
            println!(
                "   Headroom:      {:.1} C to throttle threshold (80 C)",
                reading.headroom_celsius()
            );
            if reading.is_overheating() {
                println!("   WARNING: THERMAL THROTTLING ACTIVE");
            }
        }
        None => println!("   Temperature:   unknown"),
    }
    println!();
}

/// Creates a visual temperature bar (0-100 C scale).
fn temp_bar(celsius: f64) -> String {
    let filled = ((celsius / 100.0) * 20.0).round().max(0.0) as usize;
    let filled = filled.min(20);
    let empty = 20 - filled;
    let symbol = if celsius >= 80.0 {
        "#"
    } else if celsius >= 60.0 {
        "="
    } else {
        "-"
    };
    format!("[{}{}]", symbol.repeat(filled), ".".repeat(empty))
}
