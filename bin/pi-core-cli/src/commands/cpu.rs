// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `picore cpu` command: processor attributes.

use super::{clock_unit, or_unknown};
use pi_core::{PiCore, ProcessorReport, RawSourceBundle, UnitMode};

pub fn execute(core: &PiCore, mode: UnitMode, json: bool) -> anyhow::Result<()> {
    let cpu = core.processor();
    let report = cpu.report(mode);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    super::banner("Processor");
    print_report(&report);
    print_sources(cpu.sources());
    Ok(())
}

pub(crate) fn print_report(report: &ProcessorReport) {
    let unit = clock_unit(report.unit_mode);

    // ── Identity ───────────────────────────────────────────────
    println!("  Identity");
    println!("   Name:          {}", or_unknown(report.name.as_deref()));
    println!("   Architecture:  {}", or_unknown(report.architecture.as_deref()));
    println!("   Family:        {}", or_unknown(report.family.as_deref()));
    println!("   Stepping:      {}", or_unknown(report.stepping.as_deref()));
    println!("   Released:      {}", or_unknown(report.release_date.as_deref()));
    println!("   Cores:         {}", or_unknown(report.cores.as_deref()));
    println!("   Threads:       {}", or_unknown(report.threads));
    println!();

    // ── Caches ─────────────────────────────────────────────────
    println!("  Caches");
    println!("   L1i:           {}", or_unknown(report.l1i_cache.as_ref()));
    println!("   L1d:           {}", or_unknown(report.l1d_cache.as_ref()));
    println!("   L2:            {}", or_unknown(report.l2_cache.as_ref()));
    println!("   L3:            {}", or_unknown(report.l3_cache.as_ref()));
    println!();

    // ── Clocks & Power ─────────────────────────────────────────
    println!("  Clocks & Power");
    println!(
        "   Max speed:     {} {unit}",
        or_unknown(report.max_clock_speed)
    );
    println!(
        "   Base speed:    {} {unit}",
        or_unknown(report.base_clock_speed.map(|v| format!("{v:.0}")))
    );
    println!("   Voltage:       {} V", report.voltage);
    println!("   Overclocked:   {}", yes_no(report.overclocked));
    println!("   Force turbo:   {}", yes_no(report.force_turbo));
    println!();

    println!("  Flags");
    if report.flags.is_empty() {
        println!("   unknown");
    } else {
        println!("   {}", report.flags.join(" "));
    }
    println!();
}

/// Lists sources that could not be read, if any.
pub(crate) fn print_sources(sources: &RawSourceBundle) {
    let unavailable = sources.unavailable();
    if unavailable.is_empty() {
        return;
    }
    println!("  Unavailable sources");
    for reason in unavailable {
        println!("   {reason}");
    }
    println!();
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
