// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `picore catalog` command: list the reference processors.

use super::or_unknown;
use pi_core::{PiCore, ReferenceCatalog};

pub fn execute(core: &PiCore) -> anyhow::Result<()> {
    super::banner("Catalog");
    print_catalog(core.catalog());
    Ok(())
}

fn print_catalog(catalog: &ReferenceCatalog) {
    println!("  {} catalogued processors", catalog.len());
    println!();
    println!(
        "   {:<14} {:>10} {:>10} {:>12}",
        "Model", "Base MHz", "Voltage", "Released"
    );
    println!("   {}", "─".repeat(49));
    for name in catalog.model_names() {
        let Some(record) = catalog.lookup(name) else {
            continue;
        };
        println!(
            "   {:<14} {:>10} {:>10} {:>12}",
            name,
            or_unknown(record.base_clock_speed),
            or_unknown(record.voltage),
            or_unknown(record.release_date.as_deref()),
        );
    }
    println!();
}
