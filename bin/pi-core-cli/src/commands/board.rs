// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `picore board` command: board identity and host platform.

use super::or_unknown;
use pi_core::PiCore;

pub fn execute(core: &PiCore) -> anyhow::Result<()> {
    super::banner("Board");
    print_board(core);
    Ok(())
}

pub(crate) fn print_board(core: &PiCore) {
    let pi = core.board();
    let platform = pi.platform();

    println!("  Board");
    println!("   Model:         {}", or_unknown(pi.model()));
    println!("   Serial:        {}", or_unknown(pi.serial_number()));
    println!("   Revision:      {}", or_unknown(pi.revision()));
    println!(
        "   Boot config:   {}",
        if pi.boot_config_present() { "found" } else { "not found" }
    );
    println!();

    println!("  Host");
    println!("   Distribution:  {}", or_unknown(platform.distribution.as_deref()));
    println!(
        "   Virtualised:   {}",
        if platform.virtual_machine { "yes" } else { "no" }
    );
    println!();
}
