// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Board identity queries.
//!
//! The board model and serial number only appear in `/proc/cpuinfo`; `lscpu`
//! does not report them, so these queries never consult it.

use crate::guard::HostPlatform;
use crate::query::cpuinfo_field;
use crate::{CoreConfig, CoreError, PiCore};
use host_probe::RawSourceBundle;

/// Board attributes resolved from sources captured at construction.
#[derive(Debug, Clone)]
pub struct Pi {
    sources: RawSourceBundle,
    platform: HostPlatform,
}

impl Pi {
    /// Starts a session on this host and captures the board sources.
    pub fn new(config: CoreConfig) -> Result<Self, CoreError> {
        Ok(PiCore::init(config)?.board())
    }

    /// Builds a board view over sources already in hand.
    pub fn with_sources(sources: RawSourceBundle, platform: HostPlatform) -> Self {
        Self { sources, platform }
    }

    /// Board model string, e.g. `"Raspberry Pi 4 Model B Rev 1.4"`.
    pub fn model(&self) -> Option<String> {
        cpuinfo_field(&self.sources, "Model")
    }

    /// SoC serial number as a hex string.
    pub fn serial_number(&self) -> Option<String> {
        cpuinfo_field(&self.sources, "Serial")
    }

    /// Board revision code, e.g. `"c03114"`.
    pub fn revision(&self) -> Option<String> {
        cpuinfo_field(&self.sources, "Revision")
    }

    /// Whether a boot configuration file was found. Overclock queries are
    /// meaningless without one.
    pub fn boot_config_present(&self) -> bool {
        self.sources.boot_config().is_some()
    }

    pub fn platform(&self) -> &HostPlatform {
        &self.platform
    }
}
