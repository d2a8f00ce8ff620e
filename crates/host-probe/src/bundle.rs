// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The captured set of raw source texts.
//!
//! A [`RawSourceBundle`] is fetched once and then only read. Attribute
//! queries re-parse the held text; they never touch the filesystem or spawn
//! processes again.

use crate::{SourceProvider, Unavailable};

/// System-info, processor-info, and boot-configuration text, each either
/// captured or [`Unavailable`].
#[derive(Debug, Clone)]
pub struct RawSourceBundle {
    system_info: Result<String, Unavailable>,
    cpuinfo: Result<String, Unavailable>,
    boot_config: Result<String, Unavailable>,
}

impl RawSourceBundle {
    /// Fetches all three sources, once each.
    ///
    /// Unavailable sources are recorded, not raised.
    pub fn capture(
        system_info: &dyn SourceProvider,
        cpuinfo: &dyn SourceProvider,
        boot_config: &dyn SourceProvider,
    ) -> Self {
        Self {
            system_info: fetch_logged(system_info),
            cpuinfo: fetch_logged(cpuinfo),
            boot_config: fetch_logged(boot_config),
        }
    }

    /// Builds a bundle from text already in hand. `None` marks a source as
    /// missing.
    pub fn from_text(
        system_info: Option<&str>,
        cpuinfo: Option<&str>,
        boot_config: Option<&str>,
    ) -> Self {
        fn wrap(text: Option<&str>, name: &str) -> Result<String, Unavailable> {
            text.map(str::to_string).ok_or_else(|| Unavailable::Missing {
                source_name: name.to_string(),
            })
        }
        Self {
            system_info: wrap(system_info, "system info"),
            cpuinfo: wrap(cpuinfo, "cpuinfo"),
            boot_config: wrap(boot_config, "boot config"),
        }
    }

    /// Output of the system-info command, if it ran.
    pub fn system_info(&self) -> Option<&str> {
        self.system_info.as_deref().ok()
    }

    /// Contents of the kernel processor-info file, if it was read.
    pub fn cpuinfo(&self) -> Option<&str> {
        self.cpuinfo.as_deref().ok()
    }

    /// Contents of the boot configuration file, if one exists.
    pub fn boot_config(&self) -> Option<&str> {
        self.boot_config.as_deref().ok()
    }

    /// Why each unavailable source is unavailable, for status displays.
    pub fn unavailable(&self) -> Vec<&Unavailable> {
        [&self.system_info, &self.cpuinfo, &self.boot_config]
            .into_iter()
            .filter_map(|r| r.as_ref().err())
            .collect()
    }
}

fn fetch_logged(provider: &dyn SourceProvider) -> Result<String, Unavailable> {
    let result = provider.fetch();
    match &result {
        Ok(text) => tracing::debug!("captured {} ({} bytes)", provider.name(), text.len()),
        Err(e) if e.is_missing() => tracing::debug!("source unavailable: {e}"),
        Err(e) => tracing::warn!("source unavailable: {e}"),
    }
    result
}
