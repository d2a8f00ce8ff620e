// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Configuration loaded from TOML files or constructed programmatically.
//!
//! Every field has a default, so an empty file is a valid configuration.
//!
//! # TOML Format
//! ```toml
//! scaling_factor = 1.6
//! default_voltage = 1.2
//! supported_platforms = ["debian", "ubuntu", "linuxmint", "raspbian"]
//! debug_mode = false
//! cache_units = "legacy"
//! cpuinfo = "/proc/cpuinfo"
//! boot_config = ["/boot/firmware/config.txt", "/boot/config.txt"]
//! system_info_command = ["lscpu"]
//! catalog = "/etc/pi-core/cpu_data.json"
//! ```

use crate::{CacheUnits, CoreError};
use host_probe::environment::DEFAULT_DMI_FILES;
use host_probe::{CommandSource, FileSource, SourceProvider, StaticSource, VmProbe};
use std::path::{Path, PathBuf};

/// Settings for attribute resolution and host probing.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Ratio of maximum to base clock, used when the catalog has no base clock.
    pub scaling_factor: f64,
    /// Core voltage reported when neither the boot config nor the catalog has one.
    pub default_voltage: f64,
    /// Distribution ids (`ID=` in os-release) the tool runs on. Case-sensitive.
    pub supported_platforms: Vec<String>,
    /// Refuse to start on a virtual machine.
    pub debug_mode: bool,
    /// Conversion applied to cache sizes in raw mode.
    pub cache_units: CacheUnits,
    pub os_release: PathBuf,
    pub cpuinfo: PathBuf,
    /// Boot configuration candidates, first existing wins.
    pub boot_config: Vec<PathBuf>,
    /// System-info command, argv form.
    pub system_info_command: Vec<String>,
    /// Loaded-module listing command, argv form.
    pub module_list_command: Vec<String>,
    pub dmi_files: Vec<PathBuf>,
    pub thermal_zone: PathBuf,
    /// Reference catalog file. The bundled catalog is used when unset.
    pub catalog: Option<PathBuf>,
}

impl CoreConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, CoreError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| CoreError::Config(format!("TOML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, CoreError> {
        toml::to_string_pretty(self)
            .map_err(|e| CoreError::Config(format!("TOML serialise error: {e}")))
    }

    /// Rejects values that would make derivations meaningless.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(self.scaling_factor.is_finite() && self.scaling_factor > 0.0) {
            return Err(CoreError::Config(format!(
                "scaling_factor must be a positive number, got {}",
                self.scaling_factor
            )));
        }
        if self.supported_platforms.is_empty() {
            return Err(CoreError::Config(
                "supported_platforms must list at least one distribution".into(),
            ));
        }
        Ok(())
    }

    pub fn os_release_source(&self) -> FileSource {
        FileSource::new(&self.os_release)
    }

    pub fn cpuinfo_source(&self) -> FileSource {
        FileSource::new(&self.cpuinfo)
    }

    pub fn boot_config_source(&self) -> FileSource {
        FileSource::with_candidates(self.boot_config.iter().cloned())
    }

    pub fn thermal_source(&self) -> FileSource {
        FileSource::new(&self.thermal_zone)
    }

    /// The system-info command; an empty argv yields a permanently missing source.
    pub fn system_info_source(&self) -> Box<dyn SourceProvider> {
        command_or_missing(&self.system_info_command, "system info command")
    }

    /// VM probe over the configured DMI files, module command, and cpuinfo.
    pub fn vm_probe(&self) -> VmProbe {
        VmProbe::new(
            self.dmi_files
                .iter()
                .map(|p| Box::new(FileSource::new(p)) as Box<dyn SourceProvider>)
                .collect(),
            command_or_missing(&self.module_list_command, "module list command"),
            Box::new(self.cpuinfo_source()),
        )
    }
}

fn command_or_missing(argv: &[String], what: &str) -> Box<dyn SourceProvider> {
    match CommandSource::from_argv(argv) {
        Some(command) => Box::new(command),
        None => Box::new(StaticSource::missing(what)),
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            scaling_factor: 1.6,
            default_voltage: 1.2,
            supported_platforms: ["debian", "ubuntu", "linuxmint", "raspbian"]
                .into_iter()
                .map(String::from)
                .collect(),
            debug_mode: false,
            cache_units: CacheUnits::Legacy,
            os_release: PathBuf::from("/etc/os-release"),
            cpuinfo: PathBuf::from("/proc/cpuinfo"),
            boot_config: vec![
                PathBuf::from("/boot/firmware/config.txt"),
                PathBuf::from("/boot/config.txt"),
            ],
            system_info_command: vec!["lscpu".to_string()],
            module_list_command: vec!["lsmod".to_string()],
            dmi_files: DEFAULT_DMI_FILES.iter().map(PathBuf::from).collect(),
            thermal_zone: PathBuf::from(host_probe::THERMAL_ZONE_PATH),
            catalog: None,
        }
    }
}
