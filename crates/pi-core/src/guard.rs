// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Startup capability checks.
//!
//! The host is probed once when a session starts. An unsupported
//! distribution is fatal. A virtual machine is fatal only in debug mode,
//! where measurements taken on emulated hardware would be misleading.

use crate::{CoreConfig, CoreError};
use host_probe::resolve_distribution_id;

/// What the startup probe learned about the host.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct HostPlatform {
    /// `ID=` value from os-release.
    pub distribution: Option<String>,
    pub virtual_machine: bool,
}

impl HostPlatform {
    /// Probes the host using the configured sources.
    pub fn probe(config: &CoreConfig) -> Self {
        let distribution = resolve_distribution_id(&config.os_release_source());
        let virtual_machine = config.vm_probe().detect();
        Self {
            distribution,
            virtual_machine,
        }
    }

    /// Applies the capability rules to an already probed platform.
    pub fn check(&self, config: &CoreConfig) -> Result<(), CoreError> {
        let supported = self
            .distribution
            .as_ref()
            .is_some_and(|id| config.supported_platforms.iter().any(|p| p == id));
        if !supported {
            return Err(CoreError::UnsupportedPlatform {
                found: self.distribution.clone(),
                supported: config.supported_platforms.clone(),
            });
        }
        if config.debug_mode && self.virtual_machine {
            return Err(CoreError::RunningOnVirtualMachine);
        }
        Ok(())
    }
}

/// Probes the host and fails fast if it cannot be served.
pub fn check_host(config: &CoreConfig) -> Result<HostPlatform, CoreError> {
    let platform = HostPlatform::probe(config);
    platform.check(config)?;
    tracing::debug!(
        "host platform accepted: distribution={:?} vm={}",
        platform.distribution,
        platform.virtual_machine
    );
    Ok(platform)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform(id: Option<&str>, vm: bool) -> HostPlatform {
        HostPlatform {
            distribution: id.map(str::to_string),
            virtual_machine: vm,
        }
    }

    #[test]
    fn test_supported_distribution() {
        let config = CoreConfig::default();
        assert!(platform(Some("raspbian"), false).check(&config).is_ok());
        assert!(platform(Some("debian"), true).check(&config).is_ok());
    }

    #[test]
    fn test_unsupported_distribution() {
        let config = CoreConfig::default();
        let err = platform(Some("fedora"), false).check(&config).unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnsupportedPlatform { found: Some(ref id), .. } if id == "fedora"
        ));
        assert!(err.to_string().contains("fedora"));
    }

    #[test]
    fn test_unknown_distribution_is_unsupported() {
        let err = platform(None, false).check(&CoreConfig::default()).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedPlatform { found: None, .. }));
        assert!(err.to_string().contains("unknown"));
    }

    #[test]
    fn test_distribution_match_is_case_sensitive() {
        let config = CoreConfig::default();
        assert!(platform(Some("Debian"), false).check(&config).is_err());
    }

    #[test]
    fn test_vm_fatal_only_in_debug_mode() {
        let debug = CoreConfig {
            debug_mode: true,
            ..Default::default()
        };
        assert!(matches!(
            platform(Some("debian"), true).check(&debug),
            Err(CoreError::RunningOnVirtualMachine)
        ));
        assert!(platform(Some("debian"), false).check(&debug).is_ok());
    }

    #[test]
    fn test_probe_with_missing_os_release() {
        let config = CoreConfig {
            os_release: "/nonexistent/os-release".into(),
            dmi_files: vec![],
            module_list_command: vec![],
            cpuinfo: "/nonexistent/cpuinfo".into(),
            ..Default::default()
        };
        let probed = HostPlatform::probe(&config);
        assert_eq!(probed, platform(None, false));
        assert!(matches!(
            check_host(&config),
            Err(CoreError::UnsupportedPlatform { found: None, .. })
        ));
    }
}
