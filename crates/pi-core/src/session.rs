// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Session setup shared by all facades.
//!
//! A [`PiCore`] is created once per process. It checks the host, loads the
//! reference catalog, and hands out facades that share both.

use crate::guard::{check_host, HostPlatform};
use crate::{CoreConfig, CoreError, Pi, Processor, Sensors};
use cpu_catalog::ReferenceCatalog;
use host_probe::RawSourceBundle;
use std::sync::Arc;

/// An initialised session: an accepted host plus a loaded catalog.
#[derive(Debug, Clone)]
pub struct PiCore {
    config: Arc<CoreConfig>,
    catalog: Arc<ReferenceCatalog>,
    platform: HostPlatform,
}

impl PiCore {
    /// Checks the host and loads the reference catalog.
    ///
    /// Fails on an invalid configuration, an unsupported distribution, a
    /// virtual machine in debug mode, or a missing/malformed catalog.
    pub fn init(config: CoreConfig) -> Result<Self, CoreError> {
        config.validate()?;
        let platform = check_host(&config)?;

        let catalog = match &config.catalog {
            Some(path) => ReferenceCatalog::from_file(path)?,
            None => ReferenceCatalog::bundled()?,
        };

        tracing::info!(
            "session started on {} ({} catalogued processors)",
            platform.distribution.as_deref().unwrap_or("unknown"),
            catalog.len()
        );

        Ok(Self::with_catalog(config, catalog, platform))
    }

    /// Assembles a session without probing the host.
    pub fn with_catalog(
        config: CoreConfig,
        catalog: ReferenceCatalog,
        platform: HostPlatform,
    ) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            platform,
        }
    }

    /// Fetches system info, cpuinfo, and boot configuration, once each.
    pub fn capture_sources(&self) -> RawSourceBundle {
        let system_info = self.config.system_info_source();
        RawSourceBundle::capture(
            system_info.as_ref(),
            &self.config.cpuinfo_source(),
            &self.config.boot_config_source(),
        )
    }

    /// Board identity facade over freshly captured sources.
    pub fn board(&self) -> Pi {
        Pi::with_sources(self.capture_sources(), self.platform.clone())
    }

    /// Processor facade over freshly captured sources.
    pub fn processor(&self) -> Processor {
        Processor::with_sources(
            self.capture_sources(),
            Arc::clone(&self.catalog),
            Arc::clone(&self.config),
        )
    }

    pub fn sensors(&self) -> Sensors {
        Sensors::new(self.config.thermal_source())
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    pub fn platform(&self) -> &HostPlatform {
        &self.platform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    /// Creates a temporary file with the given content and returns its path.
    /// The caller is responsible for cleanup.
    fn write_temp(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("pi_core_session_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        write!(f, "{content}").unwrap();
        path
    }

    /// A Debian host with no DMI files, no module list, and no cpuinfo.
    fn debian_host(os_release: PathBuf) -> CoreConfig {
        CoreConfig {
            os_release,
            dmi_files: vec![],
            module_list_command: vec![],
            cpuinfo: "/nonexistent/cpuinfo".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_init_on_supported_host() {
        let os_release = write_temp("os-release-ok", "NAME=\"Debian GNU/Linux\"\nID=debian\n");
        let core = PiCore::init(debian_host(os_release.clone())).unwrap();
        assert_eq!(core.platform().distribution.as_deref(), Some("debian"));
        assert!(!core.platform().virtual_machine);
        assert!(core.catalog().lookup("Cortex-A72").is_some());
        let _ = std::fs::remove_file(&os_release);
    }

    #[test]
    fn test_init_rejects_malformed_catalog() {
        let os_release = write_temp("os-release-catalog", "ID=debian\n");
        let catalog = write_temp("cpu_data_malformed.json", "{ \"Cortex-A72\": ");
        let config = CoreConfig {
            catalog: Some(catalog.clone()),
            ..debian_host(os_release.clone())
        };
        assert!(matches!(PiCore::init(config), Err(CoreError::Catalog(_))));
        let _ = std::fs::remove_file(&os_release);
        let _ = std::fs::remove_file(&catalog);
    }

    #[test]
    fn test_init_rejects_missing_catalog() {
        let os_release = write_temp("os-release-no-catalog", "ID=debian\n");
        let config = CoreConfig {
            catalog: Some("/nonexistent/cpu_data.json".into()),
            ..debian_host(os_release.clone())
        };
        assert!(matches!(PiCore::init(config), Err(CoreError::Catalog(_))));
        let _ = std::fs::remove_file(&os_release);
    }

    #[test]
    fn test_init_rejects_vm_in_debug_mode() {
        let os_release = write_temp("os-release-vm", "ID=debian\n");
        let cpuinfo = write_temp("cpuinfo-vm", "processor\t: 0\nflags\t\t: fpu sse2 hypervisor\n");
        let config = CoreConfig {
            debug_mode: true,
            cpuinfo: cpuinfo.clone(),
            ..debian_host(os_release.clone())
        };
        assert!(matches!(
            PiCore::init(config.clone()),
            Err(CoreError::RunningOnVirtualMachine)
        ));

        let relaxed = CoreConfig {
            debug_mode: false,
            ..config
        };
        let core = PiCore::init(relaxed).unwrap();
        assert!(core.platform().virtual_machine);
        let _ = std::fs::remove_file(&os_release);
        let _ = std::fs::remove_file(&cpuinfo);
    }

    #[test]
    fn test_init_rejects_invalid_config() {
        let config = CoreConfig {
            scaling_factor: 0.0,
            ..Default::default()
        };
        assert!(matches!(PiCore::init(config), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_init_rejects_unidentified_host() {
        let config = CoreConfig {
            os_release: "/nonexistent/os-release".into(),
            ..Default::default()
        };
        assert!(matches!(
            PiCore::init(config),
            Err(CoreError::UnsupportedPlatform { .. })
        ));
    }

    #[test]
    fn test_facades_share_catalog() {
        let core = PiCore::with_catalog(
            CoreConfig::default(),
            ReferenceCatalog::bundled().unwrap(),
            HostPlatform {
                distribution: Some("debian".into()),
                virtual_machine: false,
            },
        );
        let a = core.processor();
        let b = core.processor();
        assert_eq!(a.release_date(), b.release_date());
        assert_eq!(core.platform().distribution.as_deref(), Some("debian"));
        assert!(!core.catalog().is_empty());
    }
}
