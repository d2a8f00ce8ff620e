// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Host environment identification.
//!
//! Two predicates run before any attribute is resolved:
//! - [`resolve_distribution_id`] reads the `ID=` field of `/etc/os-release`.
//! - [`VmProbe::detect`] looks for evidence of a hypervisor.
//!
//! Neither caches its answer.

use crate::{SourceProvider, Unavailable};

/// Substrings in DMI identification files that indicate a virtual machine.
const DMI_VM_MARKERS: &[&str] = &["VMware", "VirtualBox", "KVM", "QEMU"];

/// Kernel modules whose presence indicates a virtualisation host or guest.
const VM_MODULES: &[&str] = &["kvm", "vboxdrv", "vmwgfx"];

/// Flag reported in processor info when running under a hypervisor.
const HYPERVISOR_FLAG: &str = "hypervisor";

/// Default DMI identification files.
pub const DEFAULT_DMI_FILES: &[&str] = &[
    "/sys/class/dmi/id/product_name",
    "/sys/class/dmi/id/sys_vendor",
];

/// Extracts the distribution identifier from os-release text.
///
/// The identifier is the run of word characters (`[A-Za-z0-9_]`) directly
/// after `ID=` at the start of a line. Lines without such a run, like a quoted
/// `ID="arch"`, are skipped and scanning continues.
pub fn parse_distribution_id(os_release: &str) -> Option<String> {
    os_release
        .lines()
        .filter_map(|line| line.strip_prefix("ID="))
        .find_map(|value| {
            let id: String = value
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect();
            (!id.is_empty()).then_some(id)
        })
}

/// Reads the release-identification source and returns its `ID=` value.
///
/// Returns `None` if the source is unavailable or carries no usable `ID=`.
pub fn resolve_distribution_id(os_release: &dyn SourceProvider) -> Option<String> {
    match os_release.fetch() {
        Ok(text) => parse_distribution_id(&text),
        Err(e) => {
            tracing::debug!("cannot identify distribution: {e}");
            None
        }
    }
}

/// Best-effort virtual machine detection.
///
/// Signals are checked in order and the first positive one wins:
/// 1. DMI product/vendor files naming a known hypervisor vendor.
/// 2. A virtualisation kernel module in the loaded-module list.
/// 3. The `hypervisor` flag in processor info.
///
/// A signal whose source is missing counts as negative. A signal whose
/// source fails for any other reason also counts as negative, with a
/// warning logged.
pub struct VmProbe {
    dmi: Vec<Box<dyn SourceProvider>>,
    modules: Box<dyn SourceProvider>,
    cpuinfo: Box<dyn SourceProvider>,
}

impl VmProbe {
    pub fn new(
        dmi: Vec<Box<dyn SourceProvider>>,
        modules: Box<dyn SourceProvider>,
        cpuinfo: Box<dyn SourceProvider>,
    ) -> Self {
        Self {
            dmi,
            modules,
            cpuinfo,
        }
    }

    /// Returns `true` if any signal indicates a virtual machine.
    pub fn detect(&self) -> bool {
        if self.dmi_signal() {
            tracing::info!("virtual machine detected via DMI identification");
            return true;
        }
        if self.module_signal() {
            tracing::info!("virtual machine detected via loaded kernel modules");
            return true;
        }
        if self.hypervisor_signal() {
            tracing::info!("virtual machine detected via hypervisor cpu flag");
            return true;
        }
        false
    }

    fn dmi_signal(&self) -> bool {
        self.dmi.iter().any(|source| {
            signal_text(source.as_ref())
                .map(|text| DMI_VM_MARKERS.iter().any(|m| text.contains(m)))
                .unwrap_or(false)
        })
    }

    fn module_signal(&self) -> bool {
        signal_text(self.modules.as_ref())
            .map(|text| VM_MODULES.iter().any(|m| text.contains(m)))
            .unwrap_or(false)
    }

    fn hypervisor_signal(&self) -> bool {
        signal_text(self.cpuinfo.as_ref())
            .map(|text| text.to_lowercase().contains(HYPERVISOR_FLAG))
            .unwrap_or(false)
    }
}

/// Fetches text for one signal, downgrading every failure to `None`.
fn signal_text(source: &dyn SourceProvider) -> Option<String> {
    match source.fetch() {
        Ok(text) => Some(text),
        Err(e @ Unavailable::Missing { .. }) => {
            tracing::debug!("vm probe skipped: {e}");
            None
        }
        Err(e) => {
            tracing::warn!("vm probe treated as negative after unexpected error: {e}");
            None
        }
    }
}
