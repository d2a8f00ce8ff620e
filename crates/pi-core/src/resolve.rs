// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Typed attribute resolution.
//!
//! A [`Resolver`] borrows the captured sources, the reference catalog, and
//! the configuration for the duration of one query. It holds no state of its
//! own, so the facades can build one per call.
//!
//! # Derivations
//! - **Base clock**: catalogued base clock for the resolved model name, else
//!   `max_clock / scaling_factor`.
//! - **Voltage**: the `over_voltage` payload when overclocked, else the
//!   catalogued voltage, else `default_voltage`.

use crate::boot_config::{is_config_enabled, BootConfig, FORCE_TURBO, OVER_VOLTAGE};
use crate::query::{cpuinfo_field, query, AttributeQuery};
use crate::units::{clock_in, leading_integer};
use crate::{CoreConfig, UnitMode};
use cpu_catalog::{ReferenceCatalog, ReferenceRecord};
use host_probe::RawSourceBundle;

/// Labels tried, in order, for the maximum clock speed. Older `lscpu`
/// prints `CPU MHz:`; on ARM boards only `CPU max MHz:` is present.
const CLOCK_LABELS: &[&str] = &["CPU MHz:", "CPU max MHz:"];

/// cpuinfo keys holding the feature list when `lscpu` is unavailable
/// (`Features` on ARM, `flags` on x86).
const CPUINFO_FLAG_KEYS: &[&str] = &["Features", "flags"];

/// A processor cache level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum CacheLevel {
    L1i,
    L1d,
    L2,
    L3,
}

impl CacheLevel {
    pub const ALL: [CacheLevel; 4] = [
        CacheLevel::L1i,
        CacheLevel::L1d,
        CacheLevel::L2,
        CacheLevel::L3,
    ];

    /// Field label in `lscpu` output.
    pub fn label(self) -> &'static str {
        match self {
            CacheLevel::L1i => "L1i cache:",
            CacheLevel::L1d => "L1d cache:",
            CacheLevel::L2 => "L2 cache:",
            CacheLevel::L3 => "L3 cache:",
        }
    }
}

/// A resolved cache size.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum CacheSize {
    /// The field as printed by the source (aliased mode).
    Text(String),
    /// The field converted to bytes by the configured policy (raw mode).
    Bytes(u64),
}

impl std::fmt::Display for CacheSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheSize::Text(text) => write!(f, "{text}"),
            CacheSize::Bytes(bytes) => write!(f, "{bytes} B"),
        }
    }
}

/// Which core count to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreCount {
    /// The `CPU(s):` field.
    Physical,
    /// `Thread(s) per core:` times `CPU(s):`.
    Logical,
}

/// Borrowed view used to answer one attribute query.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    sources: &'a RawSourceBundle,
    catalog: &'a ReferenceCatalog,
    config: &'a CoreConfig,
}

impl<'a> Resolver<'a> {
    pub fn new(
        sources: &'a RawSourceBundle,
        catalog: &'a ReferenceCatalog,
        config: &'a CoreConfig,
    ) -> Self {
        Self {
            sources,
            catalog,
            config,
        }
    }

    pub fn field(&self, label: &str) -> Option<String> {
        query(label, self.sources)
    }

    /// Processor model name (`Model name:`).
    pub fn name(&self) -> Option<String> {
        self.field("Model name:")
    }

    /// Catalog record for the resolved model name.
    pub fn record(&self) -> Option<&'a ReferenceRecord> {
        let name = self.name()?;
        self.catalog.lookup(&name)
    }

    /// Maximum clock speed in MHz, as reported by the sources.
    pub fn max_clock_mhz(&self) -> Option<f64> {
        CLOCK_LABELS
            .iter()
            .find_map(|label| self.field(label)?.parse::<f64>().ok())
    }

    pub fn max_clock_speed(&self, mode: UnitMode) -> Option<f64> {
        self.max_clock_mhz().map(|mhz| clock_in(mode, mhz))
    }

    /// Base clock speed in MHz: catalogued, or derived from the maximum.
    pub fn base_clock_mhz(&self) -> Option<f64> {
        if let Some(base) = self.record().and_then(|r| r.base_clock_speed) {
            return Some(base);
        }
        let derived = self.max_clock_mhz()? / self.config.scaling_factor;
        tracing::debug!(
            "base clock derived from max clock with scaling factor {}: {derived:.1} MHz",
            self.config.scaling_factor
        );
        Some(derived)
    }

    pub fn base_clock_speed(&self, mode: UnitMode) -> Option<f64> {
        self.base_clock_mhz().map(|mhz| clock_in(mode, mhz))
    }

    pub fn cache_size(&self, level: CacheLevel, mode: UnitMode) -> Option<CacheSize> {
        let attribute = AttributeQuery::new(level.label(), mode);
        let value = attribute.resolve(self.sources)?;
        match attribute.mode {
            UnitMode::Aliased => Some(CacheSize::Text(value)),
            UnitMode::Raw => {
                let figure = leading_integer(&value)?;
                let units = self.config.cache_units;
                let bytes = match level {
                    CacheLevel::L1i | CacheLevel::L1d => units.l1_bytes(figure),
                    CacheLevel::L2 | CacheLevel::L3 => units.l2_bytes(figure),
                };
                Some(CacheSize::Bytes(bytes))
            }
        }
    }

    fn boot_config(&self) -> Option<BootConfig<'a>> {
        self.sources.boot_config().map(BootConfig::new)
    }

    /// `true` iff the boot configuration has an active `over_voltage` line.
    pub fn is_overclocked(&self) -> bool {
        is_config_enabled(self.sources.boot_config(), OVER_VOLTAGE).unwrap_or(false)
    }

    /// `true` iff the boot configuration has an active `force_turbo` line.
    pub fn is_force_turbo(&self) -> bool {
        is_config_enabled(self.sources.boot_config(), FORCE_TURBO).unwrap_or(false)
    }

    /// Core voltage in volts. Always yields a value.
    pub fn voltage(&self) -> f64 {
        if self.is_overclocked() {
            if let Some(v) = self.boot_config().and_then(|c| c.numeric_value(OVER_VOLTAGE)) {
                return v;
            }
        }
        self.record()
            .and_then(|r| r.voltage)
            .unwrap_or(self.config.default_voltage)
    }

    pub fn release_date(&self) -> Option<String> {
        self.record().and_then(|r| r.release_date.clone())
    }

    /// Core count as text.
    ///
    /// `Physical` is the `CPU(s):` field exactly as reported, which may be a
    /// range such as `0-3` on some hosts. `Logical` is the computed product.
    pub fn cores_count(&self, count: CoreCount) -> Option<String> {
        match count {
            CoreCount::Physical => self.field("CPU(s):"),
            CoreCount::Logical => self.logical_cores().map(|n| n.to_string()),
        }
    }

    /// `Thread(s) per core:` times `CPU(s):`. `None` if either is not an integer.
    pub fn logical_cores(&self) -> Option<u32> {
        let cpus: u32 = self.field("CPU(s):")?.parse().ok()?;
        let threads: u32 = self.field("Thread(s) per core:")?.parse().ok()?;
        threads.checked_mul(cpus)
    }

    /// Feature flags in source order. Empty when unknown.
    pub fn flags(&self) -> Vec<String> {
        self.field("Flags:")
            .or_else(|| {
                CPUINFO_FLAG_KEYS
                    .iter()
                    .find_map(|key| cpuinfo_field(self.sources, key))
            })
            .map(|value| value.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
