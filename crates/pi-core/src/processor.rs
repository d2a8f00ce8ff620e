// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Processor queries.

use crate::resolve::{CacheLevel, CacheSize, CoreCount, Resolver};
use crate::{CoreConfig, CoreError, PiCore, UnitMode};
use cpu_catalog::ReferenceCatalog;
use host_probe::RawSourceBundle;
use std::sync::Arc;

/// Processor attributes resolved from sources captured at construction.
///
/// # Example
/// ```no_run
/// use pi_core::{CoreConfig, Processor, UnitMode};
///
/// let cpu = Processor::new(CoreConfig::default()).unwrap();
/// println!("{:?} @ {:?} GHz", cpu.name(), cpu.max_clock_speed(UnitMode::Aliased));
/// ```
#[derive(Debug, Clone)]
pub struct Processor {
    sources: RawSourceBundle,
    catalog: Arc<ReferenceCatalog>,
    config: Arc<CoreConfig>,
}

impl Processor {
    /// Starts a session on this host and captures the processor sources.
    pub fn new(config: CoreConfig) -> Result<Self, CoreError> {
        Ok(PiCore::init(config)?.processor())
    }

    /// Builds a processor view over sources already in hand.
    pub fn with_sources(
        sources: RawSourceBundle,
        catalog: Arc<ReferenceCatalog>,
        config: Arc<CoreConfig>,
    ) -> Self {
        Self {
            sources,
            catalog,
            config,
        }
    }

    fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.sources, &self.catalog, &self.config)
    }

    pub fn sources(&self) -> &RawSourceBundle {
        &self.sources
    }

    pub fn name(&self) -> Option<String> {
        self.resolver().name()
    }

    pub fn architecture(&self) -> Option<String> {
        self.resolver().field("Architecture:")
    }

    pub fn family(&self) -> Option<String> {
        self.resolver().field("CPU family:")
    }

    pub fn stepping(&self) -> Option<String> {
        self.resolver().field("Stepping:")
    }

    /// `Physical` is the raw `CPU(s):` text; `Logical` the computed count.
    pub fn cores_count(&self, count: CoreCount) -> Option<String> {
        self.resolver().cores_count(count)
    }

    /// GHz rounded up in aliased mode, MHz in raw mode.
    pub fn max_clock_speed(&self, mode: UnitMode) -> Option<f64> {
        self.resolver().max_clock_speed(mode)
    }

    /// GHz rounded up in aliased mode, MHz in raw mode.
    pub fn base_clock_speed(&self, mode: UnitMode) -> Option<f64> {
        self.resolver().base_clock_speed(mode)
    }

    pub fn cache_size(&self, level: CacheLevel, mode: UnitMode) -> Option<CacheSize> {
        self.resolver().cache_size(level, mode)
    }

    pub fn l1i_cache_size(&self, mode: UnitMode) -> Option<CacheSize> {
        self.cache_size(CacheLevel::L1i, mode)
    }

    pub fn l1d_cache_size(&self, mode: UnitMode) -> Option<CacheSize> {
        self.cache_size(CacheLevel::L1d, mode)
    }

    pub fn l2_cache_size(&self, mode: UnitMode) -> Option<CacheSize> {
        self.cache_size(CacheLevel::L2, mode)
    }

    pub fn l3_cache_size(&self, mode: UnitMode) -> Option<CacheSize> {
        self.cache_size(CacheLevel::L3, mode)
    }

    pub fn is_overclocked(&self) -> bool {
        self.resolver().is_overclocked()
    }

    pub fn is_force_turbo(&self) -> bool {
        self.resolver().is_force_turbo()
    }

    /// Core voltage in volts.
    pub fn voltage(&self) -> f64 {
        self.resolver().voltage()
    }

    pub fn release_date(&self) -> Option<String> {
        self.resolver().release_date()
    }

    pub fn flags(&self) -> Vec<String> {
        self.resolver().flags()
    }

    /// Every processor attribute in one serialisable value.
    pub fn report(&self, mode: UnitMode) -> ProcessorReport {
        let r = self.resolver();
        ProcessorReport {
            unit_mode: mode,
            name: r.name(),
            architecture: self.architecture(),
            family: self.family(),
            stepping: self.stepping(),
            cores: r.cores_count(CoreCount::Physical),
            threads: r.logical_cores(),
            max_clock_speed: r.max_clock_speed(mode),
            base_clock_speed: r.base_clock_speed(mode),
            l1i_cache: r.cache_size(CacheLevel::L1i, mode),
            l1d_cache: r.cache_size(CacheLevel::L1d, mode),
            l2_cache: r.cache_size(CacheLevel::L2, mode),
            l3_cache: r.cache_size(CacheLevel::L3, mode),
            voltage: r.voltage(),
            release_date: r.release_date(),
            overclocked: r.is_overclocked(),
            force_turbo: r.is_force_turbo(),
            flags: r.flags(),
        }
    }
}

/// Snapshot of all processor attributes, as returned by [`Processor::report`].
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ProcessorReport {
    pub unit_mode: UnitMode,
    pub name: Option<String>,
    pub architecture: Option<String>,
    pub family: Option<String>,
    pub stepping: Option<String>,
    /// `CPU(s):` as reported.
    pub cores: Option<String>,
    pub threads: Option<u32>,
    pub max_clock_speed: Option<f64>,
    pub base_clock_speed: Option<f64>,
    pub l1i_cache: Option<CacheSize>,
    pub l1d_cache: Option<CacheSize>,
    pub l2_cache: Option<CacheSize>,
    pub l3_cache: Option<CacheSize>,
    pub voltage: f64,
    pub release_date: Option<String>,
    pub overclocked: bool,
    pub force_turbo: bool,
    pub flags: Vec<String>,
}
