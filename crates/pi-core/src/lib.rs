// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # pi-core
//!
//! Hardware attribute resolution for Raspberry Pi class boards.
//!
//! Attributes are resolved from three captured texts (`lscpu` output,
//! `/proc/cpuinfo`, and the firmware `config.txt`) plus a catalog of known
//! processors. Lookups fall back from `lscpu` to `/proc/cpuinfo`; values no
//! source reports are derived:
//!
//! ```text
//! base clock = catalog[model].base_clock_speed  |  max clock / scaling_factor
//! voltage    = over_voltage (if active)  |  catalog[model].voltage  |  default_voltage
//! ```
//!
//! An attribute that cannot be determined is `None`. Only session startup
//! can fail, via [`CoreError`].
//!
//! # Example
//! ```no_run
//! use pi_core::{CoreConfig, PiCore, UnitMode};
//!
//! let core = PiCore::init(CoreConfig::default()).expect("unsupported host");
//! let cpu = core.processor();
//! println!("{:?}", cpu.name());
//! println!("{:?} MHz", cpu.base_clock_speed(UnitMode::Raw));
//! println!("{:?}", core.board().serial_number());
//! ```

mod board;
pub mod boot_config;
mod config;
mod error;
pub mod guard;
mod processor;
pub mod query;
mod resolve;
mod sensors;
mod session;
pub mod units;

pub use board::Pi;
pub use config::CoreConfig;
pub use error::CoreError;
pub use guard::HostPlatform;
pub use processor::{Processor, ProcessorReport};
pub use query::{query, AttributeQuery};
pub use resolve::{CacheLevel, CacheSize, CoreCount, Resolver};
pub use sensors::Sensors;
pub use session::PiCore;
pub use units::{CacheUnits, UnitMode};

pub use cpu_catalog::{ReferenceCatalog, ReferenceRecord};
pub use host_probe::{RawSourceBundle, ThermalReading};
