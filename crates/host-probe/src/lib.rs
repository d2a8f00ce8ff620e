// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # host-probe
//!
//! Acquires the raw text that hardware attributes are resolved from, and
//! answers the two questions asked before any resolution happens: which
//! distribution is this, and is it a virtual machine?
//!
//! # Sources
//! - **System info** — output of `lscpu`.
//! - **Processor info** — contents of `/proc/cpuinfo`.
//! - **Boot configuration** — `/boot/firmware/config.txt` or `/boot/config.txt`.
//!
//! Every source is a [`SourceProvider`]. A missing file or a missing command
//! is reported as [`Unavailable`], which downstream code treats as "no text",
//! never as a hard fault.
//!
//! # Example
//! ```no_run
//! use host_probe::{CommandSource, FileSource, RawSourceBundle};
//!
//! let bundle = RawSourceBundle::capture(
//!     &CommandSource::new("lscpu", Vec::<String>::new()),
//!     &FileSource::new("/proc/cpuinfo"),
//!     &FileSource::with_candidates(["/boot/firmware/config.txt", "/boot/config.txt"]),
//! );
//! println!("lscpu available: {}", bundle.system_info().is_some());
//! ```

mod bundle;
pub mod environment;
mod error;
mod source;
mod thermal;

pub use bundle::RawSourceBundle;
pub use environment::{resolve_distribution_id, VmProbe};
pub use error::{ProbeError, Unavailable};
pub use source::{CommandSource, FileSource, SourceProvider, StaticSource};
pub use thermal::{ThermalReading, THERMAL_ZONE_PATH};
