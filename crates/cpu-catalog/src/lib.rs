// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # cpu-catalog
//!
//! A read-only catalog of known processor specifications, keyed by the exact
//! model-name string reported by `lscpu` (e.g., `"Cortex-A72"`).
//!
//! The catalog fills in what the host cannot report about itself: the base
//! clock speed, the nominal core voltage, and the release date. A lookup miss
//! is normal: not every processor is catalogued.
//!
//! # Example
//! ```
//! use cpu_catalog::ReferenceCatalog;
//!
//! let catalog = ReferenceCatalog::bundled().unwrap();
//! let a72 = catalog.lookup("Cortex-A72").unwrap();
//! assert_eq!(a72.base_clock_speed, Some(1500.0));
//! assert!(catalog.lookup("Unknown CPU").is_none());
//! ```

mod catalog;
mod error;
mod record;

pub use catalog::ReferenceCatalog;
pub use error::CatalogError;
pub use record::ReferenceRecord;
