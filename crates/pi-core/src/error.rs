// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Startup errors.
//!
//! Attribute queries never fail: an attribute that cannot be determined is
//! `None`. The errors here are raised only while a [`crate::PiCore`] session
//! is being set up, when the whole attribute catalogue is at stake.

/// Errors that prevent a session from starting.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The host distribution is not one of the supported ones.
    #[error(
        "unsupported platform '{}': expected one of {}",
        .found.as_deref().unwrap_or("unknown"),
        .supported.join(", ")
    )]
    UnsupportedPlatform {
        /// Distribution id found in os-release, if any.
        found: Option<String>,
        supported: Vec<String>,
    },

    /// Debug mode is on and the host looks like a virtual machine.
    #[error("running on a virtual machine; disable debug mode to continue")]
    RunningOnVirtualMachine,

    /// The reference catalog is missing or malformed.
    #[error("reference catalog error: {0}")]
    Catalog(#[from] cpu_catalog::CatalogError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
