// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for source acquisition.

/// A raw source could not provide its text.
///
/// Both variants mean the same thing to attribute resolution: there is no
/// text to read. They are kept apart so that best-effort probes can stay
/// quiet about the expected case and log the unexpected one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Unavailable {
    /// The file or command does not exist on this host.
    #[error("{source_name} not found")]
    Missing { source_name: String },

    /// The file or command exists but could not be read or run.
    #[error("{source_name} failed: {detail}")]
    Failed { source_name: String, detail: String },
}

impl Unavailable {
    /// Returns `true` for the expected "not present on this host" case.
    pub fn is_missing(&self) -> bool {
        matches!(self, Unavailable::Missing { .. })
    }
}

/// Errors raised when reading a live sysfs value.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The sysfs file is not present (e.g., inside a container).
    #[error(transparent)]
    Unavailable(#[from] Unavailable),

    /// The file was read but its content is not the expected number.
    #[error("failed to parse value from {path}: {detail}")]
    ParseError { path: String, detail: String },
}
