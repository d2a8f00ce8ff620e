// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for catalog loading.

/// Errors that can occur when loading the reference catalog.
///
/// Every variant is fatal to startup: several derivations have no fallback
/// without the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog '{path}': {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// The catalog JSON is malformed.
    #[error("failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The catalog parsed but contains no processors.
    #[error("catalog contains no processor records")]
    Empty,
}
