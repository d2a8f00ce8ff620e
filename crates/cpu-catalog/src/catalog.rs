// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! JSON catalog loading and lookup.
//!
//! # Format
//! ```json
//! {
//!   "Cortex-A72": {
//!     "base_clock_speed": 1500,
//!     "voltage": 0.8875,
//!     "release_date": "2019-06-24"
//!   }
//! }
//! ```

use crate::{CatalogError, ReferenceRecord};
use std::collections::BTreeMap;
use std::path::Path;

/// Catalog shipped inside the crate.
const BUNDLED_CATALOG: &str = include_str!("../data/cpu_data.json");

/// Processor specifications keyed by exact model name.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ReferenceCatalog {
    records: BTreeMap<String, ReferenceRecord>,
}

impl ReferenceCatalog {
    /// Parses the catalog bundled with this crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Loads a catalog from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Parses a catalog from a JSON string. An empty catalog is rejected.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        if catalog.records.is_empty() {
            return Err(CatalogError::Empty);
        }
        tracing::debug!("reference catalog loaded: {} processors", catalog.len());
        Ok(catalog)
    }

    /// Looks up a processor by its exact model name.
    pub fn lookup(&self, model_name: &str) -> Option<&ReferenceRecord> {
        let record = self.records.get(model_name);
        if record.is_none() {
            tracing::debug!("processor '{model_name}' is not catalogued");
        }
        record
    }

    /// Number of catalogued processors.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Catalogued model names, sorted.
    pub fn model_names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}
