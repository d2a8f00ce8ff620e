// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

/// Known specification of one processor model.
///
/// Every field is optional; a record may catalogue only part of a processor.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReferenceRecord {
    /// Base (non-boost) clock speed in MHz.
    #[serde(default)]
    pub base_clock_speed: Option<f64>,
    /// Nominal core voltage in volts.
    #[serde(default)]
    pub voltage: Option<f64>,
    /// Release date, `YYYY-MM-DD`.
    #[serde(default)]
    pub release_date: Option<String>,
}
