// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Unit handling for resolved attributes.
//!
//! Clock speeds arrive in MHz and cache sizes in the units `lscpu` prints.
//! [`UnitMode`] picks between a display form and the raw number.
//!
//! # Cache conversion
//! [`CacheUnits::Legacy`] reproduces the established output of this tool:
//! L1 sizes are *divided* by 1024 and L2/L3 sizes are multiplied by 2048.
//! Both factors are dimensionally suspect. [`CacheUnits::Binary`] applies
//! true binary prefixes and can be selected in configuration.

/// Whether an attribute is returned in display form or as a raw number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitMode {
    /// Human-friendly form: whole GHz, cache sizes as printed by the source.
    #[default]
    Aliased,
    /// Raw measurement: MHz, cache sizes converted to bytes.
    Raw,
}

impl UnitMode {
    pub fn from_raw_flag(raw: bool) -> Self {
        if raw {
            UnitMode::Raw
        } else {
            UnitMode::Aliased
        }
    }
}

/// Rounds a MHz figure *up* to whole GHz for display (`2400 → 3`, `800 → 1`).
pub fn aliased_clock(mhz: f64) -> f64 {
    (mhz / 1000.0).ceil()
}

/// Applies `mode` to a clock speed in MHz.
pub fn clock_in(mode: UnitMode, mhz: f64) -> f64 {
    match mode {
        UnitMode::Aliased => aliased_clock(mhz),
        UnitMode::Raw => mhz,
    }
}

/// Cache size conversion policy for [`UnitMode::Raw`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheUnits {
    /// `l1 = kb / 1024` (floor), `l2/l3 = mb * 2048`.
    #[default]
    Legacy,
    /// `l1 = kb * 1024`, `l2/l3 = mb * 1024 * 1024`.
    Binary,
}

impl CacheUnits {
    /// Converts an L1 figure reported in kilobytes.
    pub fn l1_bytes(self, kb: u64) -> u64 {
        match self {
            CacheUnits::Legacy => kb / 1024,
            CacheUnits::Binary => kb.saturating_mul(1024),
        }
    }

    /// Converts an L2/L3 figure reported in megabytes.
    pub fn l2_bytes(self, mb: u64) -> u64 {
        match self {
            CacheUnits::Legacy => mb.saturating_mul(2048),
            CacheUnits::Binary => mb.saturating_mul(1024 * 1024),
        }
    }
}

/// Parses the leading unsigned integer of a field value.
///
/// `"128 KiB (4 instances)"` → 128, `"32K"` → 32, `"n/a"` → `None`.
pub fn leading_integer(value: &str) -> Option<u64> {
    let value = value.trim_start();
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..end].parse().ok()
}
