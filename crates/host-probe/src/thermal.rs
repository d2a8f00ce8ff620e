// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! SoC temperature via `/sys/class/thermal/`.
//!
//! Thermal zone 0 reports the SoC temperature in millidegrees Celsius. On
//! the BCM2711 firmware throttling begins at 80 °C.

use crate::{FileSource, ProbeError, SourceProvider};

/// Throttling threshold for Broadcom Pi SoCs (degrees Celsius).
const THROTTLE_THRESHOLD_C: f32 = 80.0;

/// Default sysfs path for the CPU thermal zone.
pub const THERMAL_ZONE_PATH: &str = "/sys/class/thermal/thermal_zone0/temp";

/// A single SoC temperature reading.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ThermalReading {
    /// CPU temperature in degrees Celsius.
    pub cpu_temp_celsius: f32,
}

impl ThermalReading {
    /// Reads the default thermal zone.
    pub fn read() -> Result<Self, ProbeError> {
        Self::read_from(&FileSource::new(THERMAL_ZONE_PATH))
    }

    /// Reads and converts a millidegree value (e.g., `54321` is 54.321 °C).
    pub fn read_from(source: &dyn SourceProvider) -> Result<Self, ProbeError> {
        let content = source.fetch()?;
        let content = content.trim();
        let millidegrees: i64 = content.parse::<i64>().map_err(|_| ProbeError::ParseError {
            path: source.name().to_string(),
            detail: format!("expected integer millidegrees, got '{content}'"),
        })?;

        Ok(Self {
            cpu_temp_celsius: millidegrees as f32 / 1000.0,
        })
    }

    /// Returns `true` at or above the throttling threshold.
    pub fn is_overheating(&self) -> bool {
        self.cpu_temp_celsius >= THROTTLE_THRESHOLD_C
    }

    /// Degrees left before throttling. Negative when already throttling.
    pub fn headroom_celsius(&self) -> f32 {
        THROTTLE_THRESHOLD_C - self.cpu_temp_celsius
    }
}
