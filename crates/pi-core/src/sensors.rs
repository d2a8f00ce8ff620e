// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Live readings the kernel exposes directly.
//!
//! Unlike [`crate::Pi`] and [`crate::Processor`], nothing here is captured
//! up front: each call reads the current value.

use host_probe::{FileSource, ThermalReading};

#[derive(Debug, Clone)]
pub struct Sensors {
    thermal_zone: FileSource,
}

impl Sensors {
    pub fn new(thermal_zone: FileSource) -> Self {
        Self { thermal_zone }
    }

    /// Current SoC temperature, or `None` if the thermal zone is unreadable.
    pub fn thermal(&self) -> Option<ThermalReading> {
        ThermalReading::read_from(&self.thermal_zone)
            .map_err(|e| tracing::debug!("temperature unavailable: {e}"))
            .ok()
    }

    /// Current SoC temperature in degrees Celsius.
    pub fn cpu_temperature(&self) -> Option<f32> {
        self.thermal().map(|t| t.cpu_temp_celsius)
    }
}
