// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Read-only view of the firmware boot configuration (`config.txt`).
//!
//! Settings are `key=value` or bare `key` lines. A line starting with `#` is
//! disabled. The first line that mentions a setting decides its state.

/// Setting that raises the core voltage; its presence means overclocked.
pub const OVER_VOLTAGE: &str = "over_voltage";

/// Setting that pins the CPU at its maximum frequency.
pub const FORCE_TURBO: &str = "force_turbo";

/// Borrowed boot configuration text.
#[derive(Debug, Clone, Copy)]
pub struct BootConfig<'a> {
    text: &'a str,
}

impl<'a> BootConfig<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// First line containing `name` anywhere in it.
    fn find_line(&self, name: &str) -> Option<&'a str> {
        self.text.lines().find(|line| line.contains(name))
    }

    /// State of a setting.
    ///
    /// `Some(true)` if the first line mentioning `name` is active,
    /// `Some(false)` if it is commented out, `None` if no line mentions it.
    pub fn is_enabled(&self, name: &str) -> Option<bool> {
        self.find_line(name).map(|line| !line.starts_with('#'))
    }

    /// Payload after `=` on the deciding line, if that line is active.
    pub fn value(&self, name: &str) -> Option<&'a str> {
        let line = self.find_line(name)?;
        if line.starts_with('#') {
            return None;
        }
        let (_, value) = line.split_once('=')?;
        // Inline comments are allowed after the value.
        let value = value.split('#').next().unwrap_or("").trim();
        (!value.is_empty()).then_some(value)
    }

    /// Numeric payload of an active setting.
    pub fn numeric_value(&self, name: &str) -> Option<f64> {
        self.value(name)?.parse().ok()
    }
}

/// Convenience form of [`BootConfig::is_enabled`] over optional text.
pub fn is_config_enabled(text: Option<&str>, name: &str) -> Option<bool> {
    BootConfig::new(text?).is_enabled(name)
}
