// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Field lookup across the captured sources.
//!
//! Both `lscpu` and `/proc/cpuinfo` print one `Label: value` pair per line.
//! [`query`] looks a label up in `lscpu` output first and falls back to
//! `/proc/cpuinfo`, which is all that minimal images without util-linux
//! have.
//!
//! The fallback also applies when `lscpu` ran but did not print the label.

use crate::UnitMode;
use host_probe::RawSourceBundle;

/// A field label together with the unit form the caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeQuery<'a> {
    /// Label as it appears at the start of the line, usually ending in `:`.
    pub label: &'a str,
    pub mode: UnitMode,
}

impl<'a> AttributeQuery<'a> {
    pub fn new(label: &'a str, mode: UnitMode) -> Self {
        Self { label, mode }
    }

    /// Looks the label up in `sources`. See [`query`].
    pub fn resolve(&self, sources: &RawSourceBundle) -> Option<String> {
        query(self.label, sources)
    }
}

/// Resolves `field_label` against the system-info text, then the
/// processor-info text.
///
/// The first line starting with `field_label` wins. Its value is the text
/// after the first `:`, trimmed. Returns `None` if neither source has the
/// field or neither source is available.
pub fn query(field_label: &str, sources: &RawSourceBundle) -> Option<String> {
    if let Some(value) = sources
        .system_info()
        .and_then(|text| scan_lines(text, field_label))
    {
        return Some(value);
    }
    sources
        .cpuinfo()
        .and_then(|text| scan_lines(text, field_label))
}

/// Returns the value of the first line in `text` that starts with `label`.
pub fn scan_lines(text: &str, label: &str) -> Option<String> {
    text.lines()
        .find(|line| line.starts_with(label))
        .and_then(|line| line.split_once(':'))
        .map(|(_, value)| value.trim().to_string())
}

/// Looks up a `/proc/cpuinfo` key.
///
/// cpuinfo pads keys with tabs before the colon (`Serial\t\t: ...`), so the
/// key is compared after trimming. Only the processor-info source is read:
/// `lscpu` does not report board identity.
pub fn cpuinfo_field(sources: &RawSourceBundle, key: &str) -> Option<String> {
    sources.cpuinfo()?.lines().find_map(|line| {
        let (k, v) = line.split_once(':')?;
        (k.trim_end() == key).then(|| v.trim().to_string())
    })
}
