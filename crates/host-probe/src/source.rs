// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Text providers for files, commands, and fixtures.
//!
//! Each provider yields either the full text or [`Unavailable`]. Providers do
//! no parsing and hold no cache: calling [`SourceProvider::fetch`] twice
//! reads twice. Caching is the job of [`crate::RawSourceBundle`].

use crate::Unavailable;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A source of raw, line-oriented text.
pub trait SourceProvider {
    /// Short human-readable name used in diagnostics (a path or a command).
    fn name(&self) -> &str;

    /// Reads the full text of the source.
    fn fetch(&self) -> Result<String, Unavailable>;
}

/// Reads a file, trying candidate paths in order.
///
/// The first candidate that exists is the one read. This covers files that
/// moved between OS releases, such as the boot configuration moving from
/// `/boot/config.txt` to `/boot/firmware/config.txt`.
#[derive(Debug, Clone)]
pub struct FileSource {
    candidates: Vec<PathBuf>,
    name: String,
}

impl FileSource {
    /// A source backed by a single path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        Self::with_candidates([path])
    }

    /// A source backed by several candidate paths, in priority order.
    pub fn with_candidates<I, P>(candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let candidates: Vec<PathBuf> = candidates.into_iter().map(Into::into).collect();
        let name = candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(" | ");
        Self { candidates, name }
    }

    /// Returns the first candidate path that exists, if any.
    pub fn resolved_path(&self) -> Option<&Path> {
        self.candidates
            .iter()
            .map(PathBuf::as_path)
            .find(|p| p.exists())
    }

    /// Returns `true` if any candidate path exists on this host.
    pub fn is_present(&self) -> bool {
        self.resolved_path().is_some()
    }
}

impl SourceProvider for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self) -> Result<String, Unavailable> {
        let path = self.resolved_path().ok_or_else(|| Unavailable::Missing {
            source_name: self.name.clone(),
        })?;
        std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Unavailable::Missing {
                source_name: path.display().to_string(),
            },
            _ => Unavailable::Failed {
                source_name: path.display().to_string(),
                detail: e.to_string(),
            },
        })
    }
}

/// Runs a command and captures its standard output.
///
/// The command is not given a timeout; a hung command blocks the caller.
#[derive(Debug, Clone)]
pub struct CommandSource {
    program: String,
    args: Vec<String>,
}

impl CommandSource {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a source from an argv-style list (`["lscpu"]`, `["lsmod"]`).
    ///
    /// Returns `None` for an empty list.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.iter().cloned()))
    }
}

impl SourceProvider for CommandSource {
    fn name(&self) -> &str {
        &self.program
    }

    fn fetch(&self) -> Result<String, Unavailable> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => Unavailable::Missing {
                    source_name: self.program.clone(),
                },
                _ => Unavailable::Failed {
                    source_name: self.program.clone(),
                    detail: e.to_string(),
                },
            })?;

        if !output.status.success() {
            return Err(Unavailable::Failed {
                source_name: self.program.clone(),
                detail: format!("exited with {}", output.status),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Fixed text, or a fixed absence. Used for fixtures and for callers that
/// already hold the text.
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    text: Option<String>,
}

impl StaticSource {
    /// A source that always returns `text`.
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
        }
    }

    /// A source that is always [`Unavailable::Missing`].
    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
        }
    }
}

impl SourceProvider for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self) -> Result<String, Unavailable> {
        self.text.clone().ok_or_else(|| Unavailable::Missing {
            source_name: self.name.clone(),
        })
    }
}
