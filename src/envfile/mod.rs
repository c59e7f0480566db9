// voxctl: Voice Agent & Telephony CLI
//
// SPDX-FileCopyrightText: 2026 voxctl Contributors
// SPDX-License-Identifier: MIT

//! Environment record: the shared `KEY=VALUE` file on disk.
//!
//! ```text
//! EnvFile::load(".env")
//!     |
//!     v
//! Vec<Line>  Pair { key, value } | Raw (comments, blanks, malformed)
//!     |
//!  get / set
//!     |
//!     v
//! save() --> temp file in same dir --> atomic rename over original
//! ```
//!
//! Invariants:
//! - `set` rewrites an existing key's line in place, keeping file order;
//!   a new key is appended. After `set`, the key appears exactly once.
//! - Lines that are not `KEY=VALUE` pairs round-trip byte-identically.
//! - A missing file loads as an empty record; `save` creates it.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{EnvFileError, VoxResult};


/// One line of the record.
#[derive(Debug, Clone)]
enum Line {
    /// A `KEY=VALUE` pair. Key and value are stored exactly as split so
    /// untouched pairs re-emit byte-identically.
    Pair { key: String, value: String },
    /// Anything else: blank lines, `#` comments, malformed lines.
    Raw(String),
}

/// In-memory view of an environment record file.
#[derive(Debug, Clone)]
pub struct EnvFile {
    path: PathBuf,
    lines: Vec<Line>,
}

impl EnvFile {
    /// Load the record at `path`. A missing file yields an empty record
    /// bound to that path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn load(path: impl Into<PathBuf>) -> VoxResult<Self> {
        let path = path.into();
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(EnvFileError::ReadError {
                    path: path.display().to_string(),
                    source: e,
                }
                .into());
            }
        };

        let lines = content.lines().map(parse_line).collect();
        Ok(Self { path, lines })
    }

    /// The path this record was loaded from and will be saved to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a key. Comments and malformed lines never match.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            Line::Pair { key: k, value } if k.trim() == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// Set `key` to `value`: rewrite the first matching line in place,
    /// drop any duplicate lines for the same key, or append if absent.
    pub fn set(&mut self, key: &str, value: &str) {
        let mut found = false;
        self.lines.retain_mut(|line| {
            let Line::Pair { key: k, value: v } = line else {
                return true;
            };
            if k.trim() != key {
                return true;
            }
            if found {
                // Duplicate of an already-updated key
                return false;
            }
            found = true;
            *k = key.to_string();
            *v = value.to_string();
            true
        });

        if !found {
            self.lines.push(Line::Pair {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
    }

    /// Render the record back to its textual form.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match line {
                Line::Pair { key, value } => {
                    out.push_str(key);
                    out.push('=');
                    out.push_str(value);
                }
                Line::Raw(raw) => out.push_str(raw),
            }
            out.push('\n');
        }
        out
    }

    /// Write the record back to disk atomically: the content goes to a
    /// temporary file in the same directory, which is then renamed over
    /// the original. A crash mid-write leaves the old record intact.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be created, written,
    /// or renamed into place.
    pub fn save(&self) -> VoxResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let write_err = |message: String| EnvFileError::WriteError {
            path: self.path.display().to_string(),
            message,
        };

        let mut temp = tempfile::NamedTempFile::new_in(dir)
            .map_err(|e| write_err(format!("failed to create temp file: {e}")))?;
        temp.write_all(self.to_string_lossy().as_bytes())
            .map_err(|e| write_err(format!("failed to write temp file: {e}")))?;
        temp.flush()
            .map_err(|e| write_err(format!("failed to flush temp file: {e}")))?;
        temp.persist(&self.path)
            .map_err(|e| write_err(format!("failed to rename into place: {e}")))?;

        Ok(())
    }
}

fn parse_line(line: &str) -> Line {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Line::Raw(line.to_string());
    }
    match line.split_once('=') {
        Some((key, value)) => Line::Pair {
            key: key.to_string(),
            value: value.to_string(),
        },
        None => Line::Raw(line.to_string()),
    }
}
