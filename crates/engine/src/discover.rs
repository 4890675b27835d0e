// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-directory script discovery.
//!
//! Discovery is non-recursive: a listing only sees the regular files and
//! immediate subdirectories of one directory, both sorted by name.

use std::path::{Path, PathBuf};

use sc_core::{Phase, EXPECTATION_EXTENSION, EXPECTATION_PATTERN, INPUT_EXTENSION};

use crate::error::EngineError;

/// Sorted regular files and subdirectories of one directory.
#[derive(Debug, Clone, Default)]
pub struct DirListing {
    files: Vec<PathBuf>,
    subdirs: Vec<PathBuf>,
}

impl DirListing {
    /// List `dir`. Symlinks are followed; entries that are neither files nor
    /// directories (or whose target is gone) are ignored.
    pub fn read(dir: &Path) -> Result<Self, EngineError> {
        let read_err = |source| EngineError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut entries = std::fs::read_dir(dir)
            .map_err(read_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_err)?;
        entries.sort_by_key(|e| e.file_name());

        let mut listing = DirListing::default();
        for entry in entries {
            let path = entry.path();
            match std::fs::metadata(&path) {
                Ok(meta) if meta.is_file() => listing.files.push(path),
                Ok(meta) if meta.is_dir() => listing.subdirs.push(path),
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "skipping entry");
                }
            }
        }
        tracing::debug!(
            dir = %dir.display(),
            files = listing.files.len(),
            subdirs = listing.subdirs.len(),
            "listed directory"
        );
        Ok(listing)
    }

    /// Scripts belonging to `phase`, in name order.
    pub fn scripts(&self, phase: Phase) -> Result<Vec<PathBuf>, EngineError> {
        self.matching(phase.script_pattern())
    }

    /// Expected-output files (`*.out`), in name order.
    pub fn expectations(&self) -> Result<Vec<PathBuf>, EngineError> {
        self.matching(EXPECTATION_PATTERN)
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn subdirs(&self) -> &[PathBuf] {
        &self.subdirs
    }

    fn matching(&self, pattern: &str) -> Result<Vec<PathBuf>, EngineError> {
        let compiled = glob::Pattern::new(pattern).map_err(|e| EngineError::Pattern {
            pattern: pattern.to_string(),
            message: e.msg.to_string(),
        })?;
        let found: Vec<PathBuf> = self
            .files
            .iter()
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|name| compiled.matches(name))
            })
            .cloned()
            .collect();
        tracing::debug!(pattern, count = found.len(), "matched files");
        Ok(found)
    }
}

/// The stdin file paired with an expectation: same path with `.out`
/// replaced by `.in`, if that is a regular file. Paths without the `.out`
/// extension have no input.
pub fn input_for(expectation: &Path) -> Option<PathBuf> {
    if expectation.extension().and_then(|e| e.to_str()) != Some(EXPECTATION_EXTENSION) {
        return None;
    }
    let input = expectation.with_extension(INPUT_EXTENSION);
    input.is_file().then_some(input)
}

#[cfg(test)]
#[path = "discover_tests.rs"]
mod tests;
