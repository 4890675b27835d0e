// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Non-fatal diagnostics raised while running a test tree.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Authoring or infrastructure problem that does not change control flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// Script lacks the executable bit; execution is still attempted.
    NotExecutable { path: PathBuf },
    /// The process could not be started at all.
    SpawnFailed { path: PathBuf, message: String },
    /// `prog*.sh` scripts exist but no `*.out` files.
    ProgramsWithoutExpectations { dir: PathBuf },
    /// `*.out` files exist but no `prog*.sh` scripts.
    ExpectationsWithoutPrograms { dir: PathBuf },
    /// An expectation file could not be read.
    UnreadableExpectation { path: PathBuf, message: String },
    /// A subdirectory could not be listed; its subtree was skipped.
    UnreadableDirectory { dir: PathBuf, message: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::NotExecutable { path } => {
                write!(f, "{} is not executable", path.display())
            }
            Warning::SpawnFailed { path, message } => {
                write!(f, "{} is broken / not executable: {}", path.display(), message)
            }
            Warning::ProgramsWithoutExpectations { dir } => {
                write!(f, "Found prog*.sh without *.out files in {}", dir.display())
            }
            Warning::ExpectationsWithoutPrograms { dir } => {
                write!(f, "Found *.out files without prog*.sh in {}", dir.display())
            }
            Warning::UnreadableExpectation { path, message } => {
                write!(f, "cannot read {}: {}", path.display(), message)
            }
            Warning::UnreadableDirectory { dir, message } => {
                write!(f, "cannot list {}, skipping it: {}", dir.display(), message)
            }
        }
    }
}
