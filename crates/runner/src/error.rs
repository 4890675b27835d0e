// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process startup errors.
//!
//! These never escape [`ProcessRunner::run`](crate::ProcessRunner::run):
//! they are turned into a synthetic failed [`ProcessOutput`](crate::ProcessOutput)
//! so one broken submission cannot abort a whole run.

use std::path::PathBuf;

/// Errors that prevent a child process from running to completion.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Program not found, not executable, or not a valid executable format.
    #[error("failed to spawn `{command}`: {source}")]
    SpawnFailed {
        command: String,
        source: std::io::Error,
    },

    /// The file meant for the child's stdin could not be read.
    #[error("failed to read input file {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A standard stream was not piped as requested.
    #[error("child {0} was not captured")]
    MissingPipe(&'static str),

    /// Waiting for the child's exit status failed.
    #[error("failed to wait for `{command}`: {source}")]
    WaitFailed {
        command: String,
        source: std::io::Error,
    },
}
