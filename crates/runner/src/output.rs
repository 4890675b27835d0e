// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured result of one process run.

use std::time::Duration;

use sc_core::Warning;

/// Exit status and captured streams of one child process.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Exit code, `-1` when the child was terminated by a signal and `1`
    /// when it could not be started.
    pub exit_code: i32,
    /// Captured stdout, possibly ending with the truncation notice.
    pub stdout: String,
    /// Captured stderr, possibly ending with the truncation notice.
    pub stderr: String,
    pub duration: Duration,
    /// The configured timeout elapsed and the child was killed.
    pub timed_out: bool,
    /// Problems noticed while starting the child.
    pub warnings: Vec<Warning>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Synthetic result for a process that never ran.
    pub(crate) fn not_started(duration: Duration, warnings: Vec<Warning>) -> Self {
        Self {
            exit_code: 1,
            stdout: String::new(),
            stderr: String::new(),
            duration,
            timed_out: false,
            warnings,
        }
    }
}
