// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test records: the outcome of one executed check.

use serde::{Deserialize, Serialize};

use crate::diff::DiffArtifacts;
use crate::phase::Phase;

/// Verdict strategy that produced a record, with its strategy-specific data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Check {
    /// Pass iff the process exited with status 0.
    ReturnCode,
    /// Pass iff normalized stdout equals the normalized expectation file.
    Diff(DiffArtifacts),
}

/// Result of one executed check. Immutable once pushed into a
/// [`ResultSink`](crate::ResultSink).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRecord {
    /// Script path relative to the test root without extension, plus
    /// `-<expectation file>` for diff checks.
    pub name: String,
    pub phase: Phase,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub pass: bool,
    /// Surface stdout/stderr even when the check passed.
    pub always_show_output: bool,
    pub duration_ms: u64,
    pub timed_out: bool,
    pub check: Check,
}

impl TestRecord {
    /// Whether a report should print the captured output for this record.
    pub fn shows_output(&self) -> bool {
        !self.pass || self.always_show_output
    }

    /// Diff artifacts, for records produced by the diff strategy.
    pub fn diff(&self) -> Option<&DiffArtifacts> {
        match &self.check {
            Check::Diff(artifacts) => Some(artifacts),
            Check::ReturnCode => None,
        }
    }

    pub fn is_compare(&self) -> bool {
        matches!(self.check, Check::Diff(_))
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
