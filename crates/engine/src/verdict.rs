// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Turning a finished process into a [`TestRecord`].

use sc_core::{Check, DiffArtifacts, Phase, TestRecord};
use sc_runner::ProcessOutput;

/// The closed set of verdict strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Pass iff exit code is 0.
    ReturnCode { always_show_output: bool },
    /// Pass iff normalized stdout equals the normalized reference.
    ///
    /// `reference` is `None` when the expectation file could not be read;
    /// the check then always fails.
    Diff { reference: Option<String> },
}

impl Verdict {
    /// Return-code verdict configured for `phase`.
    pub fn return_code(phase: Phase) -> Self {
        Verdict::ReturnCode {
            always_show_output: phase.always_show_output(),
        }
    }

    /// Judge `output` and build the record named `name`.
    pub fn judge(self, name: String, phase: Phase, output: ProcessOutput) -> TestRecord {
        let (pass, always_show_output, check) = match self {
            Verdict::ReturnCode { always_show_output } => {
                (output.exit_code == 0, always_show_output, Check::ReturnCode)
            }
            Verdict::Diff { reference } => {
                let readable = reference.is_some();
                let artifacts =
                    DiffArtifacts::compare(reference.as_deref().unwrap_or_default(), &output.stdout);
                (readable && artifacts.matches(), false, Check::Diff(artifacts))
            }
        };

        let record = TestRecord {
            name,
            phase,
            exit_code: output.exit_code,
            stdout: output.stdout,
            stderr: output.stderr,
            pass,
            always_show_output,
            duration_ms: output.duration.as_millis() as u64,
            timed_out: output.timed_out,
            check,
        };

        match (record.is_compare(), record.pass) {
            (false, true) => tracing::info!(name = %record.name, "test pass"),
            (false, false) => {
                tracing::info!(name = %record.name, exit_code = record.exit_code, "test fail")
            }
            (true, true) => tracing::info!(name = %record.name, "compare test pass"),
            (true, false) => tracing::info!(name = %record.name, "compare test fail"),
        }
        record
    }
}

#[cfg(test)]
#[path = "verdict_tests.rs"]
mod tests;
