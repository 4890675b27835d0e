// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution phases within a test directory.
//!
//! Every directory is processed in the fixed order build → test → info →
//! prog. A phase determines both which scripts are picked up and how their
//! outcome is judged.

use serde::{Deserialize, Serialize};

/// Glob pattern for expected-output files paired with `prog*.sh` scripts.
pub const EXPECTATION_PATTERN: &str = "*.out";

/// Extension of expected-output files.
pub const EXPECTATION_EXTENSION: &str = "out";

/// Extension of the optional stdin file sitting next to an expectation.
pub const INPUT_EXTENSION: &str = "in";

/// One of the four per-directory phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Compile or prepare the submission; a failure aborts the directory.
    Build,
    /// Pass/fail by return code.
    Test,
    /// Diagnostic scripts whose output is always surfaced.
    Info,
    /// Programs whose stdout is compared against `*.out` files.
    Prog,
}

crate::simple_display! {
    Phase {
        Build => "build",
        Test => "test",
        Info => "info",
        Prog => "prog",
    }
}

impl Phase {
    /// All phases in execution order.
    pub const ALL: [Phase; 4] = [Phase::Build, Phase::Test, Phase::Info, Phase::Prog];

    /// File-name glob selecting this phase's scripts.
    pub fn script_pattern(self) -> &'static str {
        match self {
            Phase::Build => "build*.sh",
            Phase::Test => "test*.sh",
            Phase::Info => "info*.sh",
            Phase::Prog => "prog*.sh",
        }
    }

    /// Whether captured output is surfaced even when the check passes.
    pub fn always_show_output(self) -> bool {
        matches!(self, Phase::Info)
    }

    /// Whether a failing script stops processing of its directory.
    pub fn aborts_directory(self) -> bool {
        matches!(self, Phase::Build)
    }
}

#[cfg(test)]
#[path = "phase_tests.rs"]
mod tests;
