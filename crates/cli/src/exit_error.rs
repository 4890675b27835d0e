// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! `run()` returns `ExitError` for outcomes that are not infrastructure
//! failures (a test tree with failing checks), leaving process termination
//! to `main()`.

use std::fmt;

/// Exit code when every check passed.
pub const EXIT_PASSED: i32 = 0;
/// Exit code when at least one check failed.
pub const EXIT_FAILED: i32 = 1;
/// Exit code for usage and infrastructure errors.
pub const EXIT_ERROR: i32 = 2;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Failing checks: the report already explains them.
    pub fn failed() -> Self {
        Self::new(EXIT_FAILED, "")
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

/// Map the outcome of `run()` to a process exit code, printing any message.
pub fn exit_code(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => EXIT_PASSED,
        Err(e) => match e.downcast_ref::<ExitError>() {
            Some(exit) => {
                if !exit.message.is_empty() {
                    eprintln!("{}", exit.message);
                }
                exit.code
            }
            None => {
                eprintln!("Error: {e:#}");
                EXIT_ERROR
            }
        },
    }
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
