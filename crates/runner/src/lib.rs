// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sc-runner: run one external program with bounded, non-blocking capture
//! of its standard output and standard error.

mod capture;
mod error;
mod invocation;
mod output;
mod runner;

pub use capture::TRUNCATION_NOTICE;
pub use error::RunError;
pub use invocation::Invocation;
pub use output::ProcessOutput;
pub use runner::{is_executable, ProcessRunner, DEFAULT_CAPTURE_LIMIT};
