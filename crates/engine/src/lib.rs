// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sc-engine: test discovery, phase scheduling and verdicts.

pub mod discover;
mod error;
pub mod naming;
mod progress;
mod scheduler;
pub mod verdict;

pub use discover::{input_for, DirListing};
pub use error::EngineError;
pub use naming::{compare_name, display_name};
pub use progress::Observer;
pub use scheduler::{DirOutcome, Scheduler};
pub use verdict::Verdict;
