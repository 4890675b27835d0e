// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::time::Duration;

/// Per-script timeout from `SC_TIMEOUT_MS`. Unset, unparsable or zero means none.
pub fn timeout() -> Option<Duration> {
    std::env::var("SC_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}

/// Per-stream capture limit in bytes from `SC_CAPTURE_LIMIT`.
pub fn capture_limit() -> Option<usize> {
    std::env::var("SC_CAPTURE_LIMIT")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|limit| *limit > 0)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
