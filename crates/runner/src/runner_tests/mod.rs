// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the process runner.
//!
//! Every test that writes and then executes a script is `#[serial]`: a fork
//! from a concurrently running test can briefly inherit the write handle and
//! make `execve` fail with ETXTBSY.

mod basic;
mod builder;
mod failures;
mod streams;
mod timeout;

/// Scratch directory holding a single script named `script.sh`.
pub(crate) fn script(body: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = sc_core::test_support::write_script(dir.path(), "script.sh", body).unwrap();
    (dir, path)
}
