// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs

use crate::prelude::*;

#[test]
fn help_shows_usage_and_options() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("<TESTDIR>")
        .stdout_has("--html")
        .stdout_has("--timeout");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn missing_testdir_is_a_usage_error() {
    cli().errors();
}

#[test]
fn malformed_env_pair_is_rejected() {
    cli().args(&["-e", "NOEQUALS", "somewhere"]).errors();
}
