// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for ProcessRunner builder methods.

use std::time::Duration;

use serial_test::serial;

use super::script;
use crate::{Invocation, ProcessRunner, DEFAULT_CAPTURE_LIMIT};

#[test]
fn defaults() {
    let runner = ProcessRunner::default();
    assert_eq!(runner.get_capture_limit(), DEFAULT_CAPTURE_LIMIT);
    assert_eq!(DEFAULT_CAPTURE_LIMIT, 10_000_000);
    assert!(runner.get_timeout().is_none());
}

#[test]
fn setters_apply() {
    let runner = ProcessRunner::new()
        .capture_limit(64)
        .timeout(Duration::from_secs(3));
    assert_eq!(runner.get_capture_limit(), 64);
    assert_eq!(runner.get_timeout(), Some(Duration::from_secs(3)));
}

#[tokio::test]
#[serial]
async fn env_passes_variable_to_process() {
    let (_dir, path) = script("printf '%s' \"$SC_RUNNER_TEST_VAR\"");
    let output = ProcessRunner::new()
        .env("SC_RUNNER_TEST_VAR", "test_value")
        .run(&Invocation::new(&path))
        .await;

    assert_eq!(output.stdout, "test_value");
    // The ambient environment is untouched.
    assert!(std::env::var("SC_RUNNER_TEST_VAR").is_err());
}

#[tokio::test]
#[serial]
async fn envs_and_invocation_overrides_merge() {
    let (_dir, path) = script("echo \"$SC_A $SC_B\"");
    let output = ProcessRunner::new()
        .envs([("SC_A", "alpha"), ("SC_B", "beta")])
        .run(&Invocation::new(&path).env("SC_B", "override"))
        .await;

    assert_eq!(output.stdout, "alpha override\n");
}

#[tokio::test]
#[serial]
async fn ambient_environment_is_inherited() {
    let (_dir, path) = script("test -n \"$PATH\"");
    let output = ProcessRunner::new().run(&Invocation::new(&path)).await;
    assert_eq!(output.exit_code, 0);
}
