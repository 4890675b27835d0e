// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripts that cannot be started.

use sc_core::Warning;
use serial_test::serial;

use crate::{is_executable, Invocation, ProcessRunner};

#[tokio::test]
#[serial]
async fn missing_program_yields_synthetic_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.sh");

    let output = ProcessRunner::new().run(&Invocation::new(&path)).await;

    assert_eq!(output.exit_code, 1);
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
    assert!(output
        .warnings
        .iter()
        .any(|w| matches!(w, Warning::SpawnFailed { path: p, .. } if p == &path)));
}

#[tokio::test]
#[serial]
async fn non_executable_script_warns_and_still_attempts() {
    let dir = tempfile::tempdir().unwrap();
    let path =
        sc_core::test_support::write_file(dir.path(), "test1.sh", "#!/bin/sh\necho hi\n").unwrap();
    assert!(!is_executable(&path));

    let output = ProcessRunner::new().run(&Invocation::new(&path)).await;

    assert_eq!(
        output.warnings[0],
        Warning::NotExecutable { path: path.clone() }
    );
    // Without the execute bit the OS refuses to run it.
    assert_eq!(output.exit_code, 1);
    assert!(matches!(output.warnings[1], Warning::SpawnFailed { .. }));
}

#[tokio::test]
#[serial]
async fn unreadable_input_file_yields_synthetic_failure() {
    let (dir, path) = super::script("cat");
    let output = ProcessRunner::new()
        .run(&Invocation::new(&path).stdin_file(dir.path().join("nope.in")))
        .await;

    assert_eq!(output.exit_code, 1);
    match &output.warnings[..] {
        [Warning::SpawnFailed { message, .. }] => assert!(message.contains("nope.in")),
        other => panic!("expected one SpawnFailed warning, got: {other:?}"),
    }
}

#[test]
fn directories_are_not_executable() {
    let dir = tempfile::tempdir().unwrap();
    assert!(!is_executable(dir.path()));
}
