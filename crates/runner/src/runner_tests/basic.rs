// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exit codes and basic stream capture.

use serial_test::serial;

use super::script;
use crate::{Invocation, ProcessRunner};

#[tokio::test]
#[serial]
async fn captures_stdout_and_stderr_separately() {
    let (_dir, path) = script("echo out\necho err >&2");
    let output = ProcessRunner::new().run(&Invocation::new(&path)).await;

    assert_eq!(output.exit_code, 0);
    assert!(output.success());
    assert_eq!(output.stdout, "out\n");
    assert_eq!(output.stderr, "err\n");
    assert!(output.warnings.is_empty());
    assert!(!output.timed_out);
}

#[tokio::test]
#[serial]
async fn exit_code_is_reported() {
    for code in [0, 1, 42] {
        let (_dir, path) = script(&format!("exit {code}"));
        let output = ProcessRunner::new().run(&Invocation::new(&path)).await;
        assert_eq!(output.exit_code, code);
        assert_eq!(output.success(), code == 0);
    }
}

#[tokio::test]
#[serial]
async fn arguments_are_passed_without_shell_parsing() {
    let (_dir, path) = script("printf '%s|' \"$@\"");
    let invocation = Invocation::new(&path).arg("a b").args(["$HOME", "*"]);
    let output = ProcessRunner::new().run(&invocation).await;
    assert_eq!(output.stdout, "a b|$HOME|*|");
}

#[tokio::test]
#[serial]
async fn bare_program_names_resolve_through_path() {
    let output = ProcessRunner::new()
        .run(&Invocation::new("sh").args(["-c", "echo via-path"]))
        .await;
    assert_eq!(output.stdout, "via-path\n");
    assert!(output.warnings.is_empty());
}

#[test]
fn display_joins_argv() {
    let invocation = Invocation::new("/t/prog.sh").arg("x").arg("y z");
    assert_eq!(invocation.display(), "/t/prog.sh x y z");
    assert!(invocation.stdin().is_none());
}
