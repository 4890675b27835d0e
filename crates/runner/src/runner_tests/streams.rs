// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stdin feeding, concurrent draining, and capture limits.

use serial_test::serial;

use super::script;
use crate::{Invocation, ProcessRunner, TRUNCATION_NOTICE};

#[tokio::test]
#[serial]
async fn input_file_is_piped_to_stdin() {
    let (dir, path) = script("cat");
    let input = sc_core::test_support::write_file(dir.path(), "case1.in", "hello\nworld\n").unwrap();

    let output = ProcessRunner::new()
        .run(&Invocation::new(&path).stdin_file(&input))
        .await;
    assert_eq!(output.exit_code, 0);
    assert_eq!(output.stdout, "hello\nworld\n");
}

#[tokio::test]
#[serial]
async fn without_input_stdin_is_closed_immediately() {
    // `cat` would hang forever if stdin were left open.
    let (_dir, path) = script("cat\necho done");
    let output = ProcessRunner::new().run(&Invocation::new(&path)).await;
    assert_eq!(output.stdout, "done\n");
}

#[tokio::test]
#[serial]
async fn unread_input_does_not_fail_the_run() {
    let (dir, path) = script("exit 0");
    let big = "x".repeat(1_000_000);
    let input = sc_core::test_support::write_file(dir.path(), "big.in", &big).unwrap();

    let output = ProcessRunner::new()
        .run(&Invocation::new(&path).stdin_file(&input))
        .await;
    assert_eq!(output.exit_code, 0);
    assert!(output.warnings.is_empty());
}

#[tokio::test]
#[serial]
async fn heavy_output_on_both_streams_does_not_deadlock() {
    // Each burst is well beyond a typical 64 KiB pipe buffer.
    let (_dir, path) = script(
        "head -c 300000 /dev/zero | tr '\\0' 'a'\n\
         head -c 300000 /dev/zero | tr '\\0' 'b' >&2\n\
         head -c 300000 /dev/zero | tr '\\0' 'c'\n\
         exit 3",
    );
    let output = ProcessRunner::new().run(&Invocation::new(&path)).await;

    assert_eq!(output.exit_code, 3);
    assert_eq!(output.stdout.len(), 600_000);
    assert_eq!(output.stderr.len(), 300_000);
    assert!(output.stdout.starts_with('a') && output.stdout.ends_with('c'));
}

#[tokio::test]
#[serial]
async fn output_beyond_limit_is_truncated_and_drained() {
    let (_dir, path) = script(
        "head -c 500000 /dev/zero | tr '\\0' 'x'\n\
         echo finished >&2\n\
         exit 7",
    );
    let output = ProcessRunner::new()
        .capture_limit(1000)
        .run(&Invocation::new(&path))
        .await;

    // The child ran to completion even though most of its output was dropped.
    assert_eq!(output.exit_code, 7);
    assert_eq!(output.stderr, "finished\n");
    assert_eq!(output.stdout.len(), 1000 + TRUNCATION_NOTICE.len());
    assert!(output.stdout.ends_with(TRUNCATION_NOTICE));
}
