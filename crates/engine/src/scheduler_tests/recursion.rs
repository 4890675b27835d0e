// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Depth-first recursion into subdirectories.

use sc_core::{ResultSink, Warning};
use serial_test::serial;

use super::{names, run, tree};
use crate::Scheduler;

#[tokio::test]
#[serial]
async fn subdirectories_run_depth_first_in_name_order() {
    let tmp = tree(&[
        ("test.sh", "exit 0"),
        ("b/test.sh", "exit 0"),
        ("a/test.sh", "exit 0"),
        ("a/x/test.sh", "exit 0"),
        ("a/build.sh", "exit 0"),
    ]);
    let sink = run(tmp.path()).await;

    assert_eq!(
        names(&sink),
        ["test", "a/build", "a/test", "a/x/test", "b/test"]
    );
}

#[tokio::test]
#[serial]
async fn parent_files_run_before_subdirectories() {
    let tmp = tree(&[
        ("sub/test.sh", "exit 0"),
        ("prog.sh", "echo 1"),
        ("one.out", "1\n"),
    ]);
    let sink = run(tmp.path()).await;
    assert_eq!(names(&sink), ["prog-one.out", "sub/test"]);
}

#[tokio::test]
#[serial]
async fn failed_build_skips_subdirectories() {
    let tmp = tree(&[
        ("build.sh", "exit 1"),
        ("q1/test.sh", "exit 0"),
        ("q2/build.sh", "exit 0"),
    ]);
    let sink = run(tmp.path()).await;
    assert_eq!(names(&sink), ["build"]);
}

#[tokio::test]
#[serial]
async fn failed_build_in_subdirectory_only_stops_that_subtree() {
    let tmp = tree(&[
        ("a/build.sh", "exit 1"),
        ("a/test.sh", "exit 0"),
        ("a/deeper/test.sh", "exit 0"),
        ("b/test.sh", "exit 0"),
    ]);
    let sink = run(tmp.path()).await;
    assert_eq!(names(&sink), ["a/build", "b/test"]);
}

#[tokio::test]
#[serial]
async fn independent_runs_use_independent_sinks() {
    let tmp = tree(&[("test.sh", "exit 0")]);
    let scheduler = Scheduler::new(tmp.path());

    let first = scheduler.run().await.unwrap();
    let mut second = ResultSink::new();
    scheduler.run_into(&mut second, &mut ()).await.unwrap();
    scheduler.run_into(&mut second, &mut ()).await.unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 2);
}

#[tokio::test]
#[serial]
async fn scripts_created_by_build_are_run() {
    let tmp = tree(&[(
        "build.sh",
        r#"d="$(dirname "$0")"
printf '#!/bin/sh\nexit 0\n' > "$d/test1.sh"
chmod +x "$d/test1.sh"
mkdir -p "$d/gen"
printf '#!/bin/sh\nexit 0\n' > "$d/gen/test.sh"
chmod +x "$d/gen/test.sh""#,
    )]);
    let sink = run(tmp.path()).await;
    assert_eq!(names(&sink), ["build", "test1", "gen/test"]);
}

#[tokio::test]
#[serial]
async fn expectations_created_by_build_are_compared() {
    let tmp = tree(&[
        ("build.sh", r#"echo 42 > "$(dirname "$0")/answer.out""#),
        ("prog.sh", "echo 42"),
    ]);
    let sink = run(tmp.path()).await;
    assert_eq!(names(&sink), ["build", "prog-answer.out"]);
    assert!(sink.all_passed());
    assert!(sink.warnings().is_empty());
}

#[tokio::test]
#[serial]
async fn vanished_subdirectory_is_skipped_with_warning() {
    let tmp = tree(&[
        ("a/build.sh", r#"rm -rf "$(dirname "$0")""#),
        ("a/test.sh", "exit 0"),
        ("b/test.sh", "exit 0"),
    ]);
    let sink = run(tmp.path()).await;

    assert_eq!(names(&sink), ["a/build", "b/test"]);
    match sink.warnings() {
        [Warning::UnreadableDirectory { dir, .. }] => assert_eq!(dir, &tmp.path().join("a")),
        other => panic!("unexpected warnings: {other:?}"),
    }
}
