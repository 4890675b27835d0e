// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phase ordering, build short-circuit, and return-code records.

use sc_core::{Phase, Warning};
use serial_test::serial;

use super::{names, record, run, tree};
use crate::{DirOutcome, EngineError, Scheduler};

#[tokio::test]
#[serial]
async fn phases_run_in_order_within_a_directory() {
    let tmp = tree(&[
        ("info.sh", "echo info"),
        ("test2.sh", "exit 0"),
        ("test1.sh", "exit 0"),
        ("build.sh", "exit 0"),
    ]);
    let sink = run(tmp.path()).await;

    assert_eq!(names(&sink), ["build", "test1", "test2", "info"]);
    assert!(sink.all_passed());
    assert_eq!(record(&sink, "build").phase, Phase::Build);
    assert_eq!(record(&sink, "info").phase, Phase::Info);
}

#[tokio::test]
#[serial]
async fn failed_build_yields_single_record() {
    let tmp = tree(&[("build1.sh", "exit 1"), ("test1.sh", "exit 0")]);
    let sink = run(tmp.path()).await;

    assert_eq!(names(&sink), ["build1"]);
    let build = record(&sink, "build1");
    assert!(!build.pass);
    assert_eq!(build.exit_code, 1);
}

#[tokio::test]
#[serial]
async fn failed_build_stops_later_build_scripts() {
    let tmp = tree(&[
        ("build1.sh", "echo compiling; echo oops >&2; exit 2"),
        ("build2.sh", "exit 0"),
    ]);
    let outcome = Scheduler::new(tmp.path())
        .run_into(&mut sc_core::ResultSink::new(), &mut ())
        .await
        .unwrap();
    assert_eq!(
        outcome,
        DirOutcome::BuildFailed {
            script: tmp.path().join("build1.sh")
        }
    );

    let sink = run(tmp.path()).await;
    assert_eq!(names(&sink), ["build1"]);
    let build = record(&sink, "build1");
    assert_eq!(build.stdout, "compiling\n");
    assert_eq!(build.stderr, "oops\n");
    assert!(build.shows_output());
}

#[tokio::test]
#[serial]
async fn unstartable_build_counts_as_failure() {
    let tmp = tree(&[("test1.sh", "exit 0")]);
    sc_core::test_support::write_file(tmp.path(), "build.sh", "#!/bin/sh\nexit 0\n").unwrap();

    let sink = run(tmp.path()).await;

    assert_eq!(names(&sink), ["build"]);
    assert_eq!(record(&sink, "build").exit_code, 1);
    assert!(sink
        .warnings()
        .iter()
        .any(|w| matches!(w, Warning::NotExecutable { .. })));
    assert!(sink
        .warnings()
        .iter()
        .any(|w| matches!(w, Warning::SpawnFailed { .. })));
}

#[tokio::test]
#[serial]
async fn failing_tests_do_not_stop_the_directory() {
    let tmp = tree(&[
        ("test1.sh", "echo bad; exit 4"),
        ("test2.sh", "exit 0"),
        ("info.sh", "echo diagnostics"),
    ]);
    let sink = run(tmp.path()).await;

    assert_eq!(names(&sink), ["test1", "test2", "info"]);
    let failed = record(&sink, "test1");
    assert!(!failed.pass);
    assert_eq!(failed.exit_code, 4);
    assert_eq!(failed.stdout, "bad\n");
    assert!(record(&sink, "test2").pass);
}

#[tokio::test]
#[serial]
async fn info_records_always_show_output() {
    let tmp = tree(&[("info.sh", "echo diagnostics"), ("test.sh", "echo quiet")]);
    let sink = run(tmp.path()).await;

    let info = record(&sink, "info");
    assert!(info.pass);
    assert!(info.always_show_output);
    assert!(info.shows_output());
    assert_eq!(info.stdout, "diagnostics\n");

    let test = record(&sink, "test");
    assert!(!test.shows_output());
}

#[tokio::test]
async fn missing_root_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let err = Scheduler::new(tmp.path().join("nope")).run().await.unwrap_err();
    assert!(matches!(err, EngineError::NotADirectory(_)));
}

#[tokio::test]
async fn file_root_is_an_error() {
    let tmp = tree(&[("notes.txt", "x")]);
    let err = Scheduler::new(tmp.path().join("notes.txt"))
        .run()
        .await
        .unwrap_err();
    assert!(err.to_string().contains("not a directory"));
}

#[tokio::test]
async fn empty_tree_yields_empty_sink() {
    let tmp = tempfile::tempdir().unwrap();
    let sink = run(tmp.path()).await;
    assert!(sink.is_empty());
    assert!(sink.warnings().is_empty());
}
