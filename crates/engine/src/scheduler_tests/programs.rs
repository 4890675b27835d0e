// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Program/expectation cross product, input pairing and diff verdicts.

use std::time::Duration;

use sc_core::{Phase, Warning};
use sc_runner::ProcessRunner;
use serial_test::serial;

use super::{names, record, run, tree};
use crate::Scheduler;

#[tokio::test]
#[serial]
async fn every_program_runs_against_every_expectation() {
    let tmp = tree(&[
        ("progB.sh", "echo same"),
        ("progA.sh", "echo same"),
        ("case2.out", "same\n"),
        ("case1.out", "same\n"),
    ]);
    let sink = run(tmp.path()).await;

    assert_eq!(
        names(&sink),
        [
            "progA-case1.out",
            "progA-case2.out",
            "progB-case1.out",
            "progB-case2.out"
        ]
    );
    assert!(sink.all_passed());
    assert!(sink.records().iter().all(|r| r.phase == Phase::Prog));
}

#[tokio::test]
#[serial]
async fn matching_input_file_is_piped() {
    let tmp = tree(&[
        ("prog.sh", "cat"),
        ("case1.in", "hello\n"),
        ("case1.out", "hello\n"),
        ("case2.out", "hello\n"),
    ]);
    let sink = run(tmp.path()).await;

    let with_input = record(&sink, "prog-case1.out");
    assert!(with_input.pass);
    assert_eq!(with_input.stdout, "hello\n");

    // No case2.in: the program sees an empty, closed stdin.
    let without_input = record(&sink, "prog-case2.out");
    assert!(!without_input.pass);
    assert_eq!(without_input.stdout, "");
    assert_eq!(without_input.exit_code, 0);
}

#[tokio::test]
#[serial]
async fn whitespace_differences_pass() {
    let tmp = tree(&[("prog.sh", "printf 'hello\\n\\n'"), ("case.out", "hello \n")]);
    let sink = run(tmp.path()).await;
    assert!(record(&sink, "prog-case.out").pass);
}

#[tokio::test]
#[serial]
async fn mismatch_carries_diff_artifacts() {
    let tmp = tree(&[("prog.sh", "printf 'a\\nc\\n'"), ("case.out", "a\nb\n")]);
    let sink = run(tmp.path()).await;

    let rec = record(&sink, "prog-case.out");
    assert!(!rec.pass);
    let diff = rec.diff().unwrap();
    assert_eq!(diff.reference_lines, ["a\n", "b\n"]);
    assert_eq!(diff.submission_lines, ["a\n", "c\n"]);
    let rendering = diff.rendering.as_ref().unwrap();
    assert!(rendering.unified.contains("-b"));
    assert!(rendering.unified.contains("+c"));
    assert!(!rendering.side_by_side.is_empty());
}

#[tokio::test]
#[serial]
async fn programs_without_expectations_warn() {
    let tmp = tree(&[("prog.sh", "echo x")]);
    let sink = run(tmp.path()).await;

    assert!(sink.is_empty());
    assert_eq!(
        sink.warnings(),
        [Warning::ProgramsWithoutExpectations {
            dir: tmp.path().to_path_buf()
        }]
    );
}

#[tokio::test]
#[serial]
async fn expectations_without_programs_warn() {
    let tmp = tree(&[("case.out", "x\n"), ("test.sh", "exit 0")]);
    let sink = run(tmp.path()).await;

    assert_eq!(names(&sink), ["test"]);
    assert_eq!(
        sink.warnings(),
        [Warning::ExpectationsWithoutPrograms {
            dir: tmp.path().to_path_buf()
        }]
    );
}

#[tokio::test]
#[serial]
async fn runner_configuration_is_used() {
    let tmp = tree(&[
        ("prog.sh", "echo \"$GREETING\""),
        ("case.out", "hi\n"),
        ("test.sh", "exec sleep 30"),
    ]);
    let runner = ProcessRunner::new()
        .env("GREETING", "hi")
        .timeout(Duration::from_millis(300));
    let sink = Scheduler::new(tmp.path())
        .with_runner(runner)
        .run()
        .await
        .unwrap();

    assert!(record(&sink, "prog-case.out").pass);
    let hung = record(&sink, "test");
    assert!(!hung.pass);
    assert!(hung.timed_out);
}
