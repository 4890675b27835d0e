// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Duration;

use sc_core::{Check, Phase};
use sc_runner::ProcessOutput;

use super::*;

fn output(exit_code: i32, stdout: &str, stderr: &str) -> ProcessOutput {
    ProcessOutput {
        exit_code,
        stdout: stdout.to_string(),
        stderr: stderr.to_string(),
        duration: Duration::from_millis(12),
        timed_out: false,
        warnings: Vec::new(),
    }
}

#[yare::parameterized(
    zero     = { 0, true },
    one      = { 1, false },
    negative = { -1, false },
    large    = { 255, false },
)]
fn return_code_passes_only_on_zero(code: i32, pass: bool) {
    let record = Verdict::return_code(Phase::Test).judge(
        "test1".into(),
        Phase::Test,
        output(code, "out", "err"),
    );
    assert_eq!(record.pass, pass);
    assert_eq!(record.exit_code, code);
    assert_eq!(record.check, Check::ReturnCode);
    // Output is kept on the record regardless of outcome.
    assert_eq!(record.stdout, "out");
    assert_eq!(record.stderr, "err");
    assert_eq!(record.shows_output(), !pass);
}

#[test]
fn info_phase_always_shows_output() {
    let record =
        Verdict::return_code(Phase::Info).judge("info".into(), Phase::Info, output(0, "x", ""));
    assert!(record.pass);
    assert!(record.always_show_output);
    assert!(record.shows_output());
}

#[test]
fn record_carries_timing_and_timeout() {
    let mut out = output(-1, "", "");
    out.timed_out = true;
    let record = Verdict::return_code(Phase::Build).judge("build".into(), Phase::Build, out);
    assert!(!record.pass);
    assert!(record.timed_out);
    assert_eq!(record.duration_ms, 12);
}

#[test]
fn diff_is_reflexive() {
    let reference = "line one\n  line two  \n\nend\n";
    let record = Verdict::Diff {
        reference: Some(reference.into()),
    }
    .judge("prog-a.out".into(), Phase::Prog, output(0, reference, ""));
    assert!(record.pass);
    assert!(record.diff().unwrap().rendering.is_none());
}

#[test]
fn diff_tolerates_whitespace() {
    let record = Verdict::Diff {
        reference: Some("hello \n".into()),
    }
    .judge("prog-a.out".into(), Phase::Prog, output(0, "hello\n\n", ""));
    assert!(record.pass);
}

#[test]
fn diff_mismatch_renders_unified_diff() {
    let record = Verdict::Diff {
        reference: Some("a\nb\n".into()),
    }
    .judge("prog-a.out".into(), Phase::Prog, output(0, "a\nc\n", ""));
    assert!(!record.pass);
    let unified = &record.diff().unwrap().rendering.as_ref().unwrap().unified;
    assert!(unified.contains('b'));
    assert!(unified.contains('c'));
}

#[test]
fn diff_ignores_exit_code() {
    let record = Verdict::Diff {
        reference: Some("ok\n".into()),
    }
    .judge("prog-a.out".into(), Phase::Prog, output(3, "ok\n", ""));
    assert!(record.pass);
    assert_eq!(record.exit_code, 3);
}

#[test]
fn unreadable_reference_always_fails() {
    let record = Verdict::Diff { reference: None }.judge(
        "prog-a.out".into(),
        Phase::Prog,
        output(0, "", ""),
    );
    assert!(!record.pass);
    assert!(record.is_compare());
}
