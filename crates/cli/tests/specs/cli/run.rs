// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Running test trees end to end

use crate::prelude::*;

#[test]
#[serial]
fn all_passing_tree_exits_zero() {
    let project = Project::empty();
    project
        .script("build.sh", "echo building")
        .script("test1.sh", "exit 0")
        .script("prog.sh", "read name; echo \"hello $name\"")
        .file("greet.in", "world\n")
        .file("greet.out", "hello world\n");

    cli()
        .arg_path(&project.root())
        .passes()
        .stdout_has("** Test pass : build\n")
        .stdout_has("** Test pass : test1\n")
        .stdout_has("** Compare test pass : prog-greet.out\n")
        .stdout_has("Summary: 3 passed, 0 failed, 3 total")
        .stdout_lacks("building");
}

#[test]
#[serial]
fn failing_test_exits_one_and_shows_output() {
    let project = Project::empty();
    project.script("test1.sh", "echo nope; echo broken >&2; exit 4");

    cli()
        .arg_path(&project.root())
        .fails()
        .stdout_has("** Test fail : test1\n---stdout---\nnope\n---stderr---\nbroken\n---\n");
}

#[test]
#[serial]
fn failed_build_skips_the_rest_of_the_directory() {
    let project = Project::empty();
    project
        .script("build.sh", "exit 1")
        .script("test1.sh", "exit 0")
        .script("sub/test2.sh", "exit 0");

    let out = cli().arg_path(&project.root()).fails().stdout();
    assert!(out.contains("** Test fail : build\n"), "{out}");
    assert!(!out.contains("test1"), "{out}");
    assert!(!out.contains("sub/test2"), "{out}");
}

#[test]
#[serial]
fn subdirectories_are_named_by_path() {
    let project = Project::empty();
    project.script("part1/test.sh", "exit 0").script("part2/deep/test.sh", "exit 0");

    cli()
        .arg_path(&project.root())
        .passes()
        .stdout_has("** Test pass : part1/test\n")
        .stdout_has("** Test pass : part2/deep/test\n");
}

#[test]
#[serial]
fn mismatched_output_prints_a_unified_diff() {
    let project = Project::empty();
    project.script("prog.sh", "printf 'a\\nc\\n'").file("case.out", "a\nb\n");

    cli()
        .arg_path(&project.root())
        .fails()
        .stdout_has("** Compare test fail : prog-case.out\n")
        .stdout_has("-b\n")
        .stdout_has("+c\n");
}

#[test]
#[serial]
fn authoring_warnings_go_to_stderr() {
    let project = Project::empty();
    project.script("prog.sh", "echo hi");

    cli()
        .arg_path(&project.root())
        .passes()
        .stderr_has("WARNING: Found prog*.sh without *.out files in");
}

#[test]
#[serial]
fn env_flag_reaches_scripts() {
    let project = Project::empty();
    project.script("test.sh", "[ \"$MARKER\" = yes ]");

    cli().arg_path(&project.root()).fails();
    cli().args(&["-e", "MARKER=yes"]).arg_path(&project.root()).passes();
}

#[test]
#[serial]
fn timeout_fails_only_the_slow_script() {
    let project = Project::empty();
    project.script("test1.sh", "exec sleep 30").script("test2.sh", "exit 0");

    cli()
        .args(&["--timeout", "0.3"])
        .arg_path(&project.root())
        .fails()
        .stdout_has("** Test fail : test1\n(timed out)\n")
        .stdout_has("Timed out after 0.3s")
        .stdout_has("** Test pass : test2\n");
}

#[test]
#[serial]
fn timeout_from_environment() {
    let project = Project::empty();
    project.script("test.sh", "exec sleep 30");

    cli()
        .env("SC_TIMEOUT_MS", "300")
        .arg_path(&project.root())
        .fails()
        .stdout_has("(timed out)");
}

#[test]
fn missing_testdir_exits_two() {
    let project = Project::empty();
    cli()
        .arg_path(&project.path().join("nope"))
        .errors()
        .stderr_has("Error: cannot run tests in");
}

#[test]
#[serial]
fn scripts_written_by_build_are_run() {
    let project = Project::empty();
    project.script(
        "build.sh",
        r#"d="$(dirname "$0")"
printf '#!/bin/sh\necho generated\n' > "$d/test1.sh"
chmod +x "$d/test1.sh""#,
    );

    cli()
        .arg_path(&project.root())
        .passes()
        .stdout_has("** Test pass : build\n")
        .stdout_has("** Test pass : test1\n")
        .stdout_has("Summary: 2 passed, 0 failed, 2 total");
}

#[test]
#[serial]
fn output_filling_the_capture_limit_is_marked_truncated() {
    let project = Project::empty();
    project.script("test.sh", "printf 12345; exit 1");

    cli()
        .env("SC_CAPTURE_LIMIT", "5")
        .arg_path(&project.root())
        .fails()
        .stdout_has("---stdout---\n12345\n ... Output truncated\n---\n");
}
