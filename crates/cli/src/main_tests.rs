// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use clap::CommandFactory;
use serial_test::serial;
use yare::parameterized;

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn defaults() {
    let cli = Cli::try_parse_from(["scriptcheck", "tests"]).unwrap();
    assert_eq!(cli.testdir, PathBuf::from("tests"));
    assert_eq!(cli.submission_id, "<unknown>");
    assert_eq!(cli.output, OutputFormat::Text);
    assert!(cli.html.is_none());
    assert!(cli.env.is_empty());
    assert!(cli.timeout.is_none());
    assert!(!cli.verbose);
}

#[test]
fn all_flags() {
    let cli = Cli::try_parse_from([
        "scriptcheck",
        "--id",
        "s42",
        "--html",
        "out.html",
        "-o",
        "json",
        "-e",
        "A=1",
        "--env",
        "B=x=y",
        "--timeout",
        "2.5",
        "-v",
        "prac",
    ])
    .unwrap();
    assert_eq!(cli.submission_id, "s42");
    assert_eq!(cli.html, Some(PathBuf::from("out.html")));
    assert_eq!(cli.output, OutputFormat::Json);
    assert_eq!(
        cli.env,
        vec![("A".to_string(), "1".to_string()), ("B".to_string(), "x=y".to_string())]
    );
    assert_eq!(cli.timeout, Some(Duration::from_millis(2500)));
    assert!(cli.verbose);
}

#[test]
fn testdir_is_required() {
    assert!(Cli::try_parse_from(["scriptcheck"]).is_err());
}

#[parameterized(
    no_equals = { "FOO" },
    empty_key = { "=1" },
)]
fn rejects_bad_env_pairs(pair: &str) {
    assert!(parse_env_pair(pair).is_err());
}

#[test]
fn env_pair_allows_empty_value() {
    assert_eq!(parse_env_pair("FOO="), Ok(("FOO".to_string(), String::new())));
}

#[parameterized(
    zero = { "0" },
    negative = { "-1" },
    word = { "forever" },
    infinite = { "inf" },
)]
fn rejects_bad_timeouts(value: &str) {
    assert!(parse_timeout(value).is_err());
}

#[test]
#[serial]
fn flags_win_over_env_for_timeout() {
    std::env::set_var("SC_TIMEOUT_MS", "5000");
    let flagged = Cli::try_parse_from(["scriptcheck", "--timeout", "1", "t"]).unwrap().runner();
    let unflagged = Cli::try_parse_from(["scriptcheck", "t"]).unwrap().runner();
    std::env::remove_var("SC_TIMEOUT_MS");

    assert_eq!(flagged.get_timeout(), Some(Duration::from_secs(1)));
    assert_eq!(unflagged.get_timeout(), Some(Duration::from_secs(5)));
}

#[test]
#[serial]
fn capture_limit_comes_from_env() {
    std::env::set_var("SC_CAPTURE_LIMIT", "2048");
    let cli = Cli::try_parse_from(["scriptcheck", "t"]).unwrap();
    let runner = cli.runner();
    std::env::remove_var("SC_CAPTURE_LIMIT");

    assert_eq!(runner.get_capture_limit(), 2048);
}

#[test]
fn logging_defaults() {
    assert_eq!(logging::default_directive(false), "error");
    assert_eq!(logging::default_directive(true), "debug");
}
