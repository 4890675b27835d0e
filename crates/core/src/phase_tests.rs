// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn phases_run_in_fixed_order() {
    assert_eq!(
        Phase::ALL,
        [Phase::Build, Phase::Test, Phase::Info, Phase::Prog]
    );
}

#[yare::parameterized(
    build = { Phase::Build, "build*.sh", "build" },
    test  = { Phase::Test, "test*.sh", "test" },
    info  = { Phase::Info, "info*.sh", "info" },
    prog  = { Phase::Prog, "prog*.sh", "prog" },
)]
fn pattern_and_label(phase: Phase, pattern: &str, label: &str) {
    assert_eq!(phase.script_pattern(), pattern);
    assert_eq!(phase.to_string(), label);
}

#[test]
fn only_info_always_shows_output() {
    let showing: Vec<Phase> = Phase::ALL
        .into_iter()
        .filter(|p| p.always_show_output())
        .collect();
    assert_eq!(showing, vec![Phase::Info]);
}

#[test]
fn only_build_aborts_directory() {
    let aborting: Vec<Phase> = Phase::ALL
        .into_iter()
        .filter(|p| p.aborts_directory())
        .collect();
    assert_eq!(aborting, vec![Phase::Build]);
}

#[test]
fn phase_serde_uses_snake_case() {
    assert_eq!(serde_json::to_string(&Phase::Prog).unwrap(), "\"prog\"");
    let parsed: Phase = serde_json::from_str("\"info\"").unwrap();
    assert_eq!(parsed, Phase::Info);
}
