// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

fn with_var<T>(key: &str, value: Option<&str>, read: impl Fn() -> T) -> T {
    match value {
        Some(v) => std::env::set_var(key, v),
        None => std::env::remove_var(key),
    }
    let result = read();
    std::env::remove_var(key);
    result
}

#[test]
#[serial]
fn timeout_from_env() {
    let cases = [
        (None, None),
        (Some("1500"), Some(Duration::from_millis(1500))),
        (Some("0"), None),
        (Some("soon"), None),
        (Some("-5"), None),
    ];
    for (value, expected) in cases {
        assert_eq!(with_var("SC_TIMEOUT_MS", value, timeout), expected, "SC_TIMEOUT_MS={value:?}");
    }
}

#[test]
#[serial]
fn capture_limit_from_env() {
    let cases = [(None, None), (Some("4096"), Some(4096)), (Some("0"), None), (Some("lots"), None)];
    for (value, expected) in cases {
        assert_eq!(
            with_var("SC_CAPTURE_LIMIT", value, capture_limit),
            expected,
            "SC_CAPTURE_LIMIT={value:?}"
        );
    }
}
