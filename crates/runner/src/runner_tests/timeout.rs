// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Optional per-invocation timeout.

use std::time::{Duration, Instant};

use serial_test::serial;

use super::script;
use crate::{Invocation, ProcessRunner};

#[tokio::test]
#[serial]
async fn hung_child_is_killed_after_timeout() {
    let (_dir, path) = script("echo started\nexec sleep 30");
    let started = Instant::now();

    let output = ProcessRunner::new()
        .timeout(Duration::from_millis(300))
        .run(&Invocation::new(&path))
        .await;

    assert!(started.elapsed() < Duration::from_secs(10));
    assert!(output.timed_out);
    assert_eq!(output.exit_code, -1);
    assert_eq!(output.stdout, "started\n");
    assert!(output.stderr.contains("Timed out after 0.3s"));
}

#[tokio::test]
#[serial]
async fn fast_child_is_unaffected_by_timeout() {
    let (_dir, path) = script("echo quick");
    let output = ProcessRunner::new()
        .timeout(Duration::from_secs(30))
        .run(&Invocation::new(&path))
        .await;

    assert!(!output.timed_out);
    assert_eq!(output.exit_code, 0);
    assert_eq!(output.stdout, "quick\n");
}
