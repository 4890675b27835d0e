// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Live notification while the tree runs.

use sc_core::{TestRecord, Warning};
use serial_test::serial;

use super::tree;
use crate::{Observer, Scheduler};

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl Observer for Recorder {
    fn on_record(&mut self, record: &TestRecord) {
        self.events.push(format!("record {}", record.name));
    }

    fn on_warning(&mut self, warning: &Warning) {
        self.events.push(format!("warning {warning}"));
    }
}

#[tokio::test]
#[serial]
async fn observer_hears_every_addition_in_order() {
    let tmp = tree(&[
        ("test1.sh", "exit 0"),
        ("test2.sh", "exit 1"),
        ("sub/prog.sh", "echo hi"),
    ]);
    let mut recorder = Recorder::default();
    let sink = Scheduler::new(tmp.path())
        .run_observed(&mut recorder)
        .await
        .unwrap();

    assert_eq!(
        recorder.events,
        [
            "record test1".to_string(),
            "record test2".to_string(),
            format!(
                "warning Found prog*.sh without *.out files in {}",
                tmp.path().join("sub").display()
            ),
        ]
    );
    assert_eq!(sink.len(), 2);
    assert_eq!(sink.warnings().len(), 1);
}

#[tokio::test]
#[serial]
async fn observer_hears_passing_and_failing_records() {
    let tmp = tree(&[("build.sh", "exit 0"), ("test.sh", "exit 3")]);
    let mut recorder = Recorder::default();
    Scheduler::new(tmp.path())
        .run_observed(&mut recorder)
        .await
        .unwrap();
    assert_eq!(recorder.events, ["record build", "record test"]);
}
