// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the directory scheduler.
//!
//! Tests that execute scripts are `#[serial]` so no concurrent fork can hold
//! a freshly written script open (ETXTBSY).

use std::path::Path;

use sc_core::{ResultSink, TestRecord};
use tempfile::TempDir;

use super::*;

mod observer;
mod phases;
mod programs;
mod recursion;

/// Build a scratch tree. Entries ending in `.sh` become executable scripts
/// (the value is the body); everything else is a plain file.
pub(crate) fn tree(entries: &[(&str, &str)]) -> TempDir {
    let tmp = tempfile::tempdir().unwrap();
    for (name, contents) in entries {
        if name.ends_with(".sh") {
            sc_core::test_support::write_script(tmp.path(), name, contents).unwrap();
        } else {
            sc_core::test_support::write_file(tmp.path(), name, contents).unwrap();
        }
    }
    tmp
}

pub(crate) async fn run(root: &Path) -> ResultSink {
    Scheduler::new(root).run().await.unwrap()
}

pub(crate) fn names(sink: &ResultSink) -> Vec<&str> {
    sink.records().iter().map(|r| r.name.as_str()).collect()
}

pub(crate) fn record<'a>(sink: &'a ResultSink, name: &str) -> &'a TestRecord {
    sink.get(name)
        .unwrap_or_else(|| panic!("no record named {name}; have {:?}", names(sink)))
}
