// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered, append-only accumulator for one run.

use serde::{Deserialize, Serialize};

use crate::record::TestRecord;
use crate::warning::Warning;

/// Records in execution order plus the warnings raised along the way.
///
/// There is no way to remove or modify an entry once pushed; a rerun uses a
/// fresh sink.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSink {
    records: Vec<TestRecord>,
    warnings: Vec<Warning>,
}

/// Pass/fail counts over a sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl ResultSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: TestRecord) {
        self.records.push(record);
    }

    pub fn warn(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub fn records(&self) -> &[TestRecord] {
        &self.records
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up the first record with the given name.
    pub fn get(&self, name: &str) -> Option<&TestRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn summary(&self) -> Summary {
        let passed = self.records.iter().filter(|r| r.pass).count();
        Summary {
            total: self.records.len(),
            passed,
            failed: self.records.len() - passed,
        }
    }

    /// True when every record passed (vacuously true for an empty run).
    pub fn all_passed(&self) -> bool {
        self.records.iter().all(|r| r.pass)
    }

    pub fn into_records(self) -> Vec<TestRecord> {
        self.records
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
