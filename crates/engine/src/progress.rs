// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Live notification of records and warnings while a tree runs.

use sc_core::{ResultSink, TestRecord, Warning};

/// Told about every record and warning the moment it joins the sink.
pub trait Observer {
    fn on_record(&mut self, _record: &TestRecord) {}
    fn on_warning(&mut self, _warning: &Warning) {}
}

/// Observes nothing.
impl Observer for () {}

/// A sink paired with the observer that hears about each addition.
pub(crate) struct Tally<'a> {
    sink: &'a mut ResultSink,
    observer: &'a mut dyn Observer,
}

impl<'a> Tally<'a> {
    pub(crate) fn new(sink: &'a mut ResultSink, observer: &'a mut dyn Observer) -> Self {
        Self { sink, observer }
    }

    pub(crate) fn push(&mut self, record: TestRecord) {
        self.observer.on_record(&record);
        self.sink.push(record);
    }

    pub(crate) fn warn(&mut self, warning: Warning) {
        self.observer.on_warning(&warning);
        self.sink.warn(warning);
    }
}
