// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};
use std::path::Path;

use clap::ValueEnum;
use sc_core::{render_side_by_side, ResultSink, Summary, TestRecord, Warning};
use sc_engine::Observer;
use serde::Serialize;

use crate::color;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

/// Column width of each side in the verbose side-by-side diff.
const SIDE_BY_SIDE_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Everything a report needs, borrowed from a finished run.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub practical: String,
    pub submission_id: String,
    pub summary: Summary,
    pub records: &'a [TestRecord],
    pub warnings: &'a [Warning],
}

impl<'a> Report<'a> {
    pub fn new(practical: impl Into<String>, submission_id: impl Into<String>, sink: &'a ResultSink) -> Self {
        Self {
            practical: practical.into(),
            submission_id: submission_id.into(),
            summary: sink.summary(),
            records: sink.records(),
            warnings: sink.warnings(),
        }
    }
}

/// Practical name shown in reports: the final component of the test directory.
pub fn practical_name(testdir: &Path) -> String {
    testdir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| testdir.display().to_string())
}

/// Write the text-report lines for one record. `verbose` adds the
/// side-by-side diff.
pub fn write_record(out: &mut dyn Write, record: &TestRecord, verbose: bool) -> io::Result<()> {
    let label = if record.is_compare() { "Compare test" } else { "Test" };
    let verdict = if record.pass { color::pass("pass") } else { color::fail("fail") };
    writeln!(out, "** {} {} : {}", label, verdict, record.name)?;
    if record.timed_out {
        writeln!(out, "{}", color::context("(timed out)"))?;
    }

    match record.diff() {
        Some(diff) => {
            if let Some(rendering) = &diff.rendering {
                write!(out, "{}", rendering.unified)?;
                if verbose {
                    write!(out, "{}", render_side_by_side(&rendering.side_by_side, SIDE_BY_SIDE_WIDTH))?;
                }
            }
            if !record.pass && !record.stderr.is_empty() {
                write_stream(out, "stderr", &record.stderr)?;
                writeln!(out, "---")?;
            }
        }
        None if record.shows_output() => {
            write_stream(out, "stdout", &record.stdout)?;
            if !record.stderr.is_empty() {
                write_stream(out, "stderr", &record.stderr)?;
            }
            writeln!(out, "---")?;
        }
        None => {}
    }
    Ok(())
}

/// Final line of the text report.
pub fn write_summary(out: &mut dyn Write, summary: Summary) -> io::Result<()> {
    let Summary { total, passed, failed } = summary;
    writeln!(
        out,
        "\n{}: {} passed, {} failed, {} total",
        color::header("Summary"),
        color::pass(&passed.to_string()),
        if failed > 0 { color::fail(&failed.to_string()) } else { failed.to_string() },
        total
    )
}

/// Prints each record and warning as soon as the scheduler produces it.
///
/// Write errors cannot stop the run; the first one is kept for [`finish`].
///
/// [`finish`]: TextProgress::finish
pub struct TextProgress<O: Write, E: Write> {
    out: O,
    err: E,
    verbose: bool,
    error: Option<io::Error>,
}

impl<O: Write, E: Write> TextProgress<O, E> {
    pub fn new(out: O, err: E, verbose: bool) -> Self {
        Self {
            out,
            err,
            verbose,
            error: None,
        }
    }

    /// The first write error, if any.
    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn keep(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            self.error.get_or_insert(e);
        }
    }
}

impl<O: Write, E: Write> Observer for TextProgress<O, E> {
    fn on_record(&mut self, record: &TestRecord) {
        let result = write_record(&mut self.out, record, self.verbose).and_then(|()| self.out.flush());
        self.keep(result);
    }

    fn on_warning(&mut self, warning: &Warning) {
        let result = write_warnings(&mut self.err, std::slice::from_ref(warning));
        self.keep(result);
    }
}

fn write_stream(out: &mut dyn Write, label: &str, text: &str) -> io::Result<()> {
    writeln!(out, "---{label}---")?;
    write!(out, "{text}")?;
    if !text.is_empty() && !text.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}

/// Write the report as pretty-printed JSON.
pub fn write_json(out: &mut dyn Write, report: &Report<'_>) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// One `WARNING:` line per authoring warning.
pub fn write_warnings(out: &mut dyn Write, warnings: &[Warning]) -> io::Result<()> {
    for warning in warnings {
        writeln!(out, "{} {}", color::fail("WARNING:"), warning)?;
    }
    Ok(())
}
