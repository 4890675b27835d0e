// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-page HTML overview of a run.

use std::fmt::Write;

use sc_core::{NumberedLine, RowKind, SideBySideRow, TestRecord};

use crate::output::Report;

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;

const PASS_BACKGROUND: &str = "#BFB";
const FAIL_BACKGROUND: &str = "#FBB";

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the whole report page.
pub fn render(report: &Report<'_>) -> String {
    let mut page = String::new();
    // fmt::Write into a String cannot fail
    let _ = write_page(&mut page, report);
    page
}

fn write_page(page: &mut String, report: &Report<'_>) -> std::fmt::Result {
    writeln!(page, "<!DOCTYPE html>")?;
    writeln!(page, "<html lang=\"en\">")?;
    writeln!(page, "<head>")?;
    writeln!(page, "    <meta charset=\"utf-8\">")?;
    writeln!(
        page,
        "    <title>{} - {}</title>",
        escape(&report.practical),
        escape(&report.submission_id)
    )?;
    writeln!(page, "</head>")?;
    writeln!(page, "<body>")?;
    writeln!(page, "    <table style=\"width:100%\">")?;
    for (index, record) in report.records.iter().enumerate() {
        write_record(page, index + 1, record)?;
    }
    writeln!(page, "    </table>")?;
    writeln!(page, "</body>")?;
    writeln!(page, "</html>")
}

fn write_record(page: &mut String, index: usize, record: &TestRecord) -> std::fmt::Result {
    let (background, mark) = if record.pass {
        (PASS_BACKGROUND, "Tick")
    } else {
        (FAIL_BACKGROUND, "Cross")
    };
    writeln!(page, "    <tr id=\"test{index}\" bgcolor=\"{background}\">")?;
    writeln!(page, "        <td>{mark}</td>")?;
    writeln!(page, "        <td>{}</td>", escape(&record.name))?;
    writeln!(page, "        <td>{}</td>", record.pass)?;
    writeln!(page, "        <td>{}</td>", record.exit_code)?;
    writeln!(page, "    </tr>")?;
    writeln!(page, "    <tr>")?;
    writeln!(page, "    <td colspan=\"5\">")?;

    match record.diff().and_then(|diff| diff.rendering.as_ref()) {
        Some(rendering) => write_diff_table(page, &rendering.side_by_side)?,
        None => {
            write_lines(page, &record.stdout)?;
            write_lines(page, &record.stderr)?;
        }
    }

    writeln!(page, "    </td>")?;
    writeln!(page, "    </tr>")
}

fn write_lines(page: &mut String, text: &str) -> std::fmt::Result {
    writeln!(page, "        <div style=\"display:inline\">")?;
    for line in text.lines() {
        writeln!(page, "        {}<br>", escape(line))?;
    }
    writeln!(page, "        </div>")
}

fn write_diff_table(page: &mut String, rows: &[SideBySideRow]) -> std::fmt::Result {
    writeln!(page, "        <table class=\"diff\">")?;
    writeln!(page, "        <tr><th></th><th>Reference</th><th></th><th>Submission</th></tr>")?;
    for row in rows {
        let class = match row.kind {
            RowKind::Equal => "equal",
            RowKind::Changed => "changed",
            RowKind::Removed => "removed",
            RowKind::Added => "added",
        };
        writeln!(
            page,
            "        <tr class=\"{class}\">{}{}</tr>",
            cells(row.reference.as_ref()),
            cells(row.submission.as_ref())
        )?;
    }
    writeln!(page, "        </table>")
}

fn cells(line: Option<&NumberedLine>) -> String {
    match line {
        Some(l) => format!("<td>{}</td><td><code>{}</code></td>", l.number, escape(&l.text)),
        None => "<td></td><td></td>".to_string(),
    }
}
