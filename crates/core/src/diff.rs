// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Comparison of expected and captured program output.
//!
//! Both sides are normalized with [`normalize_lines`] before comparing. The
//! verdict only looks at the normalized sequences; the unified diff and the
//! side-by-side rows exist purely for reporting and are only computed when
//! the sequences differ.

use serde::{Deserialize, Serialize};
use similar::{DiffTag, TextDiff};

use crate::normalize::normalize_lines;

/// Lines of context around each hunk in the unified diff.
const CONTEXT_RADIUS: usize = 3;

/// Normalized inputs of a diff check plus the mismatch rendering, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffArtifacts {
    pub reference_lines: Vec<String>,
    pub submission_lines: Vec<String>,
    /// Present only when the normalized sequences differ.
    pub rendering: Option<DiffRendering>,
}

/// Human-oriented views of a mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRendering {
    /// Unified diff from reference to submission.
    pub unified: String,
    pub side_by_side: Vec<SideBySideRow>,
}

/// How a side-by-side row relates the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    Equal,
    Changed,
    /// Present in the reference only.
    Removed,
    /// Present in the submission only.
    Added,
}

/// A line with its 1-based position in the normalized sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberedLine {
    pub number: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideBySideRow {
    pub kind: RowKind,
    pub reference: Option<NumberedLine>,
    pub submission: Option<NumberedLine>,
}

impl DiffArtifacts {
    /// Normalize both texts and render the differences, if any.
    pub fn compare(reference: &str, submission: &str) -> Self {
        let reference_lines = normalize_lines(reference);
        let submission_lines = normalize_lines(submission);
        let rendering = if reference_lines == submission_lines {
            None
        } else {
            Some(render(&reference_lines, &submission_lines))
        };
        Self {
            reference_lines,
            submission_lines,
            rendering,
        }
    }

    /// True when the normalized sequences are identical.
    pub fn matches(&self) -> bool {
        self.reference_lines == self.submission_lines
    }
}

fn render(reference: &[String], submission: &[String]) -> DiffRendering {
    let old: Vec<&str> = reference.iter().map(String::as_str).collect();
    let new: Vec<&str> = submission.iter().map(String::as_str).collect();
    let diff = TextDiff::configure().diff_slices(&old, &new);

    let unified = diff
        .unified_diff()
        .context_radius(CONTEXT_RADIUS)
        .header("Reference", "Submission")
        .to_string();

    let mut side_by_side = Vec::with_capacity(reference.len().max(submission.len()));
    for op in diff.ops() {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => {
                for (o, n) in old_range.zip(new_range) {
                    side_by_side.push(row(RowKind::Equal, reference, Some(o), submission, Some(n)));
                }
            }
            DiffTag::Delete => {
                for o in old_range {
                    side_by_side.push(row(RowKind::Removed, reference, Some(o), submission, None));
                }
            }
            DiffTag::Insert => {
                for n in new_range {
                    side_by_side.push(row(RowKind::Added, reference, None, submission, Some(n)));
                }
            }
            DiffTag::Replace => {
                let paired = old_range.len().max(new_range.len());
                for i in 0..paired {
                    let o = (i < old_range.len()).then(|| old_range.start + i);
                    let n = (i < new_range.len()).then(|| new_range.start + i);
                    let kind = match (o, n) {
                        (Some(_), Some(_)) => RowKind::Changed,
                        (Some(_), None) => RowKind::Removed,
                        _ => RowKind::Added,
                    };
                    side_by_side.push(row(kind, reference, o, submission, n));
                }
            }
        }
    }

    DiffRendering {
        unified,
        side_by_side,
    }
}

fn row(
    kind: RowKind,
    reference: &[String],
    old: Option<usize>,
    submission: &[String],
    new: Option<usize>,
) -> SideBySideRow {
    let numbered = |lines: &[String], idx: usize| NumberedLine {
        number: idx + 1,
        text: lines[idx].trim_end_matches('\n').to_string(),
    };
    SideBySideRow {
        kind,
        reference: old.map(|i| numbered(reference, i)),
        submission: new.map(|i| numbered(submission, i)),
    }
}

/// Render rows as two plain-text columns, reference on the left.
///
/// Cells wider than `width` are cut (on a char boundary) so the columns stay
/// aligned. The gutter marker is ` ` for equal rows, `|` for changed rows,
/// `<` for reference-only and `>` for submission-only rows.
pub fn render_side_by_side(rows: &[SideBySideRow], width: usize) -> String {
    let cell = |line: &Option<NumberedLine>| -> String {
        match line {
            Some(l) => {
                let text: String = l.text.chars().take(width).collect();
                format!("{:>4} {:<width$}", l.number, text, width = width)
            }
            None => " ".repeat(width + 5),
        }
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{:<w$} | {}\n",
        "Reference",
        "Submission",
        w = width + 5
    ));
    for r in rows {
        let marker = match r.kind {
            RowKind::Equal => ' ',
            RowKind::Changed => '|',
            RowKind::Removed => '<',
            RowKind::Added => '>',
        };
        let line = format!("{} {} {}", cell(&r.reference), marker, cell(&r.submission));
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
