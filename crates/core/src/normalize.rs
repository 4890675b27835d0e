// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line normalization applied before output comparison.

/// Split `text` into comparable lines.
///
/// Each line is trimmed of surrounding whitespace, blank lines are dropped
/// and every kept line gets exactly one trailing `\n`, so trailing spaces,
/// CRLF endings and stray empty lines never cause a mismatch.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("{line}\n"))
        .collect()
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
