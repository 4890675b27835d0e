// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable record names.

use std::path::Path;

/// Script path relative to `root`, without its final extension, joined
/// with `/` (e.g. `root/q1/test2.sh` → `q1/test2`).
pub fn display_name(root: &Path, script: &Path) -> String {
    let relative = script.strip_prefix(root).unwrap_or(script);
    relative
        .with_extension("")
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Name of a diff check: program name plus the expectation file's basename.
pub fn compare_name(root: &Path, program: &Path, expectation: &Path) -> String {
    let expected = expectation
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    format!("{}-{}", display_name(root, program), expected)
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
