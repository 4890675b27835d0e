// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{Check, Phase, TestRecord};

/// Builder for [`TestRecord`] with passing return-code defaults.
pub struct RecordBuilder {
    record: TestRecord,
}

impl RecordBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            record: TestRecord {
                name: name.into(),
                phase: Phase::Test,
                exit_code: 0,
                stdout: String::new(),
                stderr: String::new(),
                pass: true,
                always_show_output: false,
                duration_ms: 0,
                timed_out: false,
                check: Check::ReturnCode,
            },
        }
    }

    pub fn phase(mut self, phase: Phase) -> Self {
        self.record.phase = phase;
        self
    }

    pub fn exit_code(mut self, code: i32) -> Self {
        self.record.exit_code = code;
        self
    }

    pub fn pass(mut self, pass: bool) -> Self {
        self.record.pass = pass;
        self
    }

    pub fn always_show_output(mut self, always: bool) -> Self {
        self.record.always_show_output = always;
        self
    }

    pub fn stdout(mut self, text: impl Into<String>) -> Self {
        self.record.stdout = text.into();
        self
    }

    pub fn stderr(mut self, text: impl Into<String>) -> Self {
        self.record.stderr = text.into();
        self
    }

    pub fn check(mut self, check: Check) -> Self {
        if matches!(check, Check::Diff(_)) {
            self.record.phase = Phase::Prog;
        }
        self.record.pass = match &check {
            Check::Diff(artifacts) => artifacts.matches(),
            Check::ReturnCode => self.record.pass,
        };
        self.record.check = check;
        self
    }

    pub fn build(self) -> TestRecord {
        self.record
    }
}

// ── Scratch test trees ──────────────────────────────────────────────────────

/// Write `contents` to `dir/name`, creating parent directories.
pub fn write_file(
    dir: &std::path::Path,
    name: &str,
    contents: &str,
) -> std::io::Result<std::path::PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, contents)?;
    Ok(path)
}

/// Write an executable `/bin/sh` script with the given body.
pub fn write_script(
    dir: &std::path::Path,
    name: &str,
    body: &str,
) -> std::io::Result<std::path::PathBuf> {
    let path = write_file(dir, name, &format!("#!/bin/sh\n{body}\n"))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))?;
    }
    Ok(path)
}
