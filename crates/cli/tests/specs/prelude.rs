// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers: a fluent command builder and scratch test trees.

use std::path::{Path, PathBuf};
use std::process::Output;

pub use serial_test::serial;

/// Start building a `scriptcheck` invocation.
pub fn cli() -> CliBuilder {
    CliBuilder { args: Vec::new(), envs: Vec::new() }
}

pub struct CliBuilder {
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|a| a.to_string()));
        self
    }

    pub fn arg_path(mut self, path: &Path) -> Self {
        self.args.push(path.display().to_string());
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn run(self) -> RunAssert {
        let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_scriptcheck"));
        cmd.args(&self.args)
            .env("NO_COLOR", "1")
            .env_remove("COLOR")
            .env_remove("RUST_LOG")
            .env_remove("SC_TIMEOUT_MS")
            .env_remove("SC_CAPTURE_LIMIT");
        for (k, v) in &self.envs {
            cmd.env(k, v);
        }
        let output = cmd.output().unwrap();
        RunAssert { output }
    }

    /// Run and expect exit code 0.
    pub fn passes(self) -> RunAssert {
        self.run().code(0)
    }

    /// Run and expect exit code 1 (some checks failed).
    pub fn fails(self) -> RunAssert {
        self.run().code(1)
    }

    /// Run and expect exit code 2 (usage or infrastructure error).
    pub fn errors(self) -> RunAssert {
        self.run().code(2)
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn code(self, expected: i32) -> Self {
        similar_asserts::assert_eq!(
            self.output.status.code(),
            Some(expected),
            "stdout:\n{}\nstderr:\n{}",
            self.stdout(),
            self.stderr()
        );
        self
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let out = self.stdout();
        assert!(out.contains(needle), "stdout lacks {needle:?}:\n{out}");
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        let out = self.stdout();
        assert!(!out.contains(needle), "stdout unexpectedly has {needle:?}:\n{out}");
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let err = self.stderr();
        assert!(err.contains(needle), "stderr lacks {needle:?}:\n{err}");
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.output.stdout).unwrap()
    }
}

/// A scratch test tree in a temp directory.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    /// The tree root, named so that reports have a stable practical name.
    pub fn root(&self) -> PathBuf {
        let root = self.dir.path().join("prac1");
        std::fs::create_dir_all(&root).unwrap();
        root
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a plain file under the tree root.
    pub fn file(&self, rel: &str, contents: &str) -> &Self {
        sc_core::test_support::write_file(&self.root(), rel, contents).unwrap();
        self
    }

    /// Write an executable `/bin/sh` script under the tree root.
    pub fn script(&self, rel: &str, body: &str) -> &Self {
        sc_core::test_support::write_script(&self.root(), rel, body).unwrap();
        self
    }
}
