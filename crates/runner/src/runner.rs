// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spawning a child process and collecting its output.

use std::collections::HashMap;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};

use sc_core::Warning;
use tokio::io::AsyncWriteExt;
use tokio::process::ChildStdin;
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::capture::{read_capped, Captured};
use crate::error::RunError;
use crate::invocation::Invocation;
use crate::output::ProcessOutput;

/// Default per-stream capture ceiling in bytes.
pub const DEFAULT_CAPTURE_LIMIT: usize = 10_000_000;

/// How long the readers may keep draining after a timed-out child is killed.
const KILL_GRACE: Duration = Duration::from_secs(1);

/// Runs programs one at a time with concurrent, bounded capture.
///
/// Environment overrides set here apply to every invocation and are merged
/// on top of a copy of the current process environment.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    env: HashMap<String, String>,
    capture_limit: usize,
    timeout: Option<Duration>,
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self {
            env: HashMap::new(),
            capture_limit: DEFAULT_CAPTURE_LIMIT,
            timeout: None,
        }
    }

    sc_core::setters! {
        set { capture_limit: usize }
        option { timeout: Duration }
    }

    /// Set one environment variable for every invocation.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Set several environment variables for every invocation.
    pub fn envs<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in vars {
            self.env.insert(k.into(), v.into());
        }
        self
    }

    pub fn get_timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn get_capture_limit(&self) -> usize {
        self.capture_limit
    }

    /// Run `invocation` to completion.
    ///
    /// Never fails: a process that cannot be started yields exit code 1 with
    /// empty streams and a [`Warning::SpawnFailed`].
    pub async fn run(&self, invocation: &Invocation) -> ProcessOutput {
        let span = tracing::info_span!(
            "runner.exec",
            cmd = %invocation.display(),
            exit_code = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );
        let output = self.run_reporting(invocation).instrument(span.clone()).await;
        span.record("exit_code", output.exit_code);
        span.record("duration_ms", output.duration.as_millis() as u64);
        output
    }

    async fn run_reporting(&self, invocation: &Invocation) -> ProcessOutput {
        let start = Instant::now();
        let program = invocation.program();

        let mut warnings = Vec::new();
        if has_path_component(program) && !is_executable(program) {
            tracing::warn!(path = %program.display(), "script is not executable");
            warnings.push(Warning::NotExecutable {
                path: program.to_path_buf(),
            });
        }

        match self.try_run(invocation).await {
            Ok(mut output) => {
                output.warnings = warnings;
                output
            }
            Err(err) => {
                tracing::warn!(error = %err, "process could not be run");
                warnings.push(Warning::SpawnFailed {
                    path: program.to_path_buf(),
                    message: err.to_string(),
                });
                ProcessOutput::not_started(start.elapsed(), warnings)
            }
        }
    }

    /// Spawn, feed stdin, drain both streams concurrently, then wait.
    async fn try_run(&self, invocation: &Invocation) -> Result<ProcessOutput, RunError> {
        let input = match invocation.stdin() {
            Some(path) => Some(tokio::fs::read(path).await.map_err(|source| {
                RunError::InputUnreadable {
                    path: path.to_path_buf(),
                    source,
                }
            })?),
            None => None,
        };

        let mut command = tokio::process::Command::new(invocation.program());
        command
            .args(invocation.arguments())
            .envs(&self.env)
            .envs(invocation.env_overrides())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let start = Instant::now();
        let mut child = command.spawn().map_err(|source| RunError::SpawnFailed {
            command: invocation.display(),
            source,
        })?;

        let stdout = child.stdout.take().ok_or(RunError::MissingPipe("stdout"))?;
        let stderr = child.stderr.take().ok_or(RunError::MissingPipe("stderr"))?;
        let stdin = child.stdin.take();

        // Both readers must run independently of each other and of the stdin
        // writer, otherwise a child filling one pipe while we block on the
        // other would deadlock.
        let limit = self.capture_limit;
        let mut stdout_task = tokio::spawn(read_capped(stdout, limit));
        let mut stderr_task = tokio::spawn(read_capped(stderr, limit));

        let mut out: Option<Captured> = None;
        let mut err: Option<Captured> = None;
        let mut status: Option<std::io::Result<ExitStatus>> = None;

        let exchange = async {
            feed_stdin(stdin, input).await;
            out = Some(joined(&mut stdout_task).await);
            err = Some(joined(&mut stderr_task).await);
            status = Some(child.wait().await);
        };

        let timed_out = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, exchange).await.is_err(),
            None => {
                exchange.await;
                false
            }
        };

        if timed_out {
            tracing::warn!(
                timeout_ms = self.timeout.map(|d| d.as_millis() as u64),
                "process timed out; killing"
            );
            if let Err(e) = child.kill().await {
                tracing::debug!(error = %e, "kill after timeout failed");
            }
            if out.is_none() {
                out = Some(drain_after_kill(stdout_task).await);
            } else {
                stdout_task.abort();
            }
            if err.is_none() {
                err = Some(drain_after_kill(stderr_task).await);
            } else {
                stderr_task.abort();
            }
            status = Some(child.wait().await);
        }

        let status = match status {
            Some(status) => status,
            None => child.wait().await,
        }
        .map_err(|source| RunError::WaitFailed {
            command: invocation.display(),
            source,
        })?;

        let stdout = out.unwrap_or_default();
        let mut stderr = err.unwrap_or_default();
        if stdout.truncated || stderr.truncated {
            tracing::debug!(
                stdout = stdout.truncated,
                stderr = stderr.truncated,
                limit = self.capture_limit,
                "output truncated"
            );
        }
        if timed_out {
            let secs = self.timeout.map(|d| d.as_secs_f64()).unwrap_or_default();
            stderr
                .text
                .push_str(&format!("\n ... Timed out after {secs:.1}s\n"));
        }

        Ok(ProcessOutput {
            exit_code: status.code().unwrap_or(-1),
            stdout: stdout.text,
            stderr: stderr.text,
            duration: start.elapsed(),
            timed_out,
            warnings: Vec::new(),
        })
    }
}

/// Write the input (if any) and close stdin so the child sees EOF.
async fn feed_stdin(stdin: Option<ChildStdin>, input: Option<Vec<u8>>) {
    let Some(mut stdin) = stdin else {
        return;
    };
    if let Some(data) = input {
        if let Err(e) = stdin.write_all(&data).await {
            // A child that exits without reading all of its input is not an error.
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                tracing::debug!(error = %e, "writing child stdin failed");
            }
        }
    }
    drop(stdin);
}

async fn joined(task: &mut JoinHandle<Captured>) -> Captured {
    match task.await {
        Ok(captured) => captured,
        Err(e) => {
            tracing::debug!(error = %e, "capture task ended abnormally");
            Captured::default()
        }
    }
}

/// Give a reader a short grace period after its child was killed.
///
/// Descendants of the killed child may still hold the pipe open; in that
/// case the capture is abandoned rather than waiting on them.
async fn drain_after_kill(mut task: JoinHandle<Captured>) -> Captured {
    match tokio::time::timeout(KILL_GRACE, joined(&mut task)).await {
        Ok(captured) => captured,
        Err(_) => {
            task.abort();
            Captured::default()
        }
    }
}

/// Whether `program` names a path (as opposed to a bare name looked up in `PATH`).
fn has_path_component(program: &Path) -> bool {
    program.components().count() > 1 || program.is_absolute()
}

/// Whether `path` is a regular file with at least one execute bit set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// Whether `path` is a regular file; execute bits do not exist here.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
#[path = "runner_tests/mod.rs"]
mod tests;
