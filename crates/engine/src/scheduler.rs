// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive, phase-ordered execution of a test tree.
//!
//! Each directory runs build → test → info → prog, then recurses into its
//! subdirectories in name order. A failing build script ends the directory
//! early, subdirectories included. A subdirectory that cannot be listed is
//! skipped with a warning. Everything runs sequentially; the only
//! concurrency lives inside the runner's stream readers.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use sc_core::{Phase, ResultSink, Warning};
use sc_runner::{Invocation, ProcessOutput, ProcessRunner};
use tracing::Instrument;

use crate::discover::{input_for, DirListing};
use crate::error::EngineError;
use crate::naming::{compare_name, display_name};
use crate::progress::{Observer, Tally};
use crate::verdict::Verdict;

/// How processing of one directory ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirOutcome {
    /// All phases ran and all subdirectories were visited.
    Completed,
    /// `script` failed; later phases and subdirectories were skipped.
    BuildFailed { script: PathBuf },
}

/// Walks a test tree rooted at `root`, feeding records into a [`ResultSink`].
#[derive(Debug, Clone)]
pub struct Scheduler {
    root: PathBuf,
    runner: ProcessRunner,
}

impl Scheduler {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            runner: ProcessRunner::new(),
        }
    }

    /// Use a configured runner (env overrides, capture limit, timeout).
    pub fn with_runner(mut self, runner: ProcessRunner) -> Self {
        self.runner = runner;
        self
    }

    /// Run the whole tree into a fresh sink.
    pub async fn run(&self) -> Result<ResultSink, EngineError> {
        self.run_observed(&mut ()).await
    }

    /// Run the whole tree into a fresh sink, telling `observer` about each
    /// record and warning as it is produced.
    pub async fn run_observed(&self, observer: &mut dyn Observer) -> Result<ResultSink, EngineError> {
        let mut sink = ResultSink::new();
        self.run_into(&mut sink, observer).await?;
        Ok(sink)
    }

    /// Run the whole tree, appending to `sink`.
    pub async fn run_into(
        &self,
        sink: &mut ResultSink,
        observer: &mut dyn Observer,
    ) -> Result<DirOutcome, EngineError> {
        if !self.root.is_dir() {
            return Err(EngineError::NotADirectory(self.root.clone()));
        }
        let mut tally = Tally::new(sink, observer);
        self.run_dir(&self.root, &mut tally).await
    }

    /// Process one directory and, unless its build fails, its subdirectories.
    ///
    /// The directory is listed again before every phase and before recursing,
    /// so files and directories created by earlier scripts are picked up.
    /// Returns a boxed future to support async recursion.
    fn run_dir<'a, 'b: 'a>(
        &'a self,
        dir: &'a Path,
        tally: &'a mut Tally<'b>,
    ) -> Pin<Box<dyn Future<Output = Result<DirOutcome, EngineError>> + 'a>> {
        let span = tracing::info_span!("scheduler.dir", dir = %dir.display());
        Box::pin(
            async move {
                tracing::debug!("checking directory");

                for phase in Phase::ALL {
                    let listing = DirListing::read(dir)?;
                    if phase == Phase::Prog {
                        self.run_programs(dir, &listing, tally).await?;
                        continue;
                    }
                    for script in listing.scripts(phase)? {
                        let pass = self.run_script(&script, phase, tally).await;
                        if !pass && phase.aborts_directory() {
                            tracing::info!(
                                script = %script.display(),
                                "exiting directory early due to failed build"
                            );
                            return Ok(DirOutcome::BuildFailed { script });
                        }
                    }
                }

                let listing = DirListing::read(dir)?;
                for subdir in listing.subdirs() {
                    match self.run_dir(subdir, tally).await {
                        Ok(_) => {}
                        Err(EngineError::ReadDir { path, source }) => {
                            let warning = Warning::UnreadableDirectory {
                                dir: path,
                                message: source.to_string(),
                            };
                            tracing::warn!("{warning}");
                            tally.warn(warning);
                        }
                        Err(e) => return Err(e),
                    }
                }
                Ok(DirOutcome::Completed)
            }
            .instrument(span),
        )
    }

    /// Run a build/test/info script with the return-code verdict.
    async fn run_script(&self, script: &Path, phase: Phase, tally: &mut Tally<'_>) -> bool {
        let output = self.runner.run(&Invocation::new(script)).await;
        let name = display_name(&self.root, script);
        let record = Verdict::return_code(phase).judge(name, phase, absorb(output, tally));
        let pass = record.pass;
        tally.push(record);
        pass
    }

    /// Run every `prog*.sh` against every `*.out` in `dir`.
    async fn run_programs(
        &self,
        dir: &Path,
        listing: &DirListing,
        tally: &mut Tally<'_>,
    ) -> Result<(), EngineError> {
        let programs = listing.scripts(Phase::Prog)?;
        let expectations = listing.expectations()?;

        match (programs.is_empty(), expectations.is_empty()) {
            (false, true) => {
                let warning = Warning::ProgramsWithoutExpectations {
                    dir: dir.to_path_buf(),
                };
                tracing::warn!("{warning}");
                tally.warn(warning);
            }
            (true, false) => {
                let warning = Warning::ExpectationsWithoutPrograms {
                    dir: dir.to_path_buf(),
                };
                tracing::warn!("{warning}");
                tally.warn(warning);
            }
            _ => {}
        }
        if programs.is_empty() {
            return Ok(());
        }

        let mut references = Vec::with_capacity(expectations.len());
        for expected in &expectations {
            references.push(read_reference(expected, tally).await);
        }

        for program in &programs {
            for (expected, reference) in expectations.iter().zip(&references) {
                let mut invocation = Invocation::new(program);
                if let Some(input) = input_for(expected) {
                    tracing::debug!(input = %input.display(), "piping input");
                    invocation = invocation.stdin_file(input);
                }
                let output = self.runner.run(&invocation).await;
                let name = compare_name(&self.root, program, expected);
                let verdict = Verdict::Diff {
                    reference: reference.clone(),
                };
                let record = verdict.judge(name, Phase::Prog, absorb(output, tally));
                tally.push(record);
            }
        }
        Ok(())
    }
}

/// Move the runner's warnings into the tally, keeping run order.
fn absorb(mut output: ProcessOutput, tally: &mut Tally<'_>) -> ProcessOutput {
    for warning in output.warnings.drain(..) {
        tally.warn(warning);
    }
    output
}

/// Read an expectation file; `None` (plus a warning) if it cannot be read.
async fn read_reference(path: &Path, tally: &mut Tally<'_>) -> Option<String> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            let warning = Warning::UnreadableExpectation {
                path: path.to_path_buf(),
                message: e.to_string(),
            };
            tracing::warn!("{warning}");
            tally.warn(warning);
            None
        }
    }
}

#[cfg(test)]
#[path = "scheduler_tests/mod.rs"]
mod tests;
