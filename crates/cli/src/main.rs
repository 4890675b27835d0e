// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! scriptcheck: run a tree of build/test/info/prog scripts and report on them

mod color;
mod env;
mod exit_error;
mod html;
mod logging;
mod output;

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use sc_engine::{Observer, Scheduler};
use sc_runner::ProcessRunner;

use exit_error::ExitError;
use output::{OutputFormat, Report, TextProgress};

#[derive(Parser, Debug)]
#[command(
    name = "scriptcheck",
    version = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_GIT_HASH")),
    about = "Run a tree of build/test/info/prog scripts and check the results",
    styles = color::styles()
)]
struct Cli {
    /// Root directory of the test tree
    testdir: PathBuf,

    /// Submission identifier shown in reports
    #[arg(long = "id", value_name = "ID", default_value = "<unknown>")]
    submission_id: String,

    /// Write an HTML overview to FILE
    #[arg(long, value_name = "FILE")]
    html: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, value_name = "FORMAT", default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Extra environment for every script (repeatable)
    #[arg(short = 'e', long = "env", value_name = "KEY=VALUE", value_parser = parse_env_pair)]
    env: Vec<(String, String)>,

    /// Per-script timeout in seconds (default: none, or SC_TIMEOUT_MS)
    #[arg(long, value_name = "SECS", value_parser = parse_timeout)]
    timeout: Option<Duration>,

    /// Debug-level logging and side-by-side diffs in text output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_env_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

fn parse_timeout(s: &str) -> Result<Duration, String> {
    let secs: f64 = s.parse().map_err(|_| format!("invalid number of seconds '{s}'"))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("timeout must be a positive number of seconds, got '{s}'"));
    }
    Duration::try_from_secs_f64(secs).map_err(|e| e.to_string())
}

impl Cli {
    fn runner(&self) -> ProcessRunner {
        let mut runner = ProcessRunner::new().envs(self.env.iter().cloned());
        if let Some(timeout) = self.timeout.or_else(env::timeout) {
            runner = runner.timeout(timeout);
        }
        if let Some(limit) = env::capture_limit() {
            runner = runner.capture_limit(limit);
        }
        runner
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let code = exit_error::exit_code(run(cli).await);
    std::process::exit(code);
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let scheduler = Scheduler::new(&cli.testdir).with_runner(cli.runner());

    // Text output streams as records complete; JSON waits for the full report.
    let mut progress = TextProgress::new(std::io::stdout(), std::io::stderr(), cli.verbose);
    let mut quiet = ();
    let observer: &mut dyn Observer = match cli.output {
        OutputFormat::Text => &mut progress,
        OutputFormat::Json => &mut quiet,
    };
    let sink = scheduler
        .run_observed(observer)
        .await
        .with_context(|| format!("cannot run tests in {}", cli.testdir.display()))?;
    progress.finish()?;

    let report = Report::new(output::practical_name(&cli.testdir), cli.submission_id.as_str(), &sink);

    {
        let mut stdout = std::io::stdout().lock();
        match cli.output {
            OutputFormat::Text => output::write_summary(&mut stdout, report.summary)?,
            OutputFormat::Json => output::write_json(&mut stdout, &report)?,
        }
        stdout.flush()?;
    }

    if let Some(path) = &cli.html {
        std::fs::write(path, html::render(&report))
            .with_context(|| format!("cannot write HTML report to {}", path.display()))?;
    }

    if !sink.all_passed() {
        return Err(ExitError::failed().into());
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
