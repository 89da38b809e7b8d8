//! Verify command - runs the readiness checklist against a project directory

use anyhow::{bail, Context, Result};
use std::io;
use std::path::PathBuf;

use crate::report::Tally;
use crate::runner::ChecklistRunner;

/// Options gathered from the command line
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Project directory to scan
    pub base_dir: PathBuf,
    /// Exit non-zero when any check fails
    pub strict: bool,
    /// Emit ANSI colors
    pub color: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            strict: false,
            color: true,
        }
    }
}

/// Outcome of a run, with the process exit code it maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub tally: Tally,
    pub exit_code: i32,
}

/// Execute the verify command, writing the report to stdout
pub fn execute(options: &RunOptions) -> Result<Outcome> {
    if !options.color {
        colored::control::set_override(false);
    }

    let stdout = io::stdout();
    execute_to(options, stdout.lock())
}

/// Execute the verify command against any sink
pub fn execute_to<W: io::Write>(options: &RunOptions, out: W) -> Result<Outcome> {
    if !options.base_dir.is_dir() {
        bail!(
            "Project directory does not exist: {}",
            options.base_dir.display()
        );
    }

    let runner = ChecklistRunner::new(&options.base_dir);
    let tally = runner
        .run_all(out)
        .with_context(|| format!("Verification of {} aborted", options.base_dir.display()))?;

    Ok(Outcome {
        tally,
        exit_code: exit_code(&tally, options.strict),
    })
}

/// Failures only gate the exit code in strict mode; warnings never do.
pub fn exit_code(tally: &Tally, strict: bool) -> i32 {
    if strict && tally.has_failures() {
        1
    } else {
        0
    }
}
