//! Line-oriented status reporting
//!
//! Every check produces exactly one line led by a status glyph. The reporter
//! also keeps a running tally so callers can gate on the outcome.

use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

use crate::error::VerifyResult;

/// Width of the `=` rule framing the report
const RULE_WIDTH: usize = 50;

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Pass,
    Fail,
    Warn,
}

impl Status {
    /// Pass when `ok`, otherwise `on_miss`.
    pub fn from_bool(ok: bool, on_miss: Status) -> Self {
        if ok {
            Status::Pass
        } else {
            on_miss
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Status::Pass => "✅",
            Status::Fail => "❌",
            Status::Warn => "⚠️",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pass => write!(f, "{}", self.glyph().green()),
            Status::Fail => write!(f, "{}", self.glyph().red()),
            Status::Warn => write!(f, "{}", self.glyph().yellow()),
        }
    }
}

/// Running count of check outcomes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
}

impl Tally {
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Pass => self.passed += 1,
            Status::Fail => self.failed += 1,
            Status::Warn => self.warnings += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.warnings
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Writes the report to any sink and tallies what it writes
pub struct Reporter<W: Write> {
    out: W,
    tally: Tally,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            tally: Tally::default(),
        }
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn header(&mut self, title: &str) -> VerifyResult<()> {
        writeln!(self.out, "🚀 {}", title.bold())?;
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))?;
        Ok(())
    }

    pub fn section(&mut self, title: &str) -> VerifyResult<()> {
        writeln!(self.out, "\n🔍 Checking {}...", title.cyan().bold())?;
        Ok(())
    }

    /// Top-level existence line for a file.
    pub fn file_found(&mut self, description: &str, path: &str, size: u64) -> VerifyResult<()> {
        self.tally.record(Status::Pass);
        writeln!(
            self.out,
            "{} {description}: {path} ({size} bytes)",
            Status::Pass
        )?;
        Ok(())
    }

    pub fn file_missing(&mut self, description: &str, path: &str) -> VerifyResult<()> {
        self.tally.record(Status::Fail);
        writeln!(
            self.out,
            "{} {description}: {path} - {}",
            Status::Fail,
            "NOT FOUND".red()
        )?;
        Ok(())
    }

    /// Indented sub-check line.
    pub fn item(&mut self, status: Status, label: &str) -> VerifyResult<()> {
        self.tally.record(status);
        writeln!(self.out, "  {status} {label}")?;
        Ok(())
    }

    /// Indented informational line; not counted.
    pub fn detail(&mut self, icon: &str, label: &str, value: &str) -> VerifyResult<()> {
        writeln!(self.out, "  {icon} {label}: {value}")?;
        Ok(())
    }

    pub fn footer(&mut self, server_url: &str) -> VerifyResult<()> {
        let tally = self.tally;
        writeln!(self.out, "\n{}", "=".repeat(RULE_WIDTH))?;
        writeln!(
            self.out,
            "📊 {} passed, {} failed, {} warnings",
            tally.passed, tally.failed, tally.warnings
        )?;
        writeln!(self.out, "{} PWA Verification Complete!", Status::Pass)?;
        writeln!(self.out, "🌐 Local server running at: {server_url}")?;
        writeln!(self.out, "📱 Test PWA features in Chrome/Edge DevTools")?;
        writeln!(self.out, "🚀 Ready for production deployment!")?;
        self.out.flush()?;
        Ok(())
    }
}
