//! Checklist runner
//!
//! Walks the check groups in order against an explicit base directory and
//! writes one status line per check. A missing file never stops the run and a
//! malformed manifest only aborts its own group. Any other read failure
//! propagates and the closing banner is not printed.

use std::io::Write;
use std::path::PathBuf;

use crate::checks::{
    default_groups, CheckGroup, GroupBody, ManifestReport, Predicate, TargetFile,
};
use crate::error::VerifyResult;
use crate::fs::{file_size, read_text};
use crate::report::{Reporter, Status, Tally};

/// Title printed in the header banner
pub const REPORT_TITLE: &str = "Dark Chatbot Builder Pro - PWA Verification";

/// URL advertised in the closing banner. Nothing is served.
pub const LOCAL_SERVER_URL: &str = "http://localhost:8000";

pub struct ChecklistRunner {
    base_dir: PathBuf,
    groups: Vec<CheckGroup>,
}

impl ChecklistRunner {
    /// Runner over the built-in checklist.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self::with_groups(base_dir, default_groups())
    }

    pub fn with_groups(base_dir: impl Into<PathBuf>, groups: Vec<CheckGroup>) -> Self {
        Self {
            base_dir: base_dir.into(),
            groups,
        }
    }

    pub fn groups(&self) -> &[CheckGroup] {
        &self.groups
    }

    /// Run every group in order, framed by the header and closing banners.
    pub fn run_all<W: Write>(&self, out: W) -> VerifyResult<Tally> {
        tracing::info!(
            base_dir = %self.base_dir.display(),
            groups = self.groups.len(),
            "starting verification"
        );

        let mut reporter = Reporter::new(out);
        reporter.header(REPORT_TITLE)?;

        for group in &self.groups {
            self.run_group(group, &mut reporter)?;
        }

        reporter.footer(LOCAL_SERVER_URL)?;
        let tally = reporter.tally();

        tracing::info!(
            passed = tally.passed,
            failed = tally.failed,
            warnings = tally.warnings,
            "verification complete"
        );
        Ok(tally)
    }

    /// Run one group: its section heading, then its checks.
    pub fn run_group<W: Write>(
        &self,
        group: &CheckGroup,
        reporter: &mut Reporter<W>,
    ) -> VerifyResult<()> {
        tracing::debug!(group = group.title, "running check group");
        reporter.section(group.title)?;

        match (&group.body, &group.target) {
            (GroupBody::Manifest { required_fields }, Some(target)) => {
                self.check_manifest(target, required_fields, reporter)
            }
            (GroupBody::Manifest { .. }, None) => {
                tracing::warn!(group = group.title, "manifest group has no target file");
                Ok(())
            }
            (GroupBody::Checks { .. }, _) => self.check_group_by_content(group, reporter),
        }
    }

    /// Print an existence line for `rel` and return whether it exists.
    pub fn check_file_exists<W: Write>(
        &self,
        rel: &str,
        description: &str,
        reporter: &mut Reporter<W>,
    ) -> VerifyResult<bool> {
        match file_size(&self.base_dir, rel)? {
            Some(size) => {
                reporter.file_found(description, rel, size)?;
                Ok(true)
            }
            None => {
                reporter.file_missing(description, rel)?;
                Ok(false)
            }
        }
    }

    /// Evaluate a checks group.
    ///
    /// Existence predicates are probed individually. Content predicates run
    /// against a single read of the target, and only when the target exists.
    pub fn check_group_by_content<W: Write>(
        &self,
        group: &CheckGroup,
        reporter: &mut Reporter<W>,
    ) -> VerifyResult<()> {
        let GroupBody::Checks { checks, on_miss } = &group.body else {
            return Ok(());
        };

        let content = match &group.target {
            Some(target) => {
                if !self.check_file_exists(target.path, target.description, reporter)? {
                    tracing::debug!(path = target.path, "target missing, skipping content checks");
                    return Ok(());
                }
                if group.content_check_count() > 0 {
                    tracing::debug!(path = target.path, "loading content");
                    Some(read_text(&self.base_dir, target.path)?)
                } else {
                    None
                }
            }
            None => None,
        };

        for check in checks {
            match check.predicate {
                Predicate::Exists(rel) => {
                    self.check_file_exists(rel, &check.name, reporter)?;
                }
                predicate => {
                    let found = content
                        .as_deref()
                        .is_some_and(|text| predicate.matches_content(text));
                    reporter.item(Status::from_bool(found, *on_miss), &check.name)?;
                }
            }
        }

        Ok(())
    }

    /// Validate the manifest. Read and parse failures end this group only.
    pub fn check_manifest<W: Write>(
        &self,
        target: &TargetFile,
        required_fields: &[&str],
        reporter: &mut Reporter<W>,
    ) -> VerifyResult<()> {
        if !self.check_file_exists(target.path, target.description, reporter)? {
            return Ok(());
        }

        let parsed = read_text(&self.base_dir, target.path)
            .map_err(|e| e.to_string())
            .and_then(|text| ManifestReport::parse(&text).map_err(|e| e.to_string()));

        let manifest = match parsed {
            Ok(manifest) => manifest,
            Err(e) => {
                tracing::warn!(path = target.path, error = %e, "manifest could not be parsed");
                reporter.item(Status::Fail, &format!("Error parsing manifest: {e}"))?;
                return Ok(());
            }
        };

        for field in required_fields {
            match manifest.field_summary(field) {
                Some(summary) => reporter.item(Status::Pass, &format!("{field}: {summary}"))?,
                None => reporter.item(Status::Fail, &format!("Missing required field: {field}"))?,
            }
        }

        reporter.detail("📱", "Icons defined", &manifest.icon_count().to_string())?;
        reporter.detail("🎨", "Theme color", &manifest.theme_color())?;
        reporter.detail("🖥️", "Display mode", &manifest.display_mode())?;
        Ok(())
    }
}
