//! Declarative check tables
//!
//! A check group names a category, an optional target file and either an
//! ordered list of `{name, predicate}` records or the manifest field list.
//! The runner walks these tables; adding a category never touches its
//! control flow.

pub mod catalog;
pub mod manifest;

use crate::report::Status;

pub use catalog::default_groups;
pub use manifest::{summarize_value, ManifestError, ManifestReport, REQUIRED_FIELDS};

/// What a single check asserts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// The path exists relative to the base directory
    Exists(&'static str),
    /// The target content contains the text exactly
    ContainsLiteral(&'static str),
    /// The target content contains the text in any letter case
    ContainsCaseInsensitive(&'static str),
}

impl Predicate {
    /// Whether evaluating this predicate needs the group's target content.
    pub fn needs_content(&self) -> bool {
        !matches!(self, Predicate::Exists(_))
    }

    /// Evaluate a content predicate against already-loaded text.
    ///
    /// `Exists` never matches here; existence is probed by the runner so it
    /// can report the file size.
    pub fn matches_content(&self, content: &str) -> bool {
        match self {
            Predicate::Exists(_) => false,
            Predicate::ContainsLiteral(text) => content.contains(text),
            Predicate::ContainsCaseInsensitive(text) => {
                content.to_lowercase().contains(&text.to_lowercase())
            }
        }
    }
}

/// A named check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub name: String,
    pub predicate: Predicate,
}

impl Check {
    pub fn new(name: impl Into<String>, predicate: Predicate) -> Self {
        Self {
            name: name.into(),
            predicate,
        }
    }

    pub fn exists(description: impl Into<String>, path: &'static str) -> Self {
        Self::new(description, Predicate::Exists(path))
    }

    pub fn literal(name: impl Into<String>, text: &'static str) -> Self {
        Self::new(name, Predicate::ContainsLiteral(text))
    }

    pub fn case_insensitive(name: impl Into<String>, text: &'static str) -> Self {
        Self::new(name, Predicate::ContainsCaseInsensitive(text))
    }
}

/// The file a group's content checks run against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFile {
    pub path: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupBody {
    /// Ordered checks; a miss is reported with `on_miss`
    Checks { checks: Vec<Check>, on_miss: Status },
    /// Required top-level keys of a JSON manifest
    Manifest { required_fields: &'static [&'static str] },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckGroup {
    pub title: &'static str,
    pub target: Option<TargetFile>,
    pub body: GroupBody,
}

impl CheckGroup {
    /// A group of standalone existence checks with no target file.
    pub fn files(title: &'static str, files: &[(&'static str, &'static str)]) -> Self {
        Self {
            title,
            target: None,
            body: GroupBody::Checks {
                checks: files
                    .iter()
                    .map(|&(path, description)| Check::exists(description, path))
                    .collect(),
                on_miss: Status::Fail,
            },
        }
    }

    /// A group of content checks gated on `target` existing.
    pub fn content(
        title: &'static str,
        target: TargetFile,
        checks: Vec<Check>,
        on_miss: Status,
    ) -> Self {
        Self {
            title,
            target: Some(target),
            body: GroupBody::Checks { checks, on_miss },
        }
    }

    /// Number of content predicates in this group.
    pub fn content_check_count(&self) -> usize {
        match &self.body {
            GroupBody::Checks { checks, .. } => checks
                .iter()
                .filter(|c| c.predicate.needs_content())
                .count(),
            GroupBody::Manifest { required_fields } => required_fields.len(),
        }
    }
}
