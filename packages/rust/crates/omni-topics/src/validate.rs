//! Structural checks over a built index.
//!
//! Every authored topic is checked, including topics shadowed in the key
//! lookup. Checks are independent per topic and all findings accumulate;
//! nothing here stops early or touches the index.

use crate::config::ValidationConfig;
use crate::index::{CategoryIndex, TopicLocation};
use crate::types::Topic;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Kind of content defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Key already used by an earlier topic.
    DuplicateKey,
    /// Title is blank, or yields an empty key.
    MissingTitle,
    /// Trimmed content below the length threshold.
    EmptyContent,
    /// Prerequisite key absent from the lookup.
    InvalidPrerequisite,
}

impl DiagnosticKind {
    /// All kinds, in check order.
    pub const ALL: [DiagnosticKind; 4] = [
        DiagnosticKind::DuplicateKey,
        DiagnosticKind::MissingTitle,
        DiagnosticKind::EmptyContent,
        DiagnosticKind::InvalidPrerequisite,
    ];

    /// Stable snake_case code.
    #[must_use]
    pub const fn as_code(self) -> &'static str {
        match self {
            Self::DuplicateKey => "duplicate_key",
            Self::MissingTitle => "missing_title",
            Self::EmptyContent => "empty_content",
            Self::InvalidPrerequisite => "invalid_prerequisite",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// One detected defect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Defect kind
    pub kind: DiagnosticKind,
    /// Human-readable description
    pub message: String,
    /// Key of the offending topic; `None` when the key is empty
    #[serde(default)]
    pub topic_key: Option<String>,
    /// Position of the offending topic in the hierarchy
    pub location: TopicLocation,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}:{} {}",
            self.kind, self.location.category, self.location.topic, self.message
        )
    }
}

/// Outcome of [`run_validation`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Validation was disabled by config.
    pub skipped: bool,
    /// Authored topics inspected.
    pub topic_count: usize,
    /// Findings in authored order.
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    /// No findings (a skipped report is also clean).
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of findings of `kind`.
    #[must_use]
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }

    /// Finding counts per kind code, every kind present.
    #[must_use]
    pub fn by_kind(&self) -> BTreeMap<&'static str, usize> {
        DiagnosticKind::ALL
            .iter()
            .map(|kind| (kind.as_code(), self.count(*kind)))
            .collect()
    }

    /// Emit each finding as a warning.
    pub fn log(&self) {
        if self.skipped {
            log::debug!("Topic validation skipped");
            return;
        }
        for diagnostic in &self.diagnostics {
            log::warn!("{diagnostic}");
        }
        if !self.diagnostics.is_empty() {
            log::warn!(
                "Topic validation found {} issue(s) across {} topic(s)",
                self.diagnostics.len(),
                self.topic_count
            );
        }
    }
}

struct Checker<'a> {
    index: &'a CategoryIndex,
    config: &'a ValidationConfig,
    seen_keys: HashSet<&'a str>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Checker<'a> {
    fn push(
        &mut self,
        kind: DiagnosticKind,
        topic: &Topic,
        location: TopicLocation,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(Diagnostic {
            kind,
            message: message.into(),
            topic_key: (!topic.key.is_empty()).then(|| topic.key.clone()),
            location,
        });
    }

    fn check(&mut self, location: TopicLocation, topic: &'a Topic) {
        if !self.seen_keys.insert(topic.key.as_str()) {
            self.push(
                DiagnosticKind::DuplicateKey,
                topic,
                location,
                format!(
                    "duplicate topic key '{}' (title '{}')",
                    topic.key, topic.title
                ),
            );
        }

        if topic.title.trim().is_empty() {
            self.push(
                DiagnosticKind::MissingTitle,
                topic,
                location,
                "topic title is empty",
            );
        } else if self.config.flag_empty_keys && topic.key.is_empty() {
            self.push(
                DiagnosticKind::MissingTitle,
                topic,
                location,
                format!("title '{}' yields an empty key", topic.title),
            );
        }

        let content_chars = topic.content.trim().chars().count();
        if content_chars < self.config.min_content_chars {
            self.push(
                DiagnosticKind::EmptyContent,
                topic,
                location,
                format!(
                    "content of '{}' has {content_chars} characters (minimum {})",
                    topic.key, self.config.min_content_chars
                ),
            );
        }

        for prerequisite in &topic.metadata.prerequisites {
            if !self.index.contains_key(prerequisite) {
                self.push(
                    DiagnosticKind::InvalidPrerequisite,
                    topic,
                    location,
                    format!(
                        "prerequisite '{prerequisite}' of '{}' does not resolve",
                        topic.key
                    ),
                );
            }
        }
    }
}

/// Check every authored topic with `config`, ignoring `config.enabled`.
#[must_use]
pub fn validate_with(index: &CategoryIndex, config: &ValidationConfig) -> Vec<Diagnostic> {
    let mut checker = Checker {
        index,
        config,
        seen_keys: HashSet::new(),
        diagnostics: Vec::new(),
    };
    for (location, topic) in index.iter_topics() {
        checker.check(location, topic);
    }
    checker.diagnostics
}

/// Check every authored topic with the default config.
///
/// The first topic with a given key is clean; each later one is reported as
/// [`DiagnosticKind::DuplicateKey`]. This is independent of the index's
/// last-wins lookup.
#[must_use]
pub fn validate(index: &CategoryIndex) -> Vec<Diagnostic> {
    validate_with(index, &ValidationConfig::default())
}

/// Gated validation entry point.
#[must_use]
pub fn run_validation(index: &CategoryIndex, config: &ValidationConfig) -> ValidationReport {
    if !config.enabled {
        return ValidationReport {
            skipped: true,
            ..ValidationReport::default()
        };
    }
    ValidationReport {
        skipped: false,
        topic_count: index.topic_count(),
        diagnostics: validate_with(index, config),
    }
}
