//! `SyncPlanIssue` — the tagged, non-fatal result type that flows through
//! a `SyncPlan` instead of being thrown (spec §3, §7, Design notes).

use serde::Serialize;

/// What part of planning raised the issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    SaveDirectory,
    Computer,
    Rule,
    FileSystem,
    Other,
}

/// Whether the issue invalidates the plan or is merely surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A single issue discovered while building a `SyncPlan`.
#[derive(Debug, Clone, Serialize)]
pub struct SyncPlanIssue {
    pub message: String,
    pub category: IssueCategory,
    pub severity: Severity,
    pub suggestion: Option<String>,
    pub source: Option<String>,
}

impl SyncPlanIssue {
    pub fn new(message: impl Into<String>, category: IssueCategory, severity: Severity) -> Self {
        Self {
            message: message.into(),
            category,
            severity,
            suggestion: None,
            source: None,
        }
    }

    pub fn error(message: impl Into<String>, category: IssueCategory) -> Self {
        Self::new(message, category, Severity::Error)
    }

    pub fn warning(message: impl Into<String>, category: IssueCategory) -> Self {
        Self::new(message, category, Severity::Warning)
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Classify a rule-resolution failure message as error or warning per
    /// spec §4.4 point 6: "cannot be accessed", "Invalid pattern", and
    /// "Permission denied" are errors; everything else from that stage is
    /// a warning.
    pub fn from_rule_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let is_error = ["cannot be accessed", "Invalid pattern", "Permission denied"]
            .iter()
            .any(|needle| message.contains(needle));
        let severity = if is_error { Severity::Error } else { Severity::Warning };
        Self::new(message, IssueCategory::Rule, severity)
    }
}
