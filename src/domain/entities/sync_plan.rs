//! `SyncPlan` — a snapshot of resolved rules, available/missing computers,
//! and issues for one planning instant (spec §3, §4.7).

use chrono::{DateTime, Utc};

use crate::domain::entities::Computer;
use crate::domain::value_objects::{ResolvedFileRule, Severity, SyncPlanIssue};

#[derive(Debug, Clone)]
pub struct SyncPlan {
    pub is_valid: bool,
    pub resolved_file_rules: Vec<ResolvedFileRule>,
    pub available_computers: Vec<Computer>,
    pub missing_computer_ids: Vec<String>,
    pub issues: Vec<SyncPlanIssue>,
    pub timestamp: DateTime<Utc>,
}

impl SyncPlan {
    /// Build a plan from its parts, computing `is_valid` from the issue
    /// list so the invariant `is_valid <=> no issue.severity == error`
    /// can never drift (spec §3, §8).
    pub fn new(
        resolved_file_rules: Vec<ResolvedFileRule>,
        available_computers: Vec<Computer>,
        missing_computer_ids: Vec<String>,
        issues: Vec<SyncPlanIssue>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let is_valid = !issues.iter().any(|i| i.severity == Severity::Error);
        Self {
            is_valid,
            resolved_file_rules,
            available_computers,
            missing_computer_ids,
            issues,
            timestamp,
        }
    }

    /// An empty, invalid plan carrying a single fatal issue — used when a
    /// planning stage aborts catastrophically (spec §4.7 point 2).
    pub fn aborted(issue: SyncPlanIssue, timestamp: DateTime<Utc>) -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new(), vec![issue], timestamp)
    }

    pub fn error_issues(&self) -> impl Iterator<Item = &SyncPlanIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warning_issues(&self) -> impl Iterator<Item = &SyncPlanIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }
}
