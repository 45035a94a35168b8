//! Sync planner — orchestrates the domain services into one `SyncPlan`
//! per planning pass (spec §4.7).

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{Computer, SyncPlan};
use crate::domain::ports::{FileSystem, GlobExpander};
use crate::domain::services::{detect_duplicate_targets, discover_computers, resolve_rules, validate_save};
use crate::domain::value_objects::{ComputerGroup, IssueCategory, SyncPlanIssue, SyncRule};

pub struct SyncPlanner {
    fs: Arc<dyn FileSystem>,
    glob: Arc<dyn GlobExpander>,
}

impl SyncPlanner {
    pub fn new(fs: Arc<dyn FileSystem>, glob: Arc<dyn GlobExpander>) -> Self {
        Self { fs, glob }
    }

    /// Build a full `SyncPlan`: validate the save, discover computers,
    /// resolve rules against the source root, and flag duplicate
    /// targets. Aborts early (an invalid, empty plan) if the save
    /// directory itself fails validation (spec §4.7 point 2).
    pub fn create_plan(
        &self,
        source_root: &PathBuf,
        minecraft_save_path: &PathBuf,
        computer_groups: &[ComputerGroup],
        rules: &[SyncRule],
    ) -> SyncPlan {
        let timestamp = Utc::now();

        let validation = validate_save(self.fs.as_ref(), minecraft_save_path);
        if !validation.is_valid {
            let issue = SyncPlanIssue::error(validation.errors.join("; "), IssueCategory::SaveDirectory);
            return SyncPlan::aborted(issue, timestamp);
        }

        let available_computers = match discover_computers(self.fs.as_ref(), &validation.computer_root) {
            Ok(computers) => computers,
            Err(err) => {
                let issue = SyncPlanIssue::error(err.to_string(), IssueCategory::Computer);
                return SyncPlan::aborted(issue, timestamp);
            }
        };

        let resolve_outcome = resolve_rules(rules, computer_groups, source_root, self.glob.as_ref());
        let mut issues = resolve_outcome.issues;

        let available_ids: std::collections::HashSet<&str> =
            available_computers.iter().map(|c| c.id.as_str()).collect();
        let mut missing_computer_ids: Vec<String> = resolve_outcome
            .resolved_file_rules
            .iter()
            .flat_map(|r| r.computers.iter())
            .filter(|id| !available_ids.contains(id.as_str()))
            .cloned()
            .collect();
        missing_computer_ids.sort();
        missing_computer_ids.dedup();

        for id in &missing_computer_ids {
            issues.push(SyncPlanIssue::warning(format!("computer {id} was not found in the save"), IssueCategory::Computer));
        }

        issues.extend(detect_duplicate_targets(&resolve_outcome.resolved_file_rules));

        SyncPlan::new(resolve_outcome.resolved_file_rules, available_computers, missing_computer_ids, issues, timestamp)
    }

    /// Filter a prior plan's resolved rules down to those whose source
    /// file is among `changed_files`, used by watch mode's incremental
    /// pass (spec §4.12 point 5). Returns `None` if no rule matched any
    /// changed file.
    pub fn filter_for_changes(plan: &SyncPlan, changed_files: &[PathBuf]) -> Option<SyncPlan> {
        let changed: std::collections::HashSet<&PathBuf> = changed_files.iter().collect();
        let resolved_file_rules: Vec<_> = plan
            .resolved_file_rules
            .iter()
            .filter(|r| changed.contains(&r.source_absolute_path))
            .cloned()
            .collect();
        if resolved_file_rules.is_empty() {
            return None;
        }
        Some(SyncPlan::new(
            resolved_file_rules,
            plan.available_computers.clone(),
            plan.missing_computer_ids.clone(),
            plan.issues.clone(),
            Utc::now(),
        ))
    }
}

#[allow(dead_code)]
pub(crate) fn computer_by_id<'a>(computers: &'a [Computer], id: &str) -> Option<&'a Computer> {
    computers.iter().find(|c| c.id == id)
}
