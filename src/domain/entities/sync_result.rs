//! `SyncOperationResult` — per-computer results plus a rollup summary
//! (spec §3, §4.10).

use serde::Serialize;

/// A single planned-and-executed copy, tracked so the UI can show exactly
/// which files succeeded.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedFileResult {
    pub source_relative_path: String,
    pub target_path: String,
    pub success: bool,
}

/// Per-computer accounting for one sync operation.
#[derive(Debug, Clone, Serialize)]
pub struct ComputerSyncResult {
    pub computer_id: String,
    pub exists: bool,
    pub planned_files: Vec<PlannedFileResult>,
    pub failure_count: usize,
}

impl ComputerSyncResult {
    pub fn new(computer_id: impl Into<String>, exists: bool) -> Self {
        Self { computer_id: computer_id.into(), exists, planned_files: Vec::new(), failure_count: 0 }
    }

    pub fn success_count(&self) -> usize {
        self.planned_files.iter().filter(|f| f.success).count()
    }

    pub fn is_fully_successful(&self) -> bool {
        self.exists && !self.planned_files.is_empty() && self.planned_files.iter().all(|f| f.success)
    }

    pub fn is_partially_successful(&self) -> bool {
        self.exists && self.success_count() > 0 && !self.is_fully_successful()
    }

    pub fn has_only_failures(&self) -> bool {
        self.exists && !self.planned_files.is_empty() && self.success_count() == 0
    }
}

/// Rollup counts across every computer in a `SyncOperationResult`.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SyncSummary {
    pub total_files: usize,
    pub successful_files: usize,
    pub failed_files: usize,
    pub total_computers: usize,
    pub fully_successful_computers: usize,
    pub partially_successful_computers: usize,
    pub failed_computers: usize,
    pub missing_computers: usize,
}

/// The overall status of a sync operation, used to drive UI tone
/// (spec §4.10 point 3, §7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    Success,
    Partial,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct SyncOperationResult {
    pub computers: Vec<ComputerSyncResult>,
    pub summary: SyncSummary,
    pub status: SyncStatus,
}

impl SyncOperationResult {
    /// Roll up per-computer results into a summary and overall status,
    /// per spec §4.10 point 3.
    pub fn from_computers(computers: Vec<ComputerSyncResult>, had_warnings: bool) -> Self {
        let total_computers = computers.len();
        let mut summary = SyncSummary { total_computers, ..Default::default() };

        for computer in &computers {
            if !computer.exists {
                summary.missing_computers += 1;
                continue;
            }
            summary.total_files += computer.planned_files.len();
            summary.successful_files += computer.success_count();
            summary.failed_files += computer.planned_files.len() - computer.success_count();

            if computer.is_fully_successful() {
                summary.fully_successful_computers += 1;
            } else if computer.is_partially_successful() {
                summary.partially_successful_computers += 1;
            } else if computer.has_only_failures() {
                summary.failed_computers += 1;
            }
        }

        let status = if summary.total_files == 0 {
            SyncStatus::Warning
        } else if summary.successful_files == 0 {
            SyncStatus::Error
        } else if summary.failed_files > 0 {
            SyncStatus::Partial
        } else if had_warnings || summary.missing_computers > 0 {
            SyncStatus::Warning
        } else {
            SyncStatus::Success
        };

        Self { computers, summary, status }
    }

    /// Result for a sync cycle that never ran because its plan was
    /// invalid (spec §4.11 "if invalid, emit a complete-with-error and
    /// return"). No computers were touched, so the summary stays empty.
    pub fn plan_invalid() -> Self {
        Self { computers: Vec::new(), summary: SyncSummary::default(), status: SyncStatus::Error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planned(target: &str, success: bool) -> PlannedFileResult {
        PlannedFileResult {
            source_relative_path: "program.lua".into(),
            target_path: target.into(),
            success,
        }
    }

    #[test]
    fn zero_planned_files_is_warning() {
        let result = SyncOperationResult::from_computers(vec![], false);
        assert_eq!(result.status, SyncStatus::Warning);
        assert_eq!(result.summary.total_files, 0);
    }

    #[test]
    fn all_failures_is_error() {
        let mut computer = ComputerSyncResult::new("1", true);
        computer.planned_files.push(planned("/program.lua", false));
        let result = SyncOperationResult::from_computers(vec![computer], false);
        assert_eq!(result.status, SyncStatus::Error);
    }

    #[test]
    fn mixed_success_and_failure_is_partial() {
        let mut computer = ComputerSyncResult::new("1", true);
        computer.planned_files.push(planned("/a.lua", true));
        computer.planned_files.push(planned("/b.lua", false));
        let result = SyncOperationResult::from_computers(vec![computer], false);
        assert_eq!(result.status, SyncStatus::Partial);
    }

    #[test]
    fn all_success_with_missing_computer_is_warning() {
        let mut ok = ComputerSyncResult::new("1", true);
        ok.planned_files.push(planned("/a.lua", true));
        let missing = ComputerSyncResult::new("999", false);
        let result = SyncOperationResult::from_computers(vec![ok, missing], false);
        assert_eq!(result.status, SyncStatus::Warning);
        assert_eq!(result.summary.missing_computers, 1);
        assert_eq!(result.summary.successful_files, 1);
    }

    #[test]
    fn all_success_no_warnings_is_success() {
        let mut ok = ComputerSyncResult::new("1", true);
        ok.planned_files.push(planned("/a.lua", true));
        let result = SyncOperationResult::from_computers(vec![ok], false);
        assert_eq!(result.status, SyncStatus::Success);
    }

    #[test]
    fn successful_plus_failed_equals_total() {
        let mut computer = ComputerSyncResult::new("1", true);
        computer.planned_files.push(planned("/a.lua", true));
        computer.planned_files.push(planned("/b.lua", false));
        computer.planned_files.push(planned("/c.lua", true));
        let result = SyncOperationResult::from_computers(vec![computer], false);
        assert_eq!(
            result.summary.successful_files + result.summary.failed_files,
            result.summary.total_files
        );
    }
}
