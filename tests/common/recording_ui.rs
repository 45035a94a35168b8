//! A `UiSink` that records the stats the engine reports mid-operation,
//! for scenario tests that need to check more than the final
//! `SyncOperationResult` (e.g. the live `total_files`/`total_computers`
//! counts sent to `update_operation_stats`).

use std::sync::Mutex;

use ccsync::domain::entities::{ComputerSyncResult, SyncOperationResult};
use ccsync::domain::ports::{MessageType, UiMode, UiSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationStats {
    pub total_files: usize,
    pub total_computers: usize,
}

#[derive(Default)]
pub struct RecordingUiSink {
    stats: Mutex<Vec<OperationStats>>,
}

impl RecordingUiSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All `update_operation_stats` calls observed so far, in order.
    pub fn stats(&self) -> Vec<OperationStats> {
        self.stats.lock().unwrap().clone()
    }
}

impl UiSink for RecordingUiSink {
    fn set_mode(&self, _mode: UiMode) {}
    fn start(&self) {}
    fn stop(&self) {}
    fn clear(&self) {}
    fn set_ready(&self, _ready: bool) {}
    fn start_sync_operation(&self) {}
    fn update_operation_stats(&self, total_files: usize, total_computers: usize) {
        self.stats.lock().unwrap().push(OperationStats { total_files, total_computers });
    }
    fn update_computer_results(&self, _results: &[ComputerSyncResult]) {}
    fn complete_operation(&self, _result: &SyncOperationResult) {}
    fn add_message(&self, _kind: MessageType, _content: &str, _suggestion: Option<&str>) {}
    fn write_messages(&self, _persist: bool, _clear_after: bool) {}
    fn wants_detailed_results(&self) -> bool {
        false
    }
}
