//! UI sink port — the core never prints or logs user-facing output
//! directly; it reports through this trait instead (spec §4.11, §6).

use crate::domain::entities::{ComputerSyncResult, SyncOperationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Manual,
    Watch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Warning,
    Error,
}

/// Observable interface for sync operations.
///
/// Implementations:
/// - `ConsoleUiSink` — interactive terminal display via crossterm.
/// - `JsonUiSink` — NDJSON event stream for scripting/CI.
/// - `NoopUiSink` — silent operation, used in tests.
pub trait UiSink: Send + Sync {
    fn set_mode(&self, mode: UiMode);
    fn start(&self);
    fn stop(&self);
    fn clear(&self);
    fn set_ready(&self, ready: bool);

    fn start_sync_operation(&self);
    fn update_operation_stats(&self, total_files: usize, total_computers: usize);
    fn update_computer_results(&self, results: &[ComputerSyncResult]);
    fn complete_operation(&self, result: &SyncOperationResult);

    fn add_message(&self, kind: MessageType, content: &str, suggestion: Option<&str>);

    /// Flush buffered messages to the sink's output.
    ///
    /// `persist` keeps a record across the next `clear`; `clear_after`
    /// empties the message buffer once written (spec §4.11 point 4).
    fn write_messages(&self, persist: bool, clear_after: bool);

    fn wants_detailed_results(&self) -> bool {
        true
    }
}

/// No-op sink for silent operation (tests, library embedding).
pub struct NoopUiSink;

impl UiSink for NoopUiSink {
    fn set_mode(&self, _mode: UiMode) {}
    fn start(&self) {}
    fn stop(&self) {}
    fn clear(&self) {}
    fn set_ready(&self, _ready: bool) {}
    fn start_sync_operation(&self) {}
    fn update_operation_stats(&self, _total_files: usize, _total_computers: usize) {}
    fn update_computer_results(&self, _results: &[ComputerSyncResult]) {}
    fn complete_operation(&self, _result: &SyncOperationResult) {}
    fn add_message(&self, _kind: MessageType, _content: &str, _suggestion: Option<&str>) {}
    fn write_messages(&self, _persist: bool, _clear_after: bool) {}
    fn wants_detailed_results(&self) -> bool {
        false
    }
}
