//! Interactive console UI sink — crossterm-styled progress and summary
//! output for a terminal session (spec §4.11).

use std::io::Write;
use std::sync::Mutex;

use crate::domain::entities::{ComputerSyncResult, SyncOperationResult, SyncStatus};
use crate::domain::ports::{MessageType, UiMode, UiSink};

struct Message {
    kind: MessageType,
    content: String,
    suggestion: Option<String>,
}

pub struct ConsoleUiSink {
    state: Mutex<ConsoleState>,
}

struct ConsoleState {
    mode: UiMode,
    ready: bool,
    messages: Vec<Message>,
}

impl Default for ConsoleUiSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleUiSink {
    pub fn new() -> Self {
        Self { state: Mutex::new(ConsoleState { mode: UiMode::Manual, ready: false, messages: Vec::new() }) }
    }

    fn icon(kind: MessageType) -> &'static str {
        match kind {
            MessageType::Info => "i",
            MessageType::Warning => "!",
            MessageType::Error => "x",
        }
    }

    fn status_icon(status: SyncStatus) -> &'static str {
        match status {
            SyncStatus::Success => "\u{2713}",
            SyncStatus::Partial => "\u{25b3}",
            SyncStatus::Warning => "!",
            SyncStatus::Error => "\u{2717}",
        }
    }
}

impl UiSink for ConsoleUiSink {
    fn set_mode(&self, mode: UiMode) {
        self.state.lock().unwrap().mode = mode;
    }

    fn start(&self) {
        let mode = self.state.lock().unwrap().mode;
        match mode {
            UiMode::Manual => println!("ccsync: running a one-shot sync"),
            UiMode::Watch => println!("ccsync: watching for changes (press SPACE to sync, ESC to stop)"),
        }
    }

    fn stop(&self) {
        println!("ccsync: stopped");
    }

    fn clear(&self) {
        self.state.lock().unwrap().messages.clear();
    }

    fn set_ready(&self, ready: bool) {
        self.state.lock().unwrap().ready = ready;
    }

    fn start_sync_operation(&self) {
        println!("syncing...");
    }

    fn update_operation_stats(&self, total_files: usize, total_computers: usize) {
        println!("  {total_files} file(s) across {total_computers} computer(s)");
    }

    fn update_computer_results(&self, _results: &[ComputerSyncResult]) {
        // The console sink only reports a final summary; per-file
        // progress is left to the JSON sink's consumers.
    }

    fn complete_operation(&self, result: &SyncOperationResult) {
        println!(
            "{} {} files synced, {} failed, {} computer(s) missing",
            Self::status_icon(result.status),
            result.summary.successful_files,
            result.summary.failed_files,
            result.summary.missing_computers,
        );
    }

    fn add_message(&self, kind: MessageType, content: &str, suggestion: Option<&str>) {
        self.state.lock().unwrap().messages.push(Message {
            kind,
            content: content.to_string(),
            suggestion: suggestion.map(str::to_string),
        });
    }

    fn write_messages(&self, persist: bool, clear_after: bool) {
        let mut state = self.state.lock().unwrap();
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for message in &state.messages {
            let _ = writeln!(out, "[{}] {}", Self::icon(message.kind), message.content);
            if let Some(suggestion) = &message.suggestion {
                let _ = writeln!(out, "    -> {suggestion}");
            }
        }
        if clear_after && !persist {
            state.messages.clear();
        }
    }
}
