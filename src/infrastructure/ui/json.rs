//! NDJSON UI sink — one JSON object per line, for scripting and CI
//! (spec §4.11 point 5).

use std::io::{self, Write};
use std::sync::Mutex;

use serde::Serialize;

use crate::domain::entities::{ComputerSyncResult, SyncOperationResult};
use crate::domain::ports::{MessageType, UiMode, UiSink};

fn write_event(event: &serde_json::Value) {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let _ = out.write_all(line.as_bytes());
    let _ = out.write_all(b"\n");
}

fn emit<T: Serialize>(event: &T) {
    match serde_json::to_value(event) {
        Ok(value) => write_event(&value),
        Err(_) => write_event(&serde_json::json!({"event": "error", "message": "failed to serialize event"})),
    }
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum JsonEvent<'a> {
    Start { mode: &'static str },
    Stop,
    SyncStarted,
    OperationStats { total_files: usize, total_computers: usize },
    ComputerResults { computers: &'a [ComputerSyncResult] },
    Complete { result: &'a SyncOperationResult },
    Message { level: &'static str, content: &'a str, suggestion: Option<&'a str> },
}

pub struct JsonUiSink {
    messages: Mutex<Vec<(MessageType, String, Option<String>)>>,
}

impl Default for JsonUiSink {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonUiSink {
    pub fn new() -> Self {
        Self { messages: Mutex::new(Vec::new()) }
    }

    fn level(kind: MessageType) -> &'static str {
        match kind {
            MessageType::Info => "info",
            MessageType::Warning => "warning",
            MessageType::Error => "error",
        }
    }
}

impl UiSink for JsonUiSink {
    fn set_mode(&self, _mode: UiMode) {}

    fn start(&self) {
        emit(&JsonEvent::Start { mode: "manual" });
    }

    fn stop(&self) {
        emit(&JsonEvent::Stop);
    }

    fn clear(&self) {
        self.messages.lock().unwrap().clear();
    }

    fn set_ready(&self, _ready: bool) {}

    fn start_sync_operation(&self) {
        emit(&JsonEvent::SyncStarted);
    }

    fn update_operation_stats(&self, total_files: usize, total_computers: usize) {
        emit(&JsonEvent::OperationStats { total_files, total_computers });
    }

    fn update_computer_results(&self, results: &[ComputerSyncResult]) {
        emit(&JsonEvent::ComputerResults { computers: results });
    }

    fn complete_operation(&self, result: &SyncOperationResult) {
        emit(&JsonEvent::Complete { result });
    }

    fn add_message(&self, kind: MessageType, content: &str, suggestion: Option<&str>) {
        self.messages.lock().unwrap().push((kind, content.to_string(), suggestion.map(str::to_string)));
    }

    fn write_messages(&self, persist: bool, clear_after: bool) {
        let mut messages = self.messages.lock().unwrap();
        for (kind, content, suggestion) in messages.iter() {
            emit(&JsonEvent::Message { level: Self::level(*kind), content, suggestion: suggestion.as_deref() });
        }
        if clear_after && !persist {
            messages.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_clear_after_write_unless_persisted() {
        let sink = JsonUiSink::new();
        sink.add_message(MessageType::Error, "copy failed", Some("check permissions"));
        sink.write_messages(false, true);
        assert!(sink.messages.lock().unwrap().is_empty());
    }
}
