//! Error types for ccsync
//!
//! Fatal conditions use this `thiserror` enum. Everything recoverable
//! (a bad glob, a missing computer, a single failed copy) is folded into
//! a `SyncPlanIssue` or a per-file result instead of being thrown — see
//! `domain::value_objects::issue`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ccsync operations
pub type CcResult<T> = Result<T, CcError>;

/// Fatal error type for ccsync operations
#[derive(Error, Debug)]
pub enum CcError {
    /// IO error that could not be attributed to a single recoverable issue
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("invalid config at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Save directory failed validation at startup (fatal, not a warning)
    #[error("save directory '{path}' is invalid: {reason}")]
    SaveDirectoryInvalid { path: PathBuf, reason: String },

    /// Glob pattern could not be compiled
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// The file watcher never reported ready within the handshake timeout
    #[error("file watcher did not become ready within {timeout_ms}ms")]
    WatcherNotReady { timeout_ms: u64 },

    /// Watch mode was asked to start with zero matched files
    #[error("watch cannot start with 0 files")]
    WatchNoFiles,

    /// A programming-contract violation: an operation was invoked in a
    /// state that the engine's state machine forbids.
    #[error("illegal call to {operation}: engine is {actual}, expected {expected}")]
    IllegalState {
        operation: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn illegal_state_message_names_the_operation() {
        let err = CcError::IllegalState {
            operation: "perform_sync",
            expected: "RUNNING",
            actual: "IDLE",
        };
        assert_eq!(
            err.to_string(),
            "illegal call to perform_sync: engine is IDLE, expected RUNNING"
        );
    }

    #[test]
    fn watch_no_files_has_a_fixed_message() {
        assert_eq!(CcError::WatchNoFiles.to_string(), "watch cannot start with 0 files");
    }
}
