//! The closed set of events a controller (manual or watch) can report
//! to the engine loop. Kept as one enum so the engine's dispatch stays
//! exhaustive as behavior grows (Design Notes: event-emitter lattice).

use crate::domain::entities::SyncOperationResult;

#[derive(Debug, Clone)]
pub enum ControllerEvent {
    /// One or more source files changed and a sync pass is about to run.
    ChangesDetected { file_count: usize },
    SyncStarted,
    SyncCompleted(SyncOperationResult),
    /// The manual controller's SPACE key was pressed.
    ManualTriggerRequested,
    /// ESC, 'q', or Ctrl+C was observed.
    StopRequested,
}
