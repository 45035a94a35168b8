//! Shared test environment and assertion helpers for the scenario suite.

pub mod assertions;
pub mod env;
pub mod recording_ui;

pub use assertions::*;
pub use env::TestEnv;
pub use recording_ui::RecordingUiSink;
