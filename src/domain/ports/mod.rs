//! Ports: traits the domain and application layers depend on, concrete
//! implementations live in `infrastructure`.

pub mod file_system;
pub mod glob;
pub mod ui;

pub use file_system::{FileSystem, FsError, FsResult};
pub use glob::GlobExpander;
pub use ui::{MessageType, NoopUiSink, UiMode, UiSink};
