//! Concrete `UiSink` adapters.

pub mod console;
pub mod json;

pub use console::ConsoleUiSink;
pub use json::JsonUiSink;
