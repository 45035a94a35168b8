//! Infrastructure layer: concrete adapters for the domain's ports.

pub mod fs;
pub mod glob;
pub mod ui;

pub use glob::RealGlobExpander;
