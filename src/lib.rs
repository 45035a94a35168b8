//! ccsync — synchronizes Lua programs from a project's source tree onto
//! the numbered computer directories of a Minecraft ComputerCraft save,
//! once or continuously in watch mode.

pub mod application;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use config::Config;
pub use error::{CcError, CcResult};
