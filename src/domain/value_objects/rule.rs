//! `SyncRule` — the declarative input a config author writes (spec §3).

use serde::{Deserialize, Serialize};

/// A declarative mapping from a source glob/file to a target path on a
/// set of computers or computer groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncRule {
    /// Glob or literal path, relative to `sourceRoot`.
    pub source: String,
    /// Target path on the computer. A trailing slash marks a directory
    /// target regardless of what [`crate::domain::value_objects::path::path_is_likely_file`]
    /// would otherwise guess.
    pub target: String,
    /// Computer ids and/or group names this rule applies to.
    pub computers: Vec<String>,
    /// When targeting a directory under a recursive glob, preserve the
    /// source subtree instead of flattening into the target directory.
    /// Defaults to `true`.
    #[serde(default)]
    pub flatten: Option<bool>,
}

impl SyncRule {
    pub fn flatten_or_default(&self) -> bool {
        self.flatten.unwrap_or(true)
    }
}

/// A named set of computer ids and/or other group names. Groups may
/// nest; cycles are assumed to have been rejected upstream by config
/// validation (spec §3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerGroup {
    pub name: String,
    pub members: Vec<String>,
}
