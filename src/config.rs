//! Top-level config schema (spec §6). Loading is a mechanical
//! TOML-to-struct decode — deep semantic validation (does the save
//! path exist, are group references valid) is the planner's job, not
//! this module's.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::SyncRule;
use crate::error::{CcError, CcResult};

fn default_cache_ttl_ms() -> u64 {
    5_000
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvancedConfig {
    #[serde(default = "default_cache_ttl_ms")]
    pub cache_ttl_ms: u64,
    #[serde(default)]
    pub use_polling: bool,
    #[serde(default)]
    pub log_to_file: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AdvancedConfig {
    fn default() -> Self {
        Self {
            cache_ttl_ms: default_cache_ttl_ms(),
            use_polling: false,
            log_to_file: None,
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub source_root: PathBuf,
    pub minecraft_save_path: PathBuf,
    #[serde(default)]
    pub computer_groups: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub rules: Vec<SyncRule>,
    #[serde(default)]
    pub advanced: AdvancedConfig,
}

impl Config {
    /// Load and parse `path` as TOML. Does not validate that the
    /// referenced paths exist or that rules resolve to anything —
    /// that happens once per planning pass (spec §4.1, §4.7).
    pub fn load(path: &Path) -> CcResult<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CcError::Config { path: path.to_path_buf(), message: e.to_string() })
    }

    /// Convert the `computer_groups` table into the list shape the
    /// domain's `ComputerGroup` value object expects.
    pub fn computer_groups(&self) -> Vec<crate::domain::value_objects::ComputerGroup> {
        self.computer_groups
            .iter()
            .map(|(name, members)| crate::domain::value_objects::ComputerGroup { name: name.clone(), members: members.clone() })
            .collect()
    }
}
