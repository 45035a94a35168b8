//! Thin CLI command wrappers — load config, assemble an `Engine`, run it.

pub mod sync;
pub mod watch;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::application::{Engine, EngineConfig};
use crate::config::Config;
use crate::domain::ports::UiSink;
use crate::domain::value_objects::path::expand_tilde;
use crate::error::CcResult;
use crate::infrastructure::fs::LocalFileSystem;
use crate::infrastructure::ui::{ConsoleUiSink, JsonUiSink};
use crate::infrastructure::RealGlobExpander;

fn build_ui(json: bool) -> Arc<dyn UiSink> {
    if json {
        Arc::new(JsonUiSink::new())
    } else {
        Arc::new(ConsoleUiSink::new())
    }
}

/// Load config and wire up an `Engine` ready to run `sync` or `watch`.
pub fn build_engine(config_path: &Path, json: bool) -> CcResult<Engine> {
    let config = Config::load(config_path)?;
    let cache_ttl = Duration::from_millis(config.advanced.cache_ttl_ms);

    let fs = Arc::new(LocalFileSystem::new());
    let glob = Arc::new(RealGlobExpander::new(cache_ttl));
    let ui = build_ui(json);

    // Expand `~` once here rather than leaving it to each port: both the
    // `FileSystem` and `GlobExpander` adapters re-expand on every call for
    // defense in depth, but the `Engine` itself (logging, cache keys) should
    // only ever see the one, already-total path (spec §4.1).
    let source_root = expand_tilde(&config.source_root.to_string_lossy());
    let minecraft_save_path = expand_tilde(&config.minecraft_save_path.to_string_lossy());

    let engine_config = EngineConfig {
        source_root,
        minecraft_save_path,
        computer_groups: config.computer_groups(),
        rules: config.rules.clone(),
        cache_ttl,
        use_polling: config.advanced.use_polling,
    };

    Ok(Engine::new(fs, glob, ui, engine_config))
}
