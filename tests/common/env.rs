//! Builds an isolated `sourceRoot` + Minecraft save pair under `tempfile`
//! temp directories, and wires a real `Engine` against them so scenario
//! tests exercise the full planner/executor stack against the real
//! filesystem rather than fakes.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;

use ccsync::application::{Engine, EngineConfig};
use ccsync::domain::ports::{NoopUiSink, UiSink};
use ccsync::domain::value_objects::{ComputerGroup, SyncRule};
use ccsync::infrastructure::fs::LocalFileSystem;
use ccsync::infrastructure::RealGlobExpander;

pub struct TestEnv {
    pub source: TempDir,
    pub save: TempDir,
}

impl TestEnv {
    /// A fresh source tree and a minimally valid save directory
    /// (`level.dat` plus an empty `computercraft/computer/`).
    pub fn new() -> Self {
        let source = TempDir::new().expect("create source tempdir");
        let save = TempDir::new().expect("create save tempdir");
        std::fs::write(save.path().join("level.dat"), b"").expect("write level.dat");
        std::fs::create_dir_all(save.path().join("computercraft/computer")).expect("create computer root");
        Self { source, save }
    }

    pub fn write_source_file(&self, relative: &str, content: &str) {
        let path = self.source.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create source parent dirs");
        }
        std::fs::write(&path, content).expect("write source file");
    }

    /// Creates `computercraft/computer/<id>/` so the planner discovers it
    /// as an available computer.
    pub fn create_computer(&self, id: &str) -> PathBuf {
        let dir = self.save.path().join("computercraft/computer").join(id);
        std::fs::create_dir_all(&dir).expect("create computer dir");
        dir
    }

    pub fn computer_file(&self, id: &str, relative: &str) -> PathBuf {
        self.save.path().join("computercraft/computer").join(id).join(relative)
    }

    pub fn read_computer_file(&self, id: &str, relative: &str) -> String {
        std::fs::read_to_string(self.computer_file(id, relative)).unwrap_or_else(|e| {
            panic!("failed to read computer {id} file {relative}: {e}");
        })
    }

    pub fn engine(&self, rules: Vec<SyncRule>, groups: Vec<ComputerGroup>) -> Engine {
        self.engine_with_polling(rules, groups, true)
    }

    /// `use_polling=true` is the default here because watch scenarios run
    /// against freshly created tempdirs where OS-native watchers can miss
    /// the first events before their backend has finished initializing.
    pub fn engine_with_polling(&self, rules: Vec<SyncRule>, groups: Vec<ComputerGroup>, use_polling: bool) -> Engine {
        self.engine_with_ui(rules, groups, use_polling, Arc::new(NoopUiSink))
    }

    /// Like `engine`, but with a caller-supplied `UiSink` — for scenarios
    /// that need to assert on what's reported mid-operation, not just the
    /// final `SyncOperationResult`.
    pub fn engine_with_ui(
        &self,
        rules: Vec<SyncRule>,
        groups: Vec<ComputerGroup>,
        use_polling: bool,
        ui: Arc<dyn UiSink>,
    ) -> Engine {
        let fs = Arc::new(LocalFileSystem::new());
        let glob = Arc::new(RealGlobExpander::new(Duration::from_millis(5000)));

        let config = EngineConfig {
            source_root: self.source.path().to_path_buf(),
            minecraft_save_path: self.save.path().to_path_buf(),
            computer_groups: groups,
            rules,
            cache_ttl: Duration::from_millis(5000),
            use_polling,
        };

        Engine::new(fs, glob, ui, config)
    }
}

pub fn rule(source: &str, target: &str, computers: &[&str]) -> SyncRule {
    SyncRule {
        source: source.to_string(),
        target: target.to_string(),
        computers: computers.iter().map(|c| c.to_string()).collect(),
        flatten: None,
    }
}

pub fn rule_with_flatten(source: &str, target: &str, computers: &[&str], flatten: bool) -> SyncRule {
    SyncRule { flatten: Some(flatten), ..rule(source, target, computers) }
}
