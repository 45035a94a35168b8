//! Engine — the top-level state machine that owns a `SyncPlanner`, a
//! `PlanCache`, a `CopyExecutor`, and either a manual or watch
//! controller, and exposes the one object `commands::*` talks to
//! (spec §4.13).
//!
//! States move forward linearly (`Idle -> Starting -> Running ->
//! Stopping -> Stopped`), with `Stopping` reachable from any non-terminal
//! state and `Error` absorbing until `stop()` completes. Calling a
//! method from the wrong state is a programming error, not a recoverable
//! one — it returns `CcError::IllegalState` rather than a `SyncPlanIssue`.

use is_terminal::IsTerminal;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::application::copy_executor::CopyExecutor;
use crate::application::events::ControllerEvent;
use crate::application::manual_controller;
use crate::application::plan_cache::PlanCache;
use crate::application::sync_operation::perform_sync;
use crate::application::sync_planner::SyncPlanner;
use crate::application::watch_controller::{WatchController, WatchTick};
use crate::domain::entities::SyncOperationResult;
use crate::domain::ports::{FileSystem, GlobExpander, MessageType, UiMode, UiSink};
use crate::domain::value_objects::{ComputerGroup, SyncRule};
use crate::error::{CcError, CcResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Starting,
    Running,
    Stopping,
    Stopped,
    Error,
}

impl EngineState {
    fn name(self) -> &'static str {
        match self {
            EngineState::Idle => "IDLE",
            EngineState::Starting => "STARTING",
            EngineState::Running => "RUNNING",
            EngineState::Stopping => "STOPPING",
            EngineState::Stopped => "STOPPED",
            EngineState::Error => "ERROR",
        }
    }
}

pub struct EngineConfig {
    pub source_root: PathBuf,
    pub minecraft_save_path: PathBuf,
    pub computer_groups: Vec<ComputerGroup>,
    pub rules: Vec<SyncRule>,
    pub cache_ttl: Duration,
    pub use_polling: bool,
}

pub struct Engine {
    planner: SyncPlanner,
    executor: CopyExecutor,
    ui: Arc<dyn UiSink>,
    plan_cache: PlanCache,
    glob: Arc<dyn GlobExpander>,
    config: EngineConfig,
    state: EngineState,
    running: Arc<AtomicBool>,
}

impl Engine {
    pub fn new(fs: Arc<dyn FileSystem>, glob: Arc<dyn GlobExpander>, ui: Arc<dyn UiSink>, config: EngineConfig) -> Self {
        Self {
            planner: SyncPlanner::new(fs.clone(), glob.clone()),
            executor: CopyExecutor::new(fs),
            ui,
            plan_cache: PlanCache::new(config.cache_ttl),
            glob,
            config,
            state: EngineState::Idle,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Invalidate the plan cache and its companion glob-result cache
    /// together, so the two never drift (spec §4.8: "Must also clear a
    /// companion glob-result cache").
    fn invalidate_caches(&mut self) {
        self.plan_cache.invalidate();
        self.glob.invalidate();
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// A clone of the stop flag, for wiring into a `ctrlc` handler.
    pub fn running_flag(&self) -> Arc<AtomicBool> {
        self.running.clone()
    }

    fn require_state(&self, operation: &'static str, allowed: &[EngineState]) -> CcResult<()> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(CcError::IllegalState { operation, expected: allowed[0].name(), actual: self.state.name() })
        }
    }

    fn transition(&mut self, to: EngineState) {
        info!(target: "ccsync::engine", from = self.state.name(), to = to.name(), "engine transition");
        self.state = to;
    }

    /// Run one synchronization pass and return to `Stopped` (spec §4.13,
    /// `sync` command).
    pub fn run_once(&mut self) -> CcResult<SyncOperationResult> {
        self.require_state("run_once", &[EngineState::Idle, EngineState::Stopped])?;
        self.transition(EngineState::Starting);
        self.ui.set_mode(UiMode::Manual);
        self.ui.start();

        let plan = self.plan_or_cached();
        self.transition(EngineState::Running);
        let result = self.execute_plan(&plan);
        self.ui.write_messages(false, true);

        self.transition(EngineState::Stopped);
        self.ui.stop();
        Ok(result)
    }

    /// Run manual mode: an interactive loop that syncs immediately on
    /// entry, then again on every SPACE press, until ESC/`q`/Ctrl-C
    /// requests a stop (spec §4.11).
    pub fn run_manual(&mut self) -> CcResult<()> {
        self.require_state("run_manual", &[EngineState::Idle, EngineState::Stopped])?;
        self.transition(EngineState::Starting);
        self.ui.set_mode(UiMode::Manual);
        self.ui.start();
        self.running.store(true, Ordering::SeqCst);
        self.transition(EngineState::Running);

        self.run_manual_cycle();

        // Only attach the raw-mode key handler when stdin is actually a
        // terminal — under a pipe or in CI, the SPACE/ESC loop has no
        // keyboard to read from, and `run_once` already covers that case.
        if self.running.load(Ordering::SeqCst) && std::io::stdin().is_terminal() {
            let _raw_mode = manual_controller::RawModeGuard::new()?;
            while self.running.load(Ordering::SeqCst) {
                match manual_controller::poll_event(Duration::from_millis(50))? {
                    Some(ControllerEvent::ManualTriggerRequested) => self.run_manual_cycle(),
                    Some(ControllerEvent::StopRequested) => self.running.store(false, Ordering::SeqCst),
                    _ => {}
                }
            }
        }

        self.transition(EngineState::Stopping);
        self.ui.stop();
        self.transition(EngineState::Stopped);
        Ok(())
    }

    fn run_manual_cycle(&mut self) {
        let plan = self.plan_or_cached();
        let _ = self.execute_plan(&plan);
        self.ui.write_messages(false, true);
    }

    /// Display a plan's issues to the UI and, only if it's valid, run it
    /// through the executor; an invalid plan short-circuits to an error
    /// result without ever reaching `performSync` (spec §4.11's sync
    /// cycle: "display issues to UI → if invalid, emit a
    /// complete-with-error and return; else call performSync").
    fn execute_plan(&mut self, plan: &crate::domain::entities::SyncPlan) -> SyncOperationResult {
        for issue in &plan.issues {
            let kind = if issue.is_error() { MessageType::Error } else { MessageType::Warning };
            self.ui.add_message(kind, &issue.message, issue.suggestion.as_deref());
        }

        if !plan.is_valid {
            let result = SyncOperationResult::plan_invalid();
            self.ui.complete_operation(&result);
            return result;
        }

        perform_sync(plan, &self.executor, self.ui.as_ref())
    }

    fn plan_or_cached(&mut self) -> crate::domain::entities::SyncPlan {
        if let Some(cached) = self.plan_cache.get_full() {
            return cached.clone();
        }
        let plan = self.planner.create_plan(
            &self.config.source_root,
            &self.config.minecraft_save_path,
            &self.config.computer_groups,
            &self.config.rules,
        );
        // Only valid plans are cached (spec §4.7 point 3) — an invalid
        // plan should be retried on the very next pass, not replayed
        // from the cache until its TTL expires.
        if plan.is_valid {
            self.plan_cache.put_full(plan.clone());
        }
        plan
    }

    /// Run watch mode until `stop()` is called or the watcher fails to
    /// start within the handshake timeout (spec §4.12, §4.13).
    pub fn run_watch(&mut self) -> CcResult<()> {
        self.require_state("run_watch", &[EngineState::Idle, EngineState::Stopped])?;
        self.transition(EngineState::Starting);
        self.ui.set_mode(UiMode::Watch);
        self.ui.start();
        self.running.store(true, Ordering::SeqCst);

        let initial_plan = self.plan_or_cached();
        if initial_plan.resolved_file_rules.is_empty() {
            self.transition(EngineState::Error);
            self.ui.stop();
            return Err(CcError::WatchNoFiles);
        }

        let mut controller = {
            let watch_paths: Vec<PathBuf> = vec![self.config.source_root.clone()];
            let tracked_files: Vec<PathBuf> =
                initial_plan.resolved_file_rules.iter().map(|r| r.source_absolute_path.clone()).collect();
            match WatchController::start(&watch_paths, self.config.use_polling, &tracked_files) {
                Ok(controller) => controller,
                Err(err) => {
                    self.transition(EngineState::Error);
                    self.ui.stop();
                    return Err(err);
                }
            }
        };

        self.transition(EngineState::Running);
        let _ = self.execute_plan(&initial_plan);
        self.ui.write_messages(false, true);

        while self.running.load(Ordering::SeqCst) {
            self.report_missing_watched_files(&mut controller);
            match controller.tick(Duration::from_millis(50)) {
                WatchTick::Pending => continue,
                WatchTick::Ready(changed_files) => {
                    if changed_files.is_empty() {
                        continue;
                    }
                    self.run_incremental_pass(&changed_files);
                }
            }
        }

        self.transition(EngineState::Stopping);
        self.ui.stop();
        self.transition(EngineState::Stopped);
        Ok(())
    }

    /// Drain newly-unlinked tracked files and surface them as warnings,
    /// invalidating the plan cache so the next pass re-resolves against
    /// what's actually on disk (spec §4.12 "On unlink").
    fn report_missing_watched_files(&mut self, controller: &mut WatchController) {
        for path in controller.take_missing() {
            let message = format!("source file no longer exists: {}", path.display());
            warn!(target: "ccsync::watch", path = %path.display(), "tracked file unlinked");
            self.ui.add_message(MessageType::Warning, &message, Some("restart watch mode to refresh"));
            self.invalidate_caches();
        }
    }

    fn run_incremental_pass(&mut self, changed_files: &[PathBuf]) {
        if let Some(cached) = self.plan_cache.get_for_changes(changed_files) {
            let cached = cached.clone();
            let _ = self.execute_plan(&cached);
            self.ui.write_messages(false, true);
            return;
        }

        let full_plan = self.plan_or_cached();
        let plan = match SyncPlanner::filter_for_changes(&full_plan, changed_files) {
            Some(plan) => plan,
            None => {
                warn!(target: "ccsync::engine", "change batch matched no resolved rule");
                return;
            }
        };
        if plan.is_valid {
            self.plan_cache.put_for_changes(changed_files, plan.clone());
        }
        let _ = self.execute_plan(&plan);
        self.ui.write_messages(false, true);
    }

    /// Request a stop. Safe to call from any state, including from a
    /// `ctrlc` handler running on another thread via `running_flag()`.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if !matches!(self.state, EngineState::Stopped | EngineState::Idle) {
            self.transition(EngineState::Stopping);
        }
    }

    /// Drop cached plans, e.g. after the config file changes on disk.
    pub fn invalidate_cache(&mut self) {
        self.invalidate_caches();
    }
}
