//! Watch controller — the two-buffer change coalescer that drives watch
//! mode (spec §4.12, §5).
//!
//! File events land in `pending` as they arrive off the `notify` channel.
//! Once the debounce window has elapsed since the *last* change, the
//! engine loop calls [`WatchController::take_ready_changes`], which hands
//! back the accumulated `pending` set as an owned `Vec` and installs a
//! brand new empty set in its place. Any event that arrives while that
//! batch is being synced lands in the fresh `pending` set rather than
//! racing the batch the engine is currently processing — a single-shot
//! handoff, not a mutex held across the whole sync. This is why the
//! model needs no locks: everything runs on one thread, and the handoff
//! is just a field swap.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use notify::{Event, EventKind, PollWatcher, RecommendedWatcher, RecursiveMode, Watcher};

use crate::error::{CcError, CcResult};

/// Debounce window: how long the buffer waits after the *last* observed
/// change before it is considered ready to flush (spec §4.12 point 3).
pub const DEBOUNCE: Duration = Duration::from_millis(300);

enum AnyWatcher {
    Os(RecommendedWatcher),
    Polling(PollWatcher),
}

/// One raw event off the `notify` channel, trimmed to what the
/// coalescer cares about: which path, and whether it was removed.
struct RawEvent {
    path: PathBuf,
    removed: bool,
}

/// Owns the underlying OS (or polling) watcher and the pending/active
/// change buffers.
pub struct WatchController {
    _watcher: AnyWatcher,
    rx: Receiver<RawEvent>,
    pending: HashSet<PathBuf>,
    last_change: Option<Instant>,
    ready: bool,
    /// The concrete source files resolved at watch startup (spec §4.12
    /// setup point 1); never shrinks.
    original_watched_files: HashSet<PathBuf>,
    /// `original_watched_files` minus anything unlinked since startup.
    watched_files: HashSet<PathBuf>,
    /// Files removed since the caller last drained them with
    /// [`WatchController::take_missing`].
    newly_missing: Vec<PathBuf>,
}

pub enum WatchTick {
    /// No debounced batch is ready yet; keep polling.
    Pending,
    /// The debounce window elapsed with at least one change queued.
    Ready(Vec<PathBuf>),
}

impl WatchController {
    /// Start watching every path in `watch_paths`. `use_polling` selects
    /// `PollWatcher` over the OS-native backend for filesystems where
    /// inotify/FSEvents don't fire reliably (network shares, some
    /// containers) — spec §6's `advanced.usePolling`. `tracked_files` is
    /// the concrete file list resolved from the rules at startup, used
    /// only to detect when one of them is unlinked mid-watch (spec
    /// §4.12 setup point 1, event handling "On unlink").
    pub fn start(watch_paths: &[PathBuf], use_polling: bool, tracked_files: &[PathBuf]) -> CcResult<Self> {
        let (tx, rx) = channel();
        let handler = move |res: notify::Result<Event>| {
            if let Ok(event) = res {
                let removed = matches!(event.kind, EventKind::Remove(_));
                for path in event.paths {
                    let _ = tx.send(RawEvent { path, removed });
                }
            }
        };

        let mut watcher = if use_polling {
            let config = notify::Config::default().with_poll_interval(Duration::from_millis(500));
            AnyWatcher::Polling(
                PollWatcher::new(handler, config).map_err(|e| CcError::Io(std::io::Error::other(e.to_string())))?,
            )
        } else {
            AnyWatcher::Os(
                RecommendedWatcher::new(handler, notify::Config::default())
                    .map_err(|e| CcError::Io(std::io::Error::other(e.to_string())))?,
            )
        };

        for path in watch_paths {
            let result = match &mut watcher {
                AnyWatcher::Os(w) => w.watch(path, RecursiveMode::Recursive),
                AnyWatcher::Polling(w) => w.watch(path, RecursiveMode::Recursive),
            };
            result.map_err(|e| CcError::Io(std::io::Error::other(e.to_string())))?;
        }

        let original_watched_files: HashSet<PathBuf> = tracked_files.iter().cloned().collect();
        Ok(Self {
            _watcher: watcher,
            rx,
            pending: HashSet::new(),
            last_change: None,
            ready: true,
            watched_files: original_watched_files.clone(),
            original_watched_files,
            newly_missing: Vec::new(),
        })
    }

    /// Drain events waiting on the channel (non-blocking beyond
    /// `poll_timeout`) into the pending buffer, then report whether the
    /// debounce window has elapsed. Removals of a tracked file fall out
    /// of `watched_files` and are queued for [`Self::take_missing`]
    /// instead of being added to `pending` (spec §4.12 "On unlink").
    pub fn tick(&mut self, poll_timeout: Duration) -> WatchTick {
        match self.rx.recv_timeout(poll_timeout) {
            Ok(event) => self.observe(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {}
        }

        // Drain any further events already queued without blocking again.
        while let Ok(event) = self.rx.try_recv() {
            self.observe(event);
        }

        match self.last_change {
            Some(last) if !self.pending.is_empty() && last.elapsed() >= DEBOUNCE => {
                WatchTick::Ready(self.take_ready_changes())
            }
            _ => WatchTick::Pending,
        }
    }

    fn observe(&mut self, event: RawEvent) {
        if event.removed && self.original_watched_files.contains(&event.path) {
            if self.watched_files.remove(&event.path) {
                self.newly_missing.push(event.path);
            }
            return;
        }
        self.pending.insert(event.path);
        self.last_change = Some(Instant::now());
    }

    /// Swap the pending buffer for a fresh empty one and hand back what
    /// was collected — the actual two-buffer handoff.
    fn take_ready_changes(&mut self) -> Vec<PathBuf> {
        let batch: Vec<PathBuf> = self.pending.drain().collect();
        self.last_change = None;
        batch
    }

    /// Drain and return any tracked files unlinked since the last call
    /// (spec §4.12 "On unlink": remove from `watchedFiles`, invalidate
    /// the plan cache, warn with the file name).
    pub fn take_missing(&mut self) -> Vec<PathBuf> {
        std::mem::take(&mut self.newly_missing)
    }

    /// Files originally resolved at watch startup that are no longer
    /// present, for "missing watched files" reporting (spec §4.12 "On
    /// change": compare `originalWatchedFiles` against `watchedFiles`).
    pub fn missing_watched_files(&self) -> Vec<&Path> {
        self.original_watched_files.difference(&self.watched_files).map(PathBuf::as_path).collect()
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

/// Whether `path` is one of the files watch mode actually cares about:
/// any file under a watched source root, filtered by the caller against
/// the resolved rule set (spec §4.12 point 2).
pub fn is_relevant_change(path: &Path, source_root: &Path) -> bool {
    path.starts_with(source_root)
}
