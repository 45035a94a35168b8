//! Plan cache — avoids rebuilding a `SyncPlan` on every tick when the
//! set of changed files hasn't moved since the last one (spec §4.8).
//!
//! Kept deliberately separate from the glob-result cache below: they key
//! on different things (a fingerprint of changed paths vs. a single glob
//! pattern) and invalidate on different triggers (a TTL plus a manual
//! config-change invalidation vs. every watch-mode planning pass).

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use sha2::{Digest, Sha256};

use crate::domain::entities::SyncPlan;

const FULL_PLAN_KEY: &str = "full";

fn fingerprint(changed_files: &[PathBuf]) -> String {
    let mut paths: Vec<String> = changed_files.iter().map(|p| p.to_string_lossy().into_owned()).collect();
    paths.sort();
    let mut hasher = Sha256::new();
    hasher.update(paths.join("\n").as_bytes());
    format!("{:x}", hasher.finalize())
}

struct CachedPlan {
    plan: SyncPlan,
    cached_at: Instant,
}

/// Caches the most recently computed `SyncPlan` per fingerprint, with a
/// soft TTL expiry and an explicit `invalidate` for config reloads.
pub struct PlanCache {
    ttl: Duration,
    entries: HashMap<String, CachedPlan>,
}

impl PlanCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entries: HashMap::new() }
    }

    /// Fetch a cached plan for a full (non-incremental) planning pass.
    pub fn get_full(&self) -> Option<&SyncPlan> {
        self.get(FULL_PLAN_KEY)
    }

    pub fn put_full(&mut self, plan: SyncPlan) {
        self.put(FULL_PLAN_KEY.to_string(), plan);
    }

    /// Fetch a cached plan keyed by the sorted, joined set of changed
    /// files that produced it.
    pub fn get_for_changes(&self, changed_files: &[PathBuf]) -> Option<&SyncPlan> {
        self.get(&fingerprint(changed_files))
    }

    pub fn put_for_changes(&mut self, changed_files: &[PathBuf], plan: SyncPlan) {
        self.put(fingerprint(changed_files), plan);
    }

    fn get(&self, key: &str) -> Option<&SyncPlan> {
        let entry = self.entries.get(key)?;
        if entry.cached_at.elapsed() > self.ttl {
            None
        } else {
            Some(&entry.plan)
        }
    }

    fn put(&mut self, key: String, plan: SyncPlan) {
        self.entries.insert(key, CachedPlan { plan, cached_at: Instant::now() });
    }

    /// Drop every cached plan, e.g. after a config reload (spec §4.8 point 3).
    pub fn invalidate(&mut self) {
        self.entries.clear();
    }
}

/// Caches glob-expansion results per `(root, pattern)` pair. Separate from
/// `PlanCache` on purpose: see the module doc above.
pub struct GlobCache {
    ttl: Duration,
    entries: HashMap<(PathBuf, String), (Vec<PathBuf>, Instant)>,
}

impl GlobCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entries: HashMap::new() }
    }

    pub fn get(&self, root: &std::path::Path, pattern: &str) -> Option<&[PathBuf]> {
        let key = (root.to_path_buf(), pattern.to_string());
        let (paths, cached_at) = self.entries.get(&key)?;
        if cached_at.elapsed() > self.ttl {
            None
        } else {
            Some(paths.as_slice())
        }
    }

    pub fn put(&mut self, root: &std::path::Path, pattern: &str, paths: Vec<PathBuf>) {
        self.entries.insert((root.to_path_buf(), pattern.to_string()), (paths, Instant::now()));
    }

    pub fn invalidate(&mut self) {
        self.entries.clear();
    }
}
