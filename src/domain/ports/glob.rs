//! Glob expansion port — resolves a rule's `source` glob pattern against
//! the configured source root (spec §4.1, §4.4).

use std::path::{Path, PathBuf};

use crate::error::CcResult;

/// Implementations:
/// - `RealGlobExpander` — backed by the `glob` crate, with its own
///   result cache (spec §4.8).
/// - test doubles that return a fixed file list.
pub trait GlobExpander: Send + Sync {
    /// Expand `pattern` (relative to `root`) into absolute file paths.
    /// A plain, non-glob path that exists is returned as its single
    /// match; one that does not exist yields an empty list rather than
    /// an error (spec §4.4 point 5).
    fn expand(&self, root: &Path, pattern: &str) -> CcResult<Vec<PathBuf>>;

    /// Drop any cached glob results. The plan cache's companion cache
    /// (spec §4.8: "Must also clear a companion glob-result cache") —
    /// every `PlanCache::invalidate` call must be paired with one of
    /// these. No-op for expanders that don't cache.
    fn invalidate(&self) {}
}
