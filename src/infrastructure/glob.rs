//! Glob expansion backed by the `glob` crate, with its own result
//! cache keyed on `(root, pattern)` (spec §4.4, §4.8).

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use crate::application::plan_cache::GlobCache;
use crate::domain::ports::GlobExpander;
use crate::domain::value_objects::path::{expand_tilde, to_normalized_string};
use crate::error::{CcError, CcResult};

pub struct RealGlobExpander {
    cache: Mutex<GlobCache>,
}

impl RealGlobExpander {
    pub fn new(cache_ttl: Duration) -> Self {
        Self { cache: Mutex::new(GlobCache::new(cache_ttl)) }
    }

    pub fn invalidate(&self) {
        self.cache.lock().unwrap().invalidate();
    }
}

/// Does `pattern` contain glob metacharacters at all, or is it a plain
/// path? Plain paths that don't exist resolve to zero matches rather
/// than an error (spec §4.4 point 5).
fn is_plain_path(pattern: &str) -> bool {
    !pattern.chars().any(|c| matches!(c, '*' | '?' | '[' | ']' | '{' | '}'))
}

impl GlobExpander for RealGlobExpander {
    /// `root` is tilde-expanded before use, matching every
    /// `LocalFileSystem` method — a `source_root` of `~/project` must
    /// resolve the same way for both ports (spec §4.1).
    fn expand(&self, root: &Path, pattern: &str) -> CcResult<Vec<PathBuf>> {
        let root = expand_tilde(&root.to_string_lossy());
        let root = root.as_path();

        if let Some(cached) = self.cache.lock().unwrap().get(root, pattern) {
            return Ok(cached.to_vec());
        }

        let joined = root.join(pattern);

        let matches = if is_plain_path(pattern) {
            if joined.is_file() {
                vec![joined]
            } else {
                vec![]
            }
        } else {
            let pattern_str = to_normalized_string(&joined);
            let paths = glob::glob(&pattern_str)
                .map_err(|e| CcError::InvalidGlob { pattern: pattern.to_string(), message: e.to_string() })?;
            let mut matches = Vec::new();
            for entry in paths {
                match entry {
                    Ok(path) if path.is_file() => matches.push(path),
                    Ok(_) => {}
                    Err(e) => {
                        return Err(CcError::InvalidGlob { pattern: pattern.to_string(), message: e.to_string() })
                    }
                }
            }
            matches
        };

        self.cache.lock().unwrap().put(root, pattern, matches.clone());
        Ok(matches)
    }

    fn invalidate(&self) {
        self.cache.lock().unwrap().invalidate();
    }
}
