//! Path normalization and classification.
//!
//! Every path the engine stores or compares is kept in forward-slash
//! form, per spec: source-relative paths, target paths on a computer, and
//! cache keys all go through [`normalize`] before anything else touches
//! them.

use std::path::{Path, PathBuf};

/// Normalize a path string to forward-slash form.
///
/// Collapses repeated separators, converts backslashes to forward
/// slashes, and drops a trailing slash unless `preserve_trailing_slash`
/// is set (needed for glob patterns and directory-target markers, where
/// the trailing slash is load-bearing — see spec §4.6 / Design notes).
pub fn normalize(path: &str, preserve_trailing_slash: bool) -> String {
    let had_trailing_slash = path.ends_with('/') || path.ends_with('\\');
    let unified: String = path.chars().map(|c| if c == '\\' { '/' } else { c }).collect();

    let mut segments: Vec<&str> = Vec::new();
    for segment in unified.split('/') {
        if segment.is_empty() {
            continue;
        }
        segments.push(segment);
    }

    let leading_slash = unified.starts_with('/');
    let mut normalized = String::new();
    if leading_slash {
        normalized.push('/');
    }
    normalized.push_str(&segments.join("/"));

    if preserve_trailing_slash && had_trailing_slash && !normalized.ends_with('/') {
        normalized.push('/');
    }

    if normalized.is_empty() {
        normalized.push('/');
        return if leading_slash || path.is_empty() {
            "/".to_string()
        } else {
            String::new()
        };
    }

    normalized
}

/// Join a directory path and a relative path, normalizing the result.
///
/// Both inputs may use either separator; the result is always
/// forward-slash and never carries a trailing slash (callers that need
/// one re-add it, since it is only ever meaningful on the `base`).
pub fn join_relative(base: &str, rel: &str) -> String {
    let base_norm = normalize(base, false);
    let rel_norm = normalize(rel, false);
    if base_norm.is_empty() || base_norm == "/" {
        return rel_norm;
    }
    format!("{}/{}", base_norm.trim_end_matches('/'), rel_norm.trim_start_matches('/'))
}

/// Expand a leading `~` to the user's home directory.
///
/// Paths that do not start with `~` are returned unchanged (as a
/// `PathBuf`, still in whatever separator form the caller used — callers
/// that need a normalized string should pass the result through
/// [`normalize`]).
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix('~') {
        if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') {
            if let Some(home) = dirs::home_dir() {
                let rest = rest.trim_start_matches(['/', '\\']);
                return if rest.is_empty() { home } else { home.join(rest) };
            }
        }
    }
    PathBuf::from(path)
}

/// Heuristic: does the last path segment look like a file (has a dot and
/// no glob metacharacters)?
///
/// Total over all inputs, including empty strings and `/`: both are
/// treated as directories.
pub fn path_is_likely_file(path: &str) -> bool {
    let normalized = normalize(path, true);
    if normalized.is_empty() || normalized == "/" {
        return false;
    }
    let last_segment = normalized.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    if last_segment.is_empty() {
        return false;
    }
    if !last_segment.contains('.') {
        return false;
    }
    !last_segment.chars().any(is_glob_meta)
}

fn is_glob_meta(c: char) -> bool {
    matches!(c, '*' | '?' | '[' | ']' | '{' | '}')
}

/// Is the directory component of `p` a directory target (trailing slash,
/// or not file-like per [`path_is_likely_file`])?
pub fn is_directory_target(target: &str) -> bool {
    let normalized = normalize(target, true);
    normalized.ends_with('/') || !path_is_likely_file(&normalized)
}

/// Compute the basename (last path segment) of a forward-slash path.
pub fn basename(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or(path)
}

/// Compute `path` relative to `root`, both forward-slash normalized,
/// returning `None` if `path` is not beneath `root`.
pub fn relative_to<'a>(path: &'a str, root: &str) -> Option<&'a str> {
    let root_norm = normalize(root, false);
    let root_prefix = format!("{}/", root_norm.trim_end_matches('/'));
    path.strip_prefix(&root_prefix).or_else(|| {
        if path == root_norm {
            Some("")
        } else {
            None
        }
    })
}

/// Convert a native `Path` to our normalized forward-slash string form.
pub fn to_normalized_string(path: &Path) -> String {
    normalize(&path.to_string_lossy(), false)
}
