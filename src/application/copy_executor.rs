//! Copy executor — performs the actual file copies for one computer's
//! subset of resolved rules, enforcing the save-directory escape
//! boundary before any write (spec §4.9).

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use crate::domain::entities::Computer;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::ResolvedFileRule;

/// Pause after copying to one computer so a ComputerCraft disk doesn't
/// see a burst of writes land in the same tick (spec §4.9 point 5). One
/// pause per computer, not per file — the contract is `copyToComputer`,
/// a per-computer batch operation.
const COPY_PACING: Duration = Duration::from_millis(25);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyError {
    /// The resolved target path would land outside the computer's
    /// directory — refused rather than attempted (spec §4.9 point 1).
    EscapesComputerRoot { target: String },
    SourceMissing { path: PathBuf },
    Io(String),
}

impl std::fmt::Display for CopyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CopyError::EscapesComputerRoot { target } => {
                write!(f, "target '{target}' escapes the computer's directory (security)")
            }
            CopyError::SourceMissing { path } => write!(f, "source file missing: {}", path.display()),
            CopyError::Io(message) => write!(f, "{message}"),
        }
    }
}

/// One file's outcome within a per-computer copy batch.
#[derive(Debug, Clone)]
pub struct FileCopyResult {
    pub source_relative_path: String,
    pub target_path: String,
    pub error: Option<CopyError>,
}

impl FileCopyResult {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// The three-way outcome of one `copy_to_computer` call (spec §4.9).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Nothing skipped, no errors.
    Ok,
    /// Some copied, some skipped or errored.
    Partial,
    /// Everything attempted failed.
    Failure,
}

#[derive(Debug, Clone)]
pub struct BatchResult {
    pub files: Vec<FileCopyResult>,
    pub outcome: BatchOutcome,
}

/// Validate that a resolved, forward-slash target path stays within the
/// computer's root once joined. Rejects `..` segments and absolute
/// escapes, mirroring a value-object boundary check rather than trusting
/// string prefixes (spec §4.9 point 1).
pub fn resolve_within_computer(computer_root: &Path, target_path: &str) -> Result<PathBuf, CopyError> {
    let relative = target_path.trim_start_matches('/');
    let mut resolved = computer_root.to_path_buf();
    for segment in relative.split('/') {
        match segment {
            "" | "." => continue,
            ".." => {
                return Err(CopyError::EscapesComputerRoot { target: target_path.to_string() });
            }
            other => resolved.push(other),
        }
    }
    Ok(resolved)
}

pub struct CopyExecutor {
    fs: std::sync::Arc<dyn FileSystem>,
}

impl CopyExecutor {
    pub fn new(fs: std::sync::Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    fn copy_one(&self, rule: &ResolvedFileRule, computer: &Computer) -> Result<String, CopyError> {
        if !self.fs.is_file(&rule.source_absolute_path) {
            return Err(CopyError::SourceMissing { path: rule.source_absolute_path.clone() });
        }

        let target_path = rule.final_target_path();
        let resolved_target = resolve_within_computer(&computer.path, &target_path)?;

        if let Some(parent) = resolved_target.parent() {
            self.fs.create_dir_all(parent).map_err(|e| CopyError::Io(e.to_string()))?;
        }
        self.fs
            .copy_file(&rule.source_absolute_path, &resolved_target)
            .map_err(|e| CopyError::Io(e.to_string()))?;

        Ok(target_path)
    }

    /// Copy every rule in `rules` (already filtered to those targeting
    /// `computer`) to `computer`'s directory, then pause once (spec
    /// §4.9). Individual file errors never abort the batch; they land in
    /// the returned `files` list with `error` set.
    pub fn copy_to_computer(&self, rules: &[&ResolvedFileRule], computer: &Computer) -> BatchResult {
        let files: Vec<FileCopyResult> = rules
            .iter()
            .map(|rule| {
                let outcome = self.copy_one(rule, computer);
                let target_path = match &outcome {
                    Ok(path) => path.clone(),
                    Err(_) => rule.final_target_path(),
                };
                FileCopyResult {
                    source_relative_path: rule.source_relative_path.clone(),
                    target_path,
                    error: outcome.err(),
                }
            })
            .collect();

        if !files.is_empty() {
            thread::sleep(COPY_PACING);
        }

        let succeeded = files.iter().filter(|f| f.succeeded()).count();
        let outcome = if files.is_empty() || succeeded == files.len() {
            BatchOutcome::Ok
        } else if succeeded == 0 {
            BatchOutcome::Failure
        } else {
            BatchOutcome::Partial
        };

        BatchResult { files, outcome }
    }
}
