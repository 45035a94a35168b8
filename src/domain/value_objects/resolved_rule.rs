//! `ResolvedFileRule` — a rule after group and glob expansion (spec §3, §4.4, §4.6).

use std::path::{Path, PathBuf};

use super::path::{basename, join_relative, normalize};

/// Whether the resolved target is a single file or a directory that
/// receives one or more copied files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    File,
    Directory,
}

/// The classified target of a resolved rule (spec §4.4 point 4).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub kind: TargetKind,
    pub path: String,
}

/// A rule after computer/group expansion and glob expansion: one concrete
/// source file, a deduplicated computer list, and a classified target.
///
/// Invariant: the source file existed when the rule resolver ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFileRule {
    pub source_absolute_path: PathBuf,
    pub source_relative_path: String,
    pub flatten: bool,
    pub target: ResolvedTarget,
    pub computers: Vec<String>,
}

impl ResolvedFileRule {
    /// Compute the final target path on a computer for this rule's
    /// source file, per spec §4.6.
    ///
    /// - `file` target: the target path itself.
    /// - `directory` target with `flatten = true` (default): target dir + basename.
    /// - `directory` target with `flatten = false`: target dir + source-relative path.
    pub fn final_target_path(&self) -> String {
        match self.target.kind {
            TargetKind::File => normalize(&self.target.path, false),
            TargetKind::Directory => {
                if self.flatten {
                    join_relative(&self.target.path, basename(&self.source_relative_path))
                } else {
                    join_relative(&self.target.path, &self.source_relative_path)
                }
            }
        }
    }

    pub fn source_file_name(&self) -> &str {
        Path::new(&self.source_relative_path)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.source_relative_path)
    }
}
