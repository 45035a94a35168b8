//! Rule resolution — expands a config's sync rules into concrete
//! `ResolvedFileRule`s: computer groups are flattened, sources are
//! glob-expanded, and targets are classified as file or directory
//! (spec §4.1, §4.4).

use std::collections::HashSet;
use std::path::Path;

use crate::domain::ports::GlobExpander;
use crate::domain::value_objects::path::{is_directory_target, relative_to, to_normalized_string};
use crate::domain::value_objects::{
    ComputerGroup, ResolvedFileRule, ResolvedTarget, SyncPlanIssue, SyncRule, TargetKind,
};

#[derive(Debug, Default)]
pub struct ResolveOutcome {
    pub resolved_file_rules: Vec<ResolvedFileRule>,
    pub issues: Vec<SyncPlanIssue>,
}

/// Expand `rule.computers` entries that name a `ComputerGroup` into their
/// members; entries that don't match any group pass through unchanged.
/// Duplicate ids collapse (spec §4.1 point 3).
fn expand_computers(entries: &[String], groups: &[ComputerGroup]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for entry in entries {
        if let Some(group) = groups.iter().find(|g| &g.name == entry) {
            for member in &group.members {
                if seen.insert(member.clone()) {
                    out.push(member.clone());
                }
            }
        } else if seen.insert(entry.clone()) {
            out.push(entry.clone());
        }
    }
    out
}

/// Resolve every rule against `source_root`, producing one
/// `ResolvedFileRule` per matched source file.
pub fn resolve(
    rules: &[SyncRule],
    groups: &[ComputerGroup],
    source_root: &Path,
    glob: &dyn GlobExpander,
) -> ResolveOutcome {
    let mut outcome = ResolveOutcome::default();

    for rule in rules {
        let computers = expand_computers(&rule.computers, groups);
        if computers.is_empty() {
            outcome
                .issues
                .push(SyncPlanIssue::from_rule_message(format!(
                    "rule for '{}' names no computers after group expansion",
                    rule.source
                )));
            continue;
        }

        let matches = match glob.expand(source_root, &rule.source) {
            Ok(paths) => paths,
            Err(err) => {
                outcome
                    .issues
                    .push(SyncPlanIssue::from_rule_message(format!(
                        "Invalid pattern '{}': {}",
                        rule.source, err
                    )));
                continue;
            }
        };

        if matches.is_empty() {
            outcome.issues.push(SyncPlanIssue::from_rule_message(format!(
                "source pattern '{}' matched no files",
                rule.source
            )));
            continue;
        }

        let target_kind = if is_directory_target(&rule.target) { TargetKind::Directory } else { TargetKind::File };
        if target_kind == TargetKind::File && matches.len() > 1 {
            outcome.issues.push(SyncPlanIssue::from_rule_message(format!(
                "pattern '{}' matched {} files but target '{}' is a single file",
                rule.source,
                matches.len(),
                rule.target
            )));
            continue;
        }

        let flatten = rule.flatten_or_default();
        for source_absolute_path in matches {
            let source_relative_path = relative_to(&to_normalized_string(&source_absolute_path), &to_normalized_string(source_root))
                .unwrap_or_else(|| to_normalized_string(&source_absolute_path))
                .to_string();

            outcome.resolved_file_rules.push(ResolvedFileRule {
                source_absolute_path,
                source_relative_path,
                flatten,
                target: ResolvedTarget { kind: target_kind, path: rule.target.clone() },
                computers: computers.clone(),
            });
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct FakeGlob {
        files: Vec<PathBuf>,
    }

    impl GlobExpander for FakeGlob {
        fn expand(&self, _root: &Path, _pattern: &str) -> crate::error::CcResult<Vec<PathBuf>> {
            Ok(self.files.clone())
        }
    }

    #[test]
    fn expands_computer_group_members() {
        let groups = vec![ComputerGroup { name: "monitors".into(), members: vec!["1".into(), "2".into()] }];
        let expanded = expand_computers(&["monitors".to_string(), "5".to_string()], &groups);
        assert_eq!(expanded, vec!["1", "2", "5"]);
    }

    #[test]
    fn duplicate_ids_collapse() {
        let groups = vec![ComputerGroup { name: "all".into(), members: vec!["1".into(), "2".into()] }];
        let expanded = expand_computers(&["all".to_string(), "1".to_string()], &groups);
        assert_eq!(expanded, vec!["1", "2"]);
    }

    #[test]
    fn rule_with_no_matches_produces_warning() {
        let rules = vec![SyncRule {
            source: "programs/*.lua".into(),
            target: "/".into(),
            computers: vec!["1".into()],
            flatten: None,
        }];
        let glob = FakeGlob { files: vec![] };
        let outcome = resolve(&rules, &[], Path::new("/src"), &glob);
        assert!(outcome.resolved_file_rules.is_empty());
        assert_eq!(outcome.issues.len(), 1);
    }

    #[test]
    fn file_target_with_single_match_resolves() {
        let rules = vec![SyncRule {
            source: "startup.lua".into(),
            target: "/startup.lua".into(),
            computers: vec!["1".into()],
            flatten: None,
        }];
        let glob = FakeGlob { files: vec![PathBuf::from("/src/startup.lua")] };
        let outcome = resolve(&rules, &[], Path::new("/src"), &glob);
        assert_eq!(outcome.resolved_file_rules.len(), 1);
        assert!(outcome.issues.is_empty());
        assert_eq!(outcome.resolved_file_rules[0].source_relative_path, "startup.lua");
    }

    #[test]
    fn file_target_with_multiple_matches_is_an_error() {
        let rules = vec![SyncRule {
            source: "programs/*.lua".into(),
            target: "/startup.lua".into(),
            computers: vec!["1".into()],
            flatten: None,
        }];
        let glob = FakeGlob { files: vec![PathBuf::from("/src/a.lua"), PathBuf::from("/src/b.lua")] };
        let outcome = resolve(&rules, &[], Path::new("/src"), &glob);
        assert!(outcome.resolved_file_rules.is_empty());
        assert_eq!(outcome.issues.len(), 1);
    }
}
