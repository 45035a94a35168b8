//! Duplicate-target detection — two rules that resolve to the same
//! final path on the same computer would silently clobber each other;
//! this service flags that before any copy runs (spec §4.7 point 4).

use std::collections::HashMap;

use crate::domain::value_objects::{IssueCategory, ResolvedFileRule, SyncPlanIssue};

/// Build the `"computerId:resolvedTargetPath"` key and return one
/// warning per key that more than one resolved rule maps to.
pub fn detect(rules: &[ResolvedFileRule]) -> Vec<SyncPlanIssue> {
    let mut by_key: HashMap<String, Vec<&str>> = HashMap::new();

    for rule in rules {
        let target_path = rule.final_target_path();
        for computer in &rule.computers {
            let key = format!("{computer}:{target_path}");
            by_key.entry(key).or_default().push(rule.source_relative_path.as_str());
        }
    }

    by_key
        .into_iter()
        .filter(|(_, sources)| sources.len() > 1)
        .map(|(key, mut sources)| {
            sources.sort_unstable();
            SyncPlanIssue::warning(
                format!("multiple source files resolve to the same target on computer {key}: {}", sources.join(", ")),
                IssueCategory::Rule,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ResolvedTarget, TargetKind};
    use std::path::PathBuf;

    fn rule(source_rel: &str, target: &str, computer: &str) -> ResolvedFileRule {
        ResolvedFileRule {
            source_absolute_path: PathBuf::from("/src").join(source_rel),
            source_relative_path: source_rel.to_string(),
            flatten: true,
            target: ResolvedTarget { kind: TargetKind::File, path: target.to_string() },
            computers: vec![computer.to_string()],
        }
    }

    #[test]
    fn no_duplicates_is_empty() {
        let rules = vec![rule("a.lua", "/a.lua", "1"), rule("b.lua", "/b.lua", "1")];
        assert!(detect(&rules).is_empty());
    }

    #[test]
    fn same_target_same_computer_is_flagged() {
        let rules = vec![rule("a.lua", "/startup.lua", "1"), rule("b.lua", "/startup.lua", "1")];
        let issues = detect(&rules);
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn same_target_different_computer_is_not_flagged() {
        let rules = vec![rule("a.lua", "/startup.lua", "1"), rule("a.lua", "/startup.lua", "2")];
        assert!(detect(&rules).is_empty());
    }
}
