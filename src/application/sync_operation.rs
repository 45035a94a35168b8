//! Executes a `SyncPlan`: copies every resolved file to every computer
//! it targets and rolls the outcome up into a `SyncOperationResult`
//! (spec §4.10).

use std::collections::HashMap;

use crate::application::copy_executor::{BatchOutcome, CopyExecutor};
use crate::domain::entities::{ComputerSyncResult, PlannedFileResult, SyncOperationResult, SyncPlan};
use crate::domain::ports::{MessageType, UiSink};
use crate::domain::value_objects::ResolvedFileRule;

/// Run every resolved rule in `plan` against its target computers,
/// reporting progress through `ui` as it goes (spec §4.10).
///
/// Computers are visited in plan order, each with the subset of rules
/// that target it, matching §4.10 point 2's "for each available
/// computer in plan order, call the executor on the subset of rules
/// targeting that computer" rather than iterating rules outermost. A
/// `Failure` batch outcome (every file for that computer errored) aborts
/// the remaining computers rather than risking further writes against
/// whatever made that computer fail (§4.10 point 2, "to avoid
/// corrupting further computers").
pub fn perform_sync(plan: &SyncPlan, executor: &CopyExecutor, ui: &dyn UiSink) -> SyncOperationResult {
    let available_ids: std::collections::HashSet<&str> =
        plan.available_computers.iter().map(|c| c.id.as_str()).collect();
    // Missing computers count toward `missingComputers`, never `totalFiles`
    // (spec §3) — a rule naming both an available and a missing computer
    // must not inflate the file count for the one that was never synced.
    let total_files: usize = plan
        .resolved_file_rules
        .iter()
        .map(|r| r.computers.iter().filter(|id| available_ids.contains(id.as_str())).count())
        .sum();
    ui.start_sync_operation();
    ui.update_operation_stats(total_files, plan.available_computers.len() + plan.missing_computer_ids.len());

    let mut results: HashMap<String, ComputerSyncResult> = HashMap::new();
    for computer in &plan.available_computers {
        results.insert(computer.id.clone(), ComputerSyncResult::new(computer.id.clone(), true));
    }
    for id in &plan.missing_computer_ids {
        results.insert(id.clone(), ComputerSyncResult::new(id.clone(), false));
    }

    let rules_by_computer = group_rules_by_computer(&plan.resolved_file_rules);

    for computer in &plan.available_computers {
        let Some(rules) = rules_by_computer.get(computer.id.as_str()) else {
            continue;
        };
        let batch = executor.copy_to_computer(rules, computer);

        if let Some(entry) = results.get_mut(computer.id.as_str()) {
            for file in &batch.files {
                if let Some(err) = &file.error {
                    ui.add_message(
                        MessageType::Error,
                        &format!("computer {}: {} -> {}", computer.id, file.source_relative_path, err),
                        None,
                    );
                    entry.failure_count += 1;
                }
                entry.planned_files.push(PlannedFileResult {
                    source_relative_path: file.source_relative_path.clone(),
                    target_path: file.target_path.clone(),
                    success: file.succeeded(),
                });
            }
        }
        ui.update_computer_results(&results.values().cloned().collect::<Vec<_>>());

        if batch.outcome == BatchOutcome::Failure {
            ui.add_message(
                MessageType::Error,
                &format!("computer {} failed entirely, stopping sync", computer.id),
                Some("check the computer's directory permissions and try again"),
            );
            break;
        }
    }

    if !plan.missing_computer_ids.is_empty() {
        ui.add_message(
            MessageType::Warning,
            &format!("computers not found: {}", plan.missing_computer_ids.join(", ")),
            None,
        );
    }

    let mut ordered: Vec<ComputerSyncResult> = results.into_values().collect();
    ordered.sort_by(|a, b| a.computer_id.cmp(&b.computer_id));

    let had_warnings = plan.warning_issues().next().is_some();
    let operation_result = SyncOperationResult::from_computers(ordered, had_warnings);
    ui.complete_operation(&operation_result);
    operation_result
}

/// Group resolved rules by the computer ids they target, preserving
/// each rule's own position in `rules` (declaration/resolution order)
/// within every computer's bucket.
fn group_rules_by_computer(rules: &[ResolvedFileRule]) -> HashMap<&str, Vec<&ResolvedFileRule>> {
    let mut by_computer: HashMap<&str, Vec<&ResolvedFileRule>> = HashMap::new();
    for rule in rules {
        for computer_id in &rule.computers {
            by_computer.entry(computer_id.as_str()).or_default().push(rule);
        }
    }
    by_computer
}
