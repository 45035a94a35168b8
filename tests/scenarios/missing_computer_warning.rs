//! Scenario: a rule naming a non-existent computer id degrades to a
//! warning rather than failing the whole operation.

use std::sync::Arc;

use crate::common::*;

#[test]
fn missing_computer_is_a_warning_not_a_failure() {
    let env = TestEnv::new();
    env.write_source_file("program.lua", "print('Hello')");
    env.create_computer("1");

    let mut engine = env.engine(vec![rule("program.lua", "/program.lua", &["1", "999"])], vec![]);
    let result = engine.run_once().expect("sync should not error");

    assert_eq!(result.status, ccsync::domain::entities::SyncStatus::Warning);
    assert_eq!(result.summary.missing_computers, 1);
    assert_eq!(result.summary.successful_files, 1);

    let missing = result.computers.iter().find(|c| c.computer_id == "999").expect("999 present in results");
    assert!(!missing.exists);
    assert_eq!(missing.success_count(), 0);
    assert_eq!(missing.failure_count, 0);

    assert_file_content(&env.computer_file("1", "program.lua"), "print('Hello')");
}

#[test]
fn mid_operation_stats_exclude_the_missing_computer() {
    let env = TestEnv::new();
    env.write_source_file("program.lua", "print('Hello')");
    env.create_computer("1");

    let recorder = Arc::new(RecordingUiSink::new());
    let mut engine =
        env.engine_with_ui(vec![rule("program.lua", "/program.lua", &["1", "999"])], vec![], true, recorder.clone());
    engine.run_once().expect("sync should not error");

    // One rule naming two computers, only one of which exists: the
    // live `total_files` stat must count the single file planned against
    // the available computer, not one per named computer (spec §3 —
    // missing computers count toward `missingComputers`, never
    // `totalFiles`).
    let stats = recorder.stats();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].total_files, 1);
    assert_eq!(stats[0].total_computers, 2);
}
