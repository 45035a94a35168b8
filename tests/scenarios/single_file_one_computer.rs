//! Scenario: a single rule targeting one existing computer syncs
//! successfully end to end.

use crate::common::*;

#[test]
fn single_file_syncs_to_one_computer() {
    let env = TestEnv::new();
    env.write_source_file("program.lua", "print('Hello')");
    env.create_computer("1");

    let mut engine = env.engine(vec![rule("program.lua", "/program.lua", &["1"])], vec![]);

    let result = engine.run_once().expect("sync should not error");

    assert_eq!(result.status, ccsync::domain::entities::SyncStatus::Success);
    assert_eq!(result.summary.total_files, 1);
    assert_eq!(result.summary.successful_files, 1);
    assert_file_content(&env.computer_file("1", "program.lua"), "print('Hello')");
}
