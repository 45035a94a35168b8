//! Scenario: two rules resolving to the same target path on the same
//! computer still sync (last writer wins) but the plan carries a
//! duplicate-target warning.

use crate::common::*;

#[test]
fn duplicate_target_warns_but_still_copies() {
    let env = TestEnv::new();
    env.write_source_file("program.lua", "-- program");
    env.write_source_file("startup.lua", "-- startup, written second");
    env.create_computer("1");

    let rules = vec![
        rule("program.lua", "/startup.lua", &["1"]),
        rule("startup.lua", "/startup.lua", &["1"]),
    ];
    let mut engine = env.engine(rules, vec![]);
    let result = engine.run_once().expect("sync should not error");

    assert_eq!(result.status, ccsync::domain::entities::SyncStatus::Warning);

    let content = std::fs::read_to_string(env.computer_file("1", "startup.lua")).unwrap();
    assert!(content == "-- program" || content == "-- startup, written second");
}
