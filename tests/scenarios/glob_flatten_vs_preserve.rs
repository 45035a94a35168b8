//! Scenario: the same source tree synced with a flattening glob rule to
//! one computer and a subtree-preserving glob rule to another.

use crate::common::*;

#[test]
fn flatten_default_and_preserve_subtree_both_work() {
    let env = TestEnv::new();
    env.write_source_file("program.lua", "-- program");
    env.write_source_file("startup.lua", "-- startup");
    env.write_source_file("programs/main.lua", "-- main");
    env.write_source_file("lib/utils.lua", "-- utils");
    env.create_computer("1");
    env.create_computer("2");

    let rules = vec![
        rule_with_flatten("**/*.lua", "/all/", &["2"], false),
        rule("*.lua", "/", &["1"]),
    ];
    let mut engine = env.engine(rules, vec![]);
    let result = engine.run_once().expect("sync should not error");

    assert_eq!(result.status, ccsync::domain::entities::SyncStatus::Success);

    assert_file_content(&env.computer_file("2", "all/program.lua"), "-- program");
    assert_file_content(&env.computer_file("2", "all/startup.lua"), "-- startup");
    assert_file_content(&env.computer_file("2", "all/programs/main.lua"), "-- main");
    assert_file_content(&env.computer_file("2", "all/lib/utils.lua"), "-- utils");

    assert_file_content(&env.computer_file("1", "program.lua"), "-- program");
    assert_file_content(&env.computer_file("1", "startup.lua"), "-- startup");
    assert_no_file(&env.computer_file("1", "programs/main.lua"));
    assert_no_file(&env.computer_file("1", "lib/utils.lua"));
}
