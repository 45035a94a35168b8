//! Scenario: two source files edited close together are both eventually
//! synced — the pending/active handoff in the watch controller never
//! drops a change (spec §8 scenario 6, §4.12 concurrency invariants).

use std::thread;
use std::time::Duration;

use crate::common::*;

#[test]
fn rapid_successive_edits_both_land_on_disk() {
    let env = TestEnv::new();
    env.write_source_file("program.lua", "-- program v1");
    env.write_source_file("startup.lua", "-- startup v1");
    env.create_computer("1");

    let rules = vec![rule("*.lua", "/", &["1"])];
    let mut engine = env.engine_with_polling(rules, vec![], true);
    let running = engine.running_flag();

    let handle = thread::spawn(move || {
        engine.run_watch().expect("watch mode should not error");
    });

    thread::sleep(Duration::from_millis(300));

    env.write_source_file("program.lua", "-- program v2");
    thread::sleep(Duration::from_millis(50));
    env.write_source_file("startup.lua", "-- startup v2");

    let deadline = std::time::Instant::now() + Duration::from_secs(5);
    loop {
        let program = std::fs::read_to_string(env.computer_file("1", "program.lua")).unwrap_or_default();
        let startup = std::fs::read_to_string(env.computer_file("1", "startup.lua")).unwrap_or_default();
        if program == "-- program v2" && startup == "-- startup v2" {
            break;
        }
        assert!(std::time::Instant::now() < deadline, "not every edit was synced within the deadline");
        thread::sleep(Duration::from_millis(100));
    }

    running.store(false, std::sync::atomic::Ordering::SeqCst);
    handle.join().expect("watch thread should not panic");
}
