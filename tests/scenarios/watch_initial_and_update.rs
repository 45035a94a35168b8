//! Scenario: watch mode performs an initial sync, then picks up a
//! subsequent edit to the watched source file (spec §8 scenario 2).

use std::thread;
use std::time::Duration;

use crate::common::*;

#[test]
fn watch_mode_syncs_initial_state_then_an_update() {
    let env = TestEnv::new();
    env.write_source_file("program.lua", "print('Hello')");
    env.create_computer("1");
    env.create_computer("2");

    let mut engine = env.engine_with_polling(vec![rule("program.lua", "/program.lua", &["1", "2"])], vec![], true);
    let running = engine.running_flag();

    let handle = thread::spawn(move || {
        engine.run_watch().expect("watch mode should not error");
    });

    // Initial sync happens before the watch loop starts polling for
    // changes; give it a moment to land on disk.
    thread::sleep(Duration::from_millis(300));
    assert_file_content(&env.computer_file("1", "program.lua"), "print('Hello')");
    assert_file_content(&env.computer_file("2", "program.lua"), "print('Hello')");

    env.write_source_file("program.lua", "print('Updated')");

    // Poll interval (500ms) + debounce (300ms) + copy pacing, generously.
    let deadline = std::time::Instant::now() + Duration::from_secs(5);
    loop {
        let content = std::fs::read_to_string(env.computer_file("1", "program.lua")).unwrap_or_default();
        if content == "print('Updated')" {
            break;
        }
        assert!(std::time::Instant::now() < deadline, "update was not synced within the deadline");
        thread::sleep(Duration::from_millis(100));
    }
    assert_file_content(&env.computer_file("2", "program.lua"), "print('Updated')");

    running.store(false, std::sync::atomic::Ordering::SeqCst);
    handle.join().expect("watch thread should not panic");
}
