//! `ccsync watch` — runs until Ctrl+C or ESC/'q' in the manual
//! controller's key loop (spec §4.11, §4.12).

use std::path::Path;

use crate::error::CcResult;

pub fn cmd_watch(config_path: &Path, json: bool) -> CcResult<()> {
    let mut engine = super::build_engine(config_path, json)?;

    let running = engine.running_flag();
    ctrlc::set_handler(move || {
        running.store(false, std::sync::atomic::Ordering::SeqCst);
    })
    .expect("error setting Ctrl+C handler");

    engine.run_watch()
}
