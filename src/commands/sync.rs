//! `ccsync sync` — manual mode: syncs immediately, then again on every
//! SPACE press, until ESC/`q`/Ctrl-C.

use std::path::Path;

use crate::error::CcResult;

pub fn cmd_sync(config_path: &Path, json: bool) -> CcResult<()> {
    let mut engine = super::build_engine(config_path, json)?;

    let running = engine.running_flag();
    ctrlc::set_handler(move || {
        running.store(false, std::sync::atomic::Ordering::SeqCst);
    })
    .expect("error setting Ctrl+C handler");

    engine.run_manual()
}
