//! Manual controller — maps raw-mode key presses to controller events
//! for the SPACE-to-resync, ESC/q/Ctrl-C-to-stop loop (spec §4.11).

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use crate::application::events::ControllerEvent;
use crate::error::{CcError, CcResult};

fn io_err(e: impl std::fmt::Display) -> CcError {
    CcError::Io(std::io::Error::other(e.to_string()))
}

/// Map one raw-mode key press to a controller event, or `None` for keys
/// the manual controller doesn't act on.
fn key_to_event(code: KeyCode, modifiers: KeyModifiers) -> Option<ControllerEvent> {
    match code {
        KeyCode::Char(' ') => Some(ControllerEvent::ManualTriggerRequested),
        KeyCode::Esc | KeyCode::Char('q') => Some(ControllerEvent::StopRequested),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(ControllerEvent::StopRequested),
        _ => None,
    }
}

/// Enables raw mode for the lifetime of the guard, restoring the
/// terminal's prior state on drop regardless of how the caller exits
/// the manual loop (spec §5 "cleanup restores its prior raw-mode
/// state").
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn new() -> CcResult<Self> {
        terminal::enable_raw_mode().map_err(io_err)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Poll once for up to `timeout` for a key press that maps to a
/// controller event. Returns `Ok(None)` on timeout or an unmapped key,
/// so the caller's own loop stays in control of when to re-check its
/// stop flag (mirrors the watch controller's `tick`).
pub fn poll_event(timeout: Duration) -> CcResult<Option<ControllerEvent>> {
    if !event::poll(timeout).map_err(io_err)? {
        return Ok(None);
    }
    let Event::Key(key) = event::read().map_err(io_err)? else {
        return Ok(None);
    };
    if key.kind != KeyEventKind::Press {
        return Ok(None);
    }
    Ok(key_to_event(key.code, key.modifiers))
}
