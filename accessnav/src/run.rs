//! Terminal key loop.
//!
//! Reads keys from the terminal in raw mode and feeds them to an
//! [`InputDispatcher`] until its session closes.
//!
//! # Keys
//!
//! - `Up` / `Down` move through the current level
//! - `Enter` activates the selected entry
//! - `Esc` goes back, closing the menu at its entry level
//! - `r` repeats the last announcement
//! - `Ctrl+C` closes the menu from anywhere

use std::io;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};

use crate::{
    input::{Handled, InputDispatcher},
    provider::DataProvider,
};

/// Drive `dispatcher` from terminal key events.
///
/// Returns once the session is no longer active. The session must already be
/// open; a closed session returns immediately.
///
/// # Errors
///
/// Returns an error if reading terminal events fails. Raw mode is restored
/// either way.
pub fn run_terminal<P: DataProvider>(dispatcher: &mut InputDispatcher<'_, P>) -> io::Result<()> {
    let cleanup_needed = enable_raw_mode().is_ok();

    let result = key_loop(dispatcher);

    if cleanup_needed {
        let _ = disable_raw_mode();
    }
    result
}

fn key_loop<P: DataProvider>(dispatcher: &mut InputDispatcher<'_, P>) -> io::Result<()> {
    while dispatcher.session().is_active() {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }
        if dispatcher.handle_key(&key) == Handled::Consumed {
            continue;
        }
        host_key(dispatcher, &key);
    }
    debug!("terminal loop finished");
    Ok(())
}

/// Keys the loop handles itself rather than the session.
fn host_key<P: DataProvider>(dispatcher: &mut InputDispatcher<'_, P>, key: &KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('c') if ctrl => dispatcher.close(),
        KeyCode::Char('r' | 'R') if !ctrl && !alt => dispatcher.session_mut().repeat(),
        _ => trace!("unbound key {:?}", key.code),
    }
}
