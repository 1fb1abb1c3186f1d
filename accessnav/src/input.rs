//! Logical actions and the key dispatcher.
//!
//! Only four keys mean anything to a session: Escape, Up, Down and Enter.
//! The dispatcher consumes them while its session is open and passes every
//! other key, and every key while closed, back to the host.

use std::{rc::Rc, str::FromStr};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{error::ParseActionError, provider::DataProvider, session::NavigationSession};

/// The four actions a user can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalAction {
    Previous,
    Next,
    Activate,
    Cancel,
}

impl FromStr for LogicalAction {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "k" | "prev" | "previous" => Ok(Self::Previous),
            "down" | "j" | "next" => Ok(Self::Next),
            "enter" | "activate" => Ok(Self::Activate),
            "esc" | "escape" | "cancel" | "back" => Ok(Self::Cancel),
            _ => Err(ParseActionError(s.to_string())),
        }
    }
}

/// Whether the host should still process a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// The session used the key.
    Consumed,
    /// The key belongs to the host.
    Ignored,
}

/// Map a terminal key to a logical action.
///
/// Numeric-pad Enter arrives as [`KeyCode::Enter`] with the keypad state
/// flag set and maps like the main Enter key.
pub fn action_for_key(key: &KeyEvent) -> Option<LogicalAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Up => Some(LogicalAction::Previous),
        KeyCode::Down => Some(LogicalAction::Next),
        KeyCode::Enter => Some(LogicalAction::Activate),
        KeyCode::Esc => Some(LogicalAction::Cancel),
        _ => None,
    }
}

/// Routes keys and actions to the session that currently has focus.
pub struct InputDispatcher<'s, P: DataProvider> {
    session: &'s mut NavigationSession<P>,
}

impl<'s, P: DataProvider> InputDispatcher<'s, P> {
    pub fn new(session: &'s mut NavigationSession<P>) -> Self {
        Self { session }
    }

    /// Open the session on `subject`.
    pub fn open(&mut self, subject: Option<&Rc<P::Subject>>) {
        self.session.open(subject);
    }

    /// Close the session.
    pub fn close(&mut self) {
        self.session.close();
    }

    /// Offer a key to the session.
    pub fn handle_key(&mut self, key: &KeyEvent) -> Handled {
        if !self.session.is_active() {
            return Handled::Ignored;
        }
        match action_for_key(key) {
            Some(action) => {
                self.perform(action);
                Handled::Consumed
            }
            None => Handled::Ignored,
        }
    }

    /// Run one logical action.
    pub fn perform(&mut self, action: LogicalAction) {
        trace!("action {action:?}");
        match action {
            LogicalAction::Previous => self.session.select_previous(),
            LogicalAction::Next => self.session.select_next(),
            LogicalAction::Activate => self.session.activate(),
            LogicalAction::Cancel => self.session.cancel(),
        }
    }

    /// Run a sequence of actions, stopping early once the session closes.
    ///
    /// Returns the number of actions performed.
    pub fn replay(&mut self, actions: impl IntoIterator<Item = LogicalAction>) -> usize {
        let mut performed = 0;
        for action in actions {
            if !self.session.is_active() {
                break;
            }
            self.perform(action);
            performed += 1;
        }
        performed
    }

    pub fn session(&self) -> &NavigationSession<P> {
        &*self.session
    }

    pub fn session_mut(&mut self) -> &mut NavigationSession<P> {
        &mut *self.session
    }
}

/// Parse a comma or whitespace separated action list such as
/// `"down, down, enter"`.
///
/// # Errors
///
/// Returns the first word that is not an action name.
pub fn parse_script(script: &str) -> Result<Vec<LogicalAction>, ParseActionError> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(str::parse)
        .collect()
}
