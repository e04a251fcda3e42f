//! Input handling: translates terminal key events into player actions.
//!
//! Keeps the key map in one place so the game loop and the tests never
//! touch raw key codes.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode};

/// UI-agnostic player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Space — set upward velocity.
    Flap,
    /// 'q' — leave the game.
    Quit,
    /// Enter — start from the title screen.
    Confirm,
    /// 'r' — start a new run from the game-over screen.
    Restart,
    /// Any other key.
    Ignored,
}

/// Map a key code to its player action.
pub fn map_key(code: KeyCode) -> PlayerAction {
    match code {
        KeyCode::Char(' ') => PlayerAction::Flap,
        KeyCode::Char('q') => PlayerAction::Quit,
        KeyCode::Enter => PlayerAction::Confirm,
        KeyCode::Char('r') => PlayerAction::Restart,
        _ => PlayerAction::Ignored,
    }
}

/// Poll for a single key press, waiting at most `timeout`.
///
/// Returns `None` when the window elapses without a key. Non-key terminal
/// events consume the poll and also return `None`.
pub fn poll_action(timeout: Duration) -> io::Result<Option<PlayerAction>> {
    if event::poll(timeout)? {
        if let Event::Key(key_event) = event::read()? {
            return Ok(Some(map_key(key_event.code)));
        }
    }
    Ok(None)
}

/// Block until a key press arrives (title and game-over screens).
pub fn wait_action() -> io::Result<PlayerAction> {
    loop {
        if let Event::Key(key_event) = event::read()? {
            return Ok(map_key(key_event.code));
        }
    }
}
