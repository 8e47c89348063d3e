//! Keyboard-to-action mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::InputMode;

/// One user intention, decoupled from the raw key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    /// Toggle the checkbox of the cursor row.
    ToggleRow,
    NextPage,
    PrevPage,
    /// Enter the row-count input for bulk select.
    StartCount,
    /// Character typed while the count input is active.
    Input(char),
    Backspace,
    /// Confirm the count input ("Select Rows").
    Confirm,
    /// Cancel the count input or dismiss a notification.
    Cancel,
    Tick,
    None,
}

/// Map a key event to an action given the current input mode.
pub fn from_key(key: KeyEvent, mode: InputMode) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match mode {
        InputMode::Count => match key.code {
            KeyCode::Esc => Action::Cancel,
            KeyCode::Enter => Action::Confirm,
            KeyCode::Backspace => Action::Backspace,
            // Anything printable goes into the buffer; validation happens
            // on confirm so bad input surfaces as one notification.
            KeyCode::Char(c) => Action::Input(c),
            _ => Action::None,
        },
        InputMode::Normal => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
            KeyCode::Left | KeyCode::Char('h') => Action::PrevPage,
            KeyCode::Right | KeyCode::Char('l') => Action::NextPage,
            KeyCode::Char(' ') => Action::ToggleRow,
            KeyCode::Char('s') => Action::StartCount,
            _ => Action::None,
        },
    }
}
