//! Keyboard input: key events in, typed commands out, commands run against a
//! session.

use crate::api::LabelSink;
use crate::callbacks::{annotation, layers, selection};
use crate::classes::{LandClass, LandClassTable};
use crate::error::SessionError;
use crate::renderer::MapRenderer;
use crate::state::{Basemap, DriverState, Session};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// Digit row, 0-9.
    Digit(u8),
    /// Numpad, 0-9.
    Numpad(u8),
    Space,
    Escape,
    Enter,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub ctrl: bool,
}

impl KeyEvent {
    pub fn plain(code: KeyCode) -> Self {
        Self { code, ctrl: false }
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self { code, ctrl: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AssignClass(LandClass),
    SelectNext,
    ShowBasemap(Basemap),
    ToggleAuxiliary(u8),
    DismissNotice,
}

impl Command {
    /// Map a key press to a command. Keys with no binding yield `None`.
    ///
    /// | key            | command                         |
    /// |----------------|---------------------------------|
    /// | 1-9 / numpad   | assign the class bound to it    |
    /// | Ctrl+0         | primary basemap                 |
    /// | Ctrl+9         | secondary basemap               |
    /// | Ctrl+1..8      | toggle auxiliary layer          |
    /// | Ctrl+Space     | select next unassigned          |
    /// | Esc / Enter    | dismiss notice                  |
    pub fn from_key(key: KeyEvent, classes: &LandClassTable) -> Option<Self> {
        match (key.code, key.ctrl) {
            (KeyCode::Digit(n) | KeyCode::Numpad(n), false) => {
                classes.by_key(n).cloned().map(Command::AssignClass)
            }
            (KeyCode::Digit(0) | KeyCode::Numpad(0), true) => {
                Some(Command::ShowBasemap(Basemap::Primary))
            }
            (KeyCode::Digit(9) | KeyCode::Numpad(9), true) => {
                Some(Command::ShowBasemap(Basemap::Secondary))
            }
            (KeyCode::Digit(n) | KeyCode::Numpad(n), true) if (1..=8).contains(&n) => {
                Some(Command::ToggleAuxiliary(n))
            }
            (KeyCode::Space, true) => Some(Command::SelectNext),
            (KeyCode::Escape | KeyCode::Enter, _) => Some(Command::DismissNotice),
            _ => None,
        }
    }
}

/// Run one command. While the "no unassigned" notice is open, everything
/// except [`Command::DismissNotice`] is dropped.
pub fn dispatch(
    session: &mut Session,
    command: Command,
    renderer: &mut dyn MapRenderer,
    sink: &dyn LabelSink,
) -> Result<(), SessionError> {
    if session.driver_state() == DriverState::NoUnassignedWarning
        && command != Command::DismissNotice
    {
        debug!("Notice open, ignoring {:?}", command);
        return Ok(());
    }

    match command {
        Command::AssignClass(class) => {
            annotation::assign_class(session, &class, renderer, sink);
        }
        Command::SelectNext => {
            selection::select_next(session, renderer)?;
        }
        Command::ShowBasemap(basemap) => layers::show_basemap(session, basemap, renderer),
        Command::ToggleAuxiliary(slot) => layers::toggle_auxiliary(session, slot, renderer),
        Command::DismissNotice => selection::dismiss_notice(session, renderer),
    }
    Ok(())
}

/// Single entry point for keyboard input. Returns the command that ran, if any.
pub fn handle_key(
    session: &mut Session,
    key: KeyEvent,
    renderer: &mut dyn MapRenderer,
    sink: &dyn LabelSink,
) -> Result<Option<Command>, SessionError> {
    let Some(command) = Command::from_key(key, session.classes()) else {
        return Ok(None);
    };
    dispatch(session, command.clone(), renderer, sink)?;
    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::parse_class_content;

    fn table() -> LandClassTable {
        parse_class_content(
            "- {key: 1, id: 11, color: '#a51d2d'}\n- {key: 4, id: 14, color: '#26a269'}",
        )
        .unwrap()
    }

    #[test]
    fn digits_and_numpad_assign_bound_classes() {
        let classes = table();
        let from_digit = Command::from_key(KeyEvent::plain(KeyCode::Digit(4)), &classes);
        let from_numpad = Command::from_key(KeyEvent::plain(KeyCode::Numpad(4)), &classes);
        assert_eq!(from_digit, from_numpad);
        assert!(matches!(from_digit, Some(Command::AssignClass(c)) if c.id == 14));
    }

    #[test]
    fn unbound_digits_do_nothing() {
        let classes = table();
        assert_eq!(Command::from_key(KeyEvent::plain(KeyCode::Digit(7)), &classes), None);
        assert_eq!(Command::from_key(KeyEvent::plain(KeyCode::Digit(0)), &classes), None);
    }

    #[test]
    fn ctrl_bindings() {
        let classes = table();
        let cmd = |code| Command::from_key(KeyEvent::ctrl(code), &classes);
        assert_eq!(cmd(KeyCode::Digit(0)), Some(Command::ShowBasemap(Basemap::Primary)));
        assert_eq!(cmd(KeyCode::Digit(9)), Some(Command::ShowBasemap(Basemap::Secondary)));
        assert_eq!(cmd(KeyCode::Numpad(3)), Some(Command::ToggleAuxiliary(3)));
        assert_eq!(cmd(KeyCode::Space), Some(Command::SelectNext));
        assert_eq!(cmd(KeyCode::Other), None);
    }

    #[test]
    fn plain_space_is_unbound() {
        assert_eq!(Command::from_key(KeyEvent::plain(KeyCode::Space), &table()), None);
    }
}
