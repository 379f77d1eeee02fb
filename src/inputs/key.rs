// inputs/key.rs

//! Keys used to look up global actions.

use std::fmt::{self, Display, Formatter};

use crossterm::event;

/// Represents a key.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug)]
pub enum Key {
    Alt(char),
    Backspace,
    Char(char),
    Ctrl(char),
    Enter,
    Esc,
    F1,
    F2,
    F3,
    F4,
    Tab,
    Unknown,
}

impl Key {
    /// Returns the function key corresponding to the given number,
    /// `Unknown` for those without a use.
    pub fn from_f(n: u8) -> Key {
        match n {
            1 => Key::F1,
            2 => Key::F2,
            3 => Key::F3,
            4 => Key::F4,
            _ => Key::Unknown,
        }
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Key::Alt(' ') => write!(f, "<Alt+Space>"),
            Key::Alt(c) => write!(f, "<Alt+{}>", c),
            Key::Char(' ') => write!(f, "<Space>"),
            Key::Char(c) => write!(f, "<{}>", c),
            Key::Ctrl(' ') => write!(f, "<Ctrl+Space>"),
            Key::Ctrl(c) => write!(f, "<Ctrl+{}>", c),
            _ => write!(f, "<{:?}>", self),
        }
    }
}

// convert backend KeyEvent to this crate's Key
impl From<event::KeyEvent> for Key {
    fn from(key_event: event::KeyEvent) -> Self {
        match key_event {
            event::KeyEvent {
                code: event::KeyCode::Esc,
                ..
            } => Key::Esc,
            event::KeyEvent {
                code: event::KeyCode::Backspace,
                ..
            } => Key::Backspace,
            event::KeyEvent {
                code: event::KeyCode::F(n),
                ..
            } => Key::from_f(n),
            event::KeyEvent {
                code: event::KeyCode::Enter,
                ..
            } => Key::Enter,
            event::KeyEvent {
                code: event::KeyCode::Tab,
                ..
            } => Key::Tab,
            // First check for char + modifier
            event::KeyEvent {
                code: event::KeyCode::Char(c),
                modifiers: event::KeyModifiers::ALT,
                ..
            } => Key::Alt(c),
            event::KeyEvent {
                code: event::KeyCode::Char(c),
                modifiers: event::KeyModifiers::CONTROL,
                ..
            } => Key::Ctrl(c),
            event::KeyEvent {
                code: event::KeyCode::Char(c),
                ..
            } => Key::Char(c),

            _ => Key::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Char('c'), KeyModifiers::CONTROL, Key::Ctrl('c'))]
    #[case(KeyCode::Char('x'), KeyModifiers::ALT, Key::Alt('x'))]
    #[case(KeyCode::Char('a'), KeyModifiers::NONE, Key::Char('a'))]
    #[case(KeyCode::Char('A'), KeyModifiers::SHIFT, Key::Char('A'))]
    #[case(KeyCode::F(2), KeyModifiers::NONE, Key::F2)]
    #[case(KeyCode::F(12), KeyModifiers::NONE, Key::Unknown)]
    #[case(KeyCode::Enter, KeyModifiers::SHIFT, Key::Enter)]
    fn key_from_key_event(
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
        #[case] expected: Key,
    ) {
        assert_eq!(Key::from(KeyEvent::new(code, modifiers)), expected);
    }

    #[test]
    fn key_display() {
        assert_eq!(Key::Ctrl('c').to_string(), "<Ctrl+c>");
        assert_eq!(Key::F1.to_string(), "<F1>");
        assert_eq!(Key::Char(' ').to_string(), "<Space>");
    }
}
