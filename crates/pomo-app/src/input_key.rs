//! Abstract input key event, independent of terminal library.
//!
//! Converted from `crossterm::event::KeyEvent` at the TUI boundary so the
//! controller never depends on terminal-specific types.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, etc.)
    CharCtrl(char),
    /// Enter/Return key
    Enter,
    /// Escape key
    Esc,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::Char('a'), InputKey::Char('b'));
        assert_eq!(InputKey::CharCtrl('c'), InputKey::CharCtrl('c'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }

    #[test]
    fn test_space_is_a_char() {
        assert_eq!(InputKey::Char(' '), InputKey::Char(' '));
        assert_ne!(InputKey::Char(' '), InputKey::Enter);
    }
}
