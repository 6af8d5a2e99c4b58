//! Input handling - convert key events to viewer commands

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ViewerCommand {
    /// Carve again with the next seed
    Regenerate,
    Quit,
}

pub fn key_to_command(key: KeyEvent) -> Option<ViewerCommand> {
    // Windows reports releases as well as presses
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(ViewerCommand::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('r') | KeyCode::Char(' ') | KeyCode::Enter => {
            Some(ViewerCommand::Regenerate)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(ViewerCommand::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_bindings() {
        assert_eq!(key_to_command(press(KeyCode::Char('r'))), Some(ViewerCommand::Regenerate));
        assert_eq!(key_to_command(press(KeyCode::Char(' '))), Some(ViewerCommand::Regenerate));
        assert_eq!(key_to_command(press(KeyCode::Char('q'))), Some(ViewerCommand::Quit));
        assert_eq!(key_to_command(press(KeyCode::Esc)), Some(ViewerCommand::Quit));
        assert_eq!(key_to_command(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_command(key), Some(ViewerCommand::Quit));
        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(key_to_command(key), None);
    }

    #[test]
    fn test_release_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(key_to_command(key), None);
    }
}
