use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Game(Command),
    Quit,
    None,
}

/// Translates terminal key presses into game commands. Steering keys are
/// passed on by name so the game applies its own key mapping.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => steer("ArrowUp"),
            KeyCode::Down => steer("ArrowDown"),
            KeyCode::Left => steer("ArrowLeft"),
            KeyCode::Right => steer("ArrowRight"),

            // Movement - WASD
            KeyCode::Char(c @ ('w' | 'a' | 's' | 'd' | 'W' | 'A' | 'S' | 'D')) => {
                KeyAction::Game(Command::Key(c.to_string()))
            }

            // Controls
            KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Game(Command::Start),
            KeyCode::Char('x') | KeyCode::Char('X') => KeyAction::Game(Command::Stop),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

fn steer(name: &str) -> KeyAction {
    KeyAction::Game(Command::Key(name.to_string()))
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key(name: &str) -> KeyAction {
        KeyAction::Game(Command::Key(name.to_string()))
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Up)), key("ArrowUp"));
        assert_eq!(handler.handle_key_event(press(KeyCode::Down)), key("ArrowDown"));
        assert_eq!(handler.handle_key_event(press(KeyCode::Left)), key("ArrowLeft"));
        assert_eq!(handler.handle_key_event(press(KeyCode::Right)), key("ArrowRight"));
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Char('w'))), key("w"));
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('a'))), key("a"));
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('s'))), key("s"));
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('d'))), key("d"));

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(w_upper), key("W"));
    }

    #[test]
    fn test_start_and_stop_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Enter)),
            KeyAction::Game(Command::Start)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char(' '))),
            KeyAction::Game(Command::Start)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('x'))),
            KeyAction::Game(Command::Stop)
        );
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key_event(press(KeyCode::Esc)), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('z'))), KeyAction::None);
        assert_eq!(handler.handle_key_event(press(KeyCode::Tab)), KeyAction::None);
    }
}
