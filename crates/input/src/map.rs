//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction, Parameter};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn adjust(parameter: Parameter, direction: Direction) -> Option<GameAction> {
    Some(GameAction::Adjust {
        parameter,
        direction,
    })
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Aperture: up stops down (larger f-number)
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            adjust(Parameter::Aperture, Direction::Increase)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            adjust(Parameter::Aperture, Direction::Decrease)
        }

        // Shutter: right is faster
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            adjust(Parameter::Shutter, Direction::Increase)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            adjust(Parameter::Shutter, Direction::Decrease)
        }

        // ISO
        KeyCode::Char('+') | KeyCode::Char('=') => adjust(Parameter::Iso, Direction::Increase),
        KeyCode::Char('-') | KeyCode::Char('_') => adjust(Parameter::Iso, Direction::Decrease),

        // Flow
        KeyCode::Enter => Some(GameAction::Start),
        KeyCode::Char(' ') => Some(GameAction::Shutter),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::NextRound),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn adjust_action(parameter: Parameter, direction: Direction) -> Option<GameAction> {
        Some(GameAction::Adjust {
            parameter,
            direction,
        })
    }

    #[test]
    fn test_aperture_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            adjust_action(Parameter::Aperture, Direction::Increase)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            adjust_action(Parameter::Aperture, Direction::Decrease)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('W'))),
            adjust_action(Parameter::Aperture, Direction::Increase)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('s'))),
            adjust_action(Parameter::Aperture, Direction::Decrease)
        );
    }

    #[test]
    fn test_shutter_and_iso_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            adjust_action(Parameter::Shutter, Direction::Increase)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a'))),
            adjust_action(Parameter::Shutter, Direction::Decrease)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('+'))),
            adjust_action(Parameter::Iso, Direction::Increase)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('='))),
            adjust_action(Parameter::Iso, Direction::Increase)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('-'))),
            adjust_action(Parameter::Iso, Direction::Decrease)
        );
    }

    #[test]
    fn test_flow_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Start)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::Shutter)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('N'))),
            Some(GameAction::NextRound)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
