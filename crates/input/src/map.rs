//! Key mapping from terminal events to game actions.
//!
//! | Key | Action |
//! |-----|--------|
//! | ← / A / H | Move left |
//! | → / D / L | Move right |
//! | ↑ / W / K | Rotate |
//! | ↓ / S / J | Move down (soft drop) |
//! | Space | Hard drop |
//! | P | Pause / resume |
//! | R | Reset |

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };

    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => Some(GameAction::MoveRight),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => Some(GameAction::Rotate),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => Some(GameAction::MoveDown),
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('p') => Some(GameAction::Pause),
        KeyCode::Char('r') => Some(GameAction::Reset),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key toggles sound feedback.
pub fn is_mute_toggle(key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }
    matches!(key.code, KeyCode::Char('m') | KeyCode::Char('M'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_conventional_bindings() {
        assert_eq!(key(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(key(KeyCode::Right), Some(GameAction::MoveRight));
        assert_eq!(key(KeyCode::Up), Some(GameAction::Rotate));
        assert_eq!(key(KeyCode::Down), Some(GameAction::MoveDown));
        assert_eq!(key(KeyCode::Char(' ')), Some(GameAction::HardDrop));
        assert_eq!(key(KeyCode::Char('p')), Some(GameAction::Pause));
        assert_eq!(key(KeyCode::Char('r')), Some(GameAction::Reset));
    }

    #[test]
    fn test_alternate_keys_ignore_case() {
        assert_eq!(key(KeyCode::Char('A')), Some(GameAction::MoveLeft));
        assert_eq!(key(KeyCode::Char('l')), Some(GameAction::MoveRight));
        assert_eq!(key(KeyCode::Char('K')), Some(GameAction::Rotate));
        assert_eq!(key(KeyCode::Char('j')), Some(GameAction::MoveDown));
        assert_eq!(key(KeyCode::Char('P')), Some(GameAction::Pause));
        assert_eq!(key(KeyCode::Char('R')), Some(GameAction::Reset));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(key(KeyCode::Char('x')), None);
        assert_eq!(key(KeyCode::Enter), None);
        assert_eq!(key(KeyCode::Char('m')), None);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_mute_key() {
        assert!(is_mute_toggle(KeyEvent::from(KeyCode::Char('m'))));
        assert!(is_mute_toggle(KeyEvent::from(KeyCode::Char('M'))));
        assert!(!is_mute_toggle(KeyEvent::from(KeyCode::Char('p'))));
        assert!(!is_mute_toggle(KeyEvent::new(
            KeyCode::Char('m'),
            KeyModifiers::CONTROL
        )));
        assert!(is_mute_toggle(KeyEvent::new(
            KeyCode::Char('M'),
            KeyModifiers::SHIFT
        )));
    }
}
