use ggez::input::keyboard::KeyCode;

use crate::game::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    Quit,
    None,
}

/// Map a freshly pressed key to what the game should do with it.
///
/// Only the arrow keys steer; Escape closes the window and everything else is ignored.
pub fn action_for_key(key: KeyCode) -> KeyAction {
    match key {
        KeyCode::Up => KeyAction::Steer(Direction::Up),
        KeyCode::Down => KeyAction::Steer(Direction::Down),
        KeyCode::Left => KeyAction::Steer(Direction::Left),
        KeyCode::Right => KeyAction::Steer(Direction::Right),
        KeyCode::Escape => KeyAction::Quit,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(action_for_key(KeyCode::Up), KeyAction::Steer(Direction::Up));
        assert_eq!(
            action_for_key(KeyCode::Down),
            KeyAction::Steer(Direction::Down)
        );
        assert_eq!(
            action_for_key(KeyCode::Left),
            KeyAction::Steer(Direction::Left)
        );
        assert_eq!(
            action_for_key(KeyCode::Right),
            KeyAction::Steer(Direction::Right)
        );
    }

    #[test]
    fn test_escape_quits() {
        assert_eq!(action_for_key(KeyCode::Escape), KeyAction::Quit);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(action_for_key(KeyCode::W), KeyAction::None);
        assert_eq!(action_for_key(KeyCode::Space), KeyAction::None);
        assert_eq!(action_for_key(KeyCode::Return), KeyAction::None);
    }
}
