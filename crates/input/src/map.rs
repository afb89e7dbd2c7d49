//! Key mapping from terminal events to spaceship controls.

use crate::types::Controls;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map one key press to controls. Unrelated keys map to idle controls.
pub fn controls_for_key(key: KeyEvent) -> Controls {
    match key.code {
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Controls::new(-1, 0, false),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Controls::new(1, 0, false),
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Controls::new(0, -1, false),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Controls::new(0, 1, false),
        KeyCode::Char(' ') => Controls::new(0, 0, true),
        _ => Controls::default(),
    }
}

/// Check if key should stop the animation.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Fold a batch of key presses into one reading.
pub fn fold_keys<'a>(keys: impl IntoIterator<Item = &'a KeyEvent>) -> Controls {
    let mut controls = Controls::default();
    for key in keys {
        controls.merge(controls_for_key(*key));
    }
    controls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            controls_for_key(KeyEvent::from(KeyCode::Up)),
            Controls::new(-1, 0, false)
        );
        assert_eq!(
            controls_for_key(KeyEvent::from(KeyCode::Down)),
            Controls::new(1, 0, false)
        );
        assert_eq!(
            controls_for_key(KeyEvent::from(KeyCode::Left)),
            Controls::new(0, -1, false)
        );
        assert_eq!(
            controls_for_key(KeyEvent::from(KeyCode::Char('L'))),
            Controls::new(0, 1, false)
        );
    }

    #[test]
    fn test_letter_aliases_ignore_case() {
        for (lower, upper, expected) in [
            ('w', 'W', Controls::new(-1, 0, false)),
            ('j', 'J', Controls::new(1, 0, false)),
            ('a', 'A', Controls::new(0, -1, false)),
            ('d', 'D', Controls::new(0, 1, false)),
        ] {
            assert_eq!(controls_for_key(KeyEvent::from(KeyCode::Char(lower))), expected);
            assert_eq!(controls_for_key(KeyEvent::from(KeyCode::Char(upper))), expected);
        }
    }

    #[test]
    fn test_fire_key() {
        assert!(controls_for_key(KeyEvent::from(KeyCode::Char(' '))).fire);
        assert!(controls_for_key(KeyEvent::from(KeyCode::Char('x'))).is_idle());
    }

    #[test]
    fn test_fold_combines_axes_and_fire() {
        let keys = [
            KeyEvent::from(KeyCode::Up),
            KeyEvent::from(KeyCode::Char(' ')),
            KeyEvent::from(KeyCode::Right),
        ];
        assert_eq!(fold_keys(keys.iter()), Controls::new(-1, 1, true));
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
}
