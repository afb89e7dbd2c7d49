//! Non-blocking drain of pending terminal key events.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::{fold_keys, should_quit};
use crate::types::Controls;

/// Upper bound of key presses folded into one reading. Extra events stay queued.
pub const MAX_KEYS_PER_READ: usize = 32;

/// Collects key presses without blocking.
#[derive(Debug, Default)]
pub struct KeyReader {
    keys: ArrayVec<KeyEvent, MAX_KEYS_PER_READ>,
    quit: bool,
}

impl KeyReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every event already pending and fold the presses into controls.
    pub fn read(&mut self) -> io::Result<Controls> {
        self.keys.clear();
        while !self.keys.is_full() && event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                self.push(key);
            }
        }
        Ok(fold_keys(self.keys.iter()))
    }

    /// Record one key event. Releases and repeats are ignored.
    pub fn push(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if should_quit(key) {
            self.quit = true;
            return;
        }
        let _ = self.keys.try_push(key);
    }

    /// Controls for the keys pushed since the last `read`/`take`.
    pub fn take(&mut self) -> Controls {
        let controls = fold_keys(self.keys.iter());
        self.keys.clear();
        controls
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn push_ignores_releases() {
        let mut reader = KeyReader::new();
        reader.push(KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(reader.take().is_idle());
    }

    #[test]
    fn quit_key_sets_flag_without_controls() {
        let mut reader = KeyReader::new();
        reader.push(KeyEvent::from(KeyCode::Char('q')));
        reader.push(KeyEvent::from(KeyCode::Char(' ')));
        assert!(reader.quit_requested());
        assert_eq!(reader.take(), Controls::new(0, 0, true));
        assert!(reader.take().is_idle());
    }

    #[test]
    fn overflow_is_dropped() {
        let mut reader = KeyReader::new();
        for _ in 0..MAX_KEYS_PER_READ {
            reader.push(KeyEvent::from(KeyCode::Char('x')));
        }
        reader.push(KeyEvent::from(KeyCode::Char(' ')));
        assert!(reader.take().is_idle());
    }
}
