//! Keyboard translator

use std::collections::HashSet;

use crate::event::{Action, KeyEvent};
use crate::input::Keycode;

/// Set of currently held keys
#[derive(Debug, Default, Clone)]
pub struct KeyboardState {
    pressed: HashSet<Keycode>,
}

impl KeyboardState {
    /// Create an empty keyboard state
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a native key report
    ///
    /// A Down for a key that is already held (auto-repeat or a duplicated
    /// native message) produces nothing, as does an Up for a key that was never
    /// pressed.
    pub fn apply(&mut self, keycode: Keycode, pressed: bool) -> Option<KeyEvent> {
        if pressed {
            if !self.pressed.insert(keycode) {
                log::trace!("Ignoring repeated key down: {}", keycode);
                return None;
            }
            Some(KeyEvent { action: Action::Down, keycode })
        } else {
            if !self.pressed.remove(&keycode) {
                log::debug!("Ignoring key up without matching down: {}", keycode);
                return None;
            }
            Some(KeyEvent { action: Action::Up, keycode })
        }
    }

    /// Check whether a key is held
    pub fn is_pressed(&self, keycode: Keycode) -> bool {
        self.pressed.contains(&keycode)
    }

    /// Number of held keys
    pub fn pressed_count(&self) -> usize {
        self.pressed.len()
    }

    /// Release every held key, returning the Up events in keycode order
    pub fn release_all(&mut self) -> Vec<KeyEvent> {
        let mut held: Vec<Keycode> = self.pressed.drain().collect();
        held.sort();
        held.into_iter()
            .map(|keycode| KeyEvent { action: Action::Up, keycode })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut keyboard = KeyboardState::new();
        let down = keyboard.apply(Keycode::A, true).unwrap();
        assert_eq!(down.action, Action::Down);
        assert!(keyboard.is_pressed(Keycode::A));

        let up = keyboard.apply(Keycode::A, false).unwrap();
        assert_eq!(up.action, Action::Up);
        assert!(!keyboard.is_pressed(Keycode::A));
    }

    #[test]
    fn test_duplicate_down_is_idempotent() {
        let mut keyboard = KeyboardState::new();
        let events: Vec<_> = (0..5)
            .filter_map(|_| keyboard.apply(Keycode::Space, true))
            .collect();
        assert_eq!(events.len(), 1);
        assert_eq!(keyboard.pressed_count(), 1);

        assert!(keyboard.apply(Keycode::Space, false).is_some());
        assert!(keyboard.apply(Keycode::Space, true).is_some());
    }

    #[test]
    fn test_up_without_down_dropped() {
        let mut keyboard = KeyboardState::new();
        keyboard.apply(Keycode::B, true);
        assert!(keyboard.apply(Keycode::C, false).is_none());
        assert!(keyboard.is_pressed(Keycode::B));
    }

    #[test]
    fn test_release_all() {
        let mut keyboard = KeyboardState::new();
        keyboard.apply(Keycode::LeftShift, true);
        keyboard.apply(Keycode::W, true);

        let released = keyboard.release_all();
        let codes: Vec<_> = released.iter().map(|e| e.keycode).collect();
        assert_eq!(codes, vec![Keycode::W, Keycode::LeftShift]);
        assert!(released.iter().all(|e| e.action == Action::Up));
        assert_eq!(keyboard.pressed_count(), 0);
    }
}
