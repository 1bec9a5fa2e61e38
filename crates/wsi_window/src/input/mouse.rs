//! Mouse translator

use crate::event::{button, Action, MouseButtons, MouseEvent};

/// Held buttons and last known cursor position
#[derive(Debug, Clone, Copy)]
pub struct MouseState {
    buttons: MouseButtons,
    x: i32,
    y: i32,
}

impl Default for MouseState {
    fn default() -> Self {
        Self {
            buttons: MouseButtons::empty(),
            x: 0,
            y: 0,
        }
    }
}

impl MouseState {
    /// Create a mouse state with no buttons held
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor motion; reported whether or not a button is held
    pub fn moved(&mut self, x: f64, y: f64) -> MouseEvent {
        self.set_position(x, y);
        self.event(Action::Move, 0)
    }

    /// Button press or release
    ///
    /// Without a `position` the event carries the last tracked cursor
    /// position. Ids outside 1..=8, repeated presses and releases of buttons
    /// that are not held are dropped.
    pub fn button(&mut self, id: u8, pressed: bool, position: Option<(f64, f64)>) -> Option<MouseEvent> {
        let Some(bit) = MouseButtons::from_id(id) else {
            log::debug!("Ignoring mouse button with unsupported id {}", id);
            return None;
        };
        if let Some((x, y)) = position {
            self.set_position(x, y);
        }

        match (pressed, self.buttons.contains(bit)) {
            (true, false) => {
                self.buttons.insert(bit);
                Some(self.event(Action::Down, id))
            }
            (false, true) => {
                self.buttons.remove(bit);
                Some(self.event(Action::Up, id))
            }
            (true, true) => {
                log::trace!("Ignoring repeated mouse down for button {}", id);
                None
            }
            (false, false) => {
                log::debug!("Ignoring mouse up without matching down for button {}", id);
                None
            }
        }
    }

    /// One wheel notch, reported as a press and release of button 4 or 5
    pub fn wheel(&mut self, up: bool) -> [MouseEvent; 2] {
        let id = if up { button::WHEEL_UP } else { button::WHEEL_DOWN };
        let bit = MouseButtons::from_id(id).unwrap_or(MouseButtons::empty());

        self.buttons.insert(bit);
        let down = self.event(Action::Down, id);
        self.buttons.remove(bit);
        let up = self.event(Action::Up, id);
        [down, up]
    }

    /// Release every held button, lowest id first
    pub fn release_all(&mut self) -> Vec<MouseEvent> {
        let mut released = Vec::new();
        for id in 1..=8 {
            if let Some(bit) = MouseButtons::from_id(id).filter(|bit| self.buttons.contains(*bit)) {
                self.buttons.remove(bit);
                released.push(self.event(Action::Up, id));
            }
        }
        if !released.is_empty() {
            log::debug!("Released {} held mouse buttons", released.len());
        }
        released
    }

    /// Last known cursor position
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Buttons currently held
    pub fn buttons(&self) -> MouseButtons {
        self.buttons
    }

    /// Check whether a button id is held
    pub fn is_pressed(&self, id: u8) -> bool {
        MouseButtons::from_id(id).is_some_and(|bit| self.buttons.contains(bit))
    }

    fn set_position(&mut self, x: f64, y: f64) {
        self.x = x.floor() as i32;
        self.y = y.floor() as i32;
    }

    fn event(&self, action: Action, button: u8) -> MouseEvent {
        MouseEvent {
            action,
            x: self.x,
            y: self.y,
            button,
            buttons: self.buttons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_move_without_buttons() {
        let mut mouse = MouseState::new();
        let event = mouse.moved(12.7, 22.2);
        assert_eq!(event.action, Action::Move);
        assert_eq!((event.x, event.y), (12, 22));
        assert_eq!(event.button, 0);
        assert!(event.buttons.is_empty());
    }

    #[test]
    fn test_move_carries_held_mask() {
        let mut mouse = MouseState::new();
        mouse.button(button::LEFT, true, Some((0.0, 0.0))).unwrap();
        mouse.button(button::RIGHT, true, Some((0.0, 0.0))).unwrap();

        let event = mouse.moved(5.0, 5.0);
        assert_eq!(event.buttons, MouseButtons::LEFT | MouseButtons::RIGHT);
    }

    #[test]
    fn test_duplicate_down_and_orphan_up() {
        let mut mouse = MouseState::new();
        assert!(mouse.button(button::LEFT, true, Some((1.0, 1.0))).is_some());
        assert!(mouse.button(button::LEFT, true, Some((1.0, 1.0))).is_none());
        assert!(mouse.button(button::MIDDLE, false, Some((1.0, 1.0))).is_none());
        assert!(mouse.is_pressed(button::LEFT));

        let up = mouse.button(button::LEFT, false, Some((3.0, 4.0))).unwrap();
        assert_eq!(up.action, Action::Up);
        assert_eq!((up.x, up.y), (3, 4));
        assert!(up.buttons.is_empty());
    }

    #[test]
    fn test_button_keeps_tracked_position() {
        let mut mouse = MouseState::new();
        mouse.moved(10.0, 20.0);
        let down = mouse.button(button::LEFT, true, None).unwrap();
        assert_eq!((down.x, down.y), (10, 20));
    }

    #[test]
    fn test_release_all() {
        let mut mouse = MouseState::new();
        mouse.button(button::RIGHT, true, Some((1.0, 2.0))).unwrap();
        mouse.button(button::LEFT, true, None).unwrap();

        let released = mouse.release_all();
        assert_eq!(released.len(), 2);
        assert_eq!((released[0].action, released[0].button), (Action::Up, button::LEFT));
        assert_eq!(released[0].buttons, MouseButtons::RIGHT);
        assert_eq!(released[1].button, button::RIGHT);
        assert!(released[1].buttons.is_empty());
        assert!(mouse.buttons().is_empty());
        assert!(mouse.release_all().is_empty());
    }

    #[test]
    fn test_out_of_range_button() {
        let mut mouse = MouseState::new();
        assert!(mouse.button(0, true, Some((0.0, 0.0))).is_none());
        assert!(mouse.button(9, true, Some((0.0, 0.0))).is_none());
        assert!(mouse.buttons().is_empty());
    }

    #[test]
    fn test_wheel_press_release_pair() {
        let mut mouse = MouseState::new();
        mouse.moved(7.0, 8.0);
        let [down, up] = mouse.wheel(false);
        assert_eq!((down.action, down.button), (Action::Down, button::WHEEL_DOWN));
        assert_eq!(down.buttons, MouseButtons::WHEEL_DOWN);
        assert_eq!((up.action, up.button), (Action::Up, button::WHEEL_DOWN));
        assert!(up.buttons.is_empty());
        assert_eq!((up.x, up.y), (7, 8));
    }
}
