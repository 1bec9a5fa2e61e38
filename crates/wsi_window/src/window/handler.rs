//! Event handler interface
//!
//! Applications implement [`EventHandler`] and override the methods for the
//! events they care about. Every method defaults to doing nothing. Handlers run
//! inline inside [`Window::process_events`], so a slow handler delays the rest
//! of the drain.
//!
//! [`Window::process_events`]: crate::window::Window::process_events

use crate::event::{
    CloseEvent, Event, FocusEvent, KeyEvent, MouseEvent, MoveEvent, ResizeEvent, TextEvent,
    TouchEvent,
};

/// Receives window events, one method per event kind
pub trait EventHandler {
    /// Mouse button or motion
    fn on_mouse_event(&mut self, _event: &MouseEvent) {}

    /// Touch point change
    fn on_touch_event(&mut self, _event: &TouchEvent) {}

    /// Key press or release
    fn on_key_event(&mut self, _event: &KeyEvent) {}

    /// Text input
    fn on_text_event(&mut self, _event: &TextEvent) {}

    /// Window moved
    fn on_move_event(&mut self, _event: &MoveEvent) {}

    /// Focus changed
    fn on_focus_event(&mut self, _event: &FocusEvent) {}

    /// Window resized
    fn on_resize_event(&mut self, _event: &ResizeEvent) {}

    /// Window closing
    fn on_close_event(&mut self, _event: &CloseEvent) {}

    /// Entry point used by the window; routes to the per-kind method
    fn on_event(&mut self, event: &Event) {
        match event {
            Event::Mouse(e) => self.on_mouse_event(e),
            Event::Touch(e) => self.on_touch_event(e),
            Event::Key(e) => self.on_key_event(e),
            Event::Text(e) => self.on_text_event(e),
            Event::Move(e) => self.on_move_event(e),
            Event::Focus(e) => self.on_focus_event(e),
            Event::Resize(e) => self.on_resize_event(e),
            Event::Close(e) => self.on_close_event(e),
        }
    }
}

/// Ignores every event
impl EventHandler for () {}

/// Records every event in dispatch order
impl EventHandler for Vec<Event> {
    fn on_event(&mut self, event: &Event) {
        self.push(event.clone());
    }
}

impl<H: EventHandler + ?Sized> EventHandler for &mut H {
    fn on_event(&mut self, event: &Event) {
        (**self).on_event(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Action;
    use crate::input::Keycode;

    #[derive(Default)]
    struct Counter {
        keys: usize,
        closes: usize,
    }

    impl EventHandler for Counter {
        fn on_key_event(&mut self, _event: &KeyEvent) {
            self.keys += 1;
        }

        fn on_close_event(&mut self, _event: &CloseEvent) {
            self.closes += 1;
        }
    }

    #[test]
    fn test_routes_to_overridden_methods() {
        let mut counter = Counter::default();
        counter.on_event(&Event::Key(KeyEvent { action: Action::Down, keycode: Keycode::A }));
        counter.on_event(&Event::Focus(FocusEvent { focused: true }));
        counter.on_event(&Event::Close(CloseEvent));
        assert_eq!(counter.keys, 1);
        assert_eq!(counter.closes, 1);
    }

    #[test]
    fn test_recording_handler() {
        let mut log: Vec<Event> = Vec::new();
        let event = Event::Move(MoveEvent { x: 3, y: 4 });
        (&mut log).on_event(&event);
        assert_eq!(log, vec![event]);
    }
}
