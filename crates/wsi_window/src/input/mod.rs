//! Input translation
//!
//! Backends convert each native message into a [`RawInput`] report. The
//! per-device translators in this module turn those reports into
//! [`Event`]s while tracking which keys, buttons and fingers are down, so the
//! application sees one Down per press and never an Up without a Down.
//!
//! All state lives in [`InputState`], owned by one window. Nothing here is
//! global, so several windows (or tests) never share pressed-key sets.

pub mod keyboard;
pub mod keycode;
pub mod mouse;
pub mod touch;

pub use keyboard::KeyboardState;
pub use keycode::Keycode;
pub use mouse::MouseState;
pub use touch::{TouchPoint, TouchState, MAX_TOUCH_POINTS};

use crate::event::{
    Action, CloseEvent, Event, FocusEvent, MouseButtons, MoveEvent, ResizeEvent, TextEvent,
};

/// Platform-neutral native input report, in the order the platform delivered it
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    /// Key pressed (including auto-repeat) or released
    Key {
        /// Physical key
        keycode: Keycode,
        /// True for press and repeat, false for release
        pressed: bool,
    },
    /// Text produced by the keyboard
    Text(String),
    /// Mouse button pressed or released
    MouseButton {
        /// Button id, 1 = left, 2 = middle, 3 = right
        button: u8,
        /// True for press
        pressed: bool,
        /// Cursor position in logical units when the platform reports one
        /// with the button; `None` uses the last `CursorMoved` position
        position: Option<(f64, f64)>,
    },
    /// Cursor moved
    CursorMoved {
        /// Cursor x in logical units
        x: f64,
        /// Cursor y in logical units
        y: f64,
    },
    /// One wheel notch
    Wheel {
        /// True when scrolled away from the user
        up: bool,
    },
    /// Touch point changed
    Touch {
        /// Down, Move or Up
        action: Action,
        /// Touch-point id
        id: u8,
        /// x in logical units
        x: f32,
        /// y in logical units
        y: f32,
    },
    /// Window moved
    Moved {
        /// Left edge in screen coordinates
        x: i32,
        /// Top edge in screen coordinates
        y: i32,
    },
    /// Client area resized
    Resized {
        /// Width in logical units
        width: u32,
        /// Height in logical units
        height: u32,
    },
    /// Focus gained or lost
    Focused(bool),
    /// The user asked to close the window
    CloseRequested,
}

/// Per-window input device state
#[derive(Debug, Default, Clone)]
pub struct InputState {
    keyboard: KeyboardState,
    mouse: MouseState,
    touch: TouchState,
}

impl InputState {
    /// Create state with nothing pressed
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one raw report, appending the resulting events to `out`
    ///
    /// Most reports yield one event; duplicates yield none, a wheel notch
    /// yields two and losing focus releases every held key and mouse button
    /// first.
    pub fn translate(&mut self, raw: RawInput, out: &mut Vec<Event>) {
        match raw {
            RawInput::Key { keycode, pressed } => {
                out.extend(self.keyboard.apply(keycode, pressed).map(Event::Key));
            }
            RawInput::Text(text) => {
                if text.is_empty() {
                    log::debug!("Ignoring empty text input");
                } else {
                    out.push(Event::Text(TextEvent { text }));
                }
            }
            RawInput::MouseButton { button, pressed, position } => {
                out.extend(self.mouse.button(button, pressed, position).map(Event::Mouse));
            }
            RawInput::CursorMoved { x, y } => {
                out.push(Event::Mouse(self.mouse.moved(x, y)));
            }
            RawInput::Wheel { up } => {
                out.extend(self.mouse.wheel(up).map(Event::Mouse));
            }
            RawInput::Touch { action, id, x, y } => {
                out.extend(self.touch.apply(action, id, x, y).map(Event::Touch));
            }
            RawInput::Moved { x, y } => out.push(Event::Move(MoveEvent { x, y })),
            RawInput::Resized { width, height } => {
                out.push(Event::Resize(ResizeEvent { width, height }));
            }
            RawInput::Focused(focused) => {
                if !focused {
                    out.extend(self.keyboard.release_all().into_iter().map(Event::Key));
                    out.extend(self.mouse.release_all().into_iter().map(Event::Mouse));
                }
                out.push(Event::Focus(FocusEvent { focused }));
            }
            RawInput::CloseRequested => out.push(Event::Close(CloseEvent)),
        }
    }

    /// Check whether a key is held
    pub fn is_key_pressed(&self, keycode: Keycode) -> bool {
        self.keyboard.is_pressed(keycode)
    }

    /// Check whether a mouse button id is held
    pub fn is_button_pressed(&self, button: u8) -> bool {
        self.mouse.is_pressed(button)
    }

    /// Held mouse buttons
    pub fn mouse_buttons(&self) -> MouseButtons {
        self.mouse.buttons()
    }

    /// Last known cursor position
    pub fn mouse_position(&self) -> (i32, i32) {
        self.mouse.position()
    }

    /// Fingers currently on the screen
    pub fn touch_points(&self) -> &[TouchPoint] {
        self.touch.points()
    }

    /// Keyboard state
    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }
}
