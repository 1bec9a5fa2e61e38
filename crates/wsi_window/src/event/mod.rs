//! Event model
//!
//! The closed set of events a window delivers to the application. Events are
//! plain values: the input translators create them, the window dispatches each
//! one exactly once, in the order the native system reported them.

use std::fmt;

use bitflags::bitflags;

use crate::input::Keycode;

/// Press/release/motion state carried by pointer, key and touch events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Button, key or finger released
    Up,
    /// Button, key or finger pressed
    Down,
    /// Pointer or finger moved
    Move,
}

impl Action {
    /// Short lowercase name, used for logs and debug output
    pub fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Move => "move",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

bitflags! {
    /// Set of held mouse buttons; bit `n - 1` stands for button id `n`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MouseButtons: u8 {
        /// Button 1
        const LEFT = 1;
        /// Button 2
        const MIDDLE = 1 << 1;
        /// Button 3
        const RIGHT = 1 << 2;
        /// Button 4, wheel scrolled up
        const WHEEL_UP = 1 << 3;
        /// Button 5, wheel scrolled down
        const WHEEL_DOWN = 1 << 4;
        /// Button 6
        const EXTRA_1 = 1 << 5;
        /// Button 7
        const EXTRA_2 = 1 << 6;
        /// Button 8
        const EXTRA_3 = 1 << 7;
    }
}

impl MouseButtons {
    /// Mask bit for a button id, `None` if the id is outside 1..=8
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1..=8 => Some(Self::from_bits_retain(1 << (id - 1))),
            _ => None,
        }
    }
}

/// Well-known mouse button ids
pub mod button {
    /// Left button
    pub const LEFT: u8 = 1;
    /// Middle button
    pub const MIDDLE: u8 = 2;
    /// Right button
    pub const RIGHT: u8 = 3;
    /// Wheel scrolled up
    pub const WHEEL_UP: u8 = 4;
    /// Wheel scrolled down
    pub const WHEEL_DOWN: u8 = 5;
}

/// Mouse press, release or motion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// What happened
    pub action: Action,
    /// Cursor x in window logical units
    pub x: i32,
    /// Cursor y in window logical units
    pub y: i32,
    /// Button id that changed, 0 for motion
    pub button: u8,
    /// Buttons held after this event
    pub buttons: MouseButtons,
}

/// Touch-point press, release or motion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    /// What happened
    pub action: Action,
    /// Touch x in window logical units
    pub x: f32,
    /// Touch y in window logical units
    pub y: f32,
    /// Touch-point id, stable from Down to Up
    pub id: u8,
}

/// Key press or release. Never carries [`Action::Move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Up or Down
    pub action: Action,
    /// Physical key
    pub keycode: Keycode,
}

/// Text produced by the keyboard or an input method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEvent {
    /// UTF-8 text
    pub text: String,
}

/// Window moved on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvent {
    /// New left edge in screen coordinates
    pub x: i32,
    /// New top edge in screen coordinates
    pub y: i32,
}

/// Window gained or lost input focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusEvent {
    /// True when the window now has focus
    pub focused: bool,
}

/// Window client area resized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeEvent {
    /// New width in logical units
    pub width: u32,
    /// New height in logical units
    pub height: u32,
}

/// The window is closing; no further events follow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseEvent;

/// Any event a window can deliver
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Mouse input
    Mouse(MouseEvent),
    /// Multi-touch input
    Touch(TouchEvent),
    /// Keyboard input
    Key(KeyEvent),
    /// Text input
    Text(TextEvent),
    /// Window moved
    Move(MoveEvent),
    /// Focus changed
    Focus(FocusEvent),
    /// Window resized
    Resize(ResizeEvent),
    /// Window closing
    Close(CloseEvent),
}

impl Event {
    /// Debug name of the variant
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mouse(_) => "mouse",
            Self::Touch(_) => "touch",
            Self::Key(_) => "key",
            Self::Text(_) => "text",
            Self::Move(_) => "move",
            Self::Focus(_) => "focus",
            Self::Resize(_) => "resize",
            Self::Close(_) => "close",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mouse(e) => write!(f, "Mouse: {:<4} {} x {} Btn:{}", e.action, e.x, e.y, e.button),
            Self::Touch(e) => write!(f, "Touch: {:<4} {:.1} x {:.1} id:{}", e.action, e.x, e.y, e.id),
            Self::Key(e) => write!(f, "Key: {:<4} keycode:{} ({})", e.action, e.keycode.hid(), e.keycode),
            Self::Text(e) => write!(f, "Text: {}", e.text),
            Self::Move(e) => write!(f, "Window Move: x={} y={}", e.x, e.y),
            Self::Focus(e) => write!(f, "Focus: {}", e.focused),
            Self::Resize(e) => write!(f, "Window Resize: width={:4} height={:4}", e.width, e.height),
            Self::Close(_) => f.write_str("Window Closing."),
        }
    }
}

impl From<MouseEvent> for Event {
    fn from(e: MouseEvent) -> Self {
        Self::Mouse(e)
    }
}

impl From<TouchEvent> for Event {
    fn from(e: TouchEvent) -> Self {
        Self::Touch(e)
    }
}

impl From<KeyEvent> for Event {
    fn from(e: KeyEvent) -> Self {
        Self::Key(e)
    }
}
