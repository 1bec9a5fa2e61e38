//! Platform-independent key identifiers
//!
//! Discriminants follow the USB HID keyboard usage table, so a keycode names a
//! physical key position rather than the character it produces under the
//! active layout.

use std::fmt;

macro_rules! keycodes {
    ($($name:ident = $hid:literal,)*) => {
        /// Logical keycode (USB HID usage id)
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum Keycode {
            $($name = $hid,)*
        }

        impl Keycode {
            /// Look up a keycode from its HID usage id
            pub fn from_hid(code: u8) -> Option<Self> {
                match code {
                    $($hid => Some(Self::$name),)*
                    _ => None,
                }
            }

            /// Debug name of the key
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$name => stringify!($name),)*
                }
            }
        }
    };
}

keycodes! {
    A = 4, B = 5, C = 6, D = 7, E = 8, F = 9, G = 10, H = 11, I = 12, J = 13,
    K = 14, L = 15, M = 16, N = 17, O = 18, P = 19, Q = 20, R = 21, S = 22,
    T = 23, U = 24, V = 25, W = 26, X = 27, Y = 28, Z = 29,

    Num1 = 30, Num2 = 31, Num3 = 32, Num4 = 33, Num5 = 34,
    Num6 = 35, Num7 = 36, Num8 = 37, Num9 = 38, Num0 = 39,

    Enter = 40, Escape = 41, Backspace = 42, Tab = 43, Space = 44,
    Minus = 45, Equals = 46, LeftBracket = 47, RightBracket = 48,
    Backslash = 49, Semicolon = 51, Quote = 52, Grave = 53,
    Comma = 54, Period = 55, Slash = 56, CapsLock = 57,

    F1 = 58, F2 = 59, F3 = 60, F4 = 61, F5 = 62, F6 = 63,
    F7 = 64, F8 = 65, F9 = 66, F10 = 67, F11 = 68, F12 = 69,

    PrintScreen = 70, ScrollLock = 71, Pause = 72, Insert = 73,
    Home = 74, PageUp = 75, Delete = 76, End = 77, PageDown = 78,
    Right = 79, Left = 80, Down = 81, Up = 82,

    NumLock = 83, KpDivide = 84, KpMultiply = 85, KpSubtract = 86,
    KpAdd = 87, KpEnter = 88, Kp1 = 89, Kp2 = 90, Kp3 = 91, Kp4 = 92,
    Kp5 = 93, Kp6 = 94, Kp7 = 95, Kp8 = 96, Kp9 = 97, Kp0 = 98,
    KpPeriod = 99, Menu = 101, KpEquals = 103,

    F13 = 104, F14 = 105, F15 = 106, F16 = 107, F17 = 108, F18 = 109,
    F19 = 110, F20 = 111, F21 = 112, F22 = 113, F23 = 114, F24 = 115,

    LeftControl = 224, LeftShift = 225, LeftAlt = 226, LeftSuper = 227,
    RightControl = 228, RightShift = 229, RightAlt = 230, RightSuper = 231,
}

impl Keycode {
    /// HID usage id of the key
    pub fn hid(self) -> u8 {
        self as u8
    }

    /// True for Shift, Control, Alt and Super on either side
    pub fn is_modifier(self) -> bool {
        (Self::LeftControl.hid()..=Self::RightSuper.hid()).contains(&self.hid())
    }
}

impl fmt::Display for Keycode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
