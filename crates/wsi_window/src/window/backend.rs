//! Platform backend contract
//!
//! A backend owns the native window and its message queue. The [`Window`]
//! facade drives it: it realizes the native window from the pending
//! configuration, drains native messages once per frame and forwards setter
//! calls. Backends are chosen at build time through the type parameter of
//! [`Window`], see [`crate::platform::DefaultBackend`].
//!
//! [`Window`]: crate::window::Window

use raw_window_handle::{RawDisplayHandle, RawWindowHandle};

use crate::config::WindowConfig;
use crate::input::RawInput;
use crate::platform::headless::HeadlessWindow;
use crate::WsiResult;

/// Borrowed view of a realized native window, used for surface creation
///
/// The view never owns the native handle; the window stays responsible for
/// destroying it.
#[derive(Clone, Copy)]
pub enum NativeWindow<'a> {
    /// Window created through GLFW
    #[cfg(feature = "glfw")]
    Glfw(&'a glfw::PWindow),
    /// Raw platform handles from a custom backend
    Raw {
        /// Display connection
        display: RawDisplayHandle,
        /// Window handle
        window: RawWindowHandle,
    },
    /// Window without a display
    Headless(&'a HeadlessWindow),
}

impl NativeWindow<'_> {
    /// Short description for logs
    pub fn kind(&self) -> &'static str {
        match self {
            #[cfg(feature = "glfw")]
            Self::Glfw(_) => "glfw",
            Self::Raw { .. } => "raw",
            Self::Headless(_) => "headless",
        }
    }
}

impl std::fmt::Debug for NativeWindow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("NativeWindow").field(&self.kind()).finish()
    }
}

/// Platform window backend
///
/// Every window system the crate supports implements this trait. It owns the
/// native window and reports native messages as [`RawInput`]; turning those
/// reports into events and tracking pressed state is the facade's job, so
/// backends stay thin wrappers around the platform API.
///
/// Query and setter methods are only called after [`realize`] succeeded; the
/// facade answers from the pending configuration before that.
///
/// # Design Philosophy
/// - **Static Dispatch**: selected through the type parameter of `Window`, no
///   trait objects
/// - **Raw Reports Only**: no press/release bookkeeping, no event dispatch
/// - **Non-blocking**: nothing waits for the platform; [`drain`] only moves
///   what is already queued
///
/// # Thread Safety
/// No `Send` bound. Most window systems (GLFW, Cocoa, Win32) require window
/// calls on the thread that created the window, so a backend stays on the
/// thread that drives `Window::process_events`.
///
/// [`realize`]: WindowBackend::realize
/// [`drain`]: WindowBackend::drain
pub trait WindowBackend {
    /// Create the native window
    ///
    /// Uses the title, size, position and visibility from `config`. Called at
    /// most once per successful creation; calling it again on a realized
    /// backend is a no-op. A failure is reported as
    /// [`WsiError::CreationFailed`](crate::WsiError::CreationFailed) and the
    /// facade does not retry.
    fn realize(&mut self, config: &WindowConfig) -> WsiResult<()>;

    /// Whether the native window exists
    fn is_realized(&self) -> bool;

    /// Move every currently queued native message into `out`, oldest first
    ///
    /// Must not wait for new messages. Messages the backend cannot interpret
    /// are logged and skipped.
    ///
    /// Reports must describe the state at the time of the message, not the
    /// live device state when draining: a backend that cannot tell where a
    /// button changed leaves the position out and the translator uses the
    /// last cursor motion it saw.
    fn drain(&mut self, out: &mut Vec<RawInput>);

    /// Client area size in logical units
    fn size(&self) -> (u32, u32);

    /// Drawable size in pixels
    fn framebuffer_size(&self) -> (u32, u32) {
        self.size()
    }

    /// Top-left corner in screen coordinates
    fn position(&self) -> (i32, i32);

    /// Whether the window has input focus
    fn has_focus(&self) -> bool;

    /// Change the title bar text
    fn set_title(&mut self, title: &str);

    /// Resize the client area
    fn set_size(&mut self, width: u32, height: u32);

    /// Move the window; the platform may clamp to the visible desktop
    fn set_position(&mut self, x: i32, y: i32);

    /// Show or hide the soft keyboard
    fn show_keyboard(&mut self, show: bool);

    /// Borrow the native handle, `None` until realized
    ///
    /// The borrow is what the surface bridge hands to the graphics instance;
    /// the backend keeps ownership and destroys the window when dropped.
    fn native_window(&self) -> Option<NativeWindow<'_>>;

    /// Graphics-instance extensions needed to create a surface for this window
    fn required_instance_extensions(&self) -> WsiResult<Vec<String>>;
}
