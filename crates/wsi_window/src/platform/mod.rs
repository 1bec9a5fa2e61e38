//! Platform backends
//!
//! One backend per window system, selected at build time:
//!
//! - **`desktop`** (feature `glfw`, default): Windows, X11/Wayland, macOS
//! - **`headless`**: no display, scripted messages; the default without `glfw`
//!
//! # Touch Input
//! GLFW has no touch API, so the desktop backend never reports touch points
//! and desktop applications receive no [`TouchEvent`]. Multi-touch events
//! are only produced by backends that push [`RawInput::Touch`] reports, which
//! among the shipped backends means the headless one.
//!
//! [`TouchEvent`]: crate::event::TouchEvent
//! [`RawInput::Touch`]: crate::input::RawInput::Touch

#[cfg(feature = "glfw")]
pub mod desktop;
pub mod headless;

#[cfg(feature = "glfw")]
pub use desktop::GlfwBackend;
pub use headless::{HeadlessBackend, HeadlessWindow};

use crate::WsiResult;

/// Backend used by [`crate::Window::new`]
#[cfg(feature = "glfw")]
pub type DefaultBackend = GlfwBackend;

/// Backend used by [`crate::Window::new`]
#[cfg(not(feature = "glfw"))]
pub type DefaultBackend = HeadlessBackend;

/// Connect the build's default backend to the window system
pub fn default_backend() -> WsiResult<DefaultBackend> {
    #[cfg(feature = "glfw")]
    {
        GlfwBackend::new()
    }
    #[cfg(not(feature = "glfw"))]
    {
        Ok(HeadlessBackend::new())
    }
}
