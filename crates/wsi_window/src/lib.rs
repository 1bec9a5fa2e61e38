//! # WSI Window
//!
//! Cross-platform window creation, unified input events and Vulkan surface
//! creation.
//!
//! ## Features
//!
//! - **One event stream**: mouse, multi-touch, keyboard, text and window
//!   events from every platform arrive as [`Event`] values
//! - **Press/release tracking**: repeats and duplicated native messages are
//!   collapsed, `is_key_pressed` is always consistent with delivered events
//! - **Cooperative loop**: [`Window::process_events`] drains what is queued
//!   and returns; handlers run inline on the calling thread
//! - **Surface bridge**: hands the native handle to an existing Vulkan instance
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wsi_window::prelude::*;
//!
//! struct MyHandler;
//!
//! impl EventHandler for MyHandler {
//!     fn on_key_event(&mut self, event: &KeyEvent) {
//!         println!("Key: {} keycode:{}", event.action, event.keycode);
//!     }
//!
//!     fn on_close_event(&mut self, _event: &CloseEvent) {
//!         println!("Window Closing.");
//!     }
//! }
//!
//! fn main() -> Result<(), WsiError> {
//!     let mut window = Window::new(WindowConfig::new("Example").with_size(640, 480))?;
//!     window.realize()?;
//!     while window.process_events(&mut MyHandler) {}
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod error;
pub mod event;
pub mod foundation;
pub mod input;
pub mod platform;
pub mod surface;
pub mod window;

pub use config::{Config, ConfigError, WindowConfig};
pub use error::{WsiError, WsiResult};
pub use event::{Action, Event, MouseButtons};
pub use input::{Keycode, RawInput};
pub use surface::{SurfaceInstance, VulkanInstance, VulkanSurface};
pub use window::{EventHandler, NativeWindow, Window, WindowBackend};

/// Common imports for window users
pub mod prelude {
    pub use crate::{
        Window, WindowConfig, WsiError, WsiResult,
        event::{
            Action, CloseEvent, Event, FocusEvent, KeyEvent, MouseButtons, MouseEvent,
            MoveEvent, ResizeEvent, TextEvent, TouchEvent,
        },
        input::Keycode,
        surface::{SurfaceInstance, VulkanInstance, VulkanSurface},
        window::EventHandler,
    };
}
