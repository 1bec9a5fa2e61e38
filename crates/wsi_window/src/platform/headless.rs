//! Headless backend
//!
//! A window without a display. Native messages are scripted with
//! [`HeadlessBackend::push`] and come out of [`drain`] in push order, which
//! makes the full event pipeline testable on machines with no window system.
//! Window geometry follows the scripted Moved/Resized/Focused messages the
//! same way a real native window would.
//!
//! [`drain`]: WindowBackend::drain

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::WindowConfig;
use crate::input::RawInput;
use crate::window::backend::{NativeWindow, WindowBackend};
use crate::{WsiError, WsiResult};

static NEXT_WINDOW_ID: AtomicU64 = AtomicU64::new(1);

/// Native handle of a headless window
#[derive(Debug, PartialEq, Eq)]
pub struct HeadlessWindow {
    id: u64,
}

impl HeadlessWindow {
    /// Process-unique window id, never 0
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Backend with a scripted message queue
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    window: Option<HeadlessWindow>,
    queue: VecDeque<RawInput>,
    title: String,
    size: (u32, u32),
    position: (i32, i32),
    focused: bool,
    keyboard_visible: bool,
    refuse_creation: bool,
}

impl HeadlessBackend {
    /// Create a backend with an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose window creation always fails, for exercising init errors
    pub fn refusing_creation() -> Self {
        Self {
            refuse_creation: true,
            ..Self::default()
        }
    }

    /// Queue a native message
    pub fn push(&mut self, raw: RawInput) {
        self.queue.push_back(raw);
    }

    /// Queue several native messages in order
    pub fn push_all(&mut self, raws: impl IntoIterator<Item = RawInput>) {
        self.queue.extend(raws);
    }

    /// Number of queued messages
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Current title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the soft keyboard was requested
    pub fn keyboard_visible(&self) -> bool {
        self.keyboard_visible
    }

    fn observe(&mut self, raw: &RawInput) {
        match *raw {
            RawInput::Moved { x, y } => self.position = (x, y),
            RawInput::Resized { width, height } => self.size = (width, height),
            RawInput::Focused(focused) => self.focused = focused,
            _ => {}
        }
    }
}

impl WindowBackend for HeadlessBackend {
    fn realize(&mut self, config: &WindowConfig) -> WsiResult<()> {
        if self.refuse_creation {
            return Err(WsiError::CreationFailed("headless window creation refused".to_string()));
        }
        if self.window.is_some() {
            return Ok(());
        }

        self.title = config.title.clone();
        self.size = (config.width, config.height);
        self.position = config.position.unwrap_or((0, 0));
        self.keyboard_visible = config.show_keyboard;
        self.window = Some(HeadlessWindow {
            id: NEXT_WINDOW_ID.fetch_add(1, Ordering::Relaxed),
        });
        log::debug!("Headless window realized: {:?}", self.window);
        Ok(())
    }

    fn is_realized(&self) -> bool {
        self.window.is_some()
    }

    fn drain(&mut self, out: &mut Vec<RawInput>) {
        while let Some(raw) = self.queue.pop_front() {
            self.observe(&raw);
            out.push(raw);
        }
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn position(&self) -> (i32, i32) {
        self.position
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.position = (x, y);
    }

    fn show_keyboard(&mut self, show: bool) {
        self.keyboard_visible = show;
    }

    fn native_window(&self) -> Option<NativeWindow<'_>> {
        self.window.as_ref().map(NativeWindow::Headless)
    }

    fn required_instance_extensions(&self) -> WsiResult<Vec<String>> {
        Ok(Vec::new())
    }
}
