//! Application-facing window
//!
//! [`Window`] stores the configuration, owns the backend and the input device
//! state, and dispatches events to an [`EventHandler`] from
//! [`Window::process_events`]. Nothing runs in the background: native messages
//! are only read while `process_events` executes, on the calling thread.

use crate::config::WindowConfig;
use crate::event::{CloseEvent, Event};
use crate::input::{InputState, Keycode, RawInput, TouchPoint};
use crate::platform::{self, DefaultBackend};
use crate::surface::SurfaceInstance;
use crate::window::backend::WindowBackend;
use crate::window::handler::EventHandler;
use crate::{WsiError, WsiResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    /// Configured, native window not created yet
    Pending,
    /// Native window exists and delivers events
    Open,
    /// A close event was dispatched; terminal
    Closed,
    /// Native window creation failed; terminal
    Failed,
}

/// Platform-independent window
///
/// Owns a [`WindowBackend`] together with the configuration and the input
/// device state. The application talks only to this type: setters are
/// recorded in the configuration before the native window exists and applied
/// directly afterwards, and every event reaches the application through
/// [`process_events`](Self::process_events).
///
/// # Lifecycle
/// - **Pending**: configured, no native window; setters only update the config
/// - **Open**: realized, events flow
/// - **Closed**: a close event was delivered; terminal
/// - **Failed**: native window creation failed; terminal
///
/// # Thread Safety
/// Not `Send` with the GLFW backend. Create, poll and drop the window on the
/// same thread; handlers run inline on that thread while `process_events`
/// executes.
///
/// # Example
/// ```rust,no_run
/// use wsi_window::{Event, Keycode, Window, WindowConfig};
///
/// let config = WindowConfig::new("Example").with_size(640, 480).with_position(0, 0);
/// let mut window = Window::new(config)?;
/// window.realize()?;
///
/// let mut events: Vec<Event> = Vec::new();
/// while window.process_events(&mut events) {
///     for event in events.drain(..) {
///         println!("{}", event);
///     }
///     if window.is_key_pressed(Keycode::LeftShift) {
///         println!("LEFT SHIFT PRESSED");
///     }
/// }
/// # Ok::<(), wsi_window::WsiError>(())
/// ```
pub struct Window<B: WindowBackend = DefaultBackend> {
    backend: B,
    config: WindowConfig,
    input: InputState,
    lifecycle: Lifecycle,
    close_requested: bool,
    surfaces_created: u32,
    raw: Vec<RawInput>,
    events: Vec<Event>,
}

impl Window<DefaultBackend> {
    /// Connect to the window system with the build's default backend
    ///
    /// Fails when no display is available or the configuration is invalid.
    /// The native window itself is created by [`realize`](Self::realize).
    pub fn new(config: WindowConfig) -> WsiResult<Self> {
        let backend = platform::default_backend()?;
        Self::with_backend(backend, config)
    }
}

impl<B: WindowBackend> Window<B> {
    /// Wrap an explicit backend
    pub fn with_backend(backend: B, config: WindowConfig) -> WsiResult<Self> {
        config.validate()?;
        Ok(Self {
            backend,
            config,
            input: InputState::new(),
            lifecycle: Lifecycle::Pending,
            close_requested: false,
            surfaces_created: 0,
            raw: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Create the native window from the current configuration
    ///
    /// Does nothing if the window already exists. Creation is attempted once:
    /// after a failure the window is unusable, [`is_open`](Self::is_open)
    /// returns false and later calls fail without touching the platform.
    ///
    /// # Errors
    /// - [`WsiError::CreationFailed`] if the platform refused the window
    /// - [`WsiError::Closed`] if the window already closed
    pub fn realize(&mut self) -> WsiResult<()> {
        match self.lifecycle {
            Lifecycle::Open => Ok(()),
            Lifecycle::Closed => Err(WsiError::Closed),
            Lifecycle::Failed => Err(WsiError::CreationFailed(format!(
                "creating \"{}\" already failed",
                self.config.title
            ))),
            Lifecycle::Pending => {
                if let Err(e) = self.backend.realize(&self.config) {
                    self.lifecycle = Lifecycle::Failed;
                    return Err(e);
                }
                self.lifecycle = Lifecycle::Open;
                log::info!("Window realized: \"{}\"", self.config.title);
                Ok(())
            }
        }
    }

    /// Drain queued native messages and dispatch the resulting events
    ///
    /// Each native message is translated and its events are handed to
    /// `handler` in the order the platform reported them, before the next
    /// message is looked at. Never waits for new messages; call it once per
    /// frame.
    ///
    /// Returns false once the window has closed; from then on no further
    /// events are delivered and messages queued after the close are dropped.
    /// Realizes the window on first use; if that fails the error is logged,
    /// the window becomes unusable and false is returned.
    pub fn process_events<H: EventHandler + ?Sized>(&mut self, handler: &mut H) -> bool {
        match self.lifecycle {
            Lifecycle::Closed | Lifecycle::Failed => return false,
            Lifecycle::Pending if self.close_requested => {
                self.close_requested = false;
                self.lifecycle = Lifecycle::Closed;
                handler.on_event(&Event::Close(CloseEvent));
                return false;
            }
            Lifecycle::Pending => {
                if let Err(e) = self.realize() {
                    log::error!("Failed to realize window: {}", e);
                    return false;
                }
            }
            Lifecycle::Open => {}
        }

        let mut raw = std::mem::take(&mut self.raw);
        let mut events = std::mem::take(&mut self.events);

        self.backend.drain(&mut raw);
        if std::mem::take(&mut self.close_requested) {
            raw.push(RawInput::CloseRequested);
        }

        let total = raw.len();
        for (index, report) in raw.drain(..).enumerate() {
            if self.lifecycle == Lifecycle::Closed {
                log::debug!("Dropping {} native messages received after close", total - index);
                break;
            }

            self.input.translate(report, &mut events);
            for event in events.drain(..) {
                if matches!(event, Event::Close(_)) {
                    self.lifecycle = Lifecycle::Closed;
                    log::info!("Window closing: \"{}\"", self.config.title);
                }
                handler.on_event(&event);
                if self.lifecycle == Lifecycle::Closed {
                    break;
                }
            }
            events.clear();
        }

        self.raw = raw;
        self.events = events;
        self.lifecycle != Lifecycle::Closed
    }

    /// Ask the window to close; the next `process_events` delivers the close event
    pub fn close(&mut self) {
        if matches!(self.lifecycle, Lifecycle::Pending | Lifecycle::Open) {
            self.close_requested = true;
        }
    }

    /// Set the title bar text
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.config.title = title.into();
        if self.lifecycle == Lifecycle::Open {
            self.backend.set_title(&self.config.title);
        }
    }

    /// Set the client area size; zero sizes are ignored
    pub fn set_size(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!("Ignoring window size {}x{}: dimensions must be positive", width, height);
            return;
        }
        self.config.width = width;
        self.config.height = height;
        if self.lifecycle == Lifecycle::Open {
            self.backend.set_size(width, height);
        }
    }

    /// Move the window; the platform may clamp to the visible desktop
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.config.position = Some((x, y));
        if self.lifecycle == Lifecycle::Open {
            self.backend.set_position(x, y);
        }
    }

    /// Show or hide the soft keyboard; no effect on desktop platforms
    pub fn show_keyboard(&mut self, show: bool) {
        self.config.show_keyboard = show;
        if self.lifecycle == Lifecycle::Open {
            self.backend.show_keyboard(show);
        }
    }

    /// Current title
    pub fn title(&self) -> &str {
        &self.config.title
    }

    /// Client area size in logical units
    pub fn size(&self) -> (u32, u32) {
        if self.backend.is_realized() {
            self.backend.size()
        } else {
            (self.config.width, self.config.height)
        }
    }

    /// Drawable size in pixels, `(0, 0)` before realization
    pub fn framebuffer_size(&self) -> (u32, u32) {
        if self.backend.is_realized() {
            self.backend.framebuffer_size()
        } else {
            (0, 0)
        }
    }

    /// Top-left corner in screen coordinates
    pub fn position(&self) -> (i32, i32) {
        if self.backend.is_realized() {
            self.backend.position()
        } else {
            self.config.position.unwrap_or((0, 0))
        }
    }

    /// Whether the window has input focus
    pub fn has_focus(&self) -> bool {
        self.backend.is_realized() && self.backend.has_focus()
    }

    /// False once the close event was dispatched or window creation failed
    pub fn is_open(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Pending | Lifecycle::Open)
    }

    /// Whether the native window exists
    pub fn is_realized(&self) -> bool {
        self.backend.is_realized()
    }

    /// Check whether a key is held
    pub fn is_key_pressed(&self, keycode: Keycode) -> bool {
        self.input.is_key_pressed(keycode)
    }

    /// Check whether a mouse button id is held
    pub fn is_button_pressed(&self, button: u8) -> bool {
        self.input.is_button_pressed(button)
    }

    /// Last known cursor position
    pub fn mouse_position(&self) -> (i32, i32) {
        self.input.mouse_position()
    }

    /// Fingers currently on the screen
    pub fn touch_points(&self) -> &[TouchPoint] {
        self.input.touch_points()
    }

    /// Input device state
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Pending or applied configuration
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Graphics-instance extensions needed before calling [`create_surface`](Self::create_surface)
    pub fn required_instance_extensions(&self) -> WsiResult<Vec<String>> {
        self.backend.required_instance_extensions()
    }

    /// Create a presentable surface for this window
    ///
    /// The window must be realized. The surface borrows the native handle;
    /// the caller must destroy it before the window is dropped. Each call
    /// creates a new surface.
    pub fn create_surface<I: SurfaceInstance>(&mut self, instance: &I) -> WsiResult<I::Surface> {
        if self.lifecycle == Lifecycle::Closed {
            return Err(WsiError::Closed);
        }
        if self.surfaces_created > 0 {
            log::warn!(
                "Creating surface #{} for \"{}\"; earlier surfaces must be destroyed by the caller",
                self.surfaces_created + 1,
                self.config.title
            );
        }

        let native = self.backend.native_window().ok_or(WsiError::NotRealized)?;
        log::debug!("Creating surface for {:?}", native);
        let surface = instance.create_surface(native)?;
        self.surfaces_created += 1;
        Ok(surface)
    }

    /// The platform backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The platform backend, mutable
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Action, KeyEvent, MouseButtons, MouseEvent, ResizeEvent};
    use crate::platform::HeadlessBackend;
    use crate::window::backend::NativeWindow;

    struct FakeInstance;

    impl SurfaceInstance for FakeInstance {
        type Surface = u64;

        fn create_surface(&self, native: NativeWindow<'_>) -> WsiResult<u64> {
            match native {
                NativeWindow::Headless(window) => Ok(window.id()),
                other => Err(WsiError::Unsupported(other.kind().to_string())),
            }
        }
    }

    fn headless(config: WindowConfig) -> Window<HeadlessBackend> {
        Window::with_backend(HeadlessBackend::new(), config).unwrap()
    }

    fn realized() -> Window<HeadlessBackend> {
        let mut window = headless(WindowConfig::new("Test"));
        window.realize().unwrap();
        window
    }

    fn key(keycode: Keycode, pressed: bool) -> RawInput {
        RawInput::Key { keycode, pressed }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = Window::with_backend(HeadlessBackend::new(), WindowConfig::new("x").with_size(0, 0));
        assert!(matches!(result, Err(WsiError::Config(_))));
    }

    #[test]
    fn test_duplicate_key_downs_emit_one_event() {
        let mut window = realized();
        window.backend_mut().push_all([
            key(Keycode::A, true),
            key(Keycode::A, true),
            key(Keycode::A, true),
        ]);

        let mut events: Vec<Event> = Vec::new();
        assert!(window.process_events(&mut events));
        assert_eq!(events, vec![Event::Key(KeyEvent { action: Action::Down, keycode: Keycode::A })]);

        window.backend_mut().push(key(Keycode::A, true));
        events.clear();
        window.process_events(&mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn test_key_state_follows_events() {
        let mut window = realized();
        window.backend_mut().push(key(Keycode::LeftShift, true));
        window.process_events(&mut ());
        assert!(window.is_key_pressed(Keycode::LeftShift));
        assert!(!window.is_key_pressed(Keycode::RightShift));

        window.backend_mut().push(key(Keycode::LeftShift, false));
        window.process_events(&mut ());
        assert!(!window.is_key_pressed(Keycode::LeftShift));
    }

    #[test]
    fn test_untracked_touch_ignored() {
        let mut window = realized();
        window.backend_mut().push_all([
            RawInput::Touch { action: Action::Down, id: 0, x: 1.0, y: 1.0 },
            RawInput::Touch { action: Action::Move, id: 4, x: 9.0, y: 9.0 },
            RawInput::Touch { action: Action::Up, id: 4, x: 9.0, y: 9.0 },
        ]);

        let mut events: Vec<Event> = Vec::new();
        window.process_events(&mut events);
        assert_eq!(events.len(), 1);
        assert_eq!(window.touch_points(), &[TouchPoint { id: 0, x: 1.0, y: 1.0 }]);
    }

    #[test]
    fn test_dispatch_preserves_native_order() {
        let mut window = realized();
        window.backend_mut().push_all([
            RawInput::MouseButton { button: 1, pressed: true, position: Some((10.0, 20.0)) },
            RawInput::CursorMoved { x: 12.0, y: 22.0 },
            RawInput::MouseButton { button: 1, pressed: false, position: Some((12.0, 22.0)) },
        ]);

        let mut events: Vec<Event> = Vec::new();
        window.process_events(&mut events);
        assert_eq!(
            events,
            vec![
                Event::Mouse(MouseEvent { action: Action::Down, x: 10, y: 20, button: 1, buttons: MouseButtons::LEFT }),
                Event::Mouse(MouseEvent { action: Action::Move, x: 12, y: 22, button: 0, buttons: MouseButtons::LEFT }),
                Event::Mouse(MouseEvent { action: Action::Up, x: 12, y: 22, button: 1, buttons: MouseButtons::empty() }),
            ]
        );
        assert_eq!(window.mouse_position(), (12, 22));
    }

    #[test]
    fn test_close_is_terminal() {
        let mut window = realized();
        window.backend_mut().push_all([
            RawInput::CloseRequested,
            key(Keycode::Q, true),
        ]);

        let mut events: Vec<Event> = Vec::new();
        assert!(!window.process_events(&mut events));
        assert_eq!(events, vec![Event::Close(CloseEvent)]);
        assert!(!window.is_key_pressed(Keycode::Q));

        window.backend_mut().push(key(Keycode::W, true));
        events.clear();
        assert!(!window.process_events(&mut events));
        assert!(events.is_empty());
        assert!(!window.is_open());
    }

    #[test]
    fn test_close_request_after_queued_events() {
        let mut window = realized();
        window.backend_mut().push(RawInput::Resized { width: 100, height: 50 });
        window.close();

        let mut events: Vec<Event> = Vec::new();
        assert!(!window.process_events(&mut events));
        assert_eq!(
            events,
            vec![
                Event::Resize(ResizeEvent { width: 100, height: 50 }),
                Event::Close(CloseEvent),
            ]
        );
    }

    #[test]
    fn test_close_before_realize() {
        let mut window = headless(WindowConfig::new("Never shown"));
        window.close();

        let mut events: Vec<Event> = Vec::new();
        assert!(!window.process_events(&mut events));
        assert_eq!(events, vec![Event::Close(CloseEvent)]);
        assert!(!window.is_realized());
        assert!(matches!(window.realize(), Err(WsiError::Closed)));
    }

    #[test]
    fn test_size_after_realize() {
        let mut window = headless(WindowConfig::new("Sized"));
        window.set_size(640, 480);
        window.realize().unwrap();
        assert_eq!(window.size(), (640, 480));

        window.set_size(800, 600);
        assert_eq!(window.size(), (800, 600));
        window.set_size(0, 600);
        assert_eq!(window.size(), (800, 600));
    }

    #[test]
    fn test_setters_before_and_after_realize() {
        let mut window = headless(WindowConfig::new("Before"));
        window.set_position(0, 0);
        window.show_keyboard(true);
        assert_eq!(window.position(), (0, 0));
        assert!(!window.backend().keyboard_visible());

        window.process_events(&mut ());
        assert!(window.is_realized());
        assert!(window.backend().keyboard_visible());

        window.set_title("After");
        assert_eq!(window.backend().title(), "After");
        window.set_position(30, 40);
        assert_eq!(window.position(), (30, 40));
    }

    #[test]
    fn test_window_events_update_geometry_and_focus() {
        let mut window = realized();
        assert!(!window.has_focus());
        window.backend_mut().push_all([
            RawInput::Focused(true),
            RawInput::Moved { x: 100, y: 200 },
        ]);
        window.process_events(&mut ());
        assert!(window.has_focus());
        assert_eq!(window.position(), (100, 200));
    }

    #[test]
    fn test_surface_requires_realized_window() {
        let mut window = headless(WindowConfig::new("Surface"));
        let err = window.create_surface(&FakeInstance).unwrap_err();
        assert!(err.is_precondition());
        assert!(matches!(err, WsiError::NotRealized));

        window.realize().unwrap();
        let surface = window.create_surface(&FakeInstance).unwrap();
        assert_ne!(surface, 0);
    }

    #[test]
    fn test_second_surface_still_created() {
        let mut window = realized();
        let first = window.create_surface(&FakeInstance).unwrap();
        let second = window.create_surface(&FakeInstance).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_surface_after_close() {
        let mut window = realized();
        window.close();
        window.process_events(&mut ());
        assert!(matches!(window.create_surface(&FakeInstance), Err(WsiError::Closed)));
    }

    #[test]
    fn test_failed_realize_is_terminal() {
        let mut window = Window::with_backend(HeadlessBackend::refusing_creation(), WindowConfig::default()).unwrap();
        assert!(window.realize().unwrap_err().is_fatal_init());
        assert!(!window.is_open());
        assert!(!window.process_events(&mut ()));
        assert!(!window.process_events(&mut ()));
        assert!(!window.is_open());
        assert!(!window.is_realized());
    }

    #[test]
    fn test_failed_lazy_realize_is_not_retried() {
        let mut window = Window::with_backend(HeadlessBackend::refusing_creation(), WindowConfig::new("Refused")).unwrap();
        let mut events: Vec<Event> = Vec::new();
        assert!(!window.process_events(&mut events));
        assert!(events.is_empty());
        assert!(!window.is_open());

        window.close();
        assert!(!window.process_events(&mut events));
        assert!(events.is_empty());
        assert!(window.realize().unwrap_err().is_fatal_init());
    }
}
