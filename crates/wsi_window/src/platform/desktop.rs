//! Desktop backend using GLFW
//!
//! Covers Windows, X11/Wayland and macOS. GLFW reports cursor and window
//! coordinates in screen units, which is what the event model uses; pixel
//! sizes are only exposed through `framebuffer_size`.

use glfw::{Action as GlfwAction, Key, WindowEvent};

use crate::config::WindowConfig;
use crate::event::button;
use crate::input::{Keycode, RawInput};
use crate::window::backend::{NativeWindow, WindowBackend};
use crate::{WsiError, WsiResult};

struct Realized {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, WindowEvent)>,
}

/// GLFW window wrapper
pub struct GlfwBackend {
    glfw: glfw::Glfw,
    realized: Option<Realized>,
    /// Scroll distance not yet reported as a whole wheel notch
    scroll: f64,
}

fn log_glfw_error(error: glfw::Error, description: String) {
    log::error!("GLFW error {:?}: {}", error, description);
}

impl GlfwBackend {
    /// Connect to the window system
    ///
    /// Fails when no display is available (for example a Linux session
    /// without X11 or Wayland).
    pub fn new() -> WsiResult<Self> {
        let glfw = glfw::init(log_glfw_error)
            .map_err(|e| WsiError::NoDisplay(format!("GLFW initialization failed: {:?}", e)))?;

        Ok(Self {
            glfw,
            realized: None,
            scroll: 0.0,
        })
    }

    fn window(&self) -> Option<&glfw::PWindow> {
        self.realized.as_ref().map(|r| &r.window)
    }

    fn window_mut(&mut self) -> Option<&mut glfw::PWindow> {
        self.realized.as_mut().map(|r| &mut r.window)
    }
}

impl WindowBackend for GlfwBackend {
    fn realize(&mut self, config: &WindowConfig) -> WsiResult<()> {
        if self.realized.is_some() {
            return Ok(());
        }

        // Configure for Vulkan (no OpenGL context)
        self.glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
        self.glfw.window_hint(glfw::WindowHint::Resizable(config.resizable));
        self.glfw.window_hint(glfw::WindowHint::Visible(config.visible));

        let (mut window, events) = self
            .glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or_else(|| WsiError::CreationFailed(format!("GLFW could not create \"{}\"", config.title)))?;

        if let Some((x, y)) = config.position {
            window.set_pos(x, y);
        }

        window.set_key_polling(true);
        window.set_char_polling(true);
        window.set_mouse_button_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_scroll_polling(true);
        window.set_pos_polling(true);
        window.set_size_polling(true);
        window.set_focus_polling(true);
        window.set_close_polling(true);

        if config.show_keyboard {
            self.show_keyboard(true);
        }

        log::info!("GLFW window created: \"{}\" {}x{}", config.title, config.width, config.height);
        self.realized = Some(Realized { window, events });
        Ok(())
    }

    fn is_realized(&self) -> bool {
        self.realized.is_some()
    }

    fn drain(&mut self, out: &mut Vec<RawInput>) {
        let Some(realized) = self.realized.as_ref() else {
            return;
        };

        self.glfw.poll_events();
        for (_, event) in glfw::flush_messages(&realized.events) {
            translate_event(event, &mut self.scroll, out);
        }
    }

    fn size(&self) -> (u32, u32) {
        self.window()
            .map(|w| to_extent(w.get_size()))
            .unwrap_or((0, 0))
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        self.window()
            .map(|w| to_extent(w.get_framebuffer_size()))
            .unwrap_or((0, 0))
    }

    fn position(&self) -> (i32, i32) {
        self.window().map(|w| w.get_pos()).unwrap_or((0, 0))
    }

    fn has_focus(&self) -> bool {
        self.window().is_some_and(|w| w.is_focused())
    }

    fn set_title(&mut self, title: &str) {
        if let Some(window) = self.window_mut() {
            window.set_title(title);
        }
    }

    fn set_size(&mut self, width: u32, height: u32) {
        if let Some(window) = self.window_mut() {
            window.set_size(
                i32::try_from(width).unwrap_or(i32::MAX),
                i32::try_from(height).unwrap_or(i32::MAX),
            );
        }
    }

    fn set_position(&mut self, x: i32, y: i32) {
        if let Some(window) = self.window_mut() {
            window.set_pos(x, y);
        }
    }

    fn show_keyboard(&mut self, show: bool) {
        log::debug!("Soft keyboard request ({}) ignored on desktop", show);
    }

    fn native_window(&self) -> Option<NativeWindow<'_>> {
        self.window().map(NativeWindow::Glfw)
    }

    fn required_instance_extensions(&self) -> WsiResult<Vec<String>> {
        self.glfw
            .get_required_instance_extensions()
            .ok_or_else(|| WsiError::Unsupported("GLFW found no Vulkan loader".to_string()))
    }
}

fn to_extent((width, height): (i32, i32)) -> (u32, u32) {
    (width.max(0) as u32, height.max(0) as u32)
}

// Button messages carry no position: the live cursor would already reflect
// every queued CursorPos, so the translator stamps them with the last tracked one.
fn translate_event(event: WindowEvent, scroll: &mut f64, out: &mut Vec<RawInput>) {
    match event {
        WindowEvent::Key(key, scancode, action, _) => match map_key(key) {
            Some(keycode) => out.push(RawInput::Key {
                keycode,
                pressed: action != GlfwAction::Release,
            }),
            None => log::debug!("Unmapped key {:?} (scancode {})", key, scancode),
        },
        WindowEvent::Char(c) => out.push(RawInput::Text(c.to_string())),
        WindowEvent::MouseButton(mouse_button, action, _) => match map_button(mouse_button) {
            Some(button) => out.push(RawInput::MouseButton {
                button,
                pressed: action != GlfwAction::Release,
                position: None,
            }),
            None => log::debug!("Unmapped mouse button {:?}", mouse_button),
        },
        WindowEvent::CursorPos(x, y) => out.push(RawInput::CursorMoved { x, y }),
        WindowEvent::Scroll(_, dy) => wheel_notches(scroll, dy, out),
        WindowEvent::Pos(x, y) => out.push(RawInput::Moved { x, y }),
        WindowEvent::Size(width, height) => {
            let (width, height) = to_extent((width, height));
            out.push(RawInput::Resized { width, height });
        }
        WindowEvent::Focus(focused) => out.push(RawInput::Focused(focused)),
        WindowEvent::Close => out.push(RawInput::CloseRequested),
        other => log::trace!("Skipping GLFW event {:?}", other),
    }
}

/// Accumulate vertical scroll and emit one wheel report per whole notch
///
/// Reversing direction discards the partial distance in the old direction.
fn wheel_notches(scroll: &mut f64, dy: f64, out: &mut Vec<RawInput>) {
    if dy == 0.0 || !dy.is_finite() {
        return;
    }
    if scroll.signum() != dy.signum() {
        *scroll = 0.0;
    }
    *scroll += dy;
    while *scroll >= 1.0 {
        out.push(RawInput::Wheel { up: true });
        *scroll -= 1.0;
    }
    while *scroll <= -1.0 {
        out.push(RawInput::Wheel { up: false });
        *scroll += 1.0;
    }
}

fn map_button(mouse_button: glfw::MouseButton) -> Option<u8> {
    use glfw::MouseButton as B;
    match mouse_button {
        B::Button1 => Some(button::LEFT),
        B::Button2 => Some(button::RIGHT),
        B::Button3 => Some(button::MIDDLE),
        B::Button4 => Some(6),
        B::Button5 => Some(7),
        B::Button6 => Some(8),
        _ => None,
    }
}

fn map_key(key: Key) -> Option<Keycode> {
    use Keycode as K;
    let keycode = match key {
        Key::A => K::A, Key::B => K::B, Key::C => K::C, Key::D => K::D,
        Key::E => K::E, Key::F => K::F, Key::G => K::G, Key::H => K::H,
        Key::I => K::I, Key::J => K::J, Key::K => K::K, Key::L => K::L,
        Key::M => K::M, Key::N => K::N, Key::O => K::O, Key::P => K::P,
        Key::Q => K::Q, Key::R => K::R, Key::S => K::S, Key::T => K::T,
        Key::U => K::U, Key::V => K::V, Key::W => K::W, Key::X => K::X,
        Key::Y => K::Y, Key::Z => K::Z,

        Key::Num1 => K::Num1, Key::Num2 => K::Num2, Key::Num3 => K::Num3,
        Key::Num4 => K::Num4, Key::Num5 => K::Num5, Key::Num6 => K::Num6,
        Key::Num7 => K::Num7, Key::Num8 => K::Num8, Key::Num9 => K::Num9,
        Key::Num0 => K::Num0,

        Key::Enter => K::Enter,
        Key::Escape => K::Escape,
        Key::Backspace => K::Backspace,
        Key::Tab => K::Tab,
        Key::Space => K::Space,
        Key::Minus => K::Minus,
        Key::Equal => K::Equals,
        Key::LeftBracket => K::LeftBracket,
        Key::RightBracket => K::RightBracket,
        Key::Backslash => K::Backslash,
        Key::Semicolon => K::Semicolon,
        Key::Apostrophe => K::Quote,
        Key::GraveAccent => K::Grave,
        Key::Comma => K::Comma,
        Key::Period => K::Period,
        Key::Slash => K::Slash,
        Key::CapsLock => K::CapsLock,

        Key::F1 => K::F1, Key::F2 => K::F2, Key::F3 => K::F3, Key::F4 => K::F4,
        Key::F5 => K::F5, Key::F6 => K::F6, Key::F7 => K::F7, Key::F8 => K::F8,
        Key::F9 => K::F9, Key::F10 => K::F10, Key::F11 => K::F11, Key::F12 => K::F12,
        Key::F13 => K::F13, Key::F14 => K::F14, Key::F15 => K::F15, Key::F16 => K::F16,
        Key::F17 => K::F17, Key::F18 => K::F18, Key::F19 => K::F19, Key::F20 => K::F20,
        Key::F21 => K::F21, Key::F22 => K::F22, Key::F23 => K::F23, Key::F24 => K::F24,

        Key::PrintScreen => K::PrintScreen,
        Key::ScrollLock => K::ScrollLock,
        Key::Pause => K::Pause,
        Key::Insert => K::Insert,
        Key::Home => K::Home,
        Key::PageUp => K::PageUp,
        Key::Delete => K::Delete,
        Key::End => K::End,
        Key::PageDown => K::PageDown,
        Key::Right => K::Right,
        Key::Left => K::Left,
        Key::Down => K::Down,
        Key::Up => K::Up,

        Key::NumLock => K::NumLock,
        Key::KpDivide => K::KpDivide,
        Key::KpMultiply => K::KpMultiply,
        Key::KpSubtract => K::KpSubtract,
        Key::KpAdd => K::KpAdd,
        Key::KpEnter => K::KpEnter,
        Key::Kp1 => K::Kp1, Key::Kp2 => K::Kp2, Key::Kp3 => K::Kp3,
        Key::Kp4 => K::Kp4, Key::Kp5 => K::Kp5, Key::Kp6 => K::Kp6,
        Key::Kp7 => K::Kp7, Key::Kp8 => K::Kp8, Key::Kp9 => K::Kp9,
        Key::Kp0 => K::Kp0,
        Key::KpDecimal => K::KpPeriod,
        Key::KpEqual => K::KpEquals,
        Key::Menu => K::Menu,

        Key::LeftControl => K::LeftControl,
        Key::LeftShift => K::LeftShift,
        Key::LeftAlt => K::LeftAlt,
        Key::LeftSuper => K::LeftSuper,
        Key::RightControl => K::RightControl,
        Key::RightShift => K::RightShift,
        Key::RightAlt => K::RightAlt,
        Key::RightSuper => K::RightSuper,

        _ => return None,
    };
    Some(keycode)
}
