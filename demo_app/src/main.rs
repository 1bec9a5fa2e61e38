//! Window demo application
//!
//! Creates a window and a Vulkan surface, then prints every window, keyboard,
//! mouse and touch event until the window is closed. An optional argument names
//! a TOML or RON window configuration file.

use std::ffi::{c_char, CString, NulError};
use std::time::Duration;

use ash::vk;
use thiserror::Error;
use wsi_window::foundation::logging;
use wsi_window::prelude::*;
use wsi_window::Config;

#[derive(Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Window(#[from] WsiError),

    #[error(transparent)]
    Config(#[from] wsi_window::ConfigError),

    #[error("Vulkan error: {0}")]
    Vulkan(String),

    #[error("Invalid extension name: {0}")]
    ExtensionName(#[from] NulError),
}

/// Prints each event as it is dispatched
struct PrintHandler;

impl EventHandler for PrintHandler {
    fn on_event(&mut self, event: &Event) {
        println!("{}", event);
    }
}

fn create_instance(entry: &ash::Entry, extensions: &[String]) -> Result<ash::Instance, DemoError> {
    let app_name = CString::new("WSI-Window Example1")?;
    let app_info = vk::ApplicationInfo::builder()
        .application_name(&app_name)
        .application_version(vk::make_api_version(0, 1, 0, 0))
        .api_version(vk::API_VERSION_1_0);

    let names = extensions
        .iter()
        .map(|name| CString::new(name.as_str()))
        .collect::<Result<Vec<_>, _>>()?;
    let name_ptrs: Vec<*const c_char> = names.iter().map(|name| name.as_ptr()).collect();

    let create_info = vk::InstanceCreateInfo::builder()
        .application_info(&app_info)
        .enabled_extension_names(&name_ptrs);

    unsafe { entry.create_instance(&create_info, None) }
        .map_err(|e| DemoError::Vulkan(format!("Failed to create instance: {:?}", e)))
}

fn run() -> Result<(), DemoError> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading window configuration from {}", path);
            WindowConfig::load_from_file(path)?
        }
        None => WindowConfig::default(),
    };

    let mut window = Window::new(config)?;
    window.set_title("WSI-Window Example1");
    window.set_size(640, 480);
    window.set_position(0, 0);
    window.show_keyboard(true);
    window.realize()?;

    let entry = unsafe { ash::Entry::load() }
        .map_err(|e| DemoError::Vulkan(format!("Failed to load Vulkan: {:?}", e)))?;
    let instance = create_instance(&entry, &window.required_instance_extensions()?)?;

    let result = (|| -> Result<(), DemoError> {
        let surface = window.create_surface(&VulkanInstance::new(&entry, &instance))?;
        log::info!("Surface created: {:?}", surface.handle());

        let mut handler = PrintHandler;
        while window.process_events(&mut handler) {
            if window.is_key_pressed(Keycode::LeftShift) {
                print!("LEFT SHIFT PRESSED\r");
            }
            std::thread::sleep(Duration::from_millis(1));
        }
        Ok(())
    })();

    unsafe { instance.destroy_instance(None) };
    result
}

fn main() {
    logging::init_with_level("info");
    println!("WSI-Window");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
