//! Surface bridge
//!
//! Turns a realized window's native handle into a graphics-API surface. The
//! graphics instance is created and owned elsewhere; it is only borrowed here.
//! The returned surface belongs to the caller and must be dropped before the
//! window it was created for.

use ash::{extensions::khr, vk};

use crate::window::backend::NativeWindow;
use crate::{WsiError, WsiResult};

/// A graphics instance able to create presentable surfaces
pub trait SurfaceInstance {
    /// Surface type produced
    type Surface;

    /// Create a surface bound to the native window
    fn create_surface(&self, native: NativeWindow<'_>) -> WsiResult<Self::Surface>;
}

/// Borrowed Vulkan instance
pub struct VulkanInstance<'a> {
    entry: &'a ash::Entry,
    instance: &'a ash::Instance,
}

impl<'a> VulkanInstance<'a> {
    /// Borrow an initialized entry and instance
    ///
    /// The instance must have been created with the extensions reported by
    /// `Window::required_instance_extensions`.
    pub fn new(entry: &'a ash::Entry, instance: &'a ash::Instance) -> Self {
        Self { entry, instance }
    }
}

impl SurfaceInstance for VulkanInstance<'_> {
    type Surface = VulkanSurface;

    fn create_surface(&self, native: NativeWindow<'_>) -> WsiResult<VulkanSurface> {
        let handle = match native {
            #[cfg(feature = "glfw")]
            NativeWindow::Glfw(window) => {
                let mut surface = vk::SurfaceKHR::null();
                let result = window.create_window_surface(self.instance.handle(), std::ptr::null(), &mut surface);
                if result != vk::Result::SUCCESS {
                    return Err(WsiError::Surface(result));
                }
                surface
            }
            NativeWindow::Raw { display, window } => unsafe {
                ash_window::create_surface(self.entry, self.instance, display, window, None)
                    .map_err(WsiError::Surface)?
            },
            NativeWindow::Headless(_) => {
                return Err(WsiError::Unsupported(
                    "headless windows have no presentable surface".to_string(),
                ));
            }
        };

        if handle == vk::SurfaceKHR::null() {
            return Err(WsiError::Surface(vk::Result::ERROR_INITIALIZATION_FAILED));
        }

        log::info!("Vulkan surface created for {} window", native.kind());
        Ok(VulkanSurface {
            loader: khr::Surface::new(self.entry, self.instance),
            handle,
        })
    }
}

/// Vulkan surface, destroyed on drop
pub struct VulkanSurface {
    loader: khr::Surface,
    handle: vk::SurfaceKHR,
}

impl VulkanSurface {
    /// Get the underlying surface handle
    pub fn handle(&self) -> vk::SurfaceKHR {
        self.handle
    }

    /// Get the surface loader
    pub fn loader(&self) -> &khr::Surface {
        &self.loader
    }

    /// Check if a queue family supports presentation to this surface
    pub fn supports_present(&self, physical_device: vk::PhysicalDevice, queue_family_index: u32) -> WsiResult<bool> {
        unsafe {
            self.loader
                .get_physical_device_surface_support(physical_device, queue_family_index, self.handle)
                .map_err(WsiError::Surface)
        }
    }
}

impl Drop for VulkanSurface {
    fn drop(&mut self) {
        unsafe {
            self.loader.destroy_surface(self.handle, None);
        }
    }
}
