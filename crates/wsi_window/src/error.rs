//! Error taxonomy for window creation, surface creation and configuration
//!
//! Only fatal initialisation failures and precondition violations are returned
//! to callers. Malformed or unexpected native input is logged by the event pump
//! and skipped, so it never shows up here.

use ash::vk;
use thiserror::Error;

use crate::config::ConfigError;

/// Window system errors
#[derive(Error, Debug)]
pub enum WsiError {
    /// No display or window system could be reached
    #[error("No display available: {0}")]
    NoDisplay(String),

    /// The native window could not be created
    #[error("Window creation failed: {0}")]
    CreationFailed(String),

    /// The operation needs a realized native window
    #[error("Window has not been realized yet")]
    NotRealized,

    /// The window was already closed
    #[error("Window is closed")]
    Closed,

    /// The graphics API refused to create a surface
    #[error("Surface creation failed: {0:?}")]
    Surface(vk::Result),

    /// The backend cannot perform the operation
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl WsiError {
    /// True for errors raised while bringing up the display or the native window
    pub fn is_fatal_init(&self) -> bool {
        matches!(self, Self::NoDisplay(_) | Self::CreationFailed(_))
    }

    /// True for errors caused by calling an operation in the wrong lifecycle state
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::NotRealized | Self::Closed)
    }
}

/// Result type for window system operations
pub type WsiResult<T> = Result<T, WsiError>;
