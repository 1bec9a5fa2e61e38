//! Configuration system
//!
//! Window settings can be built in code or loaded from TOML/RON files. The
//! values are advisory: before the window is realized they are stored and
//! applied at creation, afterwards each setter takes effect immediately.

pub use serde::{Serialize, Deserialize};

use std::path::Path;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        match Format::of(path)? {
            Format::Toml => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Format::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match Format::of(path)? {
            Format::Toml => toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?,
            Format::Ron => ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

enum Format {
    Toml,
    Ron,
}

impl Format {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value is out of range
    #[error("Invalid value: {0}")]
    Invalid(String),
}

/// Window creation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title bar text
    pub title: String,
    /// Client area width in logical units
    pub width: u32,
    /// Client area height in logical units
    pub height: u32,
    /// Top-left corner in screen coordinates; `None` lets the platform decide
    pub position: Option<(i32, i32)>,
    /// Whether the user may resize the window
    pub resizable: bool,
    /// Whether the window is shown as soon as it is realized
    pub visible: bool,
    /// Soft keyboard visibility (touch-primary platforms only)
    pub show_keyboard: bool,
}

impl WindowConfig {
    /// Create a configuration with the given title and default geometry
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the client area size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the window position
    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.position = Some((x, y));
        self
    }

    /// Allow or forbid user resizing
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Show or hide the window on creation
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Request the soft keyboard
    pub fn with_keyboard(mut self, show: bool) -> Self {
        self.show_keyboard = show;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.is_empty() {
            return Err(ConfigError::Invalid("window title cannot be empty".to_string()));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "WSI Window".to_string(),
            width: 640,
            height: 480,
            position: None,
            resizable: true,
            visible: true,
            show_keyboard: false,
        }
    }
}

impl Config for WindowConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("wsi_window_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_default_is_valid() {
        assert!(WindowConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_size_rejected() {
        let config = WindowConfig::new("Zero").with_size(0, 480);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_empty_title_rejected() {
        let config = WindowConfig::new("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_file_roundtrip() {
        let path = temp_path("window.toml");
        let config = WindowConfig::new("From TOML")
            .with_size(800, 600)
            .with_position(10, 20);
        config.save_to_file(&path).unwrap();

        let loaded = WindowConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ron_partial_file_uses_defaults() {
        let path = temp_path("window.ron");
        std::fs::write(&path, "(title: \"Partial\", width: 1024)").unwrap();

        let loaded = WindowConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.title, "Partial");
        assert_eq!(loaded.width, 1024);
        assert_eq!(loaded.height, 480);
        assert!(loaded.resizable);
    }

    #[test]
    fn test_unknown_extension() {
        let result = WindowConfig::default().save_to_file(temp_path("window.ini"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
