//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HW_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use hyperwire_math::{PointN, MAX_DIMENSION};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Hypercube configuration
    #[serde(default)]
    pub solid: SolidConfig,
    /// View and input configuration
    #[serde(default)]
    pub view: ViewConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HW_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // HW_VIEW__FOCAL_LENGTH=800 -> view.focal_length = 800
        figment = figment.merge(Env::prefixed("HW_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Check values the viewer cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.solid.origin.len() < 2 {
            return Err(ConfigError::invalid(format!(
                "solid.origin needs at least 2 coordinates to project onto the screen, got {}",
                self.solid.origin.len()
            )));
        }
        if self.solid.origin.len() > MAX_DIMENSION {
            return Err(ConfigError::invalid(format!(
                "solid.origin has {} coordinates, at most {} are supported",
                self.solid.origin.len(),
                MAX_DIMENSION
            )));
        }
        if self.view.frame_rate == 0 {
            return Err(ConfigError::invalid("view.frame_rate must be positive"));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        Ok(())
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "hyperwire".to_string(),
            width: 400,
            height: 300,
            vsync: true,
        }
    }
}

/// Hypercube configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolidConfig {
    /// Position of the first corner; its length is the dimension
    pub origin: Vec<f32>,
    /// Side length
    pub edge_length: f32,
}

impl SolidConfig {
    /// First corner as a point
    pub fn origin_point(&self) -> PointN {
        PointN::from(self.origin.as_slice())
    }

    /// Dimension of the hypercube
    pub fn dimension(&self) -> usize {
        self.origin.len()
    }
}

impl Default for SolidConfig {
    fn default() -> Self {
        Self {
            origin: vec![-50.0, -50.0, 50.0, -50.0],
            edge_length: 500.0,
        }
    }
}

/// View and input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Starting focal length
    pub focal_length: f32,
    /// Target frames per second
    pub frame_rate: u32,
    /// Translation (units) and rotation (hundredths of a radian) per frame
    pub step: f32,
    /// Focal length change per frame
    pub focal_step: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            focal_length: 600.0,
            frame_rate: 25,
            step: 5.0,
            focal_step: 1.0,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Wireframe color [r, g, b, a]
    pub line_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            line_color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log every vertex and edge of the solid at startup
    pub dump_solid: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            dump_solid: false,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    /// A configuration that loaded but cannot be used
    pub fn invalid(message: impl Into<String>) -> Self {
        ConfigError {
            message: message.into(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 400);
        assert_eq!(config.window.height, 300);
        assert_eq!(config.view.focal_length, 600.0);
        assert_eq!(config.view.frame_rate, 25);
        assert_eq!(config.solid.dimension(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_origin_point() {
        let config = AppConfig::default();
        assert_eq!(
            config.solid.origin_point(),
            PointN::from([-50.0, -50.0, 50.0, -50.0])
        );
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("focal_length"));
        assert!(toml.contains("edge_length"));
    }

    #[test]
    fn test_validate_rejects_low_dimension() {
        let mut config = AppConfig::default();
        config.solid.origin = vec![1.0];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("solid.origin"));
    }

    #[test]
    fn test_validate_rejects_high_dimension() {
        let mut config = AppConfig::default();
        config.solid.origin = vec![0.0; 64];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("solid.origin"));

        config.solid.origin = vec![0.0; MAX_DIMENSION];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_frame_rate() {
        let mut config = AppConfig::default();
        config.view.frame_rate = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_window() {
        let mut config = AppConfig::default();
        config.window.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_directory_uses_defaults() {
        let config = AppConfig::load_from("does/not/exist").unwrap();
        assert_eq!(config.window.title, "hyperwire");
        assert_eq!(config.solid.edge_length, 500.0);
    }
}
