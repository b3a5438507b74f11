//! Configuration file support for the polygon editor.
//!
//! Settings are stored as JSON. Every field has a serde default so older or
//! partial files still load.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{ARC_RADIUS_DEFAULT, AUX_POINT_STROKE_ALPHA, POLYGON_FILL_ALPHA};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get the display name for this log level.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Styling and tolerances used by the annotator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawStyle {
    /// Vertex hit radius when no surface is attached, and base size of
    /// vertex markers.
    ///
    /// The focused-polygon vertex tolerance and the hover cursor in
    /// [`crate::geometry`] do not read this; they always use
    /// [`ARC_RADIUS_DEFAULT`] scaled by zoom.
    #[serde(default = "default_arc_radius")]
    pub arc_radius: f32,

    /// Stroke width for headless surfaces
    #[serde(default = "default_line_width")]
    pub line_width: f32,

    /// Alpha of the polygon body fill
    #[serde(default = "default_polygon_fill_alpha")]
    pub polygon_fill_alpha: f32,

    /// Alpha of the outline around auxiliary vertex markers
    #[serde(default = "default_aux_point_stroke_alpha")]
    pub aux_point_stroke_alpha: f32,
}

fn default_arc_radius() -> f32 {
    ARC_RADIUS_DEFAULT
}

fn default_line_width() -> f32 {
    1.0
}

fn default_polygon_fill_alpha() -> f32 {
    POLYGON_FILL_ALPHA
}

fn default_aux_point_stroke_alpha() -> f32 {
    AUX_POINT_STROKE_ALPHA
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            arc_radius: default_arc_radius(),
            line_width: default_line_width(),
            polygon_fill_alpha: default_polygon_fill_alpha(),
            aux_point_stroke_alpha: default_aux_point_stroke_alpha(),
        }
    }
}

/// Application configuration that can be exported and imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatorConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Application name (for identification)
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Drawing style and hit tolerances
    #[serde(default)]
    pub drawing: DrawStyle,
}

fn default_app_name() -> String {
    "polyedit".to_string()
}

impl AnnotatorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            app_name: default_app_name(),
            log_level: LogLevel::default(),
            drawing: DrawStyle::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Read and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Get the default filename for config export.
    pub fn default_filename() -> &'static str {
        "polyedit-config.json"
    }

    /// Get the default config file path for auto-load/save.
    pub fn default_path() -> Option<PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("polyedit").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("polyedit")
                    .join(Self::default_filename())
            })
        }
    }

    /// Read `path` if it exists. A missing file is `Ok(None)`.
    ///
    /// Does not log, so it can run before the logger is configured.
    pub fn load_if_exists(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
