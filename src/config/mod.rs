//! Configuration file support for scratchpad.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/scratchpad/config.toml`, and turning
//! them into the [`DrawOptions`] a drawing surface is built from.
//!
//! If no config file exists, the built-in defaults are
//! used: a 300x300 white canvas, 2px black pen, eraser off.

pub mod enums;
pub mod options;
pub mod resolver;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{BorderStyle, ColorSpec};
pub use options::DrawOptions;
pub use resolver::{Accessor, Dynamic, DynamicSettings};
pub use types::{BackgroundConfig, BrushConfig, CanvasConfig, ExportConfig};

use crate::export::{SnapshotConfig, expand_tilde};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const MAX_CANVAS_SIZE: i32 = 8192;

/// Main configuration structure containing all user settings.
///
/// All fields have defaults and will use those if not specified in the file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 640
/// height = 480
/// size_fit = true
/// border = "1px solid #000"
///
/// [brush]
/// line_width = 4.0
/// line_color = "#000"
/// erasing = false
///
/// [background]
/// color = "#fff"
/// image = "~/Pictures/paper.png"
///
/// [export]
/// directory = "~/Pictures/Scratchpad"
/// include_border = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Surface size and outline
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Pen defaults and initial mode
    #[serde(default)]
    pub brush: BrushConfig,

    /// Background color and image revealed by the eraser
    #[serde(default)]
    pub background: BackgroundConfig,

    /// Snapshot export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is
    /// logged. An empty line color is left alone; it is rejected when a stroke
    /// starts.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 8192
    /// - `brush.line_width`: 1.0 - 100.0
    pub fn validate_and_clamp(&mut self) {
        if !(1..=MAX_CANVAS_SIZE).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-{MAX_CANVAS_SIZE} range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(1, MAX_CANVAS_SIZE);
        }

        if !(1..=MAX_CANVAS_SIZE).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-{MAX_CANVAS_SIZE} range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(1, MAX_CANVAS_SIZE);
        }

        if !(1.0..=100.0).contains(&self.brush.line_width) {
            log::warn!(
                "Invalid line_width {:.1}, clamping to 1.0-100.0 range",
                self.brush.line_width
            );
            self.brush.line_width = if self.brush.line_width.is_nan() {
                1.0
            } else {
                self.brush.line_width.clamp(1.0, 100.0)
            };
        }

        if !self.canvas.border.trim().is_empty()
            && !self.canvas.border.trim().eq_ignore_ascii_case("none")
            && BorderStyle::parse(&self.canvas.border).is_none()
        {
            log::warn!(
                "Invalid border '{}', falling back to no border",
                self.canvas.border
            );
            self.canvas.border = "none".to_string();
        }

        if matches!(&self.background.image, Some(image) if image.trim().is_empty()) {
            log::warn!("Empty background image path ignored");
            self.background.image = None;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/scratchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("scratchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to the default location.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Builds drawing options with constant brush settings.
    pub fn to_options(&self) -> DrawOptions {
        DrawOptions {
            canvas_width: self.canvas.width,
            canvas_height: self.canvas.height,
            size_fit: self.canvas.size_fit,
            border: BorderStyle::parse(&self.canvas.border),
            background_color: self.background.color.to_color(),
            background_image: self.background.image.clone(),
            toolbar: self.canvas.toolbar,
            erasing: Dynamic::Constant(self.brush.erasing),
            line_width: Dynamic::Constant(self.brush.line_width),
            line_color: Dynamic::Constant(self.brush.line_color.clone()),
        }
    }

    /// Snapshot settings derived from the `[export]` section.
    pub fn snapshot_config(&self) -> SnapshotConfig {
        SnapshotConfig {
            save_directory: expand_tilde(&self.export.directory),
            filename_template: self.export.filename_template.clone(),
            ..SnapshotConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, WHITE};

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!((config.canvas.width, config.canvas.height), (300, 300));
        assert!(config.canvas.size_fit);
        assert_eq!(config.brush.line_width, 2.0);
        assert_eq!(config.brush.line_color, "#000");
        assert!(!config.brush.erasing);

        let options = config.to_options();
        assert_eq!(options.background_color, WHITE);
        assert_eq!(
            options.border,
            Some(BorderStyle {
                width: 1.0,
                color: BLACK
            })
        );
        assert!(options.background_image.is_none());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str(
            r##"
            [canvas]
            width = 640

            [background]
            color = [0, 0, 0]
            image = "file:///tmp/paper.png"
            "##,
        )
        .unwrap();

        assert_eq!(config.canvas.width, 640);
        assert_eq!(config.canvas.height, 300);
        assert_eq!(config.background.color.to_color(), BLACK);
        assert_eq!(
            config.background.image.as_deref(),
            Some("file:///tmp/paper.png")
        );
    }

    #[test]
    fn validate_clamps_out_of_range_values() {
        let mut config = Config::default();
        config.canvas.width = 0;
        config.canvas.height = 100_000;
        config.brush.line_width = 500.0;
        config.canvas.border = "wobbly".to_string();
        config.background.image = Some("  ".to_string());

        config.validate_and_clamp();

        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, MAX_CANVAS_SIZE);
        assert_eq!(config.brush.line_width, 100.0);
        assert_eq!(config.canvas.border, "none");
        assert!(config.background.image.is_none());
        assert!(config.to_options().border.is_none());
    }

    #[test]
    fn load_from_reads_and_validates_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[brush]\nline_width = 0.25\nline_color = \"red\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.brush.line_width, 1.0);
        assert_eq!(config.brush.line_color, "red");
    }

    #[test]
    fn load_from_reports_invalid_toml() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[brush\nline_width = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn json_schema_names_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("canvas"));
        assert!(schema.contains("brush"));
        assert!(schema.contains("background"));
    }
}
