//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing surface geometry and appearance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Surface width in pixels when no background image drives sizing (valid range: 1 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: i32,

    /// Surface height in pixels when no background image drives sizing (valid range: 1 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: i32,

    /// Size the surface to the background image's natural dimensions
    #[serde(default = "default_size_fit")]
    pub size_fit: bool,

    /// Outline style, CSS shorthand such as "1px solid #000" (or "none")
    #[serde(default = "default_border")]
    pub border: String,

    /// Whether the host should show a toolbar; not used by the drawing core
    #[serde(default)]
    pub toolbar: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            size_fit: default_size_fit(),
            border: default_border(),
            toolbar: false,
        }
    }
}

/// Pen defaults.
///
/// Hosts embedding the library may replace these with accessors over their
/// own state; the file only supplies constants.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BrushConfig {
    /// Line width in pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_line_width")]
    pub line_width: f64,

    /// Line color as CSS hex ("#000", "#ff0000") or a named color
    #[serde(default = "default_line_color")]
    pub line_color: String,

    /// Start in eraser mode
    #[serde(default)]
    pub erasing: bool,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
            line_color: default_line_color(),
            erasing: false,
        }
    }
}

/// What the eraser reveals.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BackgroundConfig {
    /// Background color painted under everything and restored by the eraser
    #[serde(default = "default_background_color")]
    pub color: ColorSpec,

    /// Optional PNG drawn over the background color (path or file:// URL)
    #[serde(default)]
    pub image: Option<String>,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            color: default_background_color(),
            image: None,
        }
    }
}

/// Snapshot export settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory for saved snapshots (supports ~/)
    #[serde(default = "default_export_directory")]
    pub directory: String,

    /// Filename template with chrono format specifiers, without extension
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Draw the canvas border around exported images
    #[serde(default)]
    pub include_border: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            filename_template: default_filename_template(),
            include_border: false,
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_width() -> i32 {
    300
}

fn default_canvas_height() -> i32 {
    300
}

fn default_size_fit() -> bool {
    true
}

fn default_border() -> String {
    "1px solid #000".to_string()
}

fn default_line_width() -> f64 {
    2.0
}

fn default_line_color() -> String {
    "#000".to_string()
}

fn default_background_color() -> ColorSpec {
    ColorSpec::Name("#fff".to_string())
}

fn default_export_directory() -> String {
    "~/Pictures/Scratchpad".to_string()
}

fn default_filename_template() -> String {
    "drawing_%Y-%m-%d_%H%M%S".to_string()
}
