//! Construction parameters for a [`crate::Draw`] instance.

use super::enums::BorderStyle;
use super::resolver::Dynamic;
use crate::draw::{BLACK, Color, WHITE};

/// Everything a host passes when mounting a drawing surface.
///
/// `line_width`, `line_color` and `erasing` accept either constants or
/// accessors over host state; they are resolved once when the instance is
/// built.
#[derive(Debug, Clone)]
pub struct DrawOptions {
    /// Pixel width used unless the background image drives sizing
    pub canvas_width: i32,
    /// Pixel height used unless the background image drives sizing
    pub canvas_height: i32,
    /// Size both surfaces to the background image once it has loaded
    pub size_fit: bool,
    /// Outline drawn around exported snapshots, if any
    pub border: Option<BorderStyle>,
    /// Color restored by the eraser beneath the background image
    pub background_color: Color,
    /// Background PNG location (path or file:// URL)
    pub background_image: Option<String>,
    /// Carried for the host UI; the drawing core ignores it
    pub toolbar: bool,
    /// Selects erase mode instead of painting
    pub erasing: Dynamic<bool>,
    /// Pen width in pixels
    pub line_width: Dynamic<f64>,
    /// Pen color as a CSS color string
    pub line_color: Dynamic<String>,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            canvas_width: 300,
            canvas_height: 300,
            size_fit: true,
            border: Some(BorderStyle {
                width: 1.0,
                color: BLACK,
            }),
            background_color: WHITE,
            background_image: None,
            toolbar: false,
            erasing: Dynamic::Constant(false),
            line_width: Dynamic::Constant(2.0),
            line_color: Dynamic::Constant("#000".to_string()),
        }
    }
}

impl DrawOptions {
    /// Default options with a fixed canvas size.
    pub fn with_size(width: i32, height: i32) -> Self {
        Self {
            canvas_width: width,
            canvas_height: height,
            ..Self::default()
        }
    }
}
