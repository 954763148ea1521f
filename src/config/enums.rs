//! Configuration value types parsed from strings or arrays.

use crate::draw::{BLACK, Color, WHITE};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a CSS color string or RGB values.
///
/// # Examples
/// ```toml
/// # Hex or named color
/// color = "#fff"
/// color = "white"
///
/// # Custom RGB color (0-255 per component)
/// color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// CSS hex (`#rgb`, `#rrggbb`, `#rrggbbaa`) or a named color
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unrecognized strings fall back to white with a warning, matching the
    /// default background.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => Color::parse_css(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using white", name);
                WHITE
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

/// Parsed outline style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStyle {
    /// Outline width in pixels
    pub width: f64,
    /// Outline color
    pub color: Color,
}

impl BorderStyle {
    /// Parses CSS border shorthand such as `"1px solid #000"`.
    ///
    /// Tokens may appear in any order. A missing width defaults to 1px and a
    /// missing color to black. Returns `None` for `"none"`, `"hidden"`, empty
    /// input, or any unrecognized token.
    pub fn parse(value: &str) -> Option<Self> {
        let mut width = None;
        let mut color = None;

        for token in value.split_whitespace() {
            let lower = token.to_ascii_lowercase();
            match lower.as_str() {
                "none" | "hidden" => return None,
                "solid" | "dashed" | "dotted" | "double" => {}
                _ => {
                    if let Some(px) = lower.strip_suffix("px") {
                        width = Some(px.parse::<f64>().ok().filter(|w| *w >= 0.0)?);
                    } else if let Some(parsed) = Color::parse_css(token) {
                        color = Some(parsed);
                    } else {
                        return None;
                    }
                }
            }
        }

        if width.is_none() && color.is_none() {
            return None;
        }

        Some(Self {
            width: width.unwrap_or(1.0),
            color: color.unwrap_or(BLACK),
        })
    }
}
