//! RGBA color type, CSS color parsing and predefined color constants.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use scratchpad::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// assert_eq!(Color::parse_css("#f00"), Some(red));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 0-255 channel values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0, 1.0)
    }

    /// Parses a CSS-style color string.
    ///
    /// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` and the named colors
    /// understood by [`crate::util::name_to_color`]. Returns `None` for blank or
    /// unrecognized input.
    pub fn parse_css(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        let Some(hex) = value.strip_prefix('#') else {
            return crate::util::name_to_color(value);
        };
        if !hex.is_ascii() {
            return None;
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        let short = |s: &str| channel(s).map(|v| v * 17);

        let (r, g, b, a) = match hex.len() {
            3 => (short(&hex[0..1])?, short(&hex[1..2])?, short(&hex[2..3])?, 255),
            4 => (
                short(&hex[0..1])?,
                short(&hex[1..2])?,
                short(&hex[2..3])?,
                short(&hex[3..4])?,
            ),
            6 => (channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?, 255),
            8 => (
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                channel(&hex[6..8])?,
            ),
            _ => return None,
        };

        Some(Self::new(
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
            a as f64 / 255.0,
        ))
    }

    /// Packs the color the way Cairo stores an ARGB32 pixel (premultiplied alpha).
    pub fn to_argb32(&self) -> u32 {
        let a = self.a.clamp(0.0, 1.0);
        let to_byte = |v: f64| (v.clamp(0.0, 1.0) * a * 255.0).round() as u32;
        let alpha = (a * 255.0).round() as u32;
        (alpha << 24) | (to_byte(self.r) << 16) | (to_byte(self.g) << 8) | to_byte(self.b)
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined orange color (R=1.0, G=0.5, B=0.0)
pub const ORANGE: Color = Color {
    r: 1.0,
    g: 0.5,
    b: 0.0,
    a: 1.0,
};

/// Predefined pink/magenta color (R=1.0, G=0.0, B=1.0)
pub const PINK: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined white color; the default erase-fill background.
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined black color; the default pen and eraser ring color.
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Fully transparent color
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_css_accepts_short_and_long_hex() {
        assert_eq!(Color::parse_css("#fff"), Some(WHITE));
        assert_eq!(Color::parse_css("#000000"), Some(BLACK));
        assert_eq!(Color::parse_css("#00ff00"), Some(GREEN));

        let translucent = Color::parse_css("#ff000080").unwrap();
        assert_eq!(translucent.r, 1.0);
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn parse_css_falls_back_to_names() {
        assert_eq!(Color::parse_css("Blue"), Some(BLUE));
        assert_eq!(Color::parse_css("transparent"), Some(TRANSPARENT));
    }

    #[test]
    fn parse_css_rejects_blank_and_malformed() {
        assert!(Color::parse_css("").is_none());
        assert!(Color::parse_css("   ").is_none());
        assert!(Color::parse_css("#ggg").is_none());
        assert!(Color::parse_css("#12345").is_none());
        assert!(Color::parse_css("not-a-color").is_none());
    }

    #[test]
    fn argb32_packing_matches_cairo_layout() {
        assert_eq!(WHITE.to_argb32(), 0xFFFF_FFFF);
        assert_eq!(BLACK.to_argb32(), 0xFF00_0000);
        assert_eq!(RED.to_argb32(), 0xFFFF_0000);
        assert_eq!(TRANSPARENT.to_argb32(), 0);
    }
}
