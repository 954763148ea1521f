//! Viewport-to-surface coordinate mapping.
//!
//! Hosts may display the surface at a different size than its pixel buffer.
//! Positions are scaled by `surface size / displayed size` so strokes land
//! under the pointer regardless of that mismatch.

use super::events::InputPosition;
use crate::util::Point;

/// On-screen placement of the surface in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A box at the origin displayed at exactly the surface's pixel size.
    pub fn unscaled(width: i32, height: i32) -> Self {
        Self::new(0.0, 0.0, width as f64, height as f64)
    }
}

/// Maps one viewport axis into surface pixels, flooring the result.
///
/// A non-positive displayed extent disables scaling on that axis.
pub fn to_surface_axis(client: f64, origin: f64, displayed: f64, intrinsic: i32) -> i32 {
    let scale = if displayed > 0.0 {
        intrinsic as f64 / displayed
    } else {
        1.0
    };
    ((client - origin) * scale).floor() as i32
}

/// Translates raw event positions into surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CoordinateMapper {
    layout: Option<BoundingBox>,
}

impl CoordinateMapper {
    /// A mapper for a surface displayed at `layout`.
    pub fn new(layout: BoundingBox) -> Self {
        Self {
            layout: Some(layout),
        }
    }

    /// Updates the on-screen placement after a host relayout.
    pub fn set_layout(&mut self, layout: BoundingBox) {
        self.layout = Some(layout);
    }

    /// Current placement, or `None` when the surface is shown unscaled at the origin.
    pub fn layout(&self) -> Option<BoundingBox> {
        self.layout
    }

    /// Maps `position` onto a surface of `width` x `height` pixels.
    ///
    /// Touch positions use the first active touch; a touch event with no
    /// active touches has no position.
    pub fn map(&self, position: &InputPosition, width: i32, height: i32) -> Option<Point> {
        let (client_x, client_y) = match position {
            InputPosition::Mouse { client_x, client_y } => (*client_x, *client_y),
            InputPosition::Touch { touches } => *touches.first()?,
        };

        let layout = self
            .layout
            .unwrap_or_else(|| BoundingBox::unscaled(width, height));

        Some(Point::new(
            to_surface_axis(client_x, layout.left, layout.width, width),
            to_surface_axis(client_y, layout.top, layout.height, height),
        ))
    }
}
