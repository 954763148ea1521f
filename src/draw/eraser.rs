//! Circular eraser that restores background pixels from the reference buffer.
//!
//! Erasing never leaves transparent holes: the disk under the cursor is
//! repainted with whatever the [`ReferenceBuffer`] holds at the same position.

use super::color::{BLACK, Color};
use super::reference::ReferenceBuffer;
use super::render;
use super::surface::Surface;
use crate::error::DrawError;
use crate::util::{Point, Rect};

/// Fixed geometry of the eraser tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EraserSpec {
    /// Radius of the restored disk in pixels
    pub radius: i32,
    /// Extra margin around the disk included in the clip
    pub border_width: i32,
    /// Line width of the visible cursor ring
    pub ring_width: f64,
    /// Color of the visible cursor ring
    pub ring_color: Color,
}

impl Default for EraserSpec {
    fn default() -> Self {
        Self {
            radius: 20,
            border_width: 1,
            ring_width: 2.0,
            ring_color: BLACK,
        }
    }
}

impl EraserSpec {
    /// Radius of the clip circle used while copying.
    pub fn clip_radius(&self) -> f64 {
        (self.radius + self.border_width) as f64
    }
}

/// Computes the rectangle copied from the reference buffer for an erase at `center`.
///
/// The far edges are shrunk to the surface first, then negative origins are
/// moved to zero without widening, and the result is finally intersected with
/// the surface so no read or write falls outside it. `None` means nothing of
/// the rectangle is on the surface.
pub fn erase_rect(center: Point, spec: &EraserSpec, width: i32, height: i32) -> Option<Rect> {
    let mut x = center.x - spec.radius;
    let mut y = center.y - spec.radius;
    let mut w = spec.radius * 2 + spec.border_width * 2;
    let mut h = w;

    if x + w > width {
        w = width - x;
    }
    if y + h > height {
        h = height - y;
    }
    if x < 0 {
        x = 0;
    }
    if y < 0 {
        y = 0;
    }

    Rect::new(x, y, w, h)?.clamp_to_bounds(width, height)
}

/// Restores the disk of `spec.radius` around `center` from `reference`.
///
/// Returns the rectangle that was touched, for damage tracking.
pub fn erase(
    live: &mut Surface,
    reference: &ReferenceBuffer,
    center: Point,
    spec: &EraserSpec,
) -> Result<Option<Rect>, DrawError> {
    let Some(rect) = erase_rect(center, spec, live.width(), live.height()) else {
        log::trace!("Erase at ({}, {}) is off the surface", center.x, center.y);
        return Ok(None);
    };

    let ctx = live.context()?;
    render::render_clipped_copy(
        &ctx,
        reference.surface().image(),
        rect,
        center,
        spec.clip_radius(),
    )?;
    Ok(Some(rect))
}

/// Draws the cosmetic cursor ring at `center`, on top of the erased disk.
pub fn draw_eraser(
    live: &mut Surface,
    center: Point,
    spec: &EraserSpec,
) -> Result<Option<Rect>, DrawError> {
    let ctx = live.context()?;
    render::render_ring(
        &ctx,
        center,
        spec.radius as f64,
        spec.ring_width,
        spec.ring_color,
    )?;

    let reach = spec.radius + 1;
    Ok(Rect::new(center.x - reach, center.y - reach, reach * 2, reach * 2)
        .and_then(|rect| rect.clamp_to_bounds(live.width(), live.height())))
}
