//! Cairo-based rendering functions for strokes, backgrounds and the eraser.

use super::color::Color;
use crate::util::{Point, Rect};
use std::f64::consts::PI;

/// Pen attributes applied to stroked segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    /// Line width in pixels
    pub width: f64,
    /// Stroke color
    pub color: Color,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            width: 2.0,
            color: super::color::BLACK,
        }
    }
}

/// Fills the whole target with a solid color, replacing existing content.
pub fn render_background(ctx: &cairo::Context, color: Color) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.paint()?;
    ctx.restore()
}

/// Draws an image at the origin over existing content.
pub fn render_image(ctx: &cairo::Context, image: &cairo::ImageSurface) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_source_surface(image, 0.0, 0.0)?;
    ctx.paint()?;
    ctx.restore()
}

/// Render one straight freehand segment with round caps and joins.
pub fn render_segment(
    ctx: &cairo::Context,
    from: Point,
    to: Point,
    pen: &Pen,
) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_operator(cairo::Operator::Over);
    ctx.set_source_rgba(pen.color.r, pen.color.g, pen.color.b, pen.color.a);
    ctx.set_line_width(pen.width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.new_path();
    ctx.move_to(from.x as f64, from.y as f64);
    ctx.line_to(to.x as f64, to.y as f64);
    let result = ctx.stroke();

    ctx.restore()?;
    result
}

/// Copies `rect` from `source` onto the target at the same position, clipped to
/// a circle of `clip_radius` around `center`.
///
/// Pixels outside the circle are left untouched.
pub fn render_clipped_copy(
    ctx: &cairo::Context,
    source: &cairo::ImageSurface,
    rect: Rect,
    center: Point,
    clip_radius: f64,
) -> Result<(), cairo::Error> {
    ctx.save()?;

    ctx.new_path();
    ctx.arc(center.x as f64, center.y as f64, clip_radius, 0.0, PI * 2.0);
    ctx.clip();

    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_surface(source, 0.0, 0.0)?;
    ctx.rectangle(
        rect.x as f64,
        rect.y as f64,
        rect.width as f64,
        rect.height as f64,
    );
    let result = ctx.fill();

    ctx.restore()?;
    result
}

/// Strokes a ring of `radius` clipped to its own disk, so only the inner half
/// of the line width is visible.
pub fn render_ring(
    ctx: &cairo::Context,
    center: Point,
    radius: f64,
    width: f64,
    color: Color,
) -> Result<(), cairo::Error> {
    ctx.save()?;

    ctx.new_path();
    ctx.arc(center.x as f64, center.y as f64, radius, 0.0, PI * 2.0);
    ctx.clip_preserve();

    ctx.set_operator(cairo::Operator::Over);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(width);
    let result = ctx.stroke();

    ctx.restore()?;
    result
}
