//! Raster surface wrapper around a Cairo ARGB32 image.
//!
//! A [`Surface`] never keeps a [`cairo::Context`] alive between operations;
//! each primitive builds its own context, so pixel data stays exclusively
//! borrowable for reads and exports.

use super::color::Color;
use super::render::{self, Pen};
use crate::error::DrawError;
use crate::util::{Point, Rect};
use std::io::Write;

/// A raster drawing target with a current pen.
pub struct Surface {
    image: cairo::ImageSurface,
    pen: Pen,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("pen", &self.pen)
            .finish()
    }
}

impl Surface {
    /// Creates a fully transparent surface of the given pixel size.
    pub fn new(width: i32, height: i32) -> Result<Self, DrawError> {
        if width <= 0 || height <= 0 {
            return Err(DrawError::Config(format!(
                "surface size must be positive, got {width}x{height}"
            )));
        }

        let image = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        Ok(Self {
            image,
            pen: Pen::default(),
        })
    }

    /// Creates a surface filled with `background`, with `image` drawn at the origin.
    pub fn with_background(
        width: i32,
        height: i32,
        background: Color,
        image: Option<&cairo::ImageSurface>,
    ) -> Result<Self, DrawError> {
        let mut surface = Self::new(width, height)?;
        surface.fill(background)?;
        if let Some(image) = image {
            surface.paint_image(image)?;
        }
        Ok(surface)
    }

    pub fn width(&self) -> i32 {
        self.image.width()
    }

    pub fn height(&self) -> i32 {
        self.image.height()
    }

    /// Full surface bounds as a rectangle.
    pub fn bounds(&self) -> Option<Rect> {
        Rect::new(0, 0, self.width(), self.height())
    }

    /// Underlying Cairo image, e.g. for use as a paint source.
    pub fn image(&self) -> &cairo::ImageSurface {
        &self.image
    }

    pub fn pen(&self) -> Pen {
        self.pen
    }

    /// Sets the pen used by [`Surface::stroke_segment`].
    pub fn set_pen(&mut self, pen: Pen) {
        self.pen = pen;
    }

    pub(crate) fn context(&self) -> Result<cairo::Context, DrawError> {
        Ok(cairo::Context::new(&self.image)?)
    }

    /// Replaces every pixel with `color`.
    pub fn fill(&mut self, color: Color) -> Result<(), DrawError> {
        let ctx = self.context()?;
        render::render_background(&ctx, color)?;
        Ok(())
    }

    /// Makes every pixel fully transparent.
    pub fn clear(&mut self) -> Result<(), DrawError> {
        self.fill(super::color::TRANSPARENT)
    }

    /// Draws `image` at the origin over the current content.
    pub fn paint_image(&mut self, image: &cairo::ImageSurface) -> Result<(), DrawError> {
        let ctx = self.context()?;
        render::render_image(&ctx, image)?;
        Ok(())
    }

    /// Replaces this surface's content with a copy of `source`.
    pub fn copy_from(&mut self, source: &Surface) -> Result<(), DrawError> {
        let ctx = self.context()?;
        ctx.set_operator(cairo::Operator::Source);
        ctx.set_source_surface(source.image(), 0.0, 0.0)?;
        ctx.paint()?;
        Ok(())
    }

    /// Strokes a straight segment with the current pen.
    pub fn stroke_segment(&mut self, from: Point, to: Point) -> Result<(), DrawError> {
        let ctx = self.context()?;
        render::render_segment(&ctx, from, to, &self.pen)?;
        Ok(())
    }

    /// Reads one pixel as packed premultiplied ARGB, or `None` out of bounds.
    pub fn pixel(&mut self, x: i32, y: i32) -> Result<Option<u32>, DrawError> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return Ok(None);
        }

        let stride = self.image.stride() as usize;
        let data = self.image.data()?;
        let offset = y as usize * stride + x as usize * 4;
        let bytes = [
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ];
        Ok(Some(u32::from_ne_bytes(bytes)))
    }

    /// Copies out the raw pixel rows (stride included).
    pub fn pixels(&mut self) -> Result<Vec<u8>, DrawError> {
        Ok(self.image.data()?.to_vec())
    }

    /// Encodes the surface as PNG into `writer`.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> Result<(), DrawError> {
        self.image.write_to_png(writer)?;
        Ok(())
    }

    /// Encodes the surface as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, DrawError> {
        let mut bytes = Vec::new();
        self.write_png(&mut bytes)?;
        Ok(bytes)
    }
}

/// Resolves the pixel size for a surface.
///
/// With `size_fit` and a loaded image the image's natural size wins; otherwise
/// the configured constants apply.
pub fn target_size(
    configured: (i32, i32),
    size_fit: bool,
    image_size: Option<(i32, i32)>,
) -> (i32, i32) {
    match image_size {
        Some(size) if size_fit => size,
        _ => configured,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, WHITE};

    #[test]
    fn new_surface_is_transparent() {
        let mut surface = Surface::new(4, 3).unwrap();
        assert_eq!((surface.width(), surface.height()), (4, 3));
        assert_eq!(surface.pixel(0, 0).unwrap(), Some(0));
        assert_eq!(surface.pixel(4, 0).unwrap(), None);
        assert_eq!(surface.pixel(0, -1).unwrap(), None);
    }

    #[test]
    fn zero_sized_surface_is_rejected() {
        assert!(matches!(Surface::new(0, 10), Err(DrawError::Config(_))));
    }

    #[test]
    fn with_background_fills_every_pixel() {
        let mut surface = Surface::with_background(8, 8, WHITE, None).unwrap();
        for (x, y) in [(0, 0), (7, 7), (3, 5)] {
            assert_eq!(surface.pixel(x, y).unwrap(), Some(WHITE.to_argb32()));
        }
    }

    #[test]
    fn stroke_segment_uses_current_pen() {
        let mut surface = Surface::with_background(20, 20, WHITE, None).unwrap();
        surface.set_pen(Pen {
            width: 4.0,
            color: BLACK,
        });
        surface
            .stroke_segment(Point::new(2, 10), Point::new(18, 10))
            .unwrap();

        assert_eq!(surface.pixel(10, 10).unwrap(), Some(BLACK.to_argb32()));
        assert_eq!(surface.pixel(10, 2).unwrap(), Some(WHITE.to_argb32()));
    }

    #[test]
    fn copy_from_replaces_content() {
        let source = Surface::with_background(5, 5, BLACK, None).unwrap();
        let mut target = Surface::with_background(5, 5, WHITE, None).unwrap();
        target.copy_from(&source).unwrap();
        assert_eq!(target.pixel(2, 2).unwrap(), Some(BLACK.to_argb32()));
    }

    #[test]
    fn png_export_has_signature() {
        let surface = Surface::with_background(3, 3, WHITE, None).unwrap();
        let bytes = surface.to_png_bytes().unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn target_size_prefers_image_only_when_fitting() {
        assert_eq!(target_size((300, 300), true, Some((64, 32))), (64, 32));
        assert_eq!(target_size((300, 300), false, Some((64, 32))), (300, 300));
        assert_eq!(target_size((300, 300), true, None), (300, 300));
    }
}
