//! The drawing component: live surface, reference buffer and stroke controller.

use crate::config::{BorderStyle, DrawOptions, DynamicSettings};
use crate::draw::surface::target_size;
use crate::draw::{Color, LoadState, ReferenceBuffer, Surface};
use crate::error::{DrawError, LoadError};
use crate::export;
use crate::input::{
    BoundingBox, CoordinateMapper, EventOutcome, PointerEvent, PointerKind, StrokeController,
};
use crate::loader::{ImageLoader, PendingImage, RasterImage};
use crate::util::{Point, Rect};
use log::{debug, info, warn};

/// A freehand drawing surface with a background-restoring eraser.
///
/// Owns two buffers of identical size: the visible live [`Surface`] strokes are
/// painted onto, and the [`ReferenceBuffer`] holding the pristine background
/// the eraser copies from. When a background image is configured both stay
/// [`LoadState::Loading`] until it arrives, and presses are rejected until then.
#[derive(Debug)]
pub struct Draw {
    controller: StrokeController,
    live: Surface,
    live_state: LoadState,
    reference: ReferenceBuffer,
    mapper: CoordinateMapper,
    canvas_size: (i32, i32),
    size_fit: bool,
    background: Color,
    border: Option<BorderStyle>,
    toolbar: bool,
    pending: Option<PendingImage>,
}

impl Draw {
    /// Builds a drawing surface and starts loading its background image.
    ///
    /// The dynamic settings are resolved here, before any event is handled.
    /// With [`ImageLoader::inline`] the image is decoded before this returns.
    ///
    /// # Errors
    /// [`DrawError::Config`] for a non-positive canvas size, or a Cairo error
    /// if the buffers cannot be allocated.
    pub fn new(options: DrawOptions, loader: &ImageLoader) -> Result<Self, DrawError> {
        let pending = options.background_image.as_deref().map(|location| {
            info!("Loading background image from {location}");
            loader.load(location)
        });
        Self::with_pending(options, pending)
    }

    /// Builds a drawing surface around a background load started elsewhere.
    ///
    /// Both buffers wait for `pending` when it is set; `background_image` in
    /// `options` is not consulted.
    pub fn with_pending(
        options: DrawOptions,
        pending: Option<PendingImage>,
    ) -> Result<Self, DrawError> {
        let DrawOptions {
            canvas_width,
            canvas_height,
            size_fit,
            border,
            background_color,
            background_image: _,
            toolbar,
            erasing,
            line_width,
            line_color,
        } = options;

        if canvas_width <= 0 || canvas_height <= 0 {
            return Err(DrawError::Config(format!(
                "canvas size must be positive, got {canvas_width}x{canvas_height}"
            )));
        }

        let settings = DynamicSettings::resolve(line_width, line_color, erasing);
        let awaiting_image = pending.is_some();

        let live = Surface::with_background(canvas_width, canvas_height, background_color, None)?;
        let reference =
            ReferenceBuffer::new(canvas_width, canvas_height, background_color, awaiting_image)?;
        let live_state = if awaiting_image {
            LoadState::Loading
        } else {
            LoadState::Ready
        };

        let mut draw = Self {
            controller: StrokeController::new(settings),
            live,
            live_state,
            reference,
            mapper: CoordinateMapper::default(),
            canvas_size: (canvas_width, canvas_height),
            size_fit,
            background: background_color,
            border,
            toolbar,
            pending,
        };
        draw.controller.mark_full_damage();
        draw.poll_background()?;

        debug!(
            "Drawing surface {}x{} created ({:?})",
            draw.live.width(),
            draw.live.height(),
            draw.readiness()
        );
        Ok(draw)
    }

    /// Applies a finished background load, if any, without blocking.
    pub fn poll_background(&mut self) -> Result<LoadState, DrawError> {
        if let Some(result) = self.pending.as_mut().and_then(PendingImage::try_take) {
            self.pending = None;
            self.finish_load(result)?;
        }
        Ok(self.readiness())
    }

    /// Waits for the background image and applies it.
    pub async fn background_ready(&mut self) -> Result<LoadState, DrawError> {
        if let Some(mut pending) = self.pending.take() {
            let result = pending.wait().await;
            self.finish_load(result)?;
        }
        Ok(self.readiness())
    }

    fn finish_load(&mut self, result: Result<RasterImage, LoadError>) -> Result<(), DrawError> {
        let decoded = result.and_then(|raster| Ok((raster.size(), raster.to_surface()?)));

        match decoded {
            Ok((image_size, image)) => {
                let (width, height) = target_size(self.canvas_size, self.size_fit, Some(image_size));
                self.reference
                    .complete(width, height, self.background, &image)?;
                self.live = Surface::with_background(width, height, self.background, Some(&image))?;
                self.live_state = LoadState::Ready;
                self.controller.mark_full_damage();
                info!("Background image loaded, surface is {width}x{height}");
            }
            Err(err) => {
                let reason = err.to_string();
                warn!("Background image failed to load: {reason}");
                self.reference.fail(reason.clone());
                self.live_state = LoadState::Failed(reason);
            }
        }
        Ok(())
    }

    /// Combined lifecycle of both buffers.
    pub fn readiness(&self) -> LoadState {
        self.live_state.combine(self.reference.state())
    }

    fn ensure_ready(&mut self) -> Result<(), DrawError> {
        match self.poll_background()? {
            LoadState::Ready => Ok(()),
            LoadState::Loading => Err(DrawError::NotReady),
            LoadState::Failed(reason) => Err(DrawError::BackgroundFailed(reason)),
        }
    }

    /// Records where the host currently displays the surface.
    pub fn set_layout(&mut self, layout: BoundingBox) {
        self.mapper.set_layout(layout);
    }

    fn map(&self, event: &PointerEvent) -> Option<Point> {
        self.mapper
            .map(&event.position, self.live.width(), self.live.height())
    }

    /// Dispatches one host pointer event.
    ///
    /// Presses and moves count only over the surface; a release counts from
    /// any target. Events outside the current stroke phase are ignored.
    ///
    /// # Errors
    /// - [`DrawError::NotReady`] for a press while the background is loading
    /// - [`DrawError::BackgroundFailed`] for a press after the load failed
    /// - [`DrawError::Config`] for a press with an unusable width or color
    pub fn handle_event(&mut self, event: &PointerEvent) -> Result<EventOutcome, DrawError> {
        if !self.controller.accepts(event.kind, event.target) {
            return Ok(EventOutcome::IGNORED);
        }

        match event.kind {
            PointerKind::Press => {
                self.ensure_ready()?;
                let Some(point) = self.map(event) else {
                    return Ok(EventOutcome::IGNORED);
                };
                let started = self.controller.on_press(point)?;
                Ok(EventOutcome {
                    consumed: started,
                    ..EventOutcome::IGNORED
                })
            }
            PointerKind::Move => {
                let Some(point) = self.map(event) else {
                    return Ok(EventOutcome {
                        prevent_default: true,
                        ..EventOutcome::IGNORED
                    });
                };
                let drawn = self
                    .controller
                    .on_move(point, &mut self.live, &self.reference)?;
                Ok(EventOutcome {
                    consumed: drawn,
                    prevent_default: true,
                    needs_redraw: drawn,
                })
            }
            PointerKind::Release => {
                let ended = self.controller.on_release(&mut self.live, &self.reference)?;
                Ok(EventOutcome {
                    consumed: ended,
                    prevent_default: false,
                    needs_redraw: ended && !self.controller.dirty.is_clean(),
                })
            }
        }
    }

    /// Wipes all strokes after `confirm` agrees.
    ///
    /// The live surface is cleared over its full area and restored from the
    /// reference buffer. Any stroke in progress is abandoned.
    ///
    /// # Returns
    /// Whether the surface was wiped.
    pub fn repaint(&mut self, confirm: impl FnOnce() -> bool) -> Result<bool, DrawError> {
        if !confirm() {
            debug!("Repaint declined");
            return Ok(false);
        }

        self.controller.reset();
        self.live.clear()?;
        self.live.copy_from(self.reference.surface())?;
        self.controller.mark_full_damage();
        info!("Surface repainted");
        Ok(true)
    }

    /// Flips between painting and erasing.
    ///
    /// Returns the new erasing state.
    pub fn switch_eraser_status(&mut self) -> bool {
        let erasing = self.controller.settings.toggle_erasing();
        info!("Eraser {}", if erasing { "enabled" } else { "disabled" });
        erasing
    }

    pub fn is_erasing(&self) -> bool {
        self.controller.settings.is_erasing()
    }

    pub fn settings(&self) -> &DynamicSettings {
        &self.controller.settings
    }

    pub fn controller(&self) -> &StrokeController {
        &self.controller
    }

    /// The visible surface.
    pub fn surface(&self) -> &Surface {
        &self.live
    }

    /// Mutable access for pixel reads.
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.live
    }

    pub fn reference(&self) -> &ReferenceBuffer {
        &self.reference
    }

    /// Regions of the live surface changed since the last call.
    pub fn take_damage(&mut self) -> Vec<Rect> {
        self.controller
            .take_damage(self.live.width(), self.live.height())
    }

    pub fn border(&self) -> Option<&BorderStyle> {
        self.border.as_ref()
    }

    /// Whether the host asked for a toolbar; the surface itself draws none.
    pub fn toolbar(&self) -> bool {
        self.toolbar
    }

    /// Encodes the live surface as PNG, optionally framed by the border.
    pub fn snapshot_png(&self, include_border: bool) -> Result<Vec<u8>, DrawError> {
        let border = self.border.as_ref().filter(|_| include_border);
        export::snapshot_png(&self.live, border)
    }
}
