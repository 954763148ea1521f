//! Offscreen reference buffer holding the pristine background.

use super::color::Color;
use super::surface::Surface;
use crate::error::DrawError;
use log::{debug, warn};

/// Load lifecycle of a buffer that depends on the background image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Waiting for the background image to finish loading
    Loading,
    /// Content is final and strokes may use it
    Ready,
    /// The background image could not be loaded
    Failed(String),
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }

    /// Combines two buffer states: any failure wins, then any pending load.
    pub fn combine(&self, other: &LoadState) -> LoadState {
        match (self, other) {
            (LoadState::Failed(reason), _) | (_, LoadState::Failed(reason)) => {
                LoadState::Failed(reason.clone())
            }
            (LoadState::Ready, LoadState::Ready) => LoadState::Ready,
            _ => LoadState::Loading,
        }
    }
}

/// Offscreen surface used exclusively as the erase source.
///
/// Filled once with the background color and, when configured, the background
/// image. Strokes never write to it.
#[derive(Debug)]
pub struct ReferenceBuffer {
    surface: Surface,
    state: LoadState,
}

impl ReferenceBuffer {
    /// Creates the buffer filled with `background`.
    ///
    /// When `awaiting_image` is set the buffer stays [`LoadState::Loading`]
    /// until [`ReferenceBuffer::complete`] or [`ReferenceBuffer::fail`] is called.
    pub fn new(
        width: i32,
        height: i32,
        background: Color,
        awaiting_image: bool,
    ) -> Result<Self, DrawError> {
        let surface = Surface::with_background(width, height, background, None)?;
        let state = if awaiting_image {
            LoadState::Loading
        } else {
            LoadState::Ready
        };
        debug!("Reference buffer {width}x{height} created ({state:?})");
        Ok(Self { surface, state })
    }

    /// Finishes initialization once the background image has loaded.
    ///
    /// The buffer is re-sized to `width` x `height`, refilled with the
    /// background color, and the image is drawn at the origin.
    pub fn complete(
        &mut self,
        width: i32,
        height: i32,
        background: Color,
        image: &cairo::ImageSurface,
    ) -> Result<(), DrawError> {
        self.surface = Surface::with_background(width, height, background, Some(image))?;
        self.state = LoadState::Ready;
        debug!("Reference buffer ready at {width}x{height}");
        Ok(())
    }

    /// Records that the background image will never arrive.
    pub fn fail(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        warn!("Reference buffer failed: {reason}");
        self.state = LoadState::Failed(reason);
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Reads one reference pixel (see [`Surface::pixel`]).
    pub fn pixel(&mut self, x: i32, y: i32) -> Result<Option<u32>, DrawError> {
        self.surface.pixel(x, y)
    }
}
