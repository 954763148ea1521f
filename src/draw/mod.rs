//! Rendering primitives for the drawing surface (Cairo-based).
//!
//! This module defines the raster side of the crate:
//! - [`Color`]: RGBA color representation with CSS parsing
//! - [`Surface`]: Cairo image surface with a current [`Pen`]
//! - [`ReferenceBuffer`]: offscreen copy of the pristine background
//! - [`eraser`]: the clipped-copy eraser and its cursor ring
//! - [`DirtyTracker`]: damage rectangles accumulated between host repaints

pub mod color;
pub mod dirty;
pub mod eraser;
pub mod reference;
pub mod render;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use dirty::DirtyTracker;
pub use eraser::EraserSpec;
pub use reference::{LoadState, ReferenceBuffer};
pub use render::Pen;
pub use surface::Surface;

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
