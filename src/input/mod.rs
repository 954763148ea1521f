//! Input handling and stroke state machine.
//!
//! This module translates host pointer events into drawing actions: positions
//! are mapped into surface pixels, and the stroke controller decides whether
//! each movement paints a segment or erases.

pub mod events;
pub mod mapper;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{EventOutcome, EventTarget, InputPosition, PointerEvent, PointerKind};
pub use mapper::{BoundingBox, CoordinateMapper};
pub use state::{DrawingState, PointerState, StrokeController};
pub use tool::Tool;
