//! Stroke state machine and controller state.

use crate::config::DynamicSettings;
use crate::draw::{Color, DirtyTracker, EraserSpec, Pen};
use crate::error::DrawError;
use crate::input::events::{EventTarget, PointerKind};
use crate::input::tool::Tool;
use crate::util::{Point, Rect};

/// Positions tracked for the stroke in progress.
///
/// Created at press time and dropped at release; never shared between strokes
/// or between drawing surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerState {
    /// Previously recorded position, where the next segment starts
    pub start: Point,
    /// Most recent position
    pub end: Point,
    /// Where the eraser cursor ring is currently drawn, if anywhere
    pub cursor: Option<Point>,
    /// Number of movements handled so far
    pub moves: usize,
}

impl PointerState {
    pub fn new(at: Point) -> Self {
        Self {
            start: at,
            end: at,
            cursor: None,
            moves: 0,
        }
    }
}

/// Current stroke mode.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// No stroke in progress - waiting for a press
    Idle,
    /// Pointer is down; movements paint or erase
    Active {
        /// Positions for this stroke
        pointer: PointerState,
        /// Pen resolved when the stroke started
        pen: Pen,
    },
}

/// Press/move/release state machine for one drawing surface.
///
/// Pixel mutation is delegated to the surface (for painted segments) or to the
/// eraser (for restored disks); the controller only decides which and where.
#[derive(Debug)]
pub struct StrokeController {
    /// Resolved line width, line color and erasing accessors
    pub settings: DynamicSettings,
    /// Fixed eraser geometry
    pub eraser: EraserSpec,
    /// Current stroke mode
    pub state: DrawingState,
    /// Rectangles touched since the host last drained them
    pub(crate) dirty: DirtyTracker,
}

impl StrokeController {
    /// Creates an idle controller with the default eraser.
    pub fn new(settings: DynamicSettings) -> Self {
        Self::with_eraser(settings, EraserSpec::default())
    }

    pub fn with_eraser(settings: DynamicSettings, eraser: EraserSpec) -> Self {
        Self {
            settings,
            eraser,
            state: DrawingState::Idle,
            dirty: DirtyTracker::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, DrawingState::Active { .. })
    }

    /// Positions of the stroke in progress.
    pub fn pointer(&self) -> Option<&PointerState> {
        match &self.state {
            DrawingState::Active { pointer, .. } => Some(pointer),
            DrawingState::Idle => None,
        }
    }

    /// Tool selected by the erasing accessor right now.
    pub fn current_tool(&self) -> Tool {
        Tool::from_erasing(self.settings.is_erasing())
    }

    /// Whether an event of `kind` seen at `target` belongs to the state machine.
    ///
    /// Presses and moves count only over the surface; a release counts
    /// anywhere so strokes that leave the surface still end.
    pub fn accepts(&self, kind: PointerKind, target: EventTarget) -> bool {
        match kind {
            PointerKind::Press => !self.is_active() && target == EventTarget::Surface,
            PointerKind::Move => self.is_active() && target == EventTarget::Surface,
            PointerKind::Release => self.is_active(),
        }
    }

    /// Reads and validates the pen attributes.
    ///
    /// # Errors
    /// Returns [`DrawError::Config`] when the width is not a positive finite
    /// number, or the color is blank or unrecognized.
    pub fn resolve_pen(&self) -> Result<Pen, DrawError> {
        let width = (self.settings.line_width)();
        if !(width.is_finite() && width > 0.0) {
            return Err(DrawError::Config(format!(
                "line width must be a positive number, got {width}"
            )));
        }

        let raw = (self.settings.line_color)();
        if raw.trim().is_empty() {
            return Err(DrawError::Config("line color is empty".to_string()));
        }
        let color = Color::parse_css(&raw)
            .ok_or_else(|| DrawError::Config(format!("unrecognized line color '{raw}'")))?;

        Ok(Pen { width, color })
    }

    /// Drains damage rectangles accumulated since the last call.
    pub fn take_damage(&mut self, width: i32, height: i32) -> Vec<Rect> {
        self.dirty.take_regions(width, height)
    }

    /// Marks the whole surface as needing a repaint.
    pub fn mark_full_damage(&mut self) {
        self.dirty.mark_full();
    }

    /// Abandons any stroke in progress without touching pixels.
    pub fn reset(&mut self) {
        self.state = DrawingState::Idle;
    }
}
