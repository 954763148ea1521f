//! Generic pointer event types fed in by the host.

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Button pressed or touch started
    Press,
    /// Pointer moved or touch dragged
    Move,
    /// Button released or touch ended
    Release,
}

/// Where the host observed the event.
///
/// Moves only count when they happen over the surface, while a release counts
/// anywhere, so a drag that leaves the surface still ends its stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventTarget {
    /// The drawing surface itself
    #[default]
    Surface,
    /// Anywhere else in the host window/document
    Document,
}

/// Raw event position in viewport coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum InputPosition {
    /// Mouse or pen pointer at client coordinates
    Mouse { client_x: f64, client_y: f64 },
    /// Active touch points; only the first one is used
    Touch { touches: Vec<(f64, f64)> },
}

/// A normalized press/move/release event.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub target: EventTarget,
    pub position: InputPosition,
}

impl PointerEvent {
    /// A mouse event over the surface.
    pub fn mouse(kind: PointerKind, client_x: f64, client_y: f64) -> Self {
        Self {
            kind,
            target: EventTarget::Surface,
            position: InputPosition::Mouse { client_x, client_y },
        }
    }

    /// A touch event over the surface.
    pub fn touch(kind: PointerKind, touches: Vec<(f64, f64)>) -> Self {
        Self {
            kind,
            target: EventTarget::Surface,
            position: InputPosition::Touch { touches },
        }
    }

    /// Marks the event as observed outside the surface.
    pub fn on_document(mut self) -> Self {
        self.target = EventTarget::Document;
        self
    }
}

/// What the host should do after dispatching an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    /// The event advanced the stroke state machine
    pub consumed: bool,
    /// The host should suppress its default handling (e.g. touch scrolling)
    pub prevent_default: bool,
    /// The live surface changed and should be presented
    pub needs_redraw: bool,
}

impl EventOutcome {
    pub const IGNORED: Self = Self {
        consumed: false,
        prevent_default: false,
        needs_redraw: false,
    };
}
