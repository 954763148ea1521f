//! Drawing tool selection.

/// What a pointer movement does to the surface.
///
/// The tool is re-read from the erasing accessor on every movement, so a host
/// may switch modes in the middle of a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Freehand drawing - connected segments following the pointer
    Pen,
    /// Restores the background under a circular cursor
    Eraser,
}

impl Tool {
    pub fn from_erasing(erasing: bool) -> Self {
        if erasing { Tool::Eraser } else { Tool::Pen }
    }
}
