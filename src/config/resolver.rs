//! Value-or-accessor settings.
//!
//! Line width, line color and the erasing flag may be given either as constants
//! or as functions of live host state (e.g. "the color currently selected in
//! the palette"). Both shapes are normalized once into an [`Accessor`] so every
//! read site simply calls it.

use std::fmt;
use std::rc::Rc;

/// A zero-argument function standing in for a possibly-dynamic value.
pub type Accessor<T> = Rc<dyn Fn() -> T>;

/// A setting supplied either as a constant or as an accessor.
pub enum Dynamic<T> {
    Constant(T),
    Accessor(Accessor<T>),
}

impl<T> Dynamic<T> {
    /// Wraps a closure over external state.
    pub fn accessor(f: impl Fn() -> T + 'static) -> Self {
        Dynamic::Accessor(Rc::new(f))
    }
}

impl<T: Clone + 'static> Dynamic<T> {
    /// Normalizes into an accessor.
    ///
    /// Constants become accessors returning a clone of the value; accessors are
    /// returned unchanged, so resolving twice is a no-op.
    pub fn resolve(self) -> Accessor<T> {
        match self {
            Dynamic::Constant(value) => Rc::new(move || value.clone()),
            Dynamic::Accessor(accessor) => accessor,
        }
    }
}

impl<T> From<T> for Dynamic<T> {
    fn from(value: T) -> Self {
        Dynamic::Constant(value)
    }
}

impl<T> Clone for Dynamic<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Dynamic::Constant(value) => Dynamic::Constant(value.clone()),
            Dynamic::Accessor(accessor) => Dynamic::Accessor(Rc::clone(accessor)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Dynamic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dynamic::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Dynamic::Accessor(_) => f.write_str("Accessor(..)"),
        }
    }
}

/// The resolved dynamic settings read during strokes.
#[derive(Clone)]
pub struct DynamicSettings {
    pub line_width: Accessor<f64>,
    pub line_color: Accessor<String>,
    pub erasing: Accessor<bool>,
}

impl DynamicSettings {
    /// Resolves all three settings up front, before any stroke can start.
    pub fn resolve(line_width: Dynamic<f64>, line_color: Dynamic<String>, erasing: Dynamic<bool>) -> Self {
        Self {
            line_width: line_width.resolve(),
            line_color: line_color.resolve(),
            erasing: erasing.resolve(),
        }
    }

    pub fn is_erasing(&self) -> bool {
        (self.erasing)()
    }

    /// Flips erase mode, pinning the new value as a constant.
    ///
    /// Returns the new erasing state.
    pub fn toggle_erasing(&mut self) -> bool {
        let erasing = !self.is_erasing();
        self.erasing = Dynamic::Constant(erasing).resolve();
        erasing
    }
}

impl fmt::Debug for DynamicSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicSettings")
            .field("line_width", &(self.line_width)())
            .field("line_color", &(self.line_color)())
            .field("erasing", &(self.erasing)())
            .finish()
    }
}
