use crate::draw::{ReferenceBuffer, Surface, eraser};
use crate::error::DrawError;
use crate::input::tool::Tool;
use crate::util::{self, Point};
use log::debug;

use super::{DrawingState, PointerState, StrokeController};

impl StrokeController {
    /// Processes a press at `point` (surface pixels).
    ///
    /// Resolves and validates the pen before anything is drawn. A press alone
    /// leaves no mark in either mode.
    ///
    /// # Returns
    /// `Ok(true)` when a stroke started, `Ok(false)` when one was already active.
    ///
    /// # Errors
    /// [`DrawError::Config`] if the resolved width or color is unusable; the
    /// controller stays idle.
    pub fn on_press(&mut self, point: Point) -> Result<bool, DrawError> {
        if self.is_active() {
            debug!("Ignoring press at ({}, {}) during an active stroke", point.x, point.y);
            return Ok(false);
        }

        let pen = self.resolve_pen()?;
        self.state = DrawingState::Active {
            pointer: PointerState::new(point),
            pen,
        };
        debug!(
            "Stroke started at ({}, {}) with {:?}",
            point.x,
            point.y,
            self.current_tool()
        );
        Ok(true)
    }

    /// Processes a movement to `point` while a stroke is active.
    ///
    /// # Behavior
    /// - Pen: paints the segment from the previous position to `point`
    /// - Eraser: restores the disks at the previous position and at `point`,
    ///   then draws the cursor ring at `point`
    ///
    /// Either way `point` becomes the start of the next segment.
    ///
    /// # Returns
    /// `Ok(false)` if no stroke is active.
    pub fn on_move(
        &mut self,
        point: Point,
        live: &mut Surface,
        reference: &ReferenceBuffer,
    ) -> Result<bool, DrawError> {
        let (start, cursor, pen) = match &mut self.state {
            DrawingState::Active { pointer, pen } => {
                pointer.end = point;
                pointer.moves += 1;
                (pointer.start, pointer.cursor.take(), *pen)
            }
            DrawingState::Idle => return Ok(false),
        };

        let next_cursor = match self.current_tool() {
            Tool::Pen => {
                if let Some(ring) = cursor {
                    self.erase_at(ring, live, reference)?;
                }
                live.set_pen(pen);
                live.stroke_segment(start, point)?;
                self.dirty
                    .mark_optional_rect(util::segment_bounds(start, point, pen.width));
                None
            }
            Tool::Eraser => {
                self.erase_at(start, live, reference)?;
                if point != start {
                    self.erase_at(point, live, reference)?;
                }
                let ring = eraser::draw_eraser(live, point, &self.eraser)?;
                self.dirty.mark_optional_rect(ring);
                Some(point)
            }
        };

        if let DrawingState::Active { pointer, .. } = &mut self.state {
            pointer.start = point;
            pointer.cursor = next_cursor;
        }
        Ok(true)
    }

    /// Ends the active stroke.
    ///
    /// In erase mode, one final pass at the last position removes the cursor
    /// ring. A stroke that never moved leaves no mark.
    ///
    /// # Returns
    /// `Ok(false)` if no stroke was active.
    pub fn on_release(
        &mut self,
        live: &mut Surface,
        reference: &ReferenceBuffer,
    ) -> Result<bool, DrawError> {
        let DrawingState::Active { pointer, .. } =
            std::mem::replace(&mut self.state, DrawingState::Idle)
        else {
            return Ok(false);
        };

        if pointer.moves > 0 && (pointer.cursor.is_some() || self.settings.is_erasing()) {
            let last = pointer.cursor.unwrap_or(pointer.end);
            self.erase_at(last, live, reference)?;
        }

        debug!(
            "Stroke ended at ({}, {}) after {} moves",
            pointer.end.x, pointer.end.y, pointer.moves
        );
        Ok(true)
    }

    fn erase_at(
        &mut self,
        center: Point,
        live: &mut Surface,
        reference: &ReferenceBuffer,
    ) -> Result<(), DrawError> {
        let touched = eraser::erase(live, reference, center, &self.eraser)?;
        self.dirty.mark_optional_rect(touched);
        Ok(())
    }
}
