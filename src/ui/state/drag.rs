// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning a zoomed image.
//! The anchor is the pointer position minus the pan offset at drag start,
//! so the offset follows the pointer one-to-one and is never clamped.

use iced::{Point, Vector};

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Pointer position minus pan offset, captured at drag start
    pub anchor: Point,
}

impl DragState {
    /// Starts a drag operation from `pointer` while the image sits at `pan_offset`.
    pub fn start(&mut self, pointer: Point, pan_offset: Vector) {
        self.is_dragging = true;
        self.anchor = Point::new(pointer.x - pan_offset.x, pointer.y - pan_offset.y);
    }

    /// Stops the drag operation. The anchor is kept until the next start.
    pub fn stop(&mut self) {
        self.is_dragging = false;
    }

    /// Calculates the pan offset for the current pointer position.
    #[must_use]
    pub fn calculate_offset(&self, pointer: Point) -> Option<Vector> {
        if !self.is_dragging {
            return None;
        }

        Some(Vector::new(pointer.x - self.anchor.x, pointer.y - self.anchor.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragState::default();
        assert!(!state.is_dragging);
        assert_eq!(state.anchor, Point::ORIGIN);
    }

    #[test]
    fn start_drag_captures_anchor_relative_to_offset() {
        let mut state = DragState::default();
        state.start(Point::new(100.0, 50.0), Vector::new(20.0, 10.0));

        assert!(state.is_dragging);
        assert_eq!(state.anchor, Point::new(80.0, 40.0));
    }

    #[test]
    fn calculate_offset_returns_none_when_not_dragging() {
        let state = DragState::default();
        assert!(state.calculate_offset(Point::new(100.0, 50.0)).is_none());
    }

    #[test]
    fn calculate_offset_follows_pointer() {
        let mut state = DragState::default();
        state.start(Point::new(100.0, 100.0), Vector::ZERO);

        assert_eq!(
            state.calculate_offset(Point::new(130.0, 160.0)),
            Some(Vector::new(30.0, 60.0))
        );
    }

    #[test]
    fn offset_is_not_clamped() {
        let mut state = DragState::default();
        state.start(Point::new(0.0, 0.0), Vector::new(5.0, 5.0));

        assert_eq!(
            state.calculate_offset(Point::new(-5000.0, 9000.0)),
            Some(Vector::new(-4995.0, 9005.0))
        );
    }

    #[test]
    fn stop_drag_clears_flag() {
        let mut state = DragState::default();
        state.start(Point::new(10.0, 10.0), Vector::ZERO);
        state.stop();

        assert!(!state.is_dragging);
        assert!(state.calculate_offset(Point::new(20.0, 20.0)).is_none());
    }
}
