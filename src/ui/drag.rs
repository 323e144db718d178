// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for moving draggable toasts.

use crate::alert::AlertId;
use iced::{Point, Vector};

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Toast being dragged
    pub target: Option<AlertId>,

    /// Cursor position where the drag started
    pub start_position: Option<Point>,

    /// Toast offset when the drag started
    pub start_offset: Option<Vector>,

    /// Whether the current drag has moved the toast
    pub moved: bool,

    /// Toast moved by the most recently finished drag
    pub last_moved: Option<AlertId>,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, target: AlertId, position: Point, offset: Vector) {
        self.target = Some(target);
        self.start_position = Some(position);
        self.start_offset = Some(offset);
        self.moved = false;
        self.last_moved = None;
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.last_moved = self.target.filter(|_| self.moved);
        self.moved = false;
        self.target = None;
        self.start_position = None;
        self.start_offset = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.target.is_some()
    }

    /// Calculates the new toast offset based on cursor movement during drag
    #[must_use]
    pub fn calculate_offset(&self, current_position: Point) -> Option<(AlertId, Vector)> {
        let target = self.target?;
        let start_pos = self.start_position?;
        let start_offset = self.start_offset?;

        // The toast follows the cursor
        Some((target, start_offset + (current_position - start_pos)))
    }

    /// Moves the drag to the cursor position, returning the new offset
    pub fn drag_to(&mut self, current_position: Point) -> Option<(AlertId, Vector)> {
        let (target, offset) = self.calculate_offset(current_position)?;
        if Some(offset) != self.start_offset {
            self.moved = true;
        }
        Some((target, offset))
    }

    /// Returns whether a mouse release on `id` ends a drag that moved it
    #[must_use]
    pub fn release_ends_move(&self, id: AlertId) -> bool {
        (self.moved && self.target == Some(id)) || self.last_moved == Some(id)
    }
}
