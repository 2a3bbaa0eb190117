// Copyright 2025 the Mirador Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan drag: move the content so the grabbed point follows the pointer.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragState::start`], passing the pointer position and
//!    the pan at the moment of the press.
//! 2) On each move, [`DragState::update`] returns the pan that keeps the
//!    grabbed content point under the pointer.
//! 3) End the drag with [`DragState::end`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use mirador_gesture::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! // Press at (10, 20) while the content is panned by (100, 50).
//! drag.start(Point::new(10.0, 20.0), Vec2::new(100.0, 50.0));
//! assert!(drag.is_dragging());
//!
//! // Move to (15, 25): the pan follows the pointer by (5, 5).
//! let pan = drag.update(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(pan, Vec2::new(105.0, 55.0));
//! ```

use kurbo::{Point, Vec2};

/// Tracks a pan drag.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragState {
    /// Pointer position at the start of the drag.
    pub start_pos: Option<Point>,
    /// Pan at the start of the drag.
    pub start_pan: Vec2,
}

impl DragState {
    /// Start tracking a drag from `pos`, with the content currently panned by `pan`.
    pub fn start(&mut self, pos: Point, pan: Vec2) {
        self.start_pos = Some(pos);
        self.start_pan = pan;
    }

    /// Update with a new pointer position, returning the pan that keeps the
    /// grabbed point under the pointer.
    ///
    /// Returns `None` when no drag is active.
    #[must_use]
    pub fn update(&self, pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| self.start_pan + (pos - start))
    }

    /// End the drag and reset state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a drag is active.
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drag_state_is_not_dragging() {
        let drag = DragState::default();
        assert!(!drag.is_dragging());
    }

    #[test]
    fn start_records_position_and_pan() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0), Vec2::new(-3.0, 4.0));

        assert_eq!(drag.start_pos, Some(Point::new(10.0, 20.0)));
        assert_eq!(drag.start_pan, Vec2::new(-3.0, 4.0));
    }

    #[test]
    fn update_returns_following_pan() {
        let mut drag = DragState::default();
        drag.start(Point::new(100.0, 100.0), Vec2::new(40.0, -10.0));

        assert_eq!(drag.update(Point::new(90.0, 85.0)), Some(Vec2::new(30.0, -25.0)));
        assert_eq!(drag.update(Point::new(100.0, 100.0)), Some(Vec2::new(40.0, -10.0)));
    }

    #[test]
    fn update_returns_none_when_not_dragging() {
        let drag = DragState::default();
        assert_eq!(drag.update(Point::new(15.0, 25.0)), None);
    }

    #[test]
    fn end_resets_drag_state() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0), Vec2::new(1.0, 1.0));
        drag.end();

        assert!(!drag.is_dragging());
        assert_eq!(drag.update(Point::new(1.0, 1.0)), None);
        assert_eq!(drag.start_pan, Vec2::ZERO);
    }

    #[test]
    fn start_overwrites_previous_drag() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), Vec2::ZERO);

        drag.start(Point::new(50.0, 60.0), Vec2::new(10.0, 10.0));
        assert_eq!(drag.update(Point::new(55.0, 65.0)), Some(Vec2::new(15.0, 15.0)));
    }
}
