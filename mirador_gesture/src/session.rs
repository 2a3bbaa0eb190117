// Copyright 2025 the Mirador Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::drag::DragState;
use crate::pinch::{PinchState, PinchStep};
use crate::resize::PanelResizeDrag;

/// Active touch contacts, in client coordinates.
pub type Contacts = SmallVec<[Point; 2]>;

/// Primary (left) mouse button index.
pub const PRIMARY_BUTTON: u16 = 0;

/// What the current interaction asks of the viewport or panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutput {
    /// Replace the pan offset.
    Pan(Vec2),
    /// Zoom by a relative factor around an anchor in viewport coordinates.
    Zoom(PinchStep),
    /// Resize the side panel to this (unclamped) width.
    PanelWidth(f64),
}

/// The one interaction in progress, if any.
///
/// A pan (mouse or single finger), a pinch, and a splitter resize are
/// mutually exclusive. Whichever of a panel resize and a pan/pinch starts
/// first owns the interaction until it ends; a new touch start replaces a
/// pan or pinch wholesale.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureSession {
    /// Nothing in progress.
    #[default]
    Idle,
    /// Dragging the diagram.
    Pan(PanDrag),
    /// Two-finger zoom.
    Pinch(PinchState),
    /// Dragging the panel splitter.
    PanelResize(PanelResizeDrag),
}

/// A pan drag and the input that started it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanDrag {
    /// Drag bookkeeping.
    pub drag: DragState,
    /// Whether the drag came from a touch contact.
    pub touch: bool,
}

impl GestureSession {
    /// Returns `true` while the diagram is being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Pan(_))
    }

    /// Returns `true` while the panel splitter is being dragged.
    #[must_use]
    pub fn is_resizing_panel(&self) -> bool {
        matches!(self, Self::PanelResize(_))
    }

    /// Returns `true` while a pinch is in progress.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        matches!(self, Self::Pinch(_))
    }

    /// Mouse press on the viewport. Only the primary button starts a pan.
    pub fn pointer_down(&mut self, pos: Point, button: u16, pan: Vec2) {
        if button != PRIMARY_BUTTON || self.is_resizing_panel() {
            return;
        }
        self.begin_pan(pos, pan, false);
    }

    /// Mouse press on the panel splitter.
    pub fn splitter_down(&mut self, x: f64, panel_width: f64) {
        if matches!(self, Self::Pan(_) | Self::Pinch(_)) {
            return;
        }
        tracing::debug!(x, panel_width, "panel resize started");
        *self = Self::PanelResize(PanelResizeDrag::new(x, panel_width));
    }

    /// Mouse move anywhere in the window.
    ///
    /// A panel resize takes precedence; otherwise a mouse pan follows the
    /// pointer.
    pub fn pointer_move(&mut self, pos: Point) -> Option<GestureOutput> {
        match self {
            Self::PanelResize(resize) => Some(GestureOutput::PanelWidth(resize.width_at(pos.x))),
            Self::Pan(PanDrag { drag, touch: false }) => drag.update(pos).map(GestureOutput::Pan),
            _ => None,
        }
    }

    /// Touch start on the viewport.
    ///
    /// One contact starts a pan; two contacts start (or restart) a pinch.
    /// `origin` is the client-space top-left corner of the viewport.
    pub fn touch_start(&mut self, contacts: &[Point], pan: Vec2, origin: Point) {
        if self.is_resizing_panel() {
            return;
        }
        match contacts {
            [one] => self.begin_pan(*one, pan, true),
            [a, b] => {
                tracing::debug!("pinch started");
                *self = Self::Pinch(PinchState::start(*a, *b, origin));
            }
            _ => {}
        }
    }

    /// Touch move on the viewport.
    pub fn touch_move(&mut self, contacts: &[Point], origin: Point) -> Option<GestureOutput> {
        match (self, contacts) {
            (Self::Pan(PanDrag { drag, touch: true }), [one]) => {
                drag.update(*one).map(GestureOutput::Pan)
            }
            (Self::Pinch(pinch), [a, b]) => pinch.update(*a, *b, origin).map(GestureOutput::Zoom),
            _ => None,
        }
    }

    /// Mouse up or touch end: ends whatever was in progress.
    pub fn end(&mut self) {
        if *self != Self::Idle {
            tracing::debug!(session = ?self, "gesture ended");
        }
        *self = Self::Idle;
    }

    fn begin_pan(&mut self, pos: Point, pan: Vec2, touch: bool) {
        let mut drag = DragState::default();
        drag.start(pos, pan);
        tracing::debug!(x = pos.x, y = pos.y, touch, "pan started");
        *self = Self::Pan(PanDrag { drag, touch });
    }
}
