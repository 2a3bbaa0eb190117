// Copyright 2025 the Mirador Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use mirador_filter::{FlowId, LoopId};
use mirador_gesture::Contacts;

/// Window geometry the engine lays out against.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    /// Width of the whole window, used for the device class.
    pub window_width: f64,
    /// Main area (viewport plus side panel) in client coordinates.
    pub main_area: Rect,
}

impl Metrics {
    /// Metrics for a main area that fills a window of the given size.
    #[must_use]
    pub fn fill(width: f64, height: f64) -> Self {
        Self {
            window_width: width,
            main_area: Rect::new(0.0, 0.0, width, height),
        }
    }
}

/// Input the engine reacts to.
///
/// Positions are client coordinates unless stated otherwise.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Mouse press on the viewport.
    PointerDown {
        /// Pointer position.
        pos: Point,
        /// Mouse button index; only `0` starts a pan.
        button: u16,
    },
    /// Mouse move anywhere in the window.
    PointerMove {
        /// Pointer position.
        pos: Point,
    },
    /// Mouse release anywhere in the window.
    PointerUp,
    /// Wheel over the viewport.
    Wheel {
        /// Cursor position.
        pos: Point,
        /// Vertical wheel delta; negative zooms in.
        delta_y: f64,
    },
    /// Touch start on the viewport.
    TouchStart {
        /// All current contacts.
        contacts: Contacts,
    },
    /// Touch move on the viewport.
    TouchMove {
        /// All current contacts.
        contacts: Contacts,
    },
    /// Touch end on the viewport.
    TouchEnd,
    /// Mouse press on the panel splitter.
    SplitterDown {
        /// Pointer X.
        x: f64,
    },
    /// Zoom slider input, in percent.
    ZoomSlider {
        /// Slider value.
        percent: f64,
    },
    /// Zoom-in button.
    ZoomIn,
    /// Zoom-out button.
    ZoomOut,
    /// Fit button.
    Fit,
    /// Reset-view button (refits).
    ResetView,
    /// Reset-filters button.
    ResetFilters,
    /// Legend flow button.
    ToggleFlow(FlowId),
    /// Legend loop button.
    ToggleLoop(LoopId),
    /// Show or hide one flow overlay.
    SetFlow {
        /// Flow to change.
        id: FlowId,
        /// Whether the flow is shown.
        active: bool,
    },
    /// Show or hide one loop overlay.
    SetLoop {
        /// Loop to change.
        id: LoopId,
        /// Whether the loop is shown.
        active: bool,
    },
    /// Collapse or expand the side panel.
    SetPanelCollapsed(bool),
    /// The window or main area changed size.
    Resize(Metrics),
}
