// Copyright 2025 the Mirador Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Splitter drag that resizes a panel anchored on its far edge.
///
/// The panel sits on the right of the viewport with the splitter on its left
/// edge, so dragging the splitter toward the viewport (leftward, decreasing
/// X) grows the panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelResizeDrag {
    /// Pointer X at the press.
    pub start_x: f64,
    /// Panel width at the press.
    pub start_width: f64,
}

impl PanelResizeDrag {
    /// Starts a resize from pointer `start_x` with the panel `start_width` wide.
    #[must_use]
    pub fn new(start_x: f64, start_width: f64) -> Self {
        Self {
            start_x,
            start_width,
        }
    }

    /// Requested (unclamped) panel width for a pointer at `x`.
    #[must_use]
    pub fn width_at(&self, x: f64) -> f64 {
        self.start_width + (self.start_x - x)
    }
}
