// Copyright 2025 the Mirador Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mirador Layout: the side panel next to the diagram viewport.
//!
//! The panel sits on the right of the main area and can be collapsed,
//! expanded, and resized with a splitter. Its width eats into the viewport,
//! so every operation here changes the area available to the diagram; the
//! caller is expected to refit the view after each of them.
//!
//! [`PanelLayout`] remembers the last non-zero width across collapse/expand
//! cycles, and whether the collapse state was forced by a startup directive.
//!
//! ```rust
//! use mirador_layout::{LayoutConfig, PanelLayout};
//!
//! let mut panel = PanelLayout::new(LayoutConfig::default());
//! panel.set_sidebar_width(500.0, 1600.0);
//! assert_eq!(panel.width(), 500);
//!
//! panel.set_panel_collapsed(true, 1600.0);
//! assert_eq!(panel.viewer_width(1600.0), 1600.0);
//!
//! // Expanding restores the previous width rather than a default.
//! panel.set_panel_collapsed(false, 1600.0);
//! assert_eq!(panel.width(), 500);
//! ```

use mirador_view::DeviceClass;

/// Panel sizing parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// Smallest width the panel can be given while expanded.
    pub min_width: u32,
    /// Space always left to the viewport when computing the width cap.
    pub viewport_reserve: f64,
    /// Default width as a fraction of the main area.
    pub default_ratio: f64,
    /// Lower clamp of the default width.
    pub default_min: f64,
    /// Upper clamp of the default width.
    pub default_max: f64,
    /// Width remembered before any resize happens.
    pub initial_width: u32,
    /// Widths at or below this are treated as a hidden panel.
    pub visible_threshold: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_width: 220,
            viewport_reserve: 120.0,
            default_ratio: 0.22,
            default_min: 260.0,
            default_max: 440.0,
            initial_width: 380,
            visible_threshold: 2,
        }
    }
}

/// What [`PanelLayout::on_viewport_resize`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeAction {
    /// Collapse state was re-derived from the window width class.
    Recollapsed,
    /// The panel was reset to the default width for the new main area.
    ResetWidth,
    /// Nothing changed in the panel; only the view needs a refit.
    RefitOnly,
}

/// Collapse state and width of the side panel.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelLayout {
    collapsed: bool,
    width: u32,
    last_non_zero_width: u32,
    forced: Option<bool>,
    config: LayoutConfig,
}

impl PanelLayout {
    /// Creates an expanded panel at the configured initial width.
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            collapsed: false,
            width: config.initial_width,
            last_non_zero_width: config.initial_width,
            forced: None,
            config,
        }
    }

    /// Whether the panel is collapsed.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Panel width in pixels. Only meaningful while expanded.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Width restored on the next expand.
    #[must_use]
    pub fn last_non_zero_width(&self) -> u32 {
        self.last_non_zero_width
    }

    /// Collapse state forced at startup, if any.
    #[must_use]
    pub fn forced(&self) -> Option<bool> {
        self.forced
    }

    /// Records (or clears) a forced collapse state.
    pub fn set_forced(&mut self, forced: Option<bool>) {
        self.forced = forced;
    }

    /// Sizing parameters.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replaces the remembered width, used when seeding the default at
    /// startup.
    pub fn set_last_non_zero_width(&mut self, width: u32) {
        if width > 1 {
            self.last_non_zero_width = width;
        }
    }

    /// Default width for a main area: `round(clamp(main * ratio, min, max))`.
    #[must_use]
    pub fn default_sidebar_width(&self, main_area_width: f64) -> u32 {
        let c = &self.config;
        to_px((main_area_width * c.default_ratio).clamp(c.default_min, c.default_max))
    }

    /// Largest width allowed for a main area.
    #[must_use]
    pub fn max_width(&self, main_area_width: f64) -> u32 {
        let cap = to_px((main_area_width - self.config.viewport_reserve).floor());
        cap.max(self.config.min_width)
    }

    /// Width left to the viewport inside a main area.
    #[must_use]
    pub fn viewer_width(&self, main_area_width: f64) -> f64 {
        if self.collapsed {
            main_area_width
        } else {
            (main_area_width - f64::from(self.width)).max(0.0)
        }
    }

    /// Collapses or expands the panel.
    ///
    /// Expanding restores the last non-zero width (or the default width when
    /// none is remembered), clamped to the current main area. Returns `true`
    /// if the collapse state or width changed. The caller refits the view in
    /// every case.
    pub fn set_panel_collapsed(&mut self, collapsed: bool, main_area_width: f64) -> bool {
        let before = (self.collapsed, self.width);
        self.collapsed = collapsed;
        if !collapsed {
            let fallback = if self.last_non_zero_width > 1 {
                self.last_non_zero_width
            } else {
                self.default_sidebar_width(main_area_width)
            };
            self.width = self.clamp_width(f64::from(fallback), main_area_width);
            self.last_non_zero_width = self.width;
        }
        tracing::debug!(collapsed, width = self.width, "panel collapse set");
        before != (self.collapsed, self.width)
    }

    /// Resizes the expanded panel.
    ///
    /// No-op while collapsed or for a non-finite request. Otherwise `px` is
    /// rounded and clamped to `[min_width, max_width(main)]`. Returns `true`
    /// if the width changed.
    pub fn set_sidebar_width(&mut self, px: f64, main_area_width: f64) -> bool {
        if self.collapsed || !px.is_finite() {
            return false;
        }
        let before = self.width;
        self.width = self.clamp_width(px, main_area_width);
        if self.width > 1 {
            self.last_non_zero_width = self.width;
        }
        tracing::trace!(requested = px, width = self.width, "panel width set");
        before != self.width
    }

    /// Reacts to a change of window or main-area size.
    ///
    /// Without a forced state the collapse follows the window class. With one,
    /// a collapsed panel stays collapsed, and a visible panel is reset to the
    /// default width for the new main area.
    pub fn on_viewport_resize(&mut self, main_area_width: f64, class: DeviceClass) -> ResizeAction {
        if self.forced.is_none() {
            self.set_panel_collapsed(class.is_compact(), main_area_width);
            return ResizeAction::Recollapsed;
        }
        if self.collapsed {
            return ResizeAction::RefitOnly;
        }
        if self.width > self.config.visible_threshold {
            let width = self.default_sidebar_width(main_area_width);
            self.set_sidebar_width(f64::from(width), main_area_width);
            ResizeAction::ResetWidth
        } else {
            ResizeAction::RefitOnly
        }
    }

    fn clamp_width(&self, px: f64, main_area_width: f64) -> u32 {
        let max = self.max_width(main_area_width);
        to_px(px.round()).clamp(self.config.min_width.min(max), max)
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is clamped to the u32 range and rounded before the cast"
)]
fn to_px(v: f64) -> u32 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, f64::from(u32::MAX)) as u32
}
