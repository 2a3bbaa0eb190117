// Copyright 2025 the Mirador Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use mirador_layout::LayoutConfig;
use mirador_view::{DeviceClass, FitConfig};

/// Zoom factor of one zoom-in step (buttons and wheel).
pub const ZOOM_STEP: f64 = 1.2;

/// Everything the [`crate::Engine`] can be tuned with.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Fit parameters of the viewport.
    pub fit: FitConfig,
    /// Side panel sizing.
    pub layout: LayoutConfig,
    /// Factor of one zoom-in step; zoom-out uses its reciprocal.
    pub zoom_step: f64,
    /// Window width at or below which the window is compact.
    pub compact_breakpoint: f64,
}

impl EngineConfig {
    /// Classifies a window width.
    #[must_use]
    pub fn device_class(&self, window_width: f64) -> DeviceClass {
        DeviceClass::from_width_with_breakpoint(window_width, self.compact_breakpoint)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fit: FitConfig::default(),
            layout: LayoutConfig::default(),
            zoom_step: ZOOM_STEP,
            compact_breakpoint: DeviceClass::COMPACT_BREAKPOINT,
        }
    }
}
