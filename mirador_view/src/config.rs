// Copyright 2025 the Mirador Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Vec2};

use crate::modes::DeviceClass;

/// Smallest scale the transform will ever hold.
pub const MIN_SCALE: f64 = 0.04;

/// Largest scale the transform will ever hold.
pub const MAX_SCALE: f64 = 12.0;

/// Bounds used when no content child can be measured.
pub const DEFAULT_CONTENT_BOUNDS: Rect = Rect::new(0.0, 0.0, 3000.0, 2300.0);

/// Clamps a scale into `[MIN_SCALE, MAX_SCALE]`.
///
/// Non-finite input collapses onto a bound (`NaN` onto [`MIN_SCALE`]) so the
/// stored scale is always usable as a divisor.
#[must_use]
pub fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return MIN_SCALE;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// Parameters of [`crate::TransformState::fit_to_view`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitConfig {
    /// Empty space kept around the content on every side, in layer pixels.
    pub margin: f64,
    /// Position of the content root inside the transformed layer.
    pub content_offset: Vec2,
    /// Scale of the content root inside the transformed layer.
    pub content_base_scale: f64,
    /// Multiplier applied to the fitted scale on desktop-class windows.
    pub desktop_multiplier: f64,
    /// Multiplier applied to the fitted scale on compact windows.
    pub compact_multiplier: f64,
    /// Rectangle substituted when nothing can be measured.
    pub fallback_bounds: Rect,
}

impl FitConfig {
    /// Fit multiplier for the given window class.
    #[must_use]
    pub fn multiplier(&self, class: DeviceClass) -> f64 {
        match class {
            DeviceClass::Compact => self.compact_multiplier,
            DeviceClass::Desktop => self.desktop_multiplier,
        }
    }

    /// Maps a rectangle in content-root coordinates into layer coordinates.
    #[must_use]
    pub fn content_to_layer(&self, bounds: Rect) -> Rect {
        let s = self.content_base_scale;
        Rect::new(
            self.content_offset.x + bounds.x0 * s,
            self.content_offset.y + bounds.y0 * s,
            self.content_offset.x + bounds.x1 * s,
            self.content_offset.y + bounds.y1 * s,
        )
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            margin: 36.0,
            content_offset: Vec2::new(120.0, 100.0),
            content_base_scale: 1.35,
            desktop_multiplier: 0.90,
            compact_multiplier: 1.02,
            fallback_bounds: DEFAULT_CONTENT_BOUNDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::{FitConfig, MAX_SCALE, MIN_SCALE, clamp_scale};
    use crate::DeviceClass;

    #[test]
    fn clamp_scale_handles_extremes() {
        assert_eq!(clamp_scale(0.0), MIN_SCALE);
        assert_eq!(clamp_scale(1e9), MAX_SCALE);
        assert_eq!(clamp_scale(f64::INFINITY), MAX_SCALE);
        assert_eq!(clamp_scale(f64::NAN), MIN_SCALE);
        assert_eq!(clamp_scale(1.5), 1.5);
    }

    #[test]
    fn content_to_layer_applies_offset_then_scale() {
        let cfg = FitConfig::default();
        let r = cfg.content_to_layer(Rect::new(0.0, 0.0, 100.0, 200.0));
        assert_eq!(r.x0, 120.0);
        assert_eq!(r.y0, 100.0);
        assert!((r.width() - 135.0).abs() < 1e-9);
        assert!((r.height() - 270.0).abs() < 1e-9);
    }

    #[test]
    fn compact_windows_get_the_larger_multiplier() {
        let cfg = FitConfig::default();
        assert!(cfg.multiplier(DeviceClass::Compact) > cfg.multiplier(DeviceClass::Desktop));
    }
}
