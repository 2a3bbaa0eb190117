// Copyright 2025 the Mirador Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale/pan state and the transform that owns it.

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::config::{FitConfig, clamp_scale};
use crate::modes::DeviceClass;

/// Scale and pan of the content layer.
///
/// A content point `c` is shown at viewport point `pan + c * scale`. The
/// scale is always inside `[MIN_SCALE, MAX_SCALE]`; the constructor clamps.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    scale: f64,
    pan: Vec2,
}

impl ViewportState {
    /// Creates a state, clamping `scale` into the allowed range.
    #[must_use]
    pub fn new(scale: f64, pan: Vec2) -> Self {
        Self {
            scale: clamp_scale(scale),
            pan,
        }
    }

    /// Current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current pan offset in viewport pixels.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Zoom readout as an integer percentage, `round(scale * 100)`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "scale is clamped to [0.04, 12], so the percentage fits comfortably in i32"
    )]
    pub fn zoom_percent(&self) -> i32 {
        (self.scale * 100.0).round() as i32
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pan: Vec2::ZERO,
        }
    }
}

/// Receives the projected transform of a [`TransformState`].
///
/// Implemented by the binding layer that owns the actual render target, zoom
/// readouts and zoom slider.
pub trait RenderSink {
    /// Applies a CSS transform string to the content layer.
    fn set_transform(&mut self, transform: &str);
    /// Writes the zoom text (for example `"135%"`) to every zoom readout.
    fn set_zoom_readouts(&mut self, text: &str);
    /// Moves the zoom slider to an integer percentage.
    fn set_zoom_slider(&mut self, percent: i32);
}

/// Value form of what [`TransformState::apply_transform`] pushes to a sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Projection {
    /// `translate(<x>px, <y>px) scale(<s>)`.
    pub transform: String,
    /// `<percent>%`.
    pub zoom_text: String,
    /// Slider position, the same rounded percentage as `zoom_text`.
    pub slider_value: i32,
}

impl Projection {
    /// Pushes this projection into `sink`.
    pub fn write_to<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        sink.set_transform(&self.transform);
        sink.set_zoom_readouts(&self.zoom_text);
        sink.set_zoom_slider(self.slider_value);
    }
}

/// Owner of the viewport transform.
///
/// `TransformState` is the single writer of [`ViewportState`]. It knows the
/// size of the viewport so that it can zoom around the center and fit
/// content, and it keeps the content↔viewport affine pair in sync with the
/// state.
#[derive(Clone, Debug)]
pub struct TransformState {
    state: ViewportState,
    viewport_size: Size,
    fit: FitConfig,
    content_to_view: Affine,
    view_to_content: Affine,
}

impl TransformState {
    /// Creates a transform for a viewport of `viewport_size` at scale `1.0`
    /// and zero pan.
    #[must_use]
    pub fn new(viewport_size: Size, fit: FitConfig) -> Self {
        let mut ts = Self {
            state: ViewportState::default(),
            viewport_size,
            fit,
            content_to_view: Affine::IDENTITY,
            view_to_content: Affine::IDENTITY,
        };
        ts.rebuild_transforms();
        ts
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    /// Current pan.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.state.pan
    }

    /// Fit parameters.
    #[must_use]
    pub fn fit_config(&self) -> &FitConfig {
        &self.fit
    }

    /// Size of the viewport in pixels.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    /// Updates the viewport size. Scale and pan are left untouched.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport_size = size;
    }

    /// Center of the viewport in viewport coordinates.
    #[must_use]
    pub fn viewport_center(&self) -> Point {
        Point::new(self.viewport_size.width / 2.0, self.viewport_size.height / 2.0)
    }

    /// Replaces the pan offset, used by drag gestures.
    pub fn pan_to(&mut self, pan: Vec2) {
        if !(pan.x.is_finite() && pan.y.is_finite()) || pan == self.state.pan {
            return;
        }
        self.state.pan = pan;
        self.rebuild_transforms();
    }

    /// Zooms by `factor` around the viewport center.
    pub fn zoom_by_factor(&mut self, factor: f64) {
        self.zoom_to_point(self.viewport_center(), factor);
    }

    /// Zooms by `factor` keeping the content under `anchor` (viewport
    /// coordinates) stationary.
    ///
    /// The resulting scale is clamped; a factor that is not finite is ignored.
    pub fn zoom_to_point(&mut self, anchor: Point, factor: f64) {
        if !factor.is_finite() {
            tracing::trace!(factor, "ignoring non-finite zoom factor");
            return;
        }
        self.set_scale_at(anchor, self.state.scale * factor);
    }

    /// Sets an absolute scale, anchored at the viewport center.
    ///
    /// This is what the zoom slider drives.
    pub fn set_scale_centered(&mut self, scale: f64) {
        self.set_scale_at(self.viewport_center(), scale);
    }

    /// Sets an absolute scale (clamped) keeping the content under `anchor`
    /// stationary.
    pub fn set_scale_at(&mut self, anchor: Point, scale: f64) {
        if !(anchor.x.is_finite() && anchor.y.is_finite()) {
            return;
        }
        let old = self.state.scale;
        let new = clamp_scale(scale);
        let ratio = new / old;
        let anchor = anchor.to_vec2();
        self.state.pan = anchor - (anchor - self.state.pan) * ratio;
        self.state.scale = new;
        self.rebuild_transforms();
        tracing::trace!(scale = new, pan_x = self.state.pan.x, pan_y = self.state.pan.y, "zoom");
    }

    /// Fits `bounds` (content-root coordinates) into the viewport and centers
    /// it.
    ///
    /// The bounds are placed into the layer through
    /// [`FitConfig::content_to_layer`], padded by the margin, fitted on both
    /// axes, multiplied by the window-class multiplier and clamped. The result
    /// depends only on the inputs, so repeated calls are idempotent.
    pub fn fit_to_view(&mut self, bounds: Rect, class: DeviceClass) {
        let bounds = if bounds.is_finite() {
            bounds
        } else {
            self.fit.fallback_bounds
        };
        let content = self.fit.content_to_layer(bounds);
        let fit_w = content.width() + self.fit.margin * 2.0;
        let fit_h = content.height() + self.fit.margin * 2.0;
        let vw = self.viewport_size.width;
        let vh = self.viewport_size.height;
        let fit_scale = (vw / fit_w).min(vh / fit_h);
        let scale = clamp_scale(fit_scale * self.fit.multiplier(class));

        let pan = Vec2::new(
            (vw - content.width() * scale) / 2.0 - content.x0 * scale,
            (vh - content.height() * scale) / 2.0 - content.y0 * scale,
        );
        self.state = ViewportState { scale, pan };
        self.rebuild_transforms();
        tracing::debug!(scale, pan_x = pan.x, pan_y = pan.y, ?class, "fit to view");
    }

    /// Converts a viewport point into content coordinates.
    #[must_use]
    pub fn view_to_content(&self, pt: Point) -> Point {
        self.view_to_content * pt
    }

    /// Converts a content point into viewport coordinates.
    #[must_use]
    pub fn content_to_view(&self, pt: Point) -> Point {
        self.content_to_view * pt
    }

    /// Content-space rectangle currently visible through the viewport.
    #[must_use]
    pub fn visible_content_rect(&self) -> Rect {
        let p0 = self.view_to_content(Point::ORIGIN);
        let p1 = self.view_to_content(Point::new(
            self.viewport_size.width,
            self.viewport_size.height,
        ));
        Rect::from_points(p0, p1)
    }

    /// Projects the state into render strings.
    #[must_use]
    pub fn projection(&self) -> Projection {
        let pct = self.state.zoom_percent();
        Projection {
            transform: format!(
                "translate({}px, {}px) scale({})",
                self.state.pan.x, self.state.pan.y, self.state.scale
            ),
            zoom_text: format!("{pct}%"),
            slider_value: pct,
        }
    }

    /// Pushes the current transform, zoom readouts and slider position to
    /// `sink`.
    pub fn apply_transform<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        self.projection().write_to(sink);
    }

    fn rebuild_transforms(&mut self) {
        self.content_to_view =
            Affine::translate(self.state.pan) * Affine::scale(self.state.scale);
        self.view_to_content = self.content_to_view.inverse();
    }
}
