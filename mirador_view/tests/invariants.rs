// Copyright 2025 the Mirador Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the transform invariants: anchored zoom, hard clamps
//! and fit idempotence.

use kurbo::{Point, Rect, Size, Vec2};
use mirador_view::{
    ContentChild, DeviceClass, FitConfig, IntrinsicGeometry, LayoutGeometry, MAX_SCALE,
    MIN_SCALE, TransformState, compute_bounds,
};
use proptest::prelude::*;

fn view_at(scale: f64, pan: Vec2) -> TransformState {
    let mut t = TransformState::new(Size::new(1024.0, 768.0), FitConfig::default());
    t.pan_to(pan);
    t.set_scale_at(Point::ORIGIN, scale);
    t
}

proptest! {
    #[test]
    fn zoom_to_point_preserves_anchor(
        scale in 0.1_f64..5.0,
        pan_x in -2000.0_f64..2000.0,
        pan_y in -2000.0_f64..2000.0,
        px in 0.0_f64..1024.0,
        py in 0.0_f64..768.0,
        factor in 0.5_f64..2.0,
    ) {
        let mut t = view_at(scale, Vec2::new(pan_x, pan_y));
        prop_assume!(t.scale() * factor >= MIN_SCALE && t.scale() * factor <= MAX_SCALE);
        let anchor = Point::new(px, py);
        let before = t.view_to_content(anchor);
        t.zoom_to_point(anchor, factor);
        let after = t.view_to_content(anchor);
        let tol = 1e-6 * (1.0 + before.to_vec2().hypot());
        prop_assert!((before - after).hypot() < tol, "{before:?} vs {after:?}");
    }

    #[test]
    fn out_of_range_zoom_pins_to_bound(
        scale in 0.1_f64..5.0,
        big in 200.0_f64..1e6,
    ) {
        let mut t = view_at(scale, Vec2::ZERO);
        t.zoom_by_factor(big);
        prop_assert_eq!(t.scale(), MAX_SCALE);
        let pinned = t.state();
        t.zoom_by_factor(big);
        prop_assert_eq!(t.state(), pinned);

        t.zoom_by_factor(1.0 / big);
        t.zoom_by_factor(1.0 / big);
        prop_assert_eq!(t.scale(), MIN_SCALE);
        let pinned = t.state();
        t.zoom_by_factor(1.0 / big);
        prop_assert_eq!(t.state(), pinned);
    }

    #[test]
    fn fit_is_bit_identical_when_repeated(
        x in -500.0_f64..500.0,
        y in -500.0_f64..500.0,
        w in 1.0_f64..5000.0,
        h in 1.0_f64..5000.0,
        vw in 100.0_f64..3000.0,
        vh in 100.0_f64..2000.0,
        compact in any::<bool>(),
    ) {
        let class = if compact { DeviceClass::Compact } else { DeviceClass::Desktop };
        let mut t = TransformState::new(Size::new(vw, vh), FitConfig::default());
        t.zoom_by_factor(3.0);
        let bounds = Rect::new(x, y, x + w, y + h);
        t.fit_to_view(bounds, class);
        let first = t.state();
        t.fit_to_view(bounds, class);
        prop_assert_eq!(first.scale().to_bits(), t.scale().to_bits());
        prop_assert_eq!(first.pan().x.to_bits(), t.pan().x.to_bits());
        prop_assert_eq!(first.pan().y.to_bits(), t.pan().y.to_bits());
    }
}

#[test]
fn fully_hidden_content_falls_back_to_default_rect() {
    let hidden = [
        ContentChild::Intrinsic(IntrinsicGeometry::unavailable()),
        ContentChild::Layout(LayoutGeometry::new(Point::new(40.0, 40.0), Size::ZERO)),
    ];
    let fallback = FitConfig::default().fallback_bounds;
    let b = compute_bounds(&hidden, fallback);
    assert_eq!(b, fallback);
    assert!(b.x0.is_finite() && b.y0.is_finite() && b.x1.is_finite() && b.y1.is_finite());
}
