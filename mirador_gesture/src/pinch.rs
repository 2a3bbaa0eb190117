// Copyright 2025 the Mirador Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch: a zoom factor and an anchor per move.
//!
//! The factor of each step is relative to the previous step, so applying the
//! steps in sequence composes to `current_distance / initial_distance`.

use kurbo::Point;

/// One step of a pinch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchStep {
    /// Scale factor relative to the previous step.
    pub factor: f64,
    /// Centroid of the two contacts, in viewport coordinates.
    pub anchor: Point,
}

/// Tracks the distance between two contacts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchState {
    /// Distance between the contacts at the previous step.
    pub last_distance: f64,
    /// Centroid at the previous step, in viewport coordinates.
    pub last_center: Option<Point>,
}

impl PinchState {
    /// Starts a pinch from two contacts given in client coordinates.
    ///
    /// `origin` is the client-space position of the viewport's top-left
    /// corner.
    #[must_use]
    pub fn start(a: Point, b: Point, origin: Point) -> Self {
        Self {
            last_distance: (a - b).hypot(),
            last_center: Some(centroid(a, b, origin)),
        }
    }

    /// Advances the pinch to new contact positions.
    ///
    /// Returns `None`, and records nothing, when either the reference or the
    /// new distance is zero or not finite. Contacts that meet therefore never
    /// collapse the zoom, and the pinch resumes once they separate.
    pub fn update(&mut self, a: Point, b: Point, origin: Point) -> Option<PinchStep> {
        if self.last_distance <= 0.0 || !self.last_distance.is_finite() {
            tracing::trace!("pinch without reference distance ignored");
            return None;
        }
        let distance = (a - b).hypot();
        if distance <= 0.0 || !distance.is_finite() {
            tracing::trace!("pinch with coincident contacts ignored");
            return None;
        }
        let factor = distance / self.last_distance;
        let anchor = centroid(a, b, origin);
        self.last_distance = distance;
        self.last_center = Some(anchor);
        Some(PinchStep { factor, anchor })
    }
}

fn centroid(a: Point, b: Point, origin: Point) -> Point {
    a.midpoint(b) - origin.to_vec2()
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::PinchState;

    #[test]
    fn spreading_fingers_zooms_in_around_centroid() {
        let origin = Point::new(10.0, 20.0);
        let mut pinch = PinchState::start(Point::new(100.0, 100.0), Point::new(200.0, 100.0), origin);
        assert_eq!(pinch.last_distance, 100.0);
        assert_eq!(pinch.last_center, Some(Point::new(140.0, 80.0)));

        let step = pinch
            .update(Point::new(50.0, 100.0), Point::new(250.0, 100.0), origin)
            .unwrap();
        assert_eq!(step.factor, 2.0);
        assert_eq!(step.anchor, Point::new(140.0, 80.0));
        assert_eq!(pinch.last_distance, 200.0);
    }

    #[test]
    fn steps_compose_to_total_ratio() {
        let o = Point::ORIGIN;
        let mut pinch = PinchState::start(Point::new(0.0, 0.0), Point::new(10.0, 0.0), o);
        let s1 = pinch.update(Point::new(0.0, 0.0), Point::new(20.0, 0.0), o).unwrap();
        let s2 = pinch.update(Point::new(0.0, 0.0), Point::new(15.0, 0.0), o).unwrap();
        assert!((s1.factor * s2.factor - 1.5).abs() < 1e-12);
    }

    #[test]
    fn zero_reference_distance_is_a_no_op() {
        let o = Point::ORIGIN;
        let mut pinch = PinchState::start(Point::new(5.0, 5.0), Point::new(5.0, 5.0), o);
        assert_eq!(pinch.update(Point::new(0.0, 0.0), Point::new(9.0, 0.0), o), None);
        assert_eq!(pinch.last_distance, 0.0);

        let mut idle = PinchState::default();
        assert_eq!(idle.update(Point::new(0.0, 0.0), Point::new(9.0, 0.0), o), None);
    }

    #[test]
    fn coincident_contacts_skip_the_step() {
        let o = Point::ORIGIN;
        let mut pinch = PinchState::start(Point::new(0.0, 0.0), Point::new(40.0, 0.0), o);
        assert_eq!(pinch.update(Point::new(20.0, 0.0), Point::new(20.0, 0.0), o), None);
        assert_eq!(pinch.last_distance, 40.0);

        let step = pinch
            .update(Point::new(0.0, 0.0), Point::new(80.0, 0.0), o)
            .unwrap();
        assert_eq!(step.factor, 2.0);
    }
}
