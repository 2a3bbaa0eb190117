// Copyright 2025 the Mirador Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Content bounds over heterogeneous geometry sources.
//!
//! Diagram content mixes vector elements, which report an intrinsic bounding
//! box that ignores the current zoom, with box-model elements, which report a
//! layout-assigned offset and size. Both implement [`Measure`], and
//! [`compute_bounds`] unions whatever they report without caring which kind
//! each child is.

use kurbo::{Point, Rect, Size};

/// Something that can report its extent in content coordinates.
pub trait Measure {
    /// Returns the occupied rectangle, or `None` when the child contributes
    /// nothing (measurement failed, or the child has no extent).
    fn measure(&self) -> Option<Rect>;
}

/// Geometry of a vector element, as reported by its intrinsic bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntrinsicGeometry {
    /// The bounding box, or `None` if the element could not report one.
    pub bbox: Option<Rect>,
}

impl IntrinsicGeometry {
    /// Geometry with a known bounding box.
    #[must_use]
    pub fn new(bbox: Rect) -> Self {
        Self { bbox: Some(bbox) }
    }

    /// Geometry whose measurement failed.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { bbox: None }
    }
}

impl Measure for IntrinsicGeometry {
    fn measure(&self) -> Option<Rect> {
        // Vector boxes only count when they have area.
        self.bbox
            .filter(|b| b.width() > 0.0 && b.height() > 0.0 && b.is_finite())
    }
}

/// Geometry of a box-model element, as assigned by layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutGeometry {
    /// Offset of the element inside the content root.
    pub offset: Point,
    /// Laid-out size of the element.
    pub size: Size,
}

impl LayoutGeometry {
    /// Creates layout geometry from an offset and a size.
    #[must_use]
    pub fn new(offset: Point, size: Size) -> Self {
        Self { offset, size }
    }
}

impl Measure for LayoutGeometry {
    fn measure(&self) -> Option<Rect> {
        if self.size.width <= 0.0 && self.size.height <= 0.0 {
            return None;
        }
        let rect = Rect::from_origin_size(self.offset, self.size);
        rect.is_finite().then_some(rect)
    }
}

/// A direct child of the content root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContentChild {
    /// A vector-graphic child.
    Intrinsic(IntrinsicGeometry),
    /// A box-model child.
    Layout(LayoutGeometry),
}

impl Measure for ContentChild {
    fn measure(&self) -> Option<Rect> {
        match self {
            Self::Intrinsic(g) => g.measure(),
            Self::Layout(g) => g.measure(),
        }
    }
}

impl From<IntrinsicGeometry> for ContentChild {
    fn from(g: IntrinsicGeometry) -> Self {
        Self::Intrinsic(g)
    }
}

impl From<LayoutGeometry> for ContentChild {
    fn from(g: LayoutGeometry) -> Self {
        Self::Layout(g)
    }
}

/// Unions the extents of `children`, falling back to `fallback` when no child
/// contributes a finite rectangle.
///
/// The result is always finite as long as `fallback` is.
#[must_use]
pub fn compute_bounds<'a, M, I>(children: I, fallback: Rect) -> Rect
where
    M: Measure + ?Sized + 'a,
    I: IntoIterator<Item = &'a M>,
{
    children
        .into_iter()
        .filter_map(|child| child.measure())
        .reduce(|acc, r| acc.union(r))
        .filter(Rect::is_finite)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::{ContentChild, IntrinsicGeometry, LayoutGeometry, Measure, compute_bounds};
    use crate::DEFAULT_CONTENT_BOUNDS;

    #[test]
    fn empty_content_uses_fallback() {
        let none: [ContentChild; 0] = [];
        assert_eq!(compute_bounds(&none, DEFAULT_CONTENT_BOUNDS), DEFAULT_CONTENT_BOUNDS);
    }

    #[test]
    fn failed_and_empty_children_use_fallback() {
        let children = [
            ContentChild::Intrinsic(IntrinsicGeometry::unavailable()),
            ContentChild::Intrinsic(IntrinsicGeometry::new(Rect::new(10.0, 10.0, 10.0, 50.0))),
            ContentChild::Layout(LayoutGeometry::new(Point::new(5.0, 5.0), Size::ZERO)),
        ];
        let b = compute_bounds(&children, DEFAULT_CONTENT_BOUNDS);
        assert_eq!(b, DEFAULT_CONTENT_BOUNDS);
        assert!(b.is_finite());
    }

    #[test]
    fn union_spans_both_geometry_kinds() {
        let children = [
            ContentChild::Intrinsic(IntrinsicGeometry::new(Rect::new(-20.0, 0.0, 100.0, 40.0))),
            ContentChild::Layout(LayoutGeometry::new(
                Point::new(300.0, 500.0),
                Size::new(200.0, 80.0),
            )),
        ];
        let b = compute_bounds(&children, DEFAULT_CONTENT_BOUNDS);
        assert_eq!(b, Rect::new(-20.0, 0.0, 500.0, 580.0));
    }

    #[test]
    fn layout_child_with_one_zero_axis_still_counts() {
        // A horizontal rule: zero height, but it occupies width.
        let rule = LayoutGeometry::new(Point::new(0.0, 900.0), Size::new(1200.0, 0.0));
        assert_eq!(rule.measure(), Some(Rect::new(0.0, 900.0, 1200.0, 900.0)));

        // Vector geometry needs area on both axes.
        let line = IntrinsicGeometry::new(Rect::new(0.0, 900.0, 1200.0, 900.0));
        assert_eq!(line.measure(), None);
    }

    #[test]
    fn non_finite_measurements_are_skipped() {
        let children = [
            ContentChild::Intrinsic(IntrinsicGeometry::new(Rect::new(
                0.0,
                0.0,
                f64::INFINITY,
                10.0,
            ))),
            ContentChild::Layout(LayoutGeometry::new(
                Point::new(f64::NAN, 0.0),
                Size::new(10.0, 10.0),
            )),
            ContentChild::Layout(LayoutGeometry::new(
                Point::new(1.0, 2.0),
                Size::new(3.0, 4.0),
            )),
        ];
        assert_eq!(
            compute_bounds(&children, DEFAULT_CONTENT_BOUNDS),
            Rect::new(1.0, 2.0, 4.0, 6.0)
        );
    }

    #[test]
    fn aggregator_accepts_trait_objects() {
        let a = IntrinsicGeometry::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        let b = LayoutGeometry::new(Point::new(20.0, 20.0), Size::new(5.0, 5.0));
        let children: [&dyn Measure; 2] = [&a, &b];
        let b = compute_bounds(children, DEFAULT_CONTENT_BOUNDS);
        assert_eq!(b, Rect::new(0.0, 0.0, 25.0, 25.0));
    }
}
