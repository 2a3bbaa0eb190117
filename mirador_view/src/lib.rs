// Copyright 2025 the Mirador Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mirador View: the pan/zoom transform of a diagram viewport.
//!
//! This crate provides a small, headless model of a zoomable diagram view:
//! - [`TransformState`]: the single owner of scale and pan, with
//!   anchor-preserving zoom, clamping to [`MIN_SCALE`]..=[`MAX_SCALE`], and
//!   fitting measured content into the viewport.
//! - [`compute_bounds`]: the occupied rectangle of the diagram content,
//!   aggregated over vector children ([`IntrinsicGeometry`]) and box-model
//!   children ([`LayoutGeometry`]).
//! - [`RenderSink`]: the seam through which a binding layer receives the CSS
//!   transform string and zoom readouts.
//!
//! It does **not** own a scene or rendering backend, and it never reads input
//! events. Gesture interpretation lives in `mirador_gesture` and the `mirador`
//! engine.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use mirador_view::{
//!     ContentChild, DeviceClass, FitConfig, IntrinsicGeometry, TransformState, compute_bounds,
//! };
//!
//! let mut view = TransformState::new(Size::new(1280.0, 720.0), FitConfig::default());
//!
//! let content = [ContentChild::from(IntrinsicGeometry::new(Rect::new(
//!     0.0, 0.0, 2400.0, 1800.0,
//! )))];
//! let bounds = compute_bounds(&content, view.fit_config().fallback_bounds);
//! view.fit_to_view(bounds, DeviceClass::Desktop);
//!
//! // Wheel zoom toward the cursor keeps the content under it in place.
//! let cursor = Point::new(300.0, 200.0);
//! let before = view.view_to_content(cursor);
//! view.zoom_to_point(cursor, 1.2);
//! let after = view.view_to_content(cursor);
//! assert!((before - after).hypot() < 1e-9);
//!
//! assert!(view.projection().zoom_text.ends_with('%'));
//! ```
//!
//! ## Coordinate spaces
//!
//! - **Content space** is the coordinate system of the transformed layer.
//!   Content-root children are placed into it by [`FitConfig::content_to_layer`].
//! - **Viewport space** is pixels relative to the viewport's top-left corner.
//!
//! A content point `c` is shown at `pan + c * scale`.

mod bounds;
mod config;
mod modes;
mod transform;

pub use bounds::{ContentChild, IntrinsicGeometry, LayoutGeometry, Measure, compute_bounds};
pub use config::{DEFAULT_CONTENT_BOUNDS, FitConfig, MAX_SCALE, MIN_SCALE, clamp_scale};
pub use modes::DeviceClass;
pub use transform::{Projection, RenderSink, TransformState, ViewportState};
