// Copyright 2025 the Mirador Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mirador: a headless engine for viewing one large diagram.
//!
//! The diagram is shown inside a pannable, zoomable viewport, with a
//! resizable side panel beside it and two families of toggleable overlays
//! (flows and feedback loops) drawn on top. This crate ties the building
//! blocks together:
//!
//! - `mirador_view`: the scale/pan transform and content bounds.
//! - `mirador_gesture`: drag, pinch and splitter sessions.
//! - `mirador_filter`: overlay toggles and the startup query.
//! - `mirador_layout`: the side panel.
//!
//! [`Engine`] owns all of that state. A thin binding layer feeds it
//! [`Event`]s and reads back what to render; the engine never touches a
//! rendering runtime itself.
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use mirador::{Changes, Engine, EngineConfig, Event, Metrics};
//! use mirador_view::{ContentChild, IntrinsicGeometry};
//!
//! let content = vec![ContentChild::from(IntrinsicGeometry::new(Rect::new(
//!     0.0, 0.0, 2400.0, 1800.0,
//! )))];
//! let mut engine = Engine::new(EngineConfig::default(), Metrics::fill(1440.0, 900.0), content);
//! engine.startup("?flows=main,fiscal&panel=on");
//!
//! // Drag the diagram 40px to the right.
//! let pan = engine.view().pan();
//! engine.handle(&Event::PointerDown { pos: Point::new(500.0, 400.0), button: 0 });
//! let changes = engine.handle(&Event::PointerMove { pos: Point::new(540.0, 400.0) });
//! engine.handle(&Event::PointerUp);
//!
//! assert_eq!(changes, Changes::TRANSFORM);
//! assert!((engine.view().pan().x - pan.x - 40.0).abs() < 1e-9);
//! ```
//!
//! ## Events and changes
//!
//! Every call to [`Engine::handle`] runs to completion and returns the
//! [`Changes`] it made. [`Engine::present`] pushes just those outputs to a
//! sink implementing both [`mirador_view::RenderSink`] and
//! [`mirador_filter::OverlaySink`].
//!
//! Releasing every contact (mouse up or touch end) always ends the current
//! gesture, whichever it was.

mod config;
mod engine;
mod event;

pub use config::{EngineConfig, ZOOM_STEP};
pub use engine::{Changes, Engine};
pub use event::{Event, Metrics};
