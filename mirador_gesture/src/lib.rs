// Copyright 2025 the Mirador Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mirador Gesture: interaction state for a pannable, zoomable viewport.
//!
//! Each interaction keeps a little state between its start, its moves and
//! its end. This crate holds that state and turns raw positions into the
//! intent of the gesture, without touching the viewport itself:
//!
//! - [`drag`]: the pan that keeps a grabbed point under the pointer.
//! - [`pinch`]: per-move zoom factor and centroid of two contacts.
//! - [`PanelResizeDrag`]: the panel width requested by a splitter drag.
//! - [`GestureSession`]: the one interaction in progress, enforcing that a
//!   pan, a pinch and a splitter drag never run at once, and that releasing
//!   every contact always returns to [`GestureSession::Idle`].
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use mirador_gesture::{GestureOutput, GestureSession};
//!
//! let mut session = GestureSession::default();
//! session.pointer_down(Point::new(10.0, 10.0), 0, Vec2::ZERO);
//! let out = session.pointer_move(Point::new(14.0, 13.0));
//! assert_eq!(out, Some(GestureOutput::Pan(Vec2::new(4.0, 3.0))));
//!
//! session.end();
//! assert_eq!(session, GestureSession::Idle);
//! ```
//!
//! Sessions are ephemeral: nothing here is meant to be persisted.

pub mod drag;
pub mod pinch;
mod resize;
mod session;

pub use resize::PanelResizeDrag;
pub use session::{Contacts, GestureOutput, GestureSession, PRIMARY_BUTTON, PanDrag};
