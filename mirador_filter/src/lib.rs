// Copyright 2025 the Mirador Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mirador Filter: which diagram overlays are shown.
//!
//! A diagram carries two independent families of overlays:
//! - **Flows** ([`FlowId`]): groups of connectors and labels.
//! - **Loops** ([`LoopId`]): feedback-cycle overlays.
//!
//! [`FilterState`] tracks which are active, defaulting to `main` only. It is
//! seeded from a link's query string ([`StartupQuery`]), serializes back to
//! one ([`FilterState::to_query`]), and pushes visibility to the page through
//! an [`OverlaySink`]. The [`export`] module carries the same vocabulary to
//! the static SVG exporter.
//!
//! ```rust
//! use mirador_filter::{FilterState, FlowId, LoopId};
//!
//! let mut filters = FilterState::new();
//! let query = filters.apply_from_query("?flows=fiscal,ide&loops=r2");
//!
//! assert!(!filters.is_flow_active(FlowId::Main));
//! assert!(filters.is_flow_active(FlowId::Fiscal));
//! assert!(filters.is_loop_active(LoopId::R2));
//! assert_eq!(query.forced_collapse(), None);
//!
//! assert_eq!(filters.to_query(), "flows=ide,fiscal&loops=r2");
//! ```

mod error;
pub mod export;
mod ids;
mod query;
mod state;

pub use error::{OverlayKind, UnknownOverlay};
pub use ids::{FlowId, FlowSet, LoopId, LoopSet, OverlayId};
pub use query::{PanelDirective, StartupQuery, parse_flow_list, parse_loop_list};
pub use state::{FilterState, OverlaySink, ToggleButton};
