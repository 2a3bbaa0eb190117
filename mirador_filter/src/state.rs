// Copyright 2025 the Mirador Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::ids::{FlowId, FlowSet, LoopId, LoopSet, OverlayId};
use crate::query::StartupQuery;

/// Presentation of a legend toggle button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleButton {
    /// Whether the overlay is shown.
    pub active: bool,
}

impl ToggleButton {
    /// Button caption.
    #[must_use]
    pub fn label(self) -> &'static str {
        if self.active { "ON" } else { "OFF" }
    }

    /// Value of the `aria-pressed` attribute.
    #[must_use]
    pub fn aria_pressed(self) -> &'static str {
        if self.active { "true" } else { "false" }
    }
}

/// Receives overlay visibility from a [`FilterState`].
pub trait OverlaySink {
    /// Adds (`true`) or removes (`false`) the suppressed class on every
    /// element of `overlay`.
    fn set_suppressed(&mut self, overlay: OverlayId, suppressed: bool);

    /// Updates the legend button of `overlay`.
    fn set_toggle_button(&mut self, overlay: OverlayId, button: ToggleButton);
}

/// Which flows and loops are shown.
///
/// The default state has [`FlowId::Main`] active and every other overlay
/// inactive. The state is orthogonal to the viewport transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterState {
    flows: FlowSet,
    loops: LoopSet,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            flows: FlowSet::MAIN,
            loops: LoopSet::empty(),
        }
    }
}

impl FilterState {
    /// Creates the default state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state with exactly the given sets active.
    #[must_use]
    pub fn with_active(flows: FlowSet, loops: LoopSet) -> Self {
        Self { flows, loops }
    }

    /// Active flows.
    #[must_use]
    pub fn flows(&self) -> FlowSet {
        self.flows
    }

    /// Active loops.
    #[must_use]
    pub fn loops(&self) -> LoopSet {
        self.loops
    }

    /// Whether `id` is shown.
    #[must_use]
    pub fn is_flow_active(&self, id: FlowId) -> bool {
        self.flows.contains(id.flag())
    }

    /// Whether `id` is shown.
    #[must_use]
    pub fn is_loop_active(&self, id: LoopId) -> bool {
        self.loops.contains(id.flag())
    }

    /// Whether `overlay` is shown.
    #[must_use]
    pub fn is_active(&self, overlay: OverlayId) -> bool {
        match overlay {
            OverlayId::Flow(id) => self.is_flow_active(id),
            OverlayId::Loop(id) => self.is_loop_active(id),
        }
    }

    /// Active flows in canonical order.
    pub fn active_flows(&self) -> impl Iterator<Item = FlowId> {
        self.flows.ids()
    }

    /// Active loops in canonical order.
    pub fn active_loops(&self) -> impl Iterator<Item = LoopId> {
        self.loops.ids()
    }

    /// Shows or hides a flow. Returns `true` if the state changed.
    pub fn set_flow(&mut self, id: FlowId, active: bool) -> bool {
        let before = self.flows;
        self.flows.set(id.flag(), active);
        before != self.flows
    }

    /// Shows or hides a loop. Returns `true` if the state changed.
    pub fn set_loop(&mut self, id: LoopId, active: bool) -> bool {
        let before = self.loops;
        self.loops.set(id.flag(), active);
        before != self.loops
    }

    /// Flips a flow, returning its new state.
    pub fn toggle_flow(&mut self, id: FlowId) -> bool {
        self.flows.toggle(id.flag());
        self.is_flow_active(id)
    }

    /// Flips a loop, returning its new state.
    pub fn toggle_loop(&mut self, id: LoopId) -> bool {
        self.loops.toggle(id.flag());
        self.is_loop_active(id)
    }

    /// Restores the default: `main` only, no loops.
    pub fn reset_filters(&mut self) {
        *self = Self::default();
    }

    /// Applies the overlay lists of a parsed query.
    ///
    /// A present list replaces the corresponding set outright, so ids not
    /// listed become inactive; an absent list leaves the set untouched.
    pub fn apply_query(&mut self, query: &StartupQuery) {
        if let Some(flows) = query.flows {
            self.flows = flows;
        }
        if let Some(loops) = query.loops {
            self.loops = loops;
        }
    }

    /// Parses `query`, applies its overlay lists and returns the parsed
    /// query so the caller can act on the export and panel directives.
    pub fn apply_from_query(&mut self, query: &str) -> StartupQuery {
        let parsed = StartupQuery::parse(query);
        self.apply_query(&parsed);
        tracing::debug!(
            flows = ?self.flows,
            loops = ?self.loops,
            export_mode = parsed.export_mode,
            panel = ?parsed.panel,
            "applied startup query"
        );
        parsed
    }

    /// Serializes the active sets as `flows=a,b&loops=c`.
    ///
    /// `loops` is omitted when empty. An empty flow set is written as
    /// `flows=none`, which selects no recognized flow when parsed back.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut out = String::from("flows=");
        if self.flows.is_empty() {
            out.push_str("none");
        } else {
            push_list(&mut out, self.active_flows().map(FlowId::as_str));
        }
        if !self.loops.is_empty() {
            out.push_str("&loops=");
            push_list(&mut out, self.active_loops().map(LoopId::as_str));
        }
        out
    }

    /// Pushes every overlay's suppressed class and button state to `sink`.
    pub fn apply_to<S: OverlaySink + ?Sized>(&self, sink: &mut S) {
        for overlay in OverlayId::all() {
            let active = self.is_active(overlay);
            sink.set_toggle_button(overlay, ToggleButton { active });
            sink.set_suppressed(overlay, !active);
        }
    }
}

fn push_list<'a>(out: &mut String, items: impl Iterator<Item = &'a str>) {
    for (i, item) in items.enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(item);
    }
}
