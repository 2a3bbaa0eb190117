// Copyright 2025 the Mirador Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay vocabulary shared with the static vector exporter.
//!
//! The exporter turns the diagram into a standalone SVG document. A link
//! carrying `?flows=...&loops=...` must produce the same visible overlays
//! whether it is rendered interactively or exported, so the exporter reads
//! its selection through [`ExportSelection`] and emits the root classes and
//! hiding rules produced here.

use core::fmt::Write as _;

use crate::ids::{FlowId, FlowSet, LoopId, LoopSet};
use crate::query::{parse_flow_list, parse_loop_list};
use crate::state::FilterState;

/// Flow list the exporter uses when `--flows` is not given.
pub const DEFAULT_EXPORT_FLOWS: &str = "main";

/// Overlays selected for a static export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExportSelection {
    /// Flows drawn in the export.
    pub flows: FlowSet,
    /// Loops drawn in the export.
    pub loops: LoopSet,
}

impl Default for ExportSelection {
    fn default() -> Self {
        Self::from(&FilterState::default())
    }
}

impl From<&FilterState> for ExportSelection {
    fn from(state: &FilterState) -> Self {
        Self {
            flows: state.flows(),
            loops: state.loops(),
        }
    }
}

impl ExportSelection {
    /// Builds a selection from the exporter's `--flows` and `--loops`
    /// arguments. A missing `--flows` means [`DEFAULT_EXPORT_FLOWS`]; a
    /// missing `--loops` means none.
    #[must_use]
    pub fn from_args(flows: Option<&str>, loops: Option<&str>) -> Self {
        Self {
            flows: parse_flow_list(flows.unwrap_or(DEFAULT_EXPORT_FLOWS)),
            loops: parse_loop_list(loops.unwrap_or_default()),
        }
    }

    /// Classes for the export's root element: `show-<flow>` for each active
    /// flow, then `show-loop-<loop>` for each active loop.
    #[must_use]
    pub fn root_classes(&self) -> String {
        let flows = self.flows.ids().map(|f| format!("show-{f}"));
        let loops = self.loops.ids().map(|l| format!("show-loop-{l}"));
        flows.chain(loops).collect::<Vec<_>>().join(" ")
    }

    /// Style rules hiding every inactive overlay, one rule per line.
    #[must_use]
    pub fn hidden_css(&self) -> String {
        let mut css = String::new();
        for flow in FlowId::ALL {
            if !self.flows.contains(flow.flag()) {
                let _ = writeln!(
                    css,
                    "svg:not(.show-{flow}) .{}{{display:none !important;}}",
                    flow.element_class()
                );
            }
        }
        for lp in LoopId::ALL {
            if !self.loops.contains(lp.flag()) {
                let _ = writeln!(
                    css,
                    "svg:not(.show-loop-{lp}) .{}{{display:none !important;}}",
                    lp.element_class()
                );
            }
        }
        css
    }

    /// The filter state equivalent to this selection.
    #[must_use]
    pub fn to_filter_state(&self) -> FilterState {
        FilterState::with_active(self.flows, self.loops)
    }
}

#[cfg(test)]
mod tests {
    use super::ExportSelection;
    use crate::ids::{FlowSet, LoopSet};
    use crate::state::FilterState;

    #[test]
    fn defaults_match_the_interactive_default() {
        assert_eq!(ExportSelection::from_args(None, None), ExportSelection::default());
        assert_eq!(
            ExportSelection::default().to_filter_state(),
            FilterState::default()
        );
    }

    #[test]
    fn root_classes_follow_canonical_order() {
        let sel = ExportSelection::from_args(Some("fiscal, main"), Some("b1,R1"));
        assert_eq!(sel.root_classes(), "show-main show-fiscal show-loop-r1 show-loop-b1");
    }

    #[test]
    fn hidden_css_lists_only_inactive_overlays() {
        let sel = ExportSelection {
            flows: FlowSet::all() - FlowSet::IDE,
            loops: LoopSet::all() - LoopSet::R3,
        };
        assert_eq!(
            sel.hidden_css(),
            "svg:not(.show-ide) .flow-ide{display:none !important;}\n\
             svg:not(.show-loop-r3) .loop-r3-el{display:none !important;}\n"
        );
    }

    #[test]
    fn empty_flow_argument_hides_every_flow() {
        let sel = ExportSelection::from_args(Some(""), None);
        assert_eq!(sel.flows, FlowSet::empty());
        assert_eq!(sel.hidden_css().lines().count(), 10);
        assert_eq!(sel.root_classes(), "");
    }
}
