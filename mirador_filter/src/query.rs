// Copyright 2025 the Mirador Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Startup query: the `?export=1&flows=a,b&loops=c&panel=off` link format.
//!
//! Recognized keys:
//! - `export`: `1` turns on export mode.
//! - `mode`: `export` turns on export mode.
//! - `flows`: comma list of flow ids.
//! - `loops`: comma list of loop ids.
//! - `panel`: `off`/`0`/`false` collapses the side panel, `on`/`1`/`true`
//!   expands it.
//!
//! Values are matched case-insensitively and list items are trimmed.
//! Unknown keys and unknown ids are ignored. When a key repeats, its first
//! occurrence wins.

use std::borrow::Cow;

use crate::ids::{FlowId, FlowSet, LoopId, LoopSet};

/// What the query says about the side panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PanelDirective {
    /// No directive: collapse follows the window width class.
    #[default]
    Auto,
    /// Force the panel collapsed.
    Collapsed,
    /// Force the panel expanded.
    Expanded,
}

impl PanelDirective {
    /// Parses a `panel` value. Unrecognized values mean [`PanelDirective::Auto`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "off" | "0" | "false" => Self::Collapsed,
            "on" | "1" | "true" => Self::Expanded,
            _ => Self::Auto,
        }
    }
}

/// A parsed startup query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StartupQuery {
    /// Whether the page renders for export (no chrome, panel collapsed).
    pub export_mode: bool,
    /// Flows to show, or `None` when the query has no (or an empty) `flows`.
    pub flows: Option<FlowSet>,
    /// Loops to show, or `None` when the query has no (or an empty) `loops`.
    pub loops: Option<LoopSet>,
    /// Panel directive.
    pub panel: PanelDirective,
}

impl StartupQuery {
    /// Parses a query string, with or without its leading `?`.
    ///
    /// Keys and values are percent- and `+`-decoded the way URL search
    /// parameters are.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        let mut export: Option<Cow<'_, str>> = None;
        let mut mode: Option<Cow<'_, str>> = None;
        let mut flows: Option<Cow<'_, str>> = None;
        let mut loops: Option<Cow<'_, str>> = None;
        let mut panel: Option<Cow<'_, str>> = None;

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "export" => &mut export,
                "mode" => &mut mode,
                "flows" => &mut flows,
                "loops" => &mut loops,
                "panel" => &mut panel,
                other => {
                    tracing::trace!(key = other, "ignoring unknown query key");
                    continue;
                }
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        let export_mode = export.is_some_and(|v| v.trim() == "1")
            || mode.is_some_and(|v| v.trim().eq_ignore_ascii_case("export"));

        Self {
            export_mode,
            flows: flows
                .filter(|v| !v.is_empty())
                .map(|v| parse_flow_list(&v)),
            loops: loops
                .filter(|v| !v.is_empty())
                .map(|v| parse_loop_list(&v)),
            panel: panel
                .map(|v| PanelDirective::parse(&v))
                .unwrap_or_default(),
        }
    }

    /// The forced collapse state, if any.
    ///
    /// Export mode always collapses the panel; otherwise the `panel`
    /// directive decides, and `None` means "follow the window width class".
    #[must_use]
    pub fn forced_collapse(&self) -> Option<bool> {
        if self.export_mode {
            return Some(true);
        }
        match self.panel {
            PanelDirective::Auto => None,
            PanelDirective::Collapsed => Some(true),
            PanelDirective::Expanded => Some(false),
        }
    }
}

/// Parses a comma list of flow ids, ignoring blanks and unknown ids.
#[must_use]
pub fn parse_flow_list(list: &str) -> FlowSet {
    list_items(list)
        .filter_map(|item| match item.parse::<FlowId>() {
            Ok(id) => Some(id),
            Err(err) => {
                tracing::trace!(%err, "ignoring flow");
                None
            }
        })
        .collect()
}

/// Parses a comma list of loop ids, ignoring blanks and unknown ids.
#[must_use]
pub fn parse_loop_list(list: &str) -> LoopSet {
    list_items(list)
        .filter_map(|item| match item.parse::<LoopId>() {
            Ok(id) => Some(id),
            Err(err) => {
                tracing::trace!(%err, "ignoring loop");
                None
            }
        })
        .collect()
}

fn list_items(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty())
}
