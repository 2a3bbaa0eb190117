// Copyright 2025 the Mirador Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use crate::error::{OverlayKind, UnknownOverlay};

/// A named category of connectors and labels that is shown or hidden as a
/// group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum FlowId {
    /// The principal flow; the only one active by default.
    Main,
    /// Feedback connectors.
    Feedback,
    /// Participation connectors.
    Participacion,
    /// Spatial-data infrastructure connectors.
    Ide,
    /// Fiscal connectors.
    Fiscal,
    /// Conditional connectors.
    Condicional,
}

impl FlowId {
    /// Every flow, in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Main,
        Self::Feedback,
        Self::Participacion,
        Self::Ide,
        Self::Fiscal,
        Self::Condicional,
    ];

    /// Class marking a flow element as hidden.
    pub const SUPPRESSED_CLASS: &'static str = "flow-off";

    /// The id as it appears in queries and class names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Feedback => "feedback",
            Self::Participacion => "participacion",
            Self::Ide => "ide",
            Self::Fiscal => "fiscal",
            Self::Condicional => "condicional",
        }
    }

    /// Class carried by every element of this flow, e.g. `flow-fiscal`.
    #[must_use]
    pub fn element_class(self) -> String {
        format!("flow-{}", self.as_str())
    }

    /// The single-bit set holding this flow.
    #[must_use]
    pub fn flag(self) -> FlowSet {
        match self {
            Self::Main => FlowSet::MAIN,
            Self::Feedback => FlowSet::FEEDBACK,
            Self::Participacion => FlowSet::PARTICIPACION,
            Self::Ide => FlowSet::IDE,
            Self::Fiscal => FlowSet::FISCAL,
            Self::Condicional => FlowSet::CONDICIONAL,
        }
    }
}

/// A named feedback-cycle overlay, toggled independently from flows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum LoopId {
    /// Reinforcing loop 1.
    R1,
    /// Reinforcing loop 2.
    R2,
    /// Reinforcing loop 3.
    R3,
    /// Balancing loop 1.
    B1,
}

impl LoopId {
    /// Every loop, in canonical order.
    pub const ALL: [Self; 4] = [Self::R1, Self::R2, Self::R3, Self::B1];

    /// Class marking a loop element as hidden.
    pub const SUPPRESSED_CLASS: &'static str = "loop-item-off";

    /// The id as it appears in queries and class names.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::R1 => "r1",
            Self::R2 => "r2",
            Self::R3 => "r3",
            Self::B1 => "b1",
        }
    }

    /// Class carried by every element of this loop, e.g. `loop-r2-el`.
    #[must_use]
    pub fn element_class(self) -> String {
        format!("loop-{}-el", self.as_str())
    }

    /// The single-bit set holding this loop.
    #[must_use]
    pub fn flag(self) -> LoopSet {
        match self {
            Self::R1 => LoopSet::R1,
            Self::R2 => LoopSet::R2,
            Self::R3 => LoopSet::R3,
            Self::B1 => LoopSet::B1,
        }
    }
}

/// Either kind of overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayId {
    /// A flow.
    Flow(FlowId),
    /// A loop.
    Loop(LoopId),
}

impl OverlayId {
    /// Class carried by the overlay's elements.
    #[must_use]
    pub fn element_class(self) -> String {
        match self {
            Self::Flow(id) => id.element_class(),
            Self::Loop(id) => id.element_class(),
        }
    }

    /// Class that hides the overlay's elements.
    #[must_use]
    pub fn suppressed_class(self) -> &'static str {
        match self {
            Self::Flow(_) => FlowId::SUPPRESSED_CLASS,
            Self::Loop(_) => LoopId::SUPPRESSED_CLASS,
        }
    }

    /// Every overlay: flows first, then loops.
    pub fn all() -> impl Iterator<Item = Self> {
        FlowId::ALL
            .into_iter()
            .map(Self::Flow)
            .chain(LoopId::ALL.into_iter().map(Self::Loop))
    }
}

impl From<FlowId> for OverlayId {
    fn from(id: FlowId) -> Self {
        Self::Flow(id)
    }
}

impl From<LoopId> for OverlayId {
    fn from(id: LoopId) -> Self {
        Self::Loop(id)
    }
}

bitflags::bitflags! {
    /// A set of flows.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct FlowSet: u8 {
        /// [`FlowId::Main`].
        const MAIN          = 0b0000_0001;
        /// [`FlowId::Feedback`].
        const FEEDBACK      = 0b0000_0010;
        /// [`FlowId::Participacion`].
        const PARTICIPACION = 0b0000_0100;
        /// [`FlowId::Ide`].
        const IDE           = 0b0000_1000;
        /// [`FlowId::Fiscal`].
        const FISCAL        = 0b0001_0000;
        /// [`FlowId::Condicional`].
        const CONDICIONAL   = 0b0010_0000;
    }
}

bitflags::bitflags! {
    /// A set of loops.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct LoopSet: u8 {
        /// [`LoopId::R1`].
        const R1 = 0b0001;
        /// [`LoopId::R2`].
        const R2 = 0b0010;
        /// [`LoopId::R3`].
        const R3 = 0b0100;
        /// [`LoopId::B1`].
        const B1 = 0b1000;
    }
}

impl FlowSet {
    /// Members in canonical order.
    pub fn ids(self) -> impl Iterator<Item = FlowId> {
        FlowId::ALL.into_iter().filter(move |id| self.contains(id.flag()))
    }
}

impl LoopSet {
    /// Members in canonical order.
    pub fn ids(self) -> impl Iterator<Item = LoopId> {
        LoopId::ALL.into_iter().filter(move |id| self.contains(id.flag()))
    }
}

impl FromIterator<FlowId> for FlowSet {
    fn from_iter<T: IntoIterator<Item = FlowId>>(iter: T) -> Self {
        iter.into_iter().fold(Self::empty(), |acc, id| acc | id.flag())
    }
}

impl FromIterator<LoopId> for LoopSet {
    fn from_iter<T: IntoIterator<Item = LoopId>>(iter: T) -> Self {
        iter.into_iter().fold(Self::empty(), |acc, id| acc | id.flag())
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_ascii_lowercase()
}

impl FromStr for FlowId {
    type Err = UnknownOverlay;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = normalize(s);
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == id)
            .ok_or(UnknownOverlay {
                kind: OverlayKind::Flow,
                id,
            })
    }
}

impl FromStr for LoopId {
    type Err = UnknownOverlay;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = normalize(s);
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == id)
            .ok_or(UnknownOverlay {
                kind: OverlayKind::Loop,
                id,
            })
    }
}

impl fmt::Display for FlowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LoopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flow(id) => write!(f, "flow:{id}"),
            Self::Loop(id) => write!(f, "loop:{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FlowId, FlowSet, LoopId, LoopSet, OverlayId};
    use crate::error::OverlayKind;

    #[test]
    fn parsing_is_case_insensitive_and_trims() {
        assert_eq!(" Fiscal ".parse::<FlowId>(), Ok(FlowId::Fiscal));
        assert_eq!("R2".parse::<LoopId>(), Ok(LoopId::R2));
    }

    #[test]
    fn unknown_ids_report_their_vocabulary() {
        let err = "r9".parse::<LoopId>().unwrap_err();
        assert_eq!(err.kind, OverlayKind::Loop);
        assert_eq!(err.to_string(), "unknown loop id `r9`");

        // Loop ids are not flows.
        assert!("r1".parse::<FlowId>().is_err());
    }

    #[test]
    fn class_vocabulary() {
        assert_eq!(FlowId::Ide.element_class(), "flow-ide");
        assert_eq!(LoopId::B1.element_class(), "loop-b1-el");
        assert_eq!(OverlayId::Flow(FlowId::Main).suppressed_class(), "flow-off");
        assert_eq!(OverlayId::Loop(LoopId::R3).suppressed_class(), "loop-item-off");
    }

    #[test]
    fn sets_iterate_in_canonical_order() {
        let flows: FlowSet = [FlowId::Fiscal, FlowId::Main, FlowId::Ide].into_iter().collect();
        assert_eq!(
            flows.ids().collect::<Vec<_>>(),
            [FlowId::Main, FlowId::Ide, FlowId::Fiscal]
        );
        let loops: LoopSet = [LoopId::B1, LoopId::R1].into_iter().collect();
        assert_eq!(loops.ids().collect::<Vec<_>>(), [LoopId::R1, LoopId::B1]);
    }

    #[test]
    fn every_overlay_is_listed_once() {
        assert_eq!(OverlayId::all().count(), 10);
        assert_eq!(OverlayId::all().next(), Some(OverlayId::Flow(FlowId::Main)));
    }
}
