// Copyright 2025 the Mirador Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Which vocabulary an overlay id belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    /// Connector/label flows.
    Flow,
    /// Feedback loops.
    Loop,
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Flow => "flow",
            Self::Loop => "loop",
        })
    }
}

/// An id that is not part of the flow or loop vocabulary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} id `{id}`")]
pub struct UnknownOverlay {
    /// Vocabulary the id was looked up in.
    pub kind: OverlayKind,
    /// The normalized (trimmed, lowercased) id.
    pub id: String,
}
