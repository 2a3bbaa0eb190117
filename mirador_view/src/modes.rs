// Copyright 2025 the Mirador Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Width class of the hosting window.
///
/// The class selects the fit multiplier used by
/// [`crate::TransformState::fit_to_view`] and, one layer up, whether the side
/// panel starts collapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceClass {
    /// A narrow window (phones, small tablets, split screens).
    Compact,
    /// Anything wider than the compact breakpoint.
    #[default]
    Desktop,
}

impl DeviceClass {
    /// Window width, in pixels, at or below which a window is [`DeviceClass::Compact`].
    pub const COMPACT_BREAKPOINT: f64 = 1024.0;

    /// Classifies a window width against [`DeviceClass::COMPACT_BREAKPOINT`].
    #[must_use]
    pub fn from_width(window_width: f64) -> Self {
        Self::from_width_with_breakpoint(window_width, Self::COMPACT_BREAKPOINT)
    }

    /// Classifies a window width against a custom breakpoint.
    ///
    /// The breakpoint is inclusive, matching a `max-width` media query.
    #[must_use]
    pub fn from_width_with_breakpoint(window_width: f64, breakpoint: f64) -> Self {
        if window_width <= breakpoint {
            Self::Compact
        } else {
            Self::Desktop
        }
    }

    /// Returns `true` for [`DeviceClass::Compact`].
    #[must_use]
    pub fn is_compact(self) -> bool {
        self == Self::Compact
    }
}

#[cfg(test)]
mod tests {
    use super::DeviceClass;

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(DeviceClass::from_width(1024.0), DeviceClass::Compact);
        assert_eq!(DeviceClass::from_width(1024.5), DeviceClass::Desktop);
        assert_eq!(DeviceClass::from_width(320.0), DeviceClass::Compact);
        assert!(DeviceClass::from_width(800.0).is_compact());
    }
}
