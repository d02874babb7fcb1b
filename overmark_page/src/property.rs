// Copyright 2025 the Overmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll properties exposed to the controller, and their errors.

use core::fmt;
use core::str::FromStr;

/// A scroll property of the page, read and written as whole pixels.
///
/// The plain properties address the document body. The `ScrollTarget*`
/// properties address the element that scrolls for the focused element
/// (see [`scroll_target`](crate::scroll_target)).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PageProperty {
    /// Vertical scroll position of the body.
    ScrollTop,
    /// Horizontal scroll position of the body.
    ScrollLeft,
    /// Scrollable height of the body. Read-only.
    ScrollHeight,
    /// Scrollable width of the body. Read-only.
    ScrollWidth,
    /// Vertical scroll position of the scroll target.
    ScrollTargetTop,
    /// Horizontal scroll position of the scroll target.
    ScrollTargetLeft,
    /// Scrollable height of the scroll target. Read-only.
    ScrollTargetHeight,
    /// Scrollable width of the scroll target. Read-only.
    ScrollTargetWidth,
}

/// Which element a property reads from.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Target {
    Body,
    ScrollTarget,
}

/// Which value of that element.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Metric {
    Top,
    Left,
    Height,
    Width,
}

impl PageProperty {
    /// Every property, in bus declaration order.
    pub const ALL: [Self; 8] = [
        Self::ScrollTop,
        Self::ScrollLeft,
        Self::ScrollHeight,
        Self::ScrollWidth,
        Self::ScrollTargetTop,
        Self::ScrollTargetLeft,
        Self::ScrollTargetHeight,
        Self::ScrollTargetWidth,
    ];

    /// Name on the message bus.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ScrollTop => "ScrollTop",
            Self::ScrollLeft => "ScrollLeft",
            Self::ScrollHeight => "ScrollHeight",
            Self::ScrollWidth => "ScrollWidth",
            Self::ScrollTargetTop => "ScrollTargetTop",
            Self::ScrollTargetLeft => "ScrollTargetLeft",
            Self::ScrollTargetHeight => "ScrollTargetHeight",
            Self::ScrollTargetWidth => "ScrollTargetWidth",
        }
    }

    /// Returns true for scroll positions, false for sizes.
    pub const fn is_writable(self) -> bool {
        matches!(self.metric(), Metric::Top | Metric::Left)
    }

    pub(crate) const fn target(self) -> Target {
        match self {
            Self::ScrollTop | Self::ScrollLeft | Self::ScrollHeight | Self::ScrollWidth => {
                Target::Body
            }
            _ => Target::ScrollTarget,
        }
    }

    pub(crate) const fn metric(self) -> Metric {
        match self {
            Self::ScrollTop | Self::ScrollTargetTop => Metric::Top,
            Self::ScrollLeft | Self::ScrollTargetLeft => Metric::Left,
            Self::ScrollHeight | Self::ScrollTargetHeight => Metric::Height,
            Self::ScrollWidth | Self::ScrollTargetWidth => Metric::Width,
        }
    }
}

impl fmt::Display for PageProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PageProperty {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| PageError::UnknownProperty(s.to_owned()))
    }
}

/// Why a property could not be read or written.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum PageError {
    /// There is no document, no body, or no scroll target yet.
    #[error("scroll element is missing")]
    NullBody,
    /// Sizes cannot be written.
    #[error("property `{0}` is read-only")]
    ReadOnly(PageProperty),
    /// The name does not denote a property.
    #[error("unknown property `{0}`")]
    UnknownProperty(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for p in PageProperty::ALL {
            assert_eq!(p.name().parse::<PageProperty>(), Ok(p));
        }
        assert_eq!(
            "scrolltop".parse::<PageProperty>(),
            Err(PageError::UnknownProperty("scrolltop".into())),
            "names are case-sensitive"
        );
    }

    #[test]
    fn only_positions_are_writable() {
        let writable: Vec<_> = PageProperty::ALL
            .into_iter()
            .filter(|p| p.is_writable())
            .collect();
        assert_eq!(
            writable,
            vec![
                PageProperty::ScrollTop,
                PageProperty::ScrollLeft,
                PageProperty::ScrollTargetTop,
                PageProperty::ScrollTargetLeft,
            ]
        );
        assert_eq!(
            PageError::ReadOnly(PageProperty::ScrollHeight).to_string(),
            "property `ScrollHeight` is read-only"
        );
    }
}
