// Copyright 2025 the Overmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: executor outcomes, presentation states, and hints.

/// What an executor wants after acting on a hint.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Flow {
    /// Keep hint mode running with every hint shown again.
    Continue,
    /// Leave hint mode.
    Stop,
}

/// Presentation state of a hint marker.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MarkerState {
    /// The label matches the typed text so far.
    Visible,
    /// The label cannot match any more.
    Hidden,
}

/// Presentation state of a highlight wrapper.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum WrapperState {
    /// The candidate is still selectable.
    Highlighted,
    /// The candidate is out of the running.
    Plain,
}

/// One labelled candidate of an active session.
///
/// While the hint exists, `wrapper` sits where `candidate` used to be and holds
/// it as its only child, and `marker` is attached to the document body.
#[derive(Clone, Debug)]
pub struct Hint<N> {
    pub(crate) label: String,
    pub(crate) folded: String,
    pub(crate) candidate: N,
    pub(crate) marker: N,
    pub(crate) wrapper: N,
    pub(crate) marker_state: MarkerState,
    pub(crate) wrapper_state: WrapperState,
}

impl<N> Hint<N> {
    /// Label as provided.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The labelled element.
    pub fn candidate(&self) -> &N {
        &self.candidate
    }

    /// Overlay element showing the label.
    pub fn marker(&self) -> &N {
        &self.marker
    }

    /// Element wrapped around the candidate.
    pub fn wrapper(&self) -> &N {
        &self.wrapper
    }

    /// Current marker state.
    pub fn marker_state(&self) -> MarkerState {
        self.marker_state
    }

    /// Current wrapper state.
    pub fn wrapper_state(&self) -> WrapperState {
        self.wrapper_state
    }

    /// Returns true if the label is still reachable by typing more.
    pub fn is_visible(&self) -> bool {
        self.marker_state == MarkerState::Visible
    }
}

/// Case-insensitive comparison key for labels and typed text.
pub(crate) fn fold(text: &str) -> String {
    text.to_lowercase()
}
