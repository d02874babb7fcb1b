// Copyright 2025 the Overmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Remote collaborators: the label service and the hint controller.
//!
//! Both are called synchronously on the document thread. There is no timeout
//! and no retry; a peer that never answers holds the caller until it does.

use url::Url;

/// A remote call that did not produce an answer.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CommunicationError {
    /// The peer was reached but the call failed.
    #[error("remote call `{method}` failed: {reason}")]
    Call {
        /// Name of the remote method.
        method: &'static str,
        /// Reason reported by the transport or the peer.
        reason: String,
    },
    /// The channel to the controller is gone.
    ///
    /// Unlike a failed call this cannot be recovered from; hosts are expected
    /// to shut the page process down.
    #[error("connection to the controller was lost")]
    Disconnected,
}

impl CommunicationError {
    /// Build a [`CommunicationError::Call`].
    pub fn call(method: &'static str, reason: impl Into<String>) -> Self {
        Self::Call {
            method,
            reason: reason.into(),
        }
    }

    /// Returns true when the channel itself is lost.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Disconnected)
    }
}

/// Identity of the page a document belongs to, as known to the controller.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PageId(pub u64);

/// Source of hint labels (`GetHintsLabels(count)`).
///
/// Labels are expected to be distinct ignoring case; this is not checked.
pub trait LabelProvider {
    /// Return `count` labels.
    fn labels(&mut self, count: usize) -> Result<Vec<String>, CommunicationError>;
}

impl<F> LabelProvider for F
where
    F: FnMut(usize) -> Result<Vec<String>, CommunicationError>,
{
    fn labels(&mut self, count: usize) -> Result<Vec<String>, CommunicationError> {
        self(count)
    }
}

/// The controller that decides what a followed hint does (`HintCall(page, uri)`).
pub trait HintController {
    /// Hand a resolved link target to the controller.
    ///
    /// Returns `true` if hint mode should continue afterwards.
    fn hint_call(&mut self, page: PageId, target: &Url) -> Result<bool, CommunicationError>;
}
