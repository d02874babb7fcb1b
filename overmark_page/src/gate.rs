// Copyright 2025 the Overmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outgoing request filtering.

use overmark_hints::CommunicationError;
use tracing::{debug, warn};

/// Decides whether a request may leave the page (`Blocks(uri)`).
pub trait RequestFilter {
    /// Returns true if the request to `uri` must be cancelled.
    fn blocks(&mut self, uri: &str) -> Result<bool, CommunicationError>;
}

impl<F> RequestFilter for F
where
    F: FnMut(&str) -> Result<bool, CommunicationError>,
{
    fn blocks(&mut self, uri: &str) -> Result<bool, CommunicationError> {
        self(uri)
    }
}

/// Consults a [`RequestFilter`] for every outgoing request.
///
/// A filter that cannot be reached never blocks: the failure is logged and the
/// request goes through.
#[derive(Debug)]
pub struct RequestGate<F> {
    filter: F,
}

impl<F: RequestFilter> RequestGate<F> {
    /// Gate requests through `filter`.
    pub fn new(filter: F) -> Self {
        Self { filter }
    }

    /// The filter.
    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Returns true if the request to `uri` should be cancelled.
    pub fn should_cancel(&mut self, uri: &str) -> bool {
        match self.filter.blocks(uri) {
            Ok(blocked) => {
                if blocked {
                    debug!(uri, "request blocked");
                }
                blocked
            }
            Err(err) => {
                warn!(%err, uri, "failed to check request, letting it through");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocked_requests_are_cancelled() {
        let mut gate = RequestGate::new(|uri: &str| -> Result<bool, CommunicationError> {
            Ok(uri.contains("ads."))
        });
        assert!(gate.should_cancel("https://ads.example.net/banner.js"));
        assert!(!gate.should_cancel("https://example.org/app.js"));
    }

    #[test]
    fn unreachable_filter_allows() {
        let mut asked = Vec::new();
        let mut gate = RequestGate::new(|uri: &str| -> Result<bool, CommunicationError> {
            asked.push(uri.to_owned());
            Err(CommunicationError::Disconnected)
        });
        assert!(!gate.should_cancel("https://example.org/"));
        drop(gate);
        assert_eq!(asked, vec!["https://example.org/".to_owned()]);
    }
}
