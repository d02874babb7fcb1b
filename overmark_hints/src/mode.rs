// Copyright 2025 the Overmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hint session engine.
//!
//! ## Lifecycle
//!
//! [`HintMode::start`] selects candidates, fetches one label per candidate, and
//! builds a hint for each: a marker carrying the label, attached to the document
//! body at the candidate's absolute position, and a wrapper that takes the
//! candidate's place in the tree and holds the candidate as its only child.
//!
//! [`HintMode::filter`] is called with the text typed so far. An exact label
//! match runs the session's executor once; otherwise hints are shown or hidden
//! by prefix.
//!
//! [`HintMode::end`] removes every marker, puts every candidate back where its
//! wrapper stood, and frees the overlay elements. It is safe to call at any time
//! and runs implicitly when a new session starts over an active one.
//!
//! ## Failures
//!
//! A label-service failure aborts `start` before anything is touched. A DOM
//! failure while building a hint undoes that hint's partial work and drops the
//! candidate; hints built earlier in the same call stay. A DOM failure during
//! teardown is logged and leaves that one candidate unrestored.

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::{debug, error, warn};

use crate::config::HintConfig;
use crate::dom::{Dom, DomMutationError};
use crate::execute::Executor;
use crate::resolve::{DomOffsets, absolute_position};
use crate::rpc::{CommunicationError, LabelProvider};
use crate::select::Selector;
use crate::types::{Flow, Hint, MarkerState, WrapperState, fold};

/// Hint mode for one page.
///
/// Holds at most one session. The documents themselves are borrowed per call,
/// so the engine can live next to whatever owns them.
pub struct HintMode<D: Dom, L> {
    labels: L,
    config: HintConfig,
    session: Option<Session<D>>,
}

struct Session<D: Dom> {
    // Keyed by candidate; iteration is discovery order.
    hints: IndexMap<D::Node, Hint<D::Node>>,
    executor: Box<dyn Executor<D>>,
}

impl<D: Dom, L> core::fmt::Debug for HintMode<D, L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HintMode")
            .field("config", &self.config)
            .field("active", &self.session.is_some())
            .field("hints", &self.session.as_ref().map(|s| s.hints.len()))
            .finish_non_exhaustive()
    }
}

impl<D: Dom, L: LabelProvider> HintMode<D, L> {
    /// Create an inactive engine with the default presentation.
    pub fn new(labels: L) -> Self {
        Self::with_config(labels, HintConfig::default())
    }

    /// Create an inactive engine.
    pub fn with_config(labels: L, config: HintConfig) -> Self {
        Self {
            labels,
            config,
            session: None,
        }
    }

    /// Presentation settings.
    pub fn config(&self) -> &HintConfig {
        &self.config
    }

    /// The label provider.
    pub fn label_provider(&self) -> &L {
        &self.labels
    }

    /// Returns true while a session is active.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Number of hints in the active session; zero when inactive.
    pub fn hint_count(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.hints.len())
    }

    /// Hints of the active session in discovery order.
    pub fn hints(&self) -> impl Iterator<Item = &Hint<D::Node>> + '_ {
        self.session.iter().flat_map(|s| s.hints.values())
    }

    /// The hint built for `candidate`, if any.
    pub fn hint_for(&self, candidate: &D::Node) -> Option<&Hint<D::Node>> {
        self.session.as_ref()?.hints.get(candidate)
    }

    /// Hints whose label equals `label`, ignoring case, in discovery order.
    pub fn hints_labelled<'a>(
        &'a self,
        label: &str,
    ) -> impl Iterator<Item = &'a Hint<D::Node>> + 'a {
        let folded = fold(label);
        self.hints().filter(move |h| h.folded == folded)
    }

    /// Start a session, ending the current one first.
    ///
    /// Returns the number of hints built. On a label-service failure nothing is
    /// mutated, the engine stays inactive, and the error is returned.
    pub fn start<S, E>(
        &mut self,
        dom: &mut D,
        selector: &mut S,
        executor: E,
    ) -> Result<usize, CommunicationError>
    where
        S: Selector<D> + ?Sized,
        E: Executor<D> + 'static,
    {
        self.end(dom);

        let candidates = selector.select(dom);
        let requested = candidates.len();
        let labels = match self.labels.labels(requested) {
            Ok(labels) => labels,
            Err(err) => {
                error!(%err, requested, "failed to get hint labels");
                return Err(err);
            }
        };
        if labels.len() != requested {
            warn!(
                requested,
                received = labels.len(),
                "label count does not match candidate count"
            );
        }

        let mut hints = IndexMap::with_capacity(requested);
        let mut seen = HashSet::with_capacity(requested);
        let mut labels = labels.into_iter();
        for candidate in candidates {
            let Some(label) = labels.next() else {
                warn!(?candidate, "no label left for candidate");
                continue;
            };
            if !seen.insert(candidate.clone()) {
                warn!(?candidate, "candidate selected twice");
                continue;
            }
            match build_hint(dom, &self.config, candidate.clone(), label) {
                Ok(hint) => {
                    hints.insert(candidate, hint);
                }
                Err(err) => warn!(%err, ?candidate, "failed to build hint"),
            }
        }

        let built = hints.len();
        debug!(requested, built, "hint mode started");
        self.session = Some(Session {
            hints,
            executor: Box::new(executor),
        });
        Ok(built)
    }

    /// Narrow the session down to labels starting with `typed`.
    ///
    /// Returns true if the session ended because of this call.
    pub fn filter(&mut self, dom: &mut D, typed: &str) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let typed = fold(typed);
        let exact = session
            .hints
            .values()
            .find(|h| h.folded == typed)
            .map(|h| h.candidate.clone());

        if let Some(candidate) = exact {
            match session.executor.execute(dom, &candidate) {
                Flow::Continue => {
                    paint(dom, &self.config, session, "");
                    false
                }
                Flow::Stop => {
                    self.end(dom);
                    true
                }
            }
        } else {
            paint(dom, &self.config, session, &typed);
            false
        }
    }

    /// End the session and restore the documents. Does nothing when inactive.
    pub fn end(&mut self, dom: &mut D) {
        let Some(session) = self.session.take() else {
            return;
        };
        let count = session.hints.len();
        for hint in session.hints.into_values() {
            tear_down(dom, hint);
        }
        debug!(count, "hint mode ended");
    }
}

/// Apply the visible/hidden split for `typed` (already folded).
fn paint<D: Dom>(dom: &mut D, config: &HintConfig, session: &mut Session<D>, typed: &str) {
    let classes = &config.classes;
    for hint in session.hints.values_mut() {
        let (marker_state, wrapper_state) = if hint.folded.starts_with(typed) {
            (MarkerState::Visible, WrapperState::Highlighted)
        } else {
            (MarkerState::Hidden, WrapperState::Plain)
        };
        let marker_class = match marker_state {
            MarkerState::Visible => &classes.visible,
            MarkerState::Hidden => &classes.hidden,
        };
        let wrapper_class = match wrapper_state {
            WrapperState::Highlighted => &classes.highlighted,
            WrapperState::Plain => &classes.plain,
        };
        if let Err(err) = dom.set_class_name(&hint.marker, marker_class) {
            warn!(%err, label = %hint.label, "failed to restyle hint marker");
        }
        if let Err(err) = dom.set_class_name(&hint.wrapper, wrapper_class) {
            warn!(%err, label = %hint.label, "failed to restyle hint wrapper");
        }
        hint.marker_state = marker_state;
        hint.wrapper_state = wrapper_state;
    }
}

/// Progress of a hint under construction, for rollback.
struct Partial<N> {
    marker: Option<N>,
    // Set once the marker is attached.
    body: Option<N>,
    wrapper: Option<N>,
    // Set once the wrapper has taken the candidate's place.
    parent: Option<N>,
}

impl<N> Default for Partial<N> {
    fn default() -> Self {
        Self {
            marker: None,
            body: None,
            wrapper: None,
            parent: None,
        }
    }
}

fn build_hint<D: Dom>(
    dom: &mut D,
    config: &HintConfig,
    candidate: D::Node,
    label: String,
) -> Result<Hint<D::Node>, DomMutationError> {
    let mut partial = Partial::default();
    match construct(dom, config, &candidate, &label, &mut partial) {
        Ok((marker, wrapper)) => Ok(Hint {
            folded: fold(&label),
            label,
            candidate,
            marker,
            wrapper,
            marker_state: MarkerState::Visible,
            wrapper_state: WrapperState::Highlighted,
        }),
        Err(err) => {
            roll_back(dom, &candidate, partial);
            Err(err)
        }
    }
}

fn construct<D: Dom>(
    dom: &mut D,
    config: &HintConfig,
    candidate: &D::Node,
    label: &str,
    partial: &mut Partial<D::Node>,
) -> Result<(D::Node, D::Node), DomMutationError> {
    let doc = dom
        .owner_document(candidate)
        .ok_or(DomMutationError::Detached)?;
    let body = dom.body(&doc).ok_or(DomMutationError::NoBody)?;
    let parent = dom.parent(candidate).ok_or(DomMutationError::Detached)?;
    let pos = absolute_position(&DomOffsets(&*dom), Some(candidate.clone()));

    let marker = dom.create_element(&doc, &config.marker_tag)?;
    partial.marker = Some(marker.clone());
    dom.append_text(&marker, label)?;
    dom.set_attribute(&marker, "style", &format!("left:{}px;top:{}px", pos.x, pos.y))?;
    dom.set_class_name(&marker, &config.classes.visible)?;
    dom.append_child(&body, &marker)?;
    partial.body = Some(body);

    let wrapper = dom.create_element(&doc, &config.wrapper_tag)?;
    partial.wrapper = Some(wrapper.clone());
    dom.set_class_name(&wrapper, &config.classes.highlighted)?;
    dom.replace_child(&parent, &wrapper, candidate)?;
    partial.parent = Some(parent);
    dom.append_child(&wrapper, candidate)?;

    Ok((marker, wrapper))
}

fn roll_back<D: Dom>(dom: &mut D, candidate: &D::Node, partial: Partial<D::Node>) {
    if let (Some(wrapper), Some(parent)) = (&partial.wrapper, &partial.parent) {
        if let Err(err) = dom.replace_child(parent, candidate, wrapper) {
            warn!(%err, ?candidate, "failed to put candidate back after a failed hint");
        }
    }
    if let (Some(marker), Some(body)) = (&partial.marker, &partial.body) {
        if let Err(err) = dom.remove_child(body, marker) {
            warn!(%err, "failed to remove marker of a failed hint");
        }
    }
    for node in [partial.marker, partial.wrapper].into_iter().flatten() {
        release(dom, &node);
    }
}

fn tear_down<D: Dom>(dom: &mut D, hint: Hint<D::Node>) {
    if let Some(parent) = dom.parent(&hint.marker) {
        if let Err(err) = dom.remove_child(&parent, &hint.marker) {
            warn!(%err, label = %hint.label, "failed to remove hint marker");
        }
    }
    if let Some(parent) = dom.parent(&hint.wrapper) {
        // Moves the candidate out of the wrapper and into the wrapper's slot.
        if let Err(err) = dom.replace_child(&parent, &hint.candidate, &hint.wrapper) {
            warn!(%err, label = %hint.label, "failed to restore hinted element");
        }
    }
    release(dom, &hint.marker);
    // A wrapper still holding its candidate must not be freed with it.
    if dom.parent(&hint.candidate).as_ref() != Some(&hint.wrapper) {
        release(dom, &hint.wrapper);
    }
}

/// Free an overlay element, unless something still holds it.
fn release<D: Dom>(dom: &mut D, node: &D::Node) {
    if dom.parent(node).is_some() {
        debug!(?node, "overlay element still attached, not freed");
        return;
    }
    if let Err(err) = dom.discard(node) {
        warn!(%err, ?node, "failed to free overlay element");
    }
}
