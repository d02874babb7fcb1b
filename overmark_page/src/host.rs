// Copyright 2025 the Overmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-page state: the loaded document, focus, scroll target, and what the
//! controller was last told.
//!
//! ## Driving a host
//!
//! The embedder forwards three kinds of events, all on the document thread:
//! - document load: [`PageHost::document_loaded`],
//! - focus or blur on any watched document: [`PageHost::focus_changed`],
//! - a timer every [`POLL_INTERVAL`]: [`PageHost::poll`].
//!
//! Signals for the controller go to a [`SignalSink`].

use core::fmt;
use std::time::Duration;

use overmark_hints::{Dom, PageId};
use tracing::{debug, warn};

use crate::property::{Metric, PageError, PageProperty, Target};

/// How often [`PageHost::poll`] is expected to run.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Notifications from the page to the controller.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PageSignal {
    /// The body's scroll position or scrollable height changed.
    VerticalPositionChanged {
        /// Current `ScrollTop`.
        scroll_top: i64,
        /// Current `ScrollHeight`.
        scroll_height: i64,
    },
    /// Focus moved onto or off an input-like element.
    InputFocusChanged {
        /// Whether an input-like element has the focus now.
        input_focused: bool,
    },
}

/// Receiver of [`PageSignal`]s.
pub trait SignalSink {
    /// Deliver one signal.
    fn emit(&mut self, signal: PageSignal);
}

impl SignalSink for Vec<PageSignal> {
    fn emit(&mut self, signal: PageSignal) {
        self.push(signal);
    }
}

/// Element kinds that take keyboard input away from the browser's bindings.
const INPUT_LIKE: [&str; 4] = ["applet", "embed", "input", "textarea"];

fn is_input_like<D: Dom + ?Sized>(dom: &D, node: &D::Node) -> bool {
    dom.tag_name(node)
        .is_some_and(|tag| INPUT_LIKE.contains(&tag.as_str()))
}

/// The element that scrolls on behalf of `node`.
///
/// Walks up the offset-parent chain from `node` and stops at the first element
/// that has no offset parent, or whose content is taller or wider than that of
/// its offset parent.
pub fn scroll_target<D: Dom + ?Sized>(dom: &D, node: &D::Node) -> D::Node {
    let mut cur = node.clone();
    while let Some(parent) = dom.offset_parent(&cur) {
        let own = dom.scroll_size(&cur);
        let outer = dom.scroll_size(&parent);
        if outer.height < own.height || outer.width < own.width {
            break;
        }
        cur = parent;
    }
    cur
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Scroll metrics are whole pixels and far inside the i64 range."
)]
fn px(v: f64) -> i64 {
    v.round() as i64
}

/// Host-side state of one page.
pub struct PageHost<D: Dom, S> {
    page: PageId,
    sink: S,
    document: Option<D::Document>,
    active: Option<D::Node>,
    scroll_target: Option<D::Node>,
    last_top: i64,
    last_height: i64,
    last_input_focus: bool,
}

impl<D: Dom, S> fmt::Debug for PageHost<D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageHost")
            .field("page", &self.page)
            .field("document", &self.document)
            .field("active", &self.active)
            .field("scroll_target", &self.scroll_target)
            .field("last_top", &self.last_top)
            .field("last_height", &self.last_height)
            .field("last_input_focus", &self.last_input_focus)
            .finish_non_exhaustive()
    }
}

impl<D: Dom, S: SignalSink> PageHost<D, S> {
    /// Create a host for `page` with nothing loaded.
    pub fn new(page: PageId, sink: S) -> Self {
        Self {
            page,
            sink,
            document: None,
            active: None,
            scroll_target: None,
            last_top: 0,
            last_height: 0,
            last_input_focus: false,
        }
    }

    /// The page this host serves.
    pub fn page(&self) -> PageId {
        self.page
    }

    /// The signal sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the signal sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// The main document, once loaded.
    pub fn document(&self) -> Option<&D::Document> {
        self.document.as_ref()
    }

    /// The focused element last tracked.
    pub fn active(&self) -> Option<&D::Node> {
        self.active.as_ref()
    }

    /// Current scroll target.
    pub fn scroll_target(&self) -> Option<&D::Node> {
        self.scroll_target.as_ref()
    }

    /// Whether an input-like element was focused at the last focus change.
    pub fn input_focused(&self) -> bool {
        self.last_input_focus
    }

    /// A new main document finished loading.
    ///
    /// Registers it, makes it the document the body properties refer to, and
    /// reads its focus.
    pub fn document_loaded(&mut self, dom: &mut D, doc: D::Document) {
        dom.register_document(&doc);
        debug!(page = self.page.0, ?doc, "document loaded");
        self.document = Some(doc.clone());
        self.focus_changed(dom, &doc);
    }

    /// Focus or blur happened in `doc`.
    ///
    /// A focused frame hands over to the document inside it, which is
    /// registered and followed in turn. Otherwise the active element is
    /// tracked, the scroll target recomputed, and a change of input focus
    /// signalled.
    pub fn focus_changed(&mut self, dom: &mut D, doc: &D::Document) {
        let mut doc = doc.clone();
        let mut visited = Vec::new();
        loop {
            let Some(active) = dom.active_element(&doc) else {
                return;
            };
            if self.active.as_ref() == Some(&active) {
                return;
            }
            let frame = match dom.tag_name(&active).as_deref() {
                Some("iframe") => dom.content_document(&active),
                _ => None,
            };
            let Some(inner) = frame else {
                self.track(dom, active);
                return;
            };
            visited.push(doc);
            if visited.contains(&inner) {
                warn!(?inner, "frame shows one of its own ancestors");
                return;
            }
            dom.register_document(&inner);
            debug!(?inner, "following focus into frame");
            doc = inner;
        }
    }

    fn track(&mut self, dom: &D, active: D::Node) {
        let target = scroll_target(dom, &active);
        let input_focused = is_input_like(dom, &active);
        debug!(?active, ?target, input_focused, "focus moved");
        self.active = Some(active);
        self.scroll_target = Some(target);
        if input_focused != self.last_input_focus {
            self.last_input_focus = input_focused;
            self.sink
                .emit(PageSignal::InputFocusChanged { input_focused });
        }
    }

    /// Report a change in the body's vertical scroll state, if any.
    pub fn poll(&mut self, dom: &D) {
        let Some(body) = self.document.as_ref().and_then(|d| dom.body(d)) else {
            return;
        };
        let top = px(dom.scroll(&body).y);
        let height = px(dom.scroll_size(&body).height);
        if top != self.last_top || height != self.last_height {
            self.last_top = top;
            self.last_height = height;
            self.sink.emit(PageSignal::VerticalPositionChanged {
                scroll_top: top,
                scroll_height: height,
            });
        }
    }

    fn element_for(&self, dom: &D, property: PageProperty) -> Result<D::Node, PageError> {
        match property.target() {
            Target::Body => self.document.as_ref().and_then(|d| dom.body(d)),
            Target::ScrollTarget => self.scroll_target.clone(),
        }
        .ok_or(PageError::NullBody)
    }

    /// Read a property.
    pub fn get(&self, dom: &D, property: PageProperty) -> Result<i64, PageError> {
        let node = self.element_for(dom, property)?;
        let scroll = dom.scroll(&node);
        let size = dom.scroll_size(&node);
        Ok(px(match property.metric() {
            Metric::Top => scroll.y,
            Metric::Left => scroll.x,
            Metric::Height => size.height,
            Metric::Width => size.width,
        }))
    }

    /// Write a scroll position.
    pub fn set(&self, dom: &mut D, property: PageProperty, value: i64) -> Result<(), PageError> {
        if !property.is_writable() {
            return Err(PageError::ReadOnly(property));
        }
        let node = self.element_for(dom, property)?;
        let mut scroll = dom.scroll(&node);
        match property.metric() {
            Metric::Top => scroll.y = value as f64,
            Metric::Left => scroll.x = value as f64,
            Metric::Height | Metric::Width => return Err(PageError::ReadOnly(property)),
        }
        dom.set_scroll(&node, scroll);
        Ok(())
    }
}
