// Copyright 2025 the Overmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Actions run on the hint the user picked.
//!
//! An [`Executor`] is handed the candidate of an exact match and answers with a
//! [`Flow`]. Executors own their failures: anything that goes wrong inside one,
//! remote or local, is logged and reported as [`Flow::Stop`], meaning the action
//! did not happen and hint mode ends.

use tracing::{debug, warn};
use url::Url;

use crate::dom::Dom;
use crate::rpc::{HintController, PageId};
use crate::types::Flow;

/// Act on a selected candidate.
pub trait Executor<D: Dom + ?Sized> {
    /// Perform the action for `node`.
    fn execute(&mut self, dom: &mut D, node: &D::Node) -> Flow;
}

/// Resolve the `href` of `node` against the URL of its document.
///
/// Without a usable document URL, `href` has to be absolute on its own.
pub fn resolve_href<D: Dom + ?Sized>(
    dom: &D,
    node: &D::Node,
    href: &str,
) -> Result<Url, url::ParseError> {
    let base = dom
        .owner_document(node)
        .and_then(|doc| dom.url(&doc))
        .and_then(|u| Url::parse(&u).ok());
    match base {
        Some(base) => base.join(href),
        None => Url::parse(href),
    }
}

/// Follow a link by handing its absolute target to the controller.
///
/// The controller's answer decides whether hint mode continues. Elements
/// without a usable `href` are skipped and hint mode continues.
#[derive(Debug)]
pub struct FollowLink<C> {
    page: PageId,
    controller: C,
}

impl<C: HintController> FollowLink<C> {
    /// Follow links of `page` through `controller`.
    pub fn new(page: PageId, controller: C) -> Self {
        Self { page, controller }
    }

    /// The controller.
    pub fn controller(&self) -> &C {
        &self.controller
    }
}

impl<D: Dom + ?Sized, C: HintController> Executor<D> for FollowLink<C> {
    fn execute(&mut self, dom: &mut D, node: &D::Node) -> Flow {
        let Some(href) = dom.attribute(node, "href") else {
            debug!(?node, "hinted element has no href");
            return Flow::Continue;
        };
        let target = match resolve_href(dom, node, &href) {
            Ok(target) => target,
            Err(err) => {
                warn!(%err, %href, "cannot resolve hinted link");
                return Flow::Continue;
            }
        };
        match self.controller.hint_call(self.page, &target) {
            Ok(true) => Flow::Continue,
            Ok(false) => Flow::Stop,
            Err(err) => {
                warn!(%err, %target, "failed to call hint");
                Flow::Stop
            }
        }
    }
}

/// Click the element and leave hint mode.
#[derive(Copy, Clone, Debug, Default)]
pub struct Click;

impl<D: Dom + ?Sized> Executor<D> for Click {
    fn execute(&mut self, dom: &mut D, node: &D::Node) -> Flow {
        if let Err(err) = dom.click(node) {
            warn!(%err, ?node, "failed to click hinted element");
        }
        Flow::Stop
    }
}

/// Focus the element (typically a form field) and leave hint mode.
#[derive(Copy, Clone, Debug, Default)]
pub struct FocusField;

impl<D: Dom + ?Sized> Executor<D> for FocusField {
    fn execute(&mut self, dom: &mut D, node: &D::Node) -> Flow {
        if let Err(err) = dom.focus(node) {
            warn!(%err, ?node, "failed to focus hinted element");
        }
        Flow::Stop
    }
}
