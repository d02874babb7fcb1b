// Copyright 2025 the Overmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate selection: which elements get a hint.
//!
//! Built-in selectors walk every registered document, in registry order, and
//! return matching elements in tree order within each document. Registry order
//! is whatever the [`Dom`] reports and should not be relied upon.

use crate::dom::Dom;

/// Choose the candidates of a session.
pub trait Selector<D: Dom + ?Sized> {
    /// Candidates in the order hints should be built.
    fn select(&mut self, dom: &D) -> Vec<D::Node>;
}

/// Elements of every registered document that satisfy `pred`.
pub fn select_where<D, P>(dom: &D, mut pred: P) -> Vec<D::Node>
where
    D: Dom + ?Sized,
    P: FnMut(&D, &D::Node) -> bool,
{
    let mut out = Vec::new();
    for doc in dom.documents() {
        out.extend(dom.elements(&doc).into_iter().filter(|n| pred(dom, n)));
    }
    out
}

fn is_link<D: Dom + ?Sized>(dom: &D, node: &D::Node) -> bool {
    matches!(dom.tag_name(node).as_deref(), Some("a" | "area"))
        && dom.attribute(node, "href").is_some()
}

fn input_type<D: Dom + ?Sized>(dom: &D, node: &D::Node) -> String {
    dom.attribute(node, "type")
        .map(|t| t.to_ascii_lowercase())
        .unwrap_or_else(|| "text".into())
}

/// Anchors and image-map areas with an `href`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Links;

impl<D: Dom + ?Sized> Selector<D> for Links {
    fn select(&mut self, dom: &D) -> Vec<D::Node> {
        select_where(dom, is_link)
    }
}

/// Anything a click does something for: links, buttons, clickable inputs,
/// drop-downs, and elements with an `onclick` handler or a button/link role.
#[derive(Copy, Clone, Debug, Default)]
pub struct Clickable;

impl<D: Dom + ?Sized> Selector<D> for Clickable {
    fn select(&mut self, dom: &D) -> Vec<D::Node> {
        select_where(dom, |dom, node| {
            if is_link(dom, node) || dom.attribute(node, "onclick").is_some() {
                return true;
            }
            if matches!(dom.attribute(node, "role").as_deref(), Some("button" | "link")) {
                return true;
            }
            match dom.tag_name(node).as_deref() {
                Some("button" | "select" | "summary") => true,
                Some("input") => input_type(dom, node) != "hidden",
                _ => false,
            }
        })
    }
}

/// Text-entry form fields: text-like inputs and text areas.
#[derive(Copy, Clone, Debug, Default)]
pub struct FormFields;

impl<D: Dom + ?Sized> Selector<D> for FormFields {
    fn select(&mut self, dom: &D) -> Vec<D::Node> {
        select_where(dom, |dom, node| match dom.tag_name(node).as_deref() {
            Some("textarea") => true,
            Some("input") => matches!(
                input_type(dom, node).as_str(),
                "text" | "search" | "email" | "url" | "password" | "tel" | "number"
            ),
            _ => false,
        })
    }
}

/// A list chosen by the caller, used as is.
#[derive(Clone, Debug, Default)]
pub struct Fixed<N>(pub Vec<N>);

impl<D: Dom + ?Sized> Selector<D> for Fixed<D::Node> {
    fn select(&mut self, _dom: &D) -> Vec<D::Node> {
        self.0.clone()
    }
}
