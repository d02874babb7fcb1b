// Copyright 2025 the Overmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The document boundary: what the engine needs from a live document tree.
//!
//! ## Overview
//!
//! [`Dom`] abstracts over whatever hosts the documents (a browser's web process, a
//! test fixture, the in-memory `overmark_dom::Tree`). Handles are opaque and compared
//! by node identity; cloning a handle acquires a reference and dropping it releases it.
//!
//! All calls happen on the thread that owns the documents.

use core::fmt::{self, Debug};
use core::hash::Hash;

use kurbo::{Size, Vec2};

/// A DOM mutation that could not be carried out.
///
/// Logged and contained by the engine: during construction it costs one hint,
/// during teardown it leaves one element unrestored.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DomMutationError {
    /// The document of the node has no body to attach overlays to.
    #[error("document has no body")]
    NoBody,
    /// The node is not attached to a document tree.
    #[error("node is not attached to a document")]
    Detached,
    /// The document refused an operation.
    #[error("{op} failed: {reason}")]
    Rejected {
        /// Operation that failed.
        op: DomOp,
        /// Message from the document implementation.
        reason: String,
    },
}

impl DomMutationError {
    /// Build a [`DomMutationError::Rejected`].
    pub fn rejected(op: DomOp, reason: impl Into<String>) -> Self {
        Self::Rejected {
            op,
            reason: reason.into(),
        }
    }
}

/// Mutating operations on a [`Dom`], used to label failures.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DomOp {
    /// [`Dom::create_element`].
    CreateElement,
    /// [`Dom::append_text`].
    AppendText,
    /// [`Dom::append_child`].
    AppendChild,
    /// [`Dom::remove_child`].
    RemoveChild,
    /// [`Dom::replace_child`].
    ReplaceChild,
    /// [`Dom::set_attribute`].
    SetAttribute,
    /// [`Dom::set_class_name`].
    SetClassName,
    /// [`Dom::discard`].
    Discard,
    /// [`Dom::click`].
    Click,
    /// [`Dom::focus`].
    Focus,
}

impl fmt::Display for DomOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CreateElement => "create element",
            Self::AppendText => "append text",
            Self::AppendChild => "append child",
            Self::RemoveChild => "remove child",
            Self::ReplaceChild => "replace child",
            Self::SetAttribute => "set attribute",
            Self::SetClassName => "set class name",
            Self::Discard => "discard",
            Self::Click => "click",
            Self::Focus => "focus",
        };
        f.write_str(name)
    }
}

/// A set of live documents the engine can read and mutate.
///
/// Mutations follow DOM semantics: inserting a node that is attached elsewhere
/// moves it, `replace_child` leaves the old child detached, and nothing is freed
/// until [`Dom::discard`] is called on a detached node.
pub trait Dom {
    /// Handle to a node. Equality is node identity.
    type Node: Clone + Eq + Hash + Debug;
    /// Handle to a document.
    type Document: Clone + Eq + Debug;

    /// Registered documents. Order is unspecified and may differ between calls.
    fn documents(&self) -> Vec<Self::Document>;
    /// Add a document (for example a frame's content) to the registry.
    fn register_document(&mut self, doc: &Self::Document);
    /// Elements of a document in tree order.
    fn elements(&self, doc: &Self::Document) -> Vec<Self::Node>;
    /// Document owning a node.
    fn owner_document(&self, node: &Self::Node) -> Option<Self::Document>;
    /// Root container of a document; overlays are attached here.
    fn body(&self, doc: &Self::Document) -> Option<Self::Node>;
    /// Location of a document.
    fn url(&self, doc: &Self::Document) -> Option<String>;
    /// Focused element of a document.
    fn active_element(&self, doc: &Self::Document) -> Option<Self::Node>;
    /// Document displayed by a frame element.
    fn content_document(&self, node: &Self::Node) -> Option<Self::Document>;

    /// Parent of a node.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;
    /// Lowercase tag name; `None` for anything that is not an element.
    fn tag_name(&self, node: &Self::Node) -> Option<String>;
    /// Attribute value of an element.
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    /// The element `node`'s offset is measured from.
    fn offset_parent(&self, node: &Self::Node) -> Option<Self::Node>;
    /// Offset from the offset parent.
    fn offset(&self, node: &Self::Node) -> Vec2;
    /// Scroll position.
    fn scroll(&self, node: &Self::Node) -> Vec2;
    /// Scrollable content size.
    fn scroll_size(&self, node: &Self::Node) -> Size;

    /// Create a detached element in `doc`.
    fn create_element(
        &mut self,
        doc: &Self::Document,
        tag: &str,
    ) -> Result<Self::Node, DomMutationError>;
    /// Append a new text node to `parent`.
    fn append_text(&mut self, parent: &Self::Node, text: &str) -> Result<(), DomMutationError>;
    /// Append `child` as the last child of `parent`.
    fn append_child(
        &mut self,
        parent: &Self::Node,
        child: &Self::Node,
    ) -> Result<(), DomMutationError>;
    /// Detach `child` from `parent`.
    fn remove_child(
        &mut self,
        parent: &Self::Node,
        child: &Self::Node,
    ) -> Result<(), DomMutationError>;
    /// Put `new_child` where `old_child` is; `old_child` becomes detached.
    fn replace_child(
        &mut self,
        parent: &Self::Node,
        new_child: &Self::Node,
        old_child: &Self::Node,
    ) -> Result<(), DomMutationError>;
    /// Set an attribute.
    fn set_attribute(
        &mut self,
        node: &Self::Node,
        name: &str,
        value: &str,
    ) -> Result<(), DomMutationError>;
    /// Replace the class of an element.
    fn set_class_name(&mut self, node: &Self::Node, class: &str) -> Result<(), DomMutationError>;
    /// Set the scroll position.
    fn set_scroll(&mut self, node: &Self::Node, scroll: Vec2);
    /// Free a detached node created through this trait.
    fn discard(&mut self, node: &Self::Node) -> Result<(), DomMutationError>;
    /// Dispatch a click on an element.
    fn click(&mut self, node: &Self::Node) -> Result<(), DomMutationError>;
    /// Move the focus to an element.
    fn focus(&mut self, node: &Self::Node) -> Result<(), DomMutationError>;
}
