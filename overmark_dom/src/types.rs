// Copyright 2025 the Overmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the document tree: handles, flags, node payloads, and layout.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Size, Vec2};

/// Identifier for a node in the tree.
///
/// A small, copyable handle made of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On creation, a fresh slot is allocated with generation `1`.
/// - On [`discard`](crate::Tree::discard), the slot is freed; any `NodeId` that pointed to it is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// Stale `NodeId`s never alias a different live node because the generation must match.
/// Use [`Tree::is_alive`](crate::Tree::is_alive) to check liveness.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Identifier for a document.
///
/// Wraps the [`NodeId`] of the document node, which is the root of its tree.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct DocumentId(pub(crate) NodeId);

impl DocumentId {
    /// The document node itself.
    pub const fn node(self) -> NodeId {
        self.0
    }
}

bitflags::bitflags! {
    /// Per-node flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is positioned and therefore acts as the offset parent of its descendants.
        const POSITIONED = 0b0000_0001;
        /// The child list of this node cannot be modified.
        ///
        /// Any insertion into or removal from a frozen node fails with
        /// [`DomError::NoModificationAllowed`](crate::DomError::NoModificationAllowed).
        const FROZEN     = 0b0000_0010;
    }
}

/// Element payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    /// Lowercase tag name.
    pub tag: String,
    /// Attributes in insertion order. Names are stored lowercase.
    pub attributes: Vec<(String, String)>,
    /// The `class` of the element, kept apart from `attributes`.
    pub class_name: String,
    /// For frames: the document shown inside.
    pub content_document: Option<DocumentId>,
}

impl Element {
    /// Create an element with the given tag and nothing else.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    /// Look up an attribute, case-insensitively on the name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub(crate) fn set_attribute(&mut self, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        if let Some(slot) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value.into();
        } else {
            self.attributes.push((name, value.into()));
        }
    }
}

/// Document payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentData {
    /// Location of the document.
    pub url: String,
    /// The body element, if the document has one.
    pub body: Option<NodeId>,
    /// Currently focused element.
    pub active: Option<NodeId>,
}

/// What a node is.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeData {
    /// Root of a document.
    Document(DocumentData),
    /// An element.
    Element(Element),
    /// A text node.
    Text(String),
}

/// Layout facts for a node, supplied by whoever lays the document out.
///
/// The tree does no layout of its own; it only stores these values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Layout {
    /// Offset relative to the offset parent (`offsetLeft`, `offsetTop`).
    pub offset: Vec2,
    /// Scroll position (`scrollLeft`, `scrollTop`).
    pub scroll: Vec2,
    /// Scrollable content size (`scrollWidth`, `scrollHeight`).
    pub scroll_size: Size,
}
