// Copyright 2025 the Overmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overmark_dom --heading-base-level=0

//! Overmark DOM: an in-memory document tree.
//!
//! Overmark DOM is the reference document model for the hint engine in `overmark_hints`.
//! It is small on purpose: enough DOM to inject overlays, move nodes around, and undo it.
//!
//! - Several documents share one arena; each has a body and a registry entry once registered.
//! - Nodes are elements, text, or document roots, addressed by generational [`NodeId`]s.
//! - Mutations (`append_child`, `insert_before`, `replace_child`, `remove_child`) follow DOM
//!   semantics and fail with a [`DomError`] instead of producing an invalid tree.
//! - Detached nodes live until [`Tree::discard`] frees them, so leaks are observable with [`Tree::len`].
//!
//! ## Not a layout engine
//!
//! Offsets, scroll positions and scroll sizes are stored, never computed.
//! Upstream code supplies them through [`Tree::set_offset`] and friends.
//! The only layout rule the tree knows is the offset-parent rule: the nearest ancestor flagged
//! [`NodeFlags::POSITIONED`], or the body.
//!
//! ## Failure injection
//!
//! [`NodeFlags::FROZEN`] makes a node's child list immutable.
//! This models the DOM's `NoModificationAllowedError` and lets callers exercise their error paths.
//!
//! ## Minimal usage
//!
//! ```
//! use overmark_dom::{Element, Tree};
//! use kurbo::Vec2;
//!
//! let mut tree = Tree::new();
//! let doc = tree.create_document("https://example.org/");
//! tree.register(doc);
//!
//! let body = tree.body(doc).unwrap();
//! let link = tree
//!     .create_element(doc, Element::new("a").with_attribute("href", "/about"))
//!     .unwrap();
//! tree.append_child(body, link).unwrap();
//! tree.set_offset(link, Vec2::new(8.0, 120.0));
//!
//! assert_eq!(tree.offset_parent(link), Some(body));
//! assert_eq!(tree.elements(doc), vec![body, link]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod tree;
mod types;

pub use error::DomError;
pub use tree::Tree;
pub use types::{DocumentData, DocumentId, Element, Layout, NodeData, NodeFlags, NodeId};
