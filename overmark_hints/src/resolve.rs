// Copyright 2025 the Overmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Absolute position of an element, from its chain of offset parents.
//!
//! ## Overview
//!
//! Each element knows its offset from its offset parent. Summing those offsets
//! up the chain gives the position relative to the document's root container,
//! which is where hint markers are attached and absolutely positioned.
//!
//! The walk stops at the root container (which contributes nothing) or when the
//! chain runs out.

use kurbo::{Point, Vec2};

use crate::dom::Dom;

/// Look up offset parents and local offsets.
///
/// Consumed by [`absolute_position`]. A [`Dom`] provides one through [`DomOffsets`].
pub trait OffsetLookup<K> {
    /// The node `node`'s offset is measured from, if any.
    fn offset_parent_of(&self, node: &K) -> Option<K>;
    /// Offset of `node` from its offset parent.
    fn offset_of(&self, node: &K) -> Vec2;
    /// Returns true for the document's root container.
    fn is_root(&self, node: &K) -> bool;
}

/// Position of `node` relative to its document root.
///
/// `None` and the root itself both resolve to the origin.
pub fn absolute_position<K, L: OffsetLookup<K>>(lookup: &L, node: Option<K>) -> Point {
    let mut pos = Point::ORIGIN;
    let mut cur = node;
    while let Some(n) = cur {
        if lookup.is_root(&n) {
            break;
        }
        pos += lookup.offset_of(&n);
        cur = lookup.offset_parent_of(&n);
    }
    pos
}

/// [`OffsetLookup`] view of a [`Dom`]; the root is the owner document's body.
#[derive(Debug)]
pub struct DomOffsets<'a, D>(pub &'a D);

impl<D: Dom> OffsetLookup<D::Node> for DomOffsets<'_, D> {
    fn offset_parent_of(&self, node: &D::Node) -> Option<D::Node> {
        self.0.offset_parent(node)
    }

    fn offset_of(&self, node: &D::Node) -> Vec2 {
        self.0.offset(node)
    }

    fn is_root(&self, node: &D::Node) -> bool {
        self.0
            .owner_document(node)
            .and_then(|doc| self.0.body(&doc))
            .is_some_and(|body| body == *node)
    }
}
