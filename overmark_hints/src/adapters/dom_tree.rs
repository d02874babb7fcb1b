// Copyright 2025 the Overmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Dom`] for the in-memory `overmark_dom` tree.
//!
//! ## Feature
//!
//! Enable with `dom_tree_adapter` (on by default).
//!
//! ## Notes
//!
//! Tree errors are reported as [`DomMutationError::Rejected`] tagged with the
//! operation that failed. Reads on stale handles return empty values instead
//! of failing, the way the tree itself does.

use kurbo::{Size, Vec2};
use overmark_dom::{DocumentId, DomError, Element, NodeId, Tree};
use tracing::debug;

use crate::dom::{Dom, DomMutationError, DomOp};

fn rejected(op: DomOp) -> impl FnOnce(DomError) -> DomMutationError {
    move |err| DomMutationError::rejected(op, err.to_string())
}

impl Dom for Tree {
    type Node = NodeId;
    type Document = DocumentId;

    fn documents(&self) -> Vec<DocumentId> {
        Self::documents(self).to_vec()
    }

    fn register_document(&mut self, doc: &DocumentId) {
        self.register(*doc);
    }

    fn elements(&self, doc: &DocumentId) -> Vec<NodeId> {
        Self::elements(self, *doc)
    }

    fn owner_document(&self, node: &NodeId) -> Option<DocumentId> {
        Self::owner_document(self, *node)
    }

    fn body(&self, doc: &DocumentId) -> Option<NodeId> {
        Self::body(self, *doc)
    }

    fn url(&self, doc: &DocumentId) -> Option<String> {
        Self::url(self, *doc).map(Into::into)
    }

    fn active_element(&self, doc: &DocumentId) -> Option<NodeId> {
        Self::active_element(self, *doc)
    }

    fn content_document(&self, node: &NodeId) -> Option<DocumentId> {
        Self::content_document(self, *node)
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        Self::parent(self, *node)
    }

    fn tag_name(&self, node: &NodeId) -> Option<String> {
        Self::tag_name(self, *node).map(Into::into)
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        Self::attribute(self, *node, name).map(Into::into)
    }

    fn offset_parent(&self, node: &NodeId) -> Option<NodeId> {
        Self::offset_parent(self, *node)
    }

    fn offset(&self, node: &NodeId) -> Vec2 {
        self.layout(*node).map(|l| l.offset).unwrap_or(Vec2::ZERO)
    }

    fn scroll(&self, node: &NodeId) -> Vec2 {
        self.layout(*node).map(|l| l.scroll).unwrap_or(Vec2::ZERO)
    }

    fn scroll_size(&self, node: &NodeId) -> Size {
        self.layout(*node).map(|l| l.scroll_size).unwrap_or(Size::ZERO)
    }

    fn create_element(&mut self, doc: &DocumentId, tag: &str) -> Result<NodeId, DomMutationError> {
        Self::create_element(self, *doc, Element::new(tag)).map_err(rejected(DomOp::CreateElement))
    }

    fn append_text(&mut self, parent: &NodeId, text: &str) -> Result<(), DomMutationError> {
        let doc = Self::owner_document(self, *parent).ok_or(DomMutationError::Detached)?;
        let node = self
            .create_text(doc, text)
            .map_err(rejected(DomOp::AppendText))?;
        if let Err(err) = Self::append_child(self, *parent, node) {
            if let Err(discard_err) = Self::discard(self, node) {
                debug!(%discard_err, ?node, "failed to free unattached text node");
            }
            return Err(rejected(DomOp::AppendText)(err));
        }
        Ok(())
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), DomMutationError> {
        Self::append_child(self, *parent, *child).map_err(rejected(DomOp::AppendChild))
    }

    fn remove_child(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), DomMutationError> {
        Self::remove_child(self, *parent, *child).map_err(rejected(DomOp::RemoveChild))
    }

    fn replace_child(
        &mut self,
        parent: &NodeId,
        new_child: &NodeId,
        old_child: &NodeId,
    ) -> Result<(), DomMutationError> {
        Self::replace_child(self, *parent, *new_child, *old_child)
            .map_err(rejected(DomOp::ReplaceChild))
    }

    fn set_attribute(
        &mut self,
        node: &NodeId,
        name: &str,
        value: &str,
    ) -> Result<(), DomMutationError> {
        Self::set_attribute(self, *node, name, value).map_err(rejected(DomOp::SetAttribute))
    }

    fn set_class_name(&mut self, node: &NodeId, class: &str) -> Result<(), DomMutationError> {
        Self::set_class_name(self, *node, class).map_err(rejected(DomOp::SetClassName))
    }

    fn set_scroll(&mut self, node: &NodeId, scroll: Vec2) {
        Self::set_scroll(self, *node, scroll);
    }

    fn discard(&mut self, node: &NodeId) -> Result<(), DomMutationError> {
        Self::discard(self, *node).map_err(rejected(DomOp::Discard))
    }

    fn click(&mut self, node: &NodeId) -> Result<(), DomMutationError> {
        Self::click(self, *node).map_err(rejected(DomOp::Click))
    }

    fn focus(&mut self, node: &NodeId) -> Result<(), DomMutationError> {
        Self::focus(self, *node).map_err(rejected(DomOp::Focus))
    }
}
