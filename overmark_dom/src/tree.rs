// Copyright 2025 the Overmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, mutation, queries.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Size, Vec2};

use crate::error::DomError;
use crate::types::{DocumentData, DocumentId, Element, Layout, NodeData, NodeFlags, NodeId};

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

/// A set of documents stored in one arena.
///
/// Every node belongs to exactly one document (its owner) and is either attached
/// somewhere under that document's node or detached. Detached nodes stay alive
/// until [`Tree::discard`] frees them.
pub struct Tree {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    documents: Vec<DocumentId>,
    clicks: Vec<NodeId>,
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tree")
            .field("nodes_total", &self.nodes.len())
            .field("nodes_alive", &self.len())
            .field("free_list", &self.free_list.len())
            .field("documents", &self.documents)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    // Document node owning this one; `None` only for document nodes.
    owner: Option<NodeId>,
    data: NodeData,
    layout: Layout,
    flags: NodeFlags,
}

impl Tree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            documents: Vec::new(),
            clicks: Vec::new(),
        }
    }

    fn alloc(&mut self, owner: Option<NodeId>, data: NodeData) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            (idx, generation)
        } else {
            self.nodes.push(None);
            self.generations.push(1);
            (self.nodes.len() - 1, 1)
        };
        self.nodes[idx] = Some(Node {
            generation,
            parent: None,
            children: Vec::new(),
            owner,
            data,
            layout: Layout::default(),
            flags: NodeFlags::empty(),
        });
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId stores 32-bit slot indices."
        )]
        NodeId::new(idx as u32, generation)
    }

    /// Create a new document with an empty body.
    ///
    /// The document is not part of the registry until [`Tree::register`] is called.
    pub fn create_document(&mut self, url: &str) -> DocumentId {
        let doc = self.alloc(
            None,
            NodeData::Document(DocumentData {
                url: url.into(),
                ..Default::default()
            }),
        );
        let body = self.alloc(Some(doc), NodeData::Element(Element::new("body")));
        self.link(doc, body, None);
        if let Some(NodeData::Document(d)) = self.node_opt_mut(doc).map(|n| &mut n.data) {
            d.body = Some(body);
        }
        DocumentId(doc)
    }

    /// Add a document to the registry. Registering twice has no effect.
    pub fn register(&mut self, doc: DocumentId) {
        if self.document(doc).is_some() && !self.documents.contains(&doc) {
            self.documents.push(doc);
        }
    }

    /// Registered documents in registration order.
    pub fn documents(&self) -> &[DocumentId] {
        &self.documents
    }

    /// Create a detached element owned by `doc`.
    pub fn create_element(&mut self, doc: DocumentId, element: Element) -> Result<NodeId, DomError> {
        if self.document(doc).is_none() {
            return Err(DomError::NotFound(doc.0));
        }
        Ok(self.alloc(Some(doc.0), NodeData::Element(element)))
    }

    /// Create a detached text node owned by `doc`.
    pub fn create_text(&mut self, doc: DocumentId, text: &str) -> Result<NodeId, DomError> {
        if self.document(doc).is_none() {
            return Err(DomError::NotFound(doc.0));
        }
        Ok(self.alloc(Some(doc.0), NodeData::Text(text.into())))
    }

    /// Append `child` as the last child of `parent`, moving it if it is attached elsewhere.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` into `parent` before `reference`, or last when `reference` is `None`.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> Result<(), DomError> {
        self.check_insert(parent, child)?;
        if let Some(r) = reference {
            if self.parent(r) != Some(parent) {
                return Err(DomError::NotFound(r));
            }
            if r == child {
                return Ok(());
            }
        }
        self.detach(child)?;
        let at = reference.and_then(|r| self.node(parent).children.iter().position(|c| *c == r));
        self.link(parent, child, at);
        Ok(())
    }

    /// Remove `child` from `parent`. The child stays alive, detached.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if !self.is_alive(parent) {
            return Err(DomError::NotFound(parent));
        }
        if self.parent(child) != Some(parent) {
            return Err(DomError::NotFound(child));
        }
        if self.node(parent).flags.contains(NodeFlags::FROZEN) {
            return Err(DomError::NoModificationAllowed(parent));
        }
        self.unlink(parent, child);
        Ok(())
    }

    /// Put `new_child` at the position of `old_child` under `parent`; `old_child` becomes detached.
    pub fn replace_child(
        &mut self,
        parent: NodeId,
        new_child: NodeId,
        old_child: NodeId,
    ) -> Result<(), DomError> {
        self.check_insert(parent, new_child)?;
        if self.parent(old_child) != Some(parent) {
            return Err(DomError::NotFound(old_child));
        }
        if new_child == old_child {
            return Ok(());
        }
        self.detach(new_child)?;
        let Some(at) = self.node(parent).children.iter().position(|c| *c == old_child) else {
            return Err(DomError::NotFound(old_child));
        };
        self.node_mut(parent).children[at] = new_child;
        self.node_mut(old_child).parent = None;
        self.node_mut(new_child).parent = Some(parent);
        self.adopt(new_child, parent);
        Ok(())
    }

    /// Free a detached node and its subtree.
    ///
    /// Handles to any freed node become stale.
    pub fn discard(&mut self, id: NodeId) -> Result<(), DomError> {
        let Some(node) = self.node_opt(id) else {
            return Err(DomError::NotFound(id));
        };
        if matches!(node.data, NodeData::Document(_)) {
            return Err(DomError::InvalidNodeType(id));
        }
        if node.parent.is_some() {
            return Err(DomError::StillAttached(id));
        }
        self.free_subtree(id);
        Ok(())
    }

    /// Returns true if `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node_opt(id).is_some()
    }

    /// Number of live nodes, attached or not, documents included.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Returns true if there are no live nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parent of a node, if it is live and attached.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id)?.parent
    }

    /// Children of a node in order; empty for stale handles.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node_opt(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Payload of a node.
    pub fn data(&self, id: NodeId) -> Option<&NodeData> {
        self.node_opt(id).map(|n| &n.data)
    }

    /// Element payload, if `id` is a live element.
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match self.data(id)? {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut Element, DomError> {
        match self.node_opt_mut(id).map(|n| &mut n.data) {
            Some(NodeData::Element(e)) => Ok(e),
            Some(_) => Err(DomError::InvalidNodeType(id)),
            None => Err(DomError::NotFound(id)),
        }
    }

    fn document(&self, doc: DocumentId) -> Option<&DocumentData> {
        match self.data(doc.0)? {
            NodeData::Document(d) => Some(d),
            _ => None,
        }
    }

    fn document_mut(&mut self, doc: DocumentId) -> Option<&mut DocumentData> {
        match self.node_opt_mut(doc.0).map(|n| &mut n.data) {
            Some(NodeData::Document(d)) => Some(d),
            _ => None,
        }
    }

    /// Document owning `id`. A document owns itself.
    pub fn owner_document(&self, id: NodeId) -> Option<DocumentId> {
        let node = self.node_opt(id)?;
        Some(DocumentId(node.owner.unwrap_or(id)))
    }

    /// Body element of a document.
    pub fn body(&self, doc: DocumentId) -> Option<NodeId> {
        self.document(doc)?.body.filter(|b| self.is_alive(*b))
    }

    /// Replace the body of a document. `None` leaves the document without one.
    pub fn set_body(&mut self, doc: DocumentId, body: Option<NodeId>) {
        if let Some(d) = self.document_mut(doc) {
            d.body = body;
        }
    }

    /// Location of a document.
    pub fn url(&self, doc: DocumentId) -> Option<&str> {
        self.document(doc).map(|d| d.url.as_str())
    }

    /// Focused element of a document.
    pub fn active_element(&self, doc: DocumentId) -> Option<NodeId> {
        self.document(doc)?.active.filter(|a| self.is_alive(*a))
    }

    /// Give focus to an element; it becomes the active element of its document.
    pub fn focus(&mut self, id: NodeId) -> Result<(), DomError> {
        self.element_mut(id)?;
        let doc = self.owner_document(id).ok_or(DomError::NotFound(id))?;
        if let Some(d) = self.document_mut(doc) {
            d.active = Some(id);
        }
        Ok(())
    }

    /// Clear the focus of a document.
    pub fn blur(&mut self, doc: DocumentId) {
        if let Some(d) = self.document_mut(doc) {
            d.active = None;
        }
    }

    /// Record a click on an element.
    pub fn click(&mut self, id: NodeId) -> Result<(), DomError> {
        self.element_mut(id)?;
        self.clicks.push(id);
        Ok(())
    }

    /// Elements clicked so far, oldest first.
    pub fn clicks(&self) -> &[NodeId] {
        &self.clicks
    }

    /// Document shown inside a frame element.
    pub fn content_document(&self, id: NodeId) -> Option<DocumentId> {
        self.element(id)?
            .content_document
            .filter(|d| self.document(*d).is_some())
    }

    /// Attach a document to a frame element.
    pub fn set_content_document(&mut self, frame: NodeId, doc: DocumentId) -> Result<(), DomError> {
        if self.document(doc).is_none() {
            return Err(DomError::NotFound(doc.0));
        }
        self.element_mut(frame)?.content_document = Some(doc);
        Ok(())
    }

    /// Lowercase tag name of an element.
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| e.tag.as_str())
    }

    /// Attribute of an element.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.attribute(name)
    }

    /// Set an attribute on an element.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        self.element_mut(id)?.set_attribute(name, value);
        Ok(())
    }

    /// Class of an element.
    pub fn class_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| e.class_name.as_str())
    }

    /// Replace the class of an element.
    pub fn set_class_name(&mut self, id: NodeId, class: &str) -> Result<(), DomError> {
        self.element_mut(id)?.class_name = class.into();
        Ok(())
    }

    /// Concatenated text of a node and its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.node_opt(id) else {
            return;
        };
        if let NodeData::Text(t) = &node.data {
            out.push_str(t);
        }
        for c in &node.children {
            self.collect_text(*c, out);
        }
    }

    /// Layout of a node.
    pub fn layout(&self, id: NodeId) -> Option<Layout> {
        self.node_opt(id).map(|n| n.layout)
    }

    /// Update the offset relative to the offset parent.
    pub fn set_offset(&mut self, id: NodeId, offset: Vec2) {
        if let Some(n) = self.node_opt_mut(id) {
            n.layout.offset = offset;
        }
    }

    /// Update the scroll position.
    pub fn set_scroll(&mut self, id: NodeId, scroll: Vec2) {
        if let Some(n) = self.node_opt_mut(id) {
            n.layout.scroll = scroll;
        }
    }

    /// Update the scrollable content size.
    pub fn set_scroll_size(&mut self, id: NodeId, size: Size) {
        if let Some(n) = self.node_opt_mut(id) {
            n.layout.scroll_size = size;
        }
    }

    /// Flags of a node; empty for stale handles.
    pub fn flags(&self, id: NodeId) -> NodeFlags {
        self.node_opt(id).map(|n| n.flags).unwrap_or_default()
    }

    /// Replace the flags of a node.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        if let Some(n) = self.node_opt_mut(id) {
            n.flags = flags;
        }
    }

    /// The element that `id`'s offset is relative to.
    ///
    /// This is the nearest positioned ancestor, or the body. The body itself,
    /// detached elements, and elements outside the body have none.
    pub fn offset_parent(&self, id: NodeId) -> Option<NodeId> {
        self.element(id)?;
        let body = self.body(self.owner_document(id)?);
        if body == Some(id) {
            return None;
        }
        let mut cur = self.parent(id);
        while let Some(p) = cur {
            if Some(p) == body {
                return body;
            }
            if self.element(p).is_none() {
                return None;
            }
            if self.flags(p).contains(NodeFlags::POSITIONED) {
                return Some(p);
            }
            cur = self.parent(p);
        }
        None
    }

    /// Returns true if the node is attached to its document.
    pub fn is_connected(&self, id: NodeId) -> bool {
        let mut cur = Some(id);
        while let Some(n) = cur {
            if matches!(self.data(n), Some(NodeData::Document(_))) {
                return true;
            }
            cur = self.parent(n);
        }
        false
    }

    /// Elements of a document in tree order.
    pub fn elements(&self, doc: DocumentId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if self.document(doc).is_some() {
            let mut stack: Vec<NodeId> = self.children(doc.0).iter().rev().copied().collect();
            while let Some(id) = stack.pop() {
                if self.element(id).is_some() {
                    out.push(id);
                }
                stack.extend(self.children(id).iter().rev().copied());
            }
        }
        out
    }

    // --- internals ---

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        self.nodes
            .get(id.idx())?
            .as_ref()
            .filter(|n| n.generation == id.1)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    /// Access a live node; panics if `id` is stale. Callers check liveness first.
    fn node(&self, id: NodeId) -> &Node {
        self.node_opt(id).expect("dangling NodeId")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.node_opt_mut(id).expect("dangling NodeId")
    }

    fn check_insert(&self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        let p = self.node_opt(parent).ok_or(DomError::NotFound(parent))?;
        let c = self.node_opt(child).ok_or(DomError::NotFound(child))?;
        if matches!(p.data, NodeData::Text(_)) {
            return Err(DomError::HierarchyRequest(parent));
        }
        if matches!(c.data, NodeData::Document(_)) {
            return Err(DomError::HierarchyRequest(child));
        }
        let mut cur = Some(parent);
        while let Some(n) = cur {
            if n == child {
                return Err(DomError::HierarchyRequest(child));
            }
            cur = self.parent(n);
        }
        if p.flags.contains(NodeFlags::FROZEN) {
            return Err(DomError::NoModificationAllowed(parent));
        }
        Ok(())
    }

    /// Detach `id` from its current parent, if any.
    fn detach(&mut self, id: NodeId) -> Result<(), DomError> {
        if let Some(old) = self.parent(id) {
            if self.node(old).flags.contains(NodeFlags::FROZEN) {
                return Err(DomError::NoModificationAllowed(old));
            }
            self.unlink(old, id);
        }
        Ok(())
    }

    fn link(&mut self, parent: NodeId, child: NodeId, at: Option<usize>) {
        let children = &mut self.node_mut(parent).children;
        match at {
            Some(i) => children.insert(i, child),
            None => children.push(child),
        }
        self.node_mut(child).parent = Some(parent);
        self.adopt(child, parent);
    }

    fn unlink(&mut self, parent: NodeId, child: NodeId) {
        self.node_mut(parent).children.retain(|c| *c != child);
        self.node_mut(child).parent = None;
    }

    /// Move the owner of `id`'s subtree to the document of `parent`.
    fn adopt(&mut self, id: NodeId, parent: NodeId) {
        let Some(owner) = self.owner_document(parent).map(|d| d.0) else {
            return;
        };
        if self.node(id).owner == Some(owner) {
            return;
        }
        let mut stack = alloc::vec![id];
        while let Some(n) = stack.pop() {
            let node = self.node_mut(n);
            node.owner = Some(owner);
            stack.extend(node.children.iter().copied());
        }
    }

    fn free_subtree(&mut self, id: NodeId) {
        let children = core::mem::take(&mut self.node_mut(id).children);
        for c in children {
            self.free_subtree(c);
        }
        for d in self.documents.clone() {
            if let Some(doc) = self.document_mut(d) {
                if doc.active == Some(id) {
                    doc.active = None;
                }
            }
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn doc_with_links(n: usize) -> (Tree, DocumentId, Vec<NodeId>) {
        let mut tree = Tree::new();
        let doc = tree.create_document("https://example.org/");
        tree.register(doc);
        let body = tree.body(doc).unwrap();
        let links = (0..n)
            .map(|_| {
                let a = tree
                    .create_element(doc, Element::new("a").with_attribute("href", "/x"))
                    .unwrap();
                tree.append_child(body, a).unwrap();
                a
            })
            .collect();
        (tree, doc, links)
    }

    #[test]
    fn document_has_body() {
        let mut tree = Tree::new();
        let doc = tree.create_document("about:blank");
        let body = tree.body(doc).expect("new documents get a body");
        assert_eq!(tree.tag_name(body), Some("body"));
        assert_eq!(tree.parent(body), Some(doc.node()));
        assert_eq!(tree.owner_document(body), Some(doc));
        assert!(tree.documents().is_empty(), "creation does not register");
        tree.register(doc);
        tree.register(doc);
        assert_eq!(tree.documents(), &[doc]);
    }

    #[test]
    fn replace_keeps_sibling_position() {
        let (mut tree, doc, links) = doc_with_links(3);
        let body = tree.body(doc).unwrap();
        let span = tree.create_element(doc, Element::new("span")).unwrap();
        tree.replace_child(body, span, links[1]).unwrap();
        assert_eq!(tree.children(body), &[links[0], span, links[2]]);
        assert_eq!(tree.parent(links[1]), None);

        tree.append_child(span, links[1]).unwrap();
        assert_eq!(tree.children(span), &[links[1]]);

        tree.remove_child(span, links[1]).unwrap();
        tree.replace_child(body, links[1], span).unwrap();
        assert_eq!(tree.children(body), links.as_slice());
        assert_eq!(tree.parent(span), None);
    }

    #[test]
    fn append_moves_between_parents() {
        let (mut tree, doc, links) = doc_with_links(2);
        let body = tree.body(doc).unwrap();
        tree.append_child(links[0], links[1]).unwrap();
        assert_eq!(tree.children(body), &[links[0]]);
        assert_eq!(tree.children(links[0]), &[links[1]]);
    }

    #[test]
    fn insert_before_reference() {
        let (mut tree, doc, links) = doc_with_links(2);
        let body = tree.body(doc).unwrap();
        let p = tree.create_element(doc, Element::new("p")).unwrap();
        tree.insert_before(body, p, Some(links[1])).unwrap();
        assert_eq!(tree.children(body), &[links[0], p, links[1]]);
        let err = tree.insert_before(body, p, Some(doc.node()));
        assert_eq!(err, Err(DomError::NotFound(doc.node())));
    }

    #[test]
    fn cycles_are_rejected() {
        let (mut tree, doc, links) = doc_with_links(1);
        let body = tree.body(doc).unwrap();
        assert_eq!(
            tree.append_child(links[0], body),
            Err(DomError::HierarchyRequest(body))
        );
        assert_eq!(
            tree.append_child(links[0], links[0]),
            Err(DomError::HierarchyRequest(links[0]))
        );
        let text = tree.create_text(doc, "x").unwrap();
        assert_eq!(
            tree.append_child(text, links[0]),
            Err(DomError::HierarchyRequest(text))
        );
    }

    #[test]
    fn frozen_parent_refuses_changes() {
        let (mut tree, doc, links) = doc_with_links(1);
        let body = tree.body(doc).unwrap();
        tree.set_flags(body, NodeFlags::FROZEN);
        let span = tree.create_element(doc, Element::new("span")).unwrap();
        assert_eq!(
            tree.replace_child(body, span, links[0]),
            Err(DomError::NoModificationAllowed(body))
        );
        assert_eq!(
            tree.remove_child(body, links[0]),
            Err(DomError::NoModificationAllowed(body))
        );
        assert_eq!(
            tree.append_child(span, links[0]),
            Err(DomError::NoModificationAllowed(body)),
            "moving out of a frozen parent is a modification of it"
        );
        assert_eq!(tree.children(body), links.as_slice());
    }

    #[test]
    fn remove_requires_actual_parent() {
        let (mut tree, doc, links) = doc_with_links(1);
        let span = tree.create_element(doc, Element::new("span")).unwrap();
        assert_eq!(
            tree.remove_child(span, links[0]),
            Err(DomError::NotFound(links[0]))
        );
    }

    #[test]
    fn discard_frees_subtree_and_stales_handles() {
        let (mut tree, doc, _) = doc_with_links(0);
        let before = tree.len();
        let div = tree.create_element(doc, Element::new("div")).unwrap();
        let text = tree.create_text(doc, "ab").unwrap();
        tree.append_child(div, text).unwrap();
        assert_eq!(tree.text_content(div), "ab");
        assert_eq!(tree.len(), before + 2);

        let body = tree.body(doc).unwrap();
        tree.append_child(body, div).unwrap();
        assert_eq!(tree.discard(div), Err(DomError::StillAttached(div)));
        tree.remove_child(body, div).unwrap();
        tree.discard(div).unwrap();
        assert_eq!(tree.len(), before);
        assert!(!tree.is_alive(div));
        assert!(!tree.is_alive(text));

        let reused = tree.create_element(doc, Element::new("div")).unwrap();
        assert!(!tree.is_alive(div), "stale handle must not alias the reused slot");
        if reused.0 == div.0 || reused.0 == text.0 {
            assert!(reused.1 > 1, "generation must increase on reuse");
        }
        assert_eq!(
            tree.discard(doc.node()),
            Err(DomError::InvalidNodeType(doc.node()))
        );
    }

    #[test]
    fn offset_parent_prefers_positioned_ancestor() {
        let (mut tree, doc, _) = doc_with_links(0);
        let body = tree.body(doc).unwrap();
        let outer = tree.create_element(doc, Element::new("div")).unwrap();
        let inner = tree.create_element(doc, Element::new("div")).unwrap();
        let a = tree.create_element(doc, Element::new("a")).unwrap();
        tree.append_child(body, outer).unwrap();
        tree.append_child(outer, inner).unwrap();
        tree.append_child(inner, a).unwrap();

        assert_eq!(tree.offset_parent(a), Some(body));
        tree.set_flags(outer, NodeFlags::POSITIONED);
        assert_eq!(tree.offset_parent(a), Some(outer));
        assert_eq!(tree.offset_parent(outer), Some(body));
        assert_eq!(tree.offset_parent(body), None);

        tree.remove_child(body, outer).unwrap();
        assert_eq!(tree.offset_parent(outer), None, "detached elements have none");
        assert!(!tree.is_connected(a));
    }

    #[test]
    fn elements_in_tree_order_across_nesting() {
        let (mut tree, doc, links) = doc_with_links(2);
        let b = tree.create_element(doc, Element::new("b")).unwrap();
        let t = tree.create_text(doc, "hi").unwrap();
        tree.append_child(links[0], b).unwrap();
        tree.append_child(links[0], t).unwrap();
        let body = tree.body(doc).unwrap();
        assert_eq!(tree.elements(doc), vec![body, links[0], b, links[1]]);
    }

    #[test]
    fn focus_click_and_frames() {
        let (mut tree, doc, links) = doc_with_links(1);
        tree.focus(links[0]).unwrap();
        assert_eq!(tree.active_element(doc), Some(links[0]));
        tree.blur(doc);
        assert_eq!(tree.active_element(doc), None);

        tree.click(links[0]).unwrap();
        assert_eq!(tree.clicks(), &[links[0]]);
        let text = tree.create_text(doc, "x").unwrap();
        assert_eq!(tree.click(text), Err(DomError::InvalidNodeType(text)));

        let inner = tree.create_document("https://example.org/frame");
        tree.set_content_document(links[0], inner).unwrap();
        assert_eq!(tree.content_document(links[0]), Some(inner));
    }

    #[test]
    fn adoption_moves_owner() {
        let mut tree = Tree::new();
        let a = tree.create_document("https://a.example/");
        let b = tree.create_document("https://b.example/");
        let div = tree.create_element(a, Element::new("div")).unwrap();
        let body_b = tree.body(b).unwrap();
        tree.append_child(body_b, div).unwrap();
        assert_eq!(tree.owner_document(div), Some(b));
    }

    #[test]
    fn attributes_are_case_insensitive() {
        let (mut tree, _, links) = doc_with_links(1);
        assert_eq!(tree.attribute(links[0], "HREF"), Some("/x"));
        tree.set_attribute(links[0], "Href", "/y").unwrap();
        assert_eq!(tree.attribute(links[0], "href"), Some("/y"));
        assert_eq!(tree.element(links[0]).unwrap().attributes.len(), 1);
    }
}
