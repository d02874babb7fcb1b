// Copyright 2025 the Overmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mutation errors, named after their DOM counterparts.

use crate::types::NodeId;

/// Why a tree operation was refused.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DomError {
    /// The handle is stale, or the node is not where the operation expects it
    /// (for example, not a child of the given parent).
    #[error("node {0:?} not found")]
    NotFound(NodeId),
    /// The operation would produce an invalid tree: a cycle, a child under a
    /// text node, or a document node as a child.
    #[error("invalid hierarchy at node {0:?}")]
    HierarchyRequest(NodeId),
    /// The node's child list is frozen.
    #[error("node {0:?} cannot be modified")]
    NoModificationAllowed(NodeId),
    /// Only detached nodes may be discarded.
    #[error("node {0:?} is still attached")]
    StillAttached(NodeId),
    /// The node is of the wrong kind for the operation.
    #[error("node {0:?} has the wrong type")]
    InvalidNodeType(NodeId),
}

impl DomError {
    /// The node the error is about.
    pub fn node(self) -> NodeId {
        match self {
            Self::NotFound(id)
            | Self::HierarchyRequest(id)
            | Self::NoModificationAllowed(id)
            | Self::StillAttached(id)
            | Self::InvalidNodeType(id) => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_node() {
        let id = NodeId::new(3, 1);
        let err = DomError::StillAttached(id);
        assert_eq!(err.node(), id, "error should carry its node");
        assert_eq!(
            err.to_string(),
            alloc::format!("node {id:?} is still attached"),
            "message should name the node"
        );
        let boxed: &dyn core::error::Error = &DomError::NotFound(id);
        assert!(boxed.source().is_none(), "tree errors have no source");
    }
}
