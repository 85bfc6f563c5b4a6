//! Search nodes.
//!
//! A [`Node`] records a state reached during search, the action that reached
//! it, and the node it was expanded from. Parent links only ever point toward
//! the root, so the nodes of one search form a tree. Nodes are stored in a
//! [`NodeArena`] and refer to their parent by [`NodeId`].

use core::fmt;

/// Index of a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new node ID.
    #[must_use]
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns the raw index value.
    #[must_use]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node_{}", self.0)
    }
}

/// A search state together with how it was reached.
///
/// The root of a search has neither parent nor action. Every other node was
/// produced by expanding its parent through `action`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<S, A> {
    state: S,
    parent: Option<NodeId>,
    action: Option<A>,
}

impl<S, A> Node<S, A> {
    /// Creates a new node.
    #[must_use]
    pub fn new(state: S, parent: Option<NodeId>, action: Option<A>) -> Self {
        Self {
            state,
            parent,
            action,
        }
    }

    /// Creates a root node with no parent and no action.
    #[must_use]
    pub fn root(state: S) -> Self {
        Self::new(state, None, None)
    }

    /// Creates a node reached from `parent` through `action`.
    #[must_use]
    pub fn child(state: S, parent: NodeId, action: A) -> Self {
        Self::new(state, Some(parent), Some(action))
    }

    /// Returns the node's state.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Returns the parent node, if any.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the action that produced this node, if any.
    #[must_use]
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    /// Returns `true` if this node has no parent.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Append-only storage for the nodes of a single search.
///
/// The arena is owned by one search invocation. When the search returns the
/// arena is dropped and every node with it.
#[derive(Debug, Clone)]
pub struct NodeArena<S, A> {
    nodes: Vec<Node<S, A>>,
    /// Hop count from the root, parallel to `nodes`.
    depths: Vec<usize>,
}

impl<S, A> Default for NodeArena<S, A> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            depths: Vec::new(),
        }
    }
}

impl<S, A> NodeArena<S, A> {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `node` and returns its ID.
    ///
    /// A node whose parent is not in this arena is stored at depth zero.
    pub fn push(&mut self, node: Node<S, A>) -> NodeId {
        let depth = node
            .parent
            .and_then(|parent| self.depths.get(parent.0))
            .map_or(0, |depth| depth + 1);
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        self.depths.push(depth);
        id
    }

    /// Returns the node with the given ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node<S, A>> {
        self.nodes.get(id.0)
    }

    /// Returns the number of hops between the root and the node.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        self.depths.get(id.0).copied()
    }

    /// Returns the number of stored nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no node has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S: Clone, A: Clone> NodeArena<S, A> {
    /// Returns the `(action, state)` steps leading from the root to `id`.
    ///
    /// Nodes without an action (the root) contribute no step, so the result
    /// has one entry per hop and starts with the root's first hop.
    #[must_use]
    pub fn path_to(&self, id: NodeId) -> Vec<(A, S)> {
        let mut steps = Vec::new();
        let mut current = self.get(id);
        while let Some(node) = current {
            if let Some(action) = &node.action {
                steps.push((action.clone(), node.state.clone()));
            }
            current = node.parent.and_then(|parent| self.get(parent));
        }
        steps.reverse();
        steps
    }
}
