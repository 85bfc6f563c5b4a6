//! Frontiers of not-yet-expanded nodes.
//!
//! The removal order of the frontier is the only thing that distinguishes a
//! breadth-first search from a depth-first one, so it lives behind the
//! [`Frontier`] trait:
//!
//! - [`QueueFrontier`] removes the earliest-added node (FIFO). Required for
//!   shortest paths.
//! - [`StackFrontier`] removes the most recently added node (LIFO).
//!
//! Both keep a count of in-flight states next to the ordered container so that
//! [`Frontier::contains_state`] does not scan.

use core::hash::Hash;
use std::collections::VecDeque;

use hashbrown::HashMap;

use crate::node::Node;

/// Errors returned by frontier operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FrontierError {
    /// Removal was attempted on an empty frontier.
    #[error("cannot remove from an empty frontier")]
    Empty,
}

/// A container of discovered but not yet expanded nodes.
pub trait Frontier<S, A> {
    /// Inserts a node. Never fails and never deduplicates.
    fn add(&mut self, node: Node<S, A>);

    /// Returns `true` if no nodes are stored.
    fn is_empty(&self) -> bool;

    /// Returns `true` if some stored node has the given state.
    fn contains_state(&self, state: &S) -> bool;

    /// Removes the next node in this frontier's order.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::Empty`] if the frontier holds no nodes.
    fn remove(&mut self) -> Result<Node<S, A>, FrontierError>;

    /// Returns the number of stored nodes.
    fn len(&self) -> usize;
}

/// Multiset of the states currently held by a frontier.
#[derive(Debug, Clone)]
struct StateCounts<S> {
    counts: HashMap<S, usize>,
}

impl<S> Default for StateCounts<S> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

impl<S: Eq + Hash + Clone> StateCounts<S> {
    fn insert(&mut self, state: &S) {
        match self.counts.get_mut(state) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(state.clone(), 1);
            }
        }
    }

    fn release(&mut self, state: &S) {
        if let Some(count) = self.counts.get_mut(state) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(state);
            }
        }
    }

    fn contains(&self, state: &S) -> bool {
        self.counts.contains_key(state)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// QueueFrontier
// ─────────────────────────────────────────────────────────────────────────────

/// First-in first-out frontier used by breadth-first search.
#[derive(Debug, Clone)]
pub struct QueueFrontier<S, A> {
    nodes: VecDeque<Node<S, A>>,
    states: StateCounts<S>,
}

impl<S, A> Default for QueueFrontier<S, A> {
    fn default() -> Self {
        Self {
            nodes: VecDeque::new(),
            states: StateCounts::default(),
        }
    }
}

impl<S, A> QueueFrontier<S, A> {
    /// Creates an empty queue frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Eq + Hash + Clone, A> Frontier<S, A> for QueueFrontier<S, A> {
    fn add(&mut self, node: Node<S, A>) {
        self.states.insert(node.state());
        self.nodes.push_back(node);
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn contains_state(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    fn remove(&mut self) -> Result<Node<S, A>, FrontierError> {
        let node = self.nodes.pop_front().ok_or(FrontierError::Empty)?;
        self.states.release(node.state());
        Ok(node)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// StackFrontier
// ─────────────────────────────────────────────────────────────────────────────

/// Last-in first-out frontier giving depth-first exploration order.
///
/// Paths found with this frontier are valid but not necessarily shortest.
#[derive(Debug, Clone)]
pub struct StackFrontier<S, A> {
    nodes: Vec<Node<S, A>>,
    states: StateCounts<S>,
}

impl<S, A> Default for StackFrontier<S, A> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            states: StateCounts::default(),
        }
    }
}

impl<S, A> StackFrontier<S, A> {
    /// Creates an empty stack frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Eq + Hash + Clone, A> Frontier<S, A> for StackFrontier<S, A> {
    fn add(&mut self, node: Node<S, A>) {
        self.states.insert(node.state());
        self.nodes.push(node);
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn contains_state(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    fn remove(&mut self) -> Result<Node<S, A>, FrontierError> {
        let node = self.nodes.pop().ok_or(FrontierError::Empty)?;
        self.states.release(node.state());
        Ok(node)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}
