//! Frontier-based shortest-path search (Layer 1).
//!
//! `degrees_search` finds the fewest-hop connection between two states of an
//! implicit graph. The graph is never materialized: an [`AdjacencyProvider`]
//! answers "who is one hop away, and through what?" on demand, and the
//! [`SearchEngine`] drives a breadth-first search over those answers.
//!
//! # Core Concepts
//!
//! - [`Node`] - Immutable search state with its producing action and parent
//! - [`NodeArena`] - Per-search storage addressing nodes by [`NodeId`]
//! - [`Frontier`] - Pending nodes, removed in [`QueueFrontier`] (FIFO) or
//!   [`StackFrontier`] (LIFO) order
//! - [`AdjacencyProvider`] - One-hop neighbors of a state
//! - [`SearchEngine`] - The search loop and path reconstruction
//!
//! # Example
//!
//! ```
//! use degrees_search::{Memberships, SearchEngine};
//!
//! let mut graph = Memberships::new();
//! graph.add_membership("A", "g1");
//! graph.add_membership("B", "g1");
//! graph.add_membership("B", "g2");
//! graph.add_membership("C", "g2");
//!
//! let engine = SearchEngine::new(&graph);
//! let path = engine.shortest_path(&"A", &"C").unwrap();
//! assert_eq!(path, Some(vec![("g1", "B"), ("g2", "C")]));
//! ```
//!
//! # Architecture
//!
//! - **Layer 1** (`degrees_search`): search primitives (this crate)
//! - **Layer 2** (`degrees_data`): person/movie tables and loaders
//! - **Layer 3** (`degrees_cli`): the interactive command-line tool

/// One-hop neighbor providers.
pub mod adjacency;

/// Pending-work containers with swappable removal order.
pub mod frontier;

/// Search nodes and their per-search arena.
pub mod node;

/// The search engine.
pub mod search;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::adjacency::{AdjacencyProvider, Memberships};
    pub use crate::frontier::{Frontier, FrontierError, QueueFrontier, StackFrontier};
    pub use crate::node::{Node, NodeArena, NodeId};
    pub use crate::search::{
        Path, SearchEngine, SearchError, SearchLimits, SearchOutcome, SearchStats, shortest_path,
    };
}

// Re-export key types at crate root for convenience
pub use adjacency::{AdjacencyProvider, Memberships};
pub use frontier::{Frontier, FrontierError, QueueFrontier, StackFrontier};
pub use node::{Node, NodeArena, NodeId};
pub use search::{
    Path, SearchEngine, SearchError, SearchLimits, SearchOutcome, SearchStats, shortest_path,
};
