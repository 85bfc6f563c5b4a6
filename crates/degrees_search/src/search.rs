//! The search engine.
//!
//! [`SearchEngine`] runs the frontier loop over an [`AdjacencyProvider`]:
//! remove a node, mark its state explored, and for each neighbor either stop
//! (the neighbor is the target) or enqueue a child node if the neighbor is
//! neither explored nor already waiting in the frontier. With a
//! [`QueueFrontier`] nodes are expanded in non-decreasing distance order, so
//! the first time the target is seen it is seen through a shortest path.
//!
//! # Example
//!
//! ```
//! use degrees_search::{Memberships, SearchEngine, SearchLimits};
//!
//! let mut graph = Memberships::new();
//! graph.add_membership(1, "g1").add_membership(2, "g1").add_entity(3);
//!
//! let engine = SearchEngine::new(&graph).with_limits(SearchLimits::new().with_max_depth(6));
//! assert_eq!(engine.shortest_path(&1, &2).unwrap(), Some(vec![("g1", 2)]));
//! assert_eq!(engine.shortest_path(&1, &1).unwrap(), Some(vec![]));
//! assert_eq!(engine.shortest_path(&1, &3).unwrap(), None);
//! ```

use hashbrown::HashSet;

use crate::adjacency::AdjacencyProvider;
use crate::frontier::{Frontier, FrontierError, QueueFrontier};
use crate::node::{Node, NodeArena};

/// Ordered `(action, state)` steps from the source (exclusive) to the target.
///
/// Its length is the degree of separation. Step `i` means the state ending
/// step `i - 1` (or the source, for `i == 0`) and step `i`'s state share the
/// group named by step `i`'s action.
pub type Path<S, A> = Vec<(A, S)>;

/// Errors that can occur during a search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The source state is not known to the provider.
    #[error("unknown source: {0}")]
    UnknownSource(String),
    /// The target state is not known to the provider.
    #[error("unknown target: {0}")]
    UnknownTarget(String),
    /// The search expanded more nodes than its limits allow.
    #[error("search limit exceeded: expanded {expanded} nodes (max {max})")]
    LimitExceeded {
        /// Nodes expanded before giving up.
        expanded: usize,
        /// The configured maximum.
        max: usize,
    },
}

/// Optional bounds on a single search.
///
/// Unbounded by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of nodes to expand before failing with
    /// [`SearchError::LimitExceeded`].
    pub max_expanded: Option<usize>,
    /// Maximum path length to consider. Longer connections are reported as
    /// no path.
    pub max_depth: Option<usize>,
}

impl SearchLimits {
    /// Creates unbounded limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of expanded nodes.
    #[must_use]
    pub fn with_max_expanded(mut self, max: usize) -> Self {
        self.max_expanded = Some(max);
        self
    }

    /// Sets the maximum path length.
    #[must_use]
    pub fn with_max_depth(mut self, max: usize) -> Self {
        self.max_depth = Some(max);
        self
    }

    fn allows_depth(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth <= max)
    }
}

/// Counters collected during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes removed from the frontier and expanded.
    pub nodes_expanded: usize,
    /// Child nodes added to the frontier.
    pub nodes_created: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

/// Result of a search together with its counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<S, A> {
    /// The path found, or `None` if the target is unreachable.
    pub path: Option<Path<S, A>>,
    /// Counters for this search.
    pub stats: SearchStats,
}

impl<S, A> SearchOutcome<S, A> {
    /// Returns the degree of separation, if connected.
    #[must_use]
    pub fn degrees(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }
}

/// Searches for connections over a borrowed [`AdjacencyProvider`].
///
/// The engine holds no per-search state: every call owns a fresh frontier,
/// explored-set and node arena, so one engine can serve any number of
/// searches.
#[derive(Debug)]
pub struct SearchEngine<'a, P: ?Sized> {
    provider: &'a P,
    limits: SearchLimits,
}

impl<'a, P: AdjacencyProvider + ?Sized> SearchEngine<'a, P> {
    /// Creates an unbounded engine over `provider`.
    #[must_use]
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            limits: SearchLimits::default(),
        }
    }

    /// Sets the limits applied to each search.
    #[must_use]
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Finds a shortest path from `source` to `target`.
    ///
    /// Returns `Ok(Some(vec![]))` when `source == target` and `Ok(None)` when
    /// the target is unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownSource`] or [`SearchError::UnknownTarget`]
    /// if either state is absent from the provider, and
    /// [`SearchError::LimitExceeded`] if the expansion budget runs out.
    pub fn shortest_path(
        &self,
        source: &P::State,
        target: &P::State,
    ) -> Result<Option<Path<P::State, P::Action>>, SearchError> {
        self.shortest_path_with_stats(source, target)
            .map(|outcome| outcome.path)
    }

    /// Like [`shortest_path`](Self::shortest_path), also returning counters.
    ///
    /// # Errors
    ///
    /// See [`shortest_path`](Self::shortest_path).
    pub fn shortest_path_with_stats(
        &self,
        source: &P::State,
        target: &P::State,
    ) -> Result<SearchOutcome<P::State, P::Action>, SearchError> {
        self.search_with::<QueueFrontier<P::State, P::Action>>(source, target)
    }

    /// Runs the search loop with the frontier type `F`.
    ///
    /// Only a FIFO frontier guarantees a shortest path; other orders return
    /// some valid path.
    ///
    /// # Errors
    ///
    /// See [`shortest_path`](Self::shortest_path).
    pub fn search_with<F>(
        &self,
        source: &P::State,
        target: &P::State,
    ) -> Result<SearchOutcome<P::State, P::Action>, SearchError>
    where
        F: Frontier<P::State, P::Action> + Default,
    {
        let _span = tracing::debug_span!("search", %source, %target).entered();

        if !self.provider.contains(source) {
            return Err(SearchError::UnknownSource(source.to_string()));
        }
        if !self.provider.contains(target) {
            return Err(SearchError::UnknownTarget(target.to_string()));
        }

        let mut stats = SearchStats::default();
        if source == target {
            return Ok(SearchOutcome {
                path: Some(Vec::new()),
                stats,
            });
        }

        let mut frontier = F::default();
        frontier.add(Node::root(source.clone()));
        stats.max_frontier = frontier.len();

        let mut arena = NodeArena::new();
        let mut explored = HashSet::new();

        loop {
            if frontier.is_empty() {
                tracing::debug!(expanded = stats.nodes_expanded, "no path");
                return Ok(SearchOutcome { path: None, stats });
            }

            if let Some(max) = self.limits.max_expanded
                && stats.nodes_expanded >= max
            {
                tracing::debug!(expanded = stats.nodes_expanded, max, "search limit exceeded");
                return Err(SearchError::LimitExceeded {
                    expanded: stats.nodes_expanded,
                    max,
                });
            }

            let node = match frontier.remove() {
                Ok(node) => node,
                Err(FrontierError::Empty) => continue,
            };
            explored.insert(node.state().clone());
            let id = arena.push(node);
            stats.nodes_expanded += 1;

            let depth = arena.depth(id).unwrap_or_default();
            if !self.limits.allows_depth(depth + 1) {
                continue;
            }

            let Some(current) = arena.get(id) else {
                continue;
            };
            let neighbors = self.provider.neighbors(current.state());

            for (action, neighbor) in neighbors {
                if neighbor == *target {
                    let mut path = arena.path_to(id);
                    path.push((action, neighbor));
                    tracing::debug!(
                        expanded = stats.nodes_expanded,
                        degrees = path.len(),
                        "path found"
                    );
                    return Ok(SearchOutcome {
                        path: Some(path),
                        stats,
                    });
                }

                if !explored.contains(&neighbor) && !frontier.contains_state(&neighbor) {
                    frontier.add(Node::child(neighbor, id, action));
                    stats.nodes_created += 1;
                }
            }

            stats.max_frontier = stats.max_frontier.max(frontier.len());
        }
    }
}

/// Finds a shortest path over `provider` with no limits.
///
/// # Errors
///
/// See [`SearchEngine::shortest_path`].
pub fn shortest_path<P: AdjacencyProvider + ?Sized>(
    provider: &P,
    source: &P::State,
    target: &P::State,
) -> Result<Option<Path<P::State, P::Action>>, SearchError> {
    SearchEngine::new(provider).shortest_path(source, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::Memberships;
    use crate::frontier::StackFrontier;

    fn chain() -> Memberships<&'static str, &'static str> {
        let mut graph = Memberships::new();
        graph
            .add_membership("A", "g1")
            .add_membership("B", "g1")
            .add_membership("B", "g2")
            .add_membership("C", "g2")
            .add_entity("D");
        graph
    }

    #[test]
    fn two_hop_path() {
        let graph = chain();
        let path = shortest_path(&graph, &"A", &"C").unwrap();
        assert_eq!(path, Some(vec![("g1", "B"), ("g2", "C")]));
    }

    #[test]
    fn one_hop_path() {
        let graph = chain();
        let path = shortest_path(&graph, &"A", &"B").unwrap();
        assert_eq!(path, Some(vec![("g1", "B")]));
    }

    #[test]
    fn same_source_and_target_is_empty_path() {
        let graph = chain();
        assert_eq!(shortest_path(&graph, &"A", &"A").unwrap(), Some(vec![]));
        assert_eq!(shortest_path(&graph, &"D", &"D").unwrap(), Some(vec![]));
    }

    #[test]
    fn disconnected_target_has_no_path() {
        let graph = chain();
        assert_eq!(shortest_path(&graph, &"A", &"D").unwrap(), None);
        assert_eq!(shortest_path(&graph, &"D", &"A").unwrap(), None);
    }

    #[test]
    fn unknown_states_fail_fast() {
        let graph = chain();
        assert_eq!(
            shortest_path(&graph, &"Z", &"A"),
            Err(SearchError::UnknownSource("Z".to_string()))
        );
        assert_eq!(
            shortest_path(&graph, &"A", &"Z"),
            Err(SearchError::UnknownTarget("Z".to_string()))
        );
        assert_eq!(
            shortest_path(&graph, &"Z", &"Z"),
            Err(SearchError::UnknownSource("Z".to_string()))
        );
    }

    #[test]
    fn shorter_route_wins_over_earlier_long_route() {
        // A reaches E through a long chain in g1..g3 and directly through g9.
        let mut graph = Memberships::new();
        graph
            .add_membership("A", "g1")
            .add_membership("B", "g1")
            .add_membership("B", "g2")
            .add_membership("C", "g2")
            .add_membership("C", "g3")
            .add_membership("E", "g3")
            .add_membership("A", "g9")
            .add_membership("E", "g9");

        let path = shortest_path(&graph, &"A", &"E").unwrap();
        assert_eq!(path, Some(vec![("g9", "E")]));
    }

    #[test]
    fn stats_are_recorded() {
        let graph = chain();
        let outcome = SearchEngine::new(&graph)
            .shortest_path_with_stats(&"A", &"C")
            .unwrap();
        assert_eq!(outcome.degrees(), Some(2));
        assert_eq!(outcome.stats.nodes_expanded, 2);
        assert!(outcome.stats.nodes_created >= 1);
        assert!(outcome.stats.max_frontier >= 1);
    }

    #[test]
    fn stack_frontier_finds_a_valid_path() {
        let graph = chain();
        let outcome = SearchEngine::new(&graph)
            .search_with::<StackFrontier<_, _>>(&"A", &"C")
            .unwrap();
        let path = outcome.path.unwrap();
        assert_eq!(path.last(), Some(&("g2", "C")));

        let mut previous = "A";
        for (group, entity) in &path {
            assert!(graph.is_member(&previous, group));
            assert!(graph.is_member(entity, group));
            previous = *entity;
        }
    }

    #[test]
    fn depth_limit_hides_longer_paths() {
        let graph = chain();
        let engine = SearchEngine::new(&graph).with_limits(SearchLimits::new().with_max_depth(1));
        assert_eq!(engine.shortest_path(&"A", &"B").unwrap(), Some(vec![("g1", "B")]));
        assert_eq!(engine.shortest_path(&"A", &"C").unwrap(), None);

        let engine = SearchEngine::new(&graph).with_limits(SearchLimits::new().with_max_depth(0));
        assert_eq!(engine.shortest_path(&"A", &"B").unwrap(), None);
        assert_eq!(engine.shortest_path(&"A", &"A").unwrap(), Some(vec![]));
    }

    #[test]
    fn expansion_limit_is_enforced() {
        let graph = chain();
        let engine =
            SearchEngine::new(&graph).with_limits(SearchLimits::new().with_max_expanded(1));
        assert_eq!(
            engine.shortest_path(&"A", &"C"),
            Err(SearchError::LimitExceeded {
                expanded: 1,
                max: 1
            })
        );
        assert_eq!(engine.shortest_path(&"A", &"B").unwrap(), Some(vec![("g1", "B")]));
    }

    #[test]
    fn search_error_display() {
        assert_eq!(
            SearchError::UnknownSource("42".into()).to_string(),
            "unknown source: 42"
        );
        assert_eq!(
            SearchError::LimitExceeded {
                expanded: 10,
                max: 10
            }
            .to_string(),
            "search limit exceeded: expanded 10 nodes (max 10)"
        );
    }
}
