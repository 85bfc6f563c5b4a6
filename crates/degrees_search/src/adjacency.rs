//! One-hop neighbor providers.
//!
//! The search engine never sees a graph structure. It asks an
//! [`AdjacencyProvider`] for the `(action, neighbor)` pairs one hop away from
//! a state, where the action names the group both states share.
//!
//! [`Memberships`] is a small in-memory provider for bipartite
//! entity/group data.

use core::fmt;
use core::hash::Hash;
use std::collections::{BTreeMap, BTreeSet};

/// Source of one-hop neighbors for a search.
///
/// Implementations are read-only during a search and may be shared between
/// any number of searches.
pub trait AdjacencyProvider {
    /// The search state (an entity identifier).
    type State: Clone + Eq + Hash + fmt::Debug + fmt::Display;
    /// The action linking two states (a group identifier).
    type Action: Clone + fmt::Debug;

    /// Returns `true` if the state exists in the underlying data.
    fn contains(&self, state: &Self::State) -> bool;

    /// Returns every `(action, neighbor)` pair reachable from `state` in one
    /// hop.
    ///
    /// Self-pairs are not filtered. For an unknown state the result is
    /// unspecified; the engine validates states before asking.
    fn neighbors(&self, state: &Self::State) -> Vec<(Self::Action, Self::State)>;
}

impl<P: AdjacencyProvider + ?Sized> AdjacencyProvider for &P {
    type State = P::State;
    type Action = P::Action;

    fn contains(&self, state: &Self::State) -> bool {
        (**self).contains(state)
    }

    fn neighbors(&self, state: &Self::State) -> Vec<(Self::Action, Self::State)> {
        (**self).neighbors(state)
    }
}

/// In-memory bipartite membership table.
///
/// Entities are linked through the groups they share. Neighbors are returned
/// sorted by `(group, entity)`, so searches over the same table are
/// deterministic.
#[derive(Debug, Clone)]
pub struct Memberships<S, A> {
    groups_of: BTreeMap<S, BTreeSet<A>>,
    members_of: BTreeMap<A, BTreeSet<S>>,
}

impl<S, A> Default for Memberships<S, A> {
    fn default() -> Self {
        Self {
            groups_of: BTreeMap::new(),
            members_of: BTreeMap::new(),
        }
    }
}

impl<S: Ord + Clone, A: Ord + Clone> Memberships<S, A> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an entity with no group memberships.
    pub fn add_entity(&mut self, entity: S) -> &mut Self {
        self.groups_of.entry(entity).or_default();
        self
    }

    /// Records that `entity` belongs to `group`, registering both.
    pub fn add_membership(&mut self, entity: S, group: A) -> &mut Self {
        self.groups_of
            .entry(entity.clone())
            .or_default()
            .insert(group.clone());
        self.members_of.entry(group).or_default().insert(entity);
        self
    }

    /// Returns the groups the entity belongs to.
    pub fn groups(&self, entity: &S) -> impl Iterator<Item = &A> {
        self.groups_of.get(entity).into_iter().flatten()
    }

    /// Returns the members of the group.
    pub fn members(&self, group: &A) -> impl Iterator<Item = &S> {
        self.members_of.get(group).into_iter().flatten()
    }

    /// Returns `true` if `entity` belongs to `group`.
    #[must_use]
    pub fn is_member(&self, entity: &S, group: &A) -> bool {
        self.members_of
            .get(group)
            .is_some_and(|members| members.contains(entity))
    }

    /// Returns the number of registered entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.groups_of.len()
    }
}

impl<S, A> AdjacencyProvider for Memberships<S, A>
where
    S: Ord + Clone + Hash + fmt::Debug + fmt::Display,
    A: Ord + Clone + fmt::Debug,
{
    type State = S;
    type Action = A;

    fn contains(&self, state: &S) -> bool {
        self.groups_of.contains_key(state)
    }

    fn neighbors(&self, state: &S) -> Vec<(A, S)> {
        self.groups(state)
            .flat_map(|group| {
                self.members(group)
                    .map(move |member| (group.clone(), member.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Memberships<&'static str, &'static str> {
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
    fn neighbors_span_every_group() {
        let graph = sample();
        assert_eq!(
            graph.neighbors(&"B"),
            vec![("g1", "A"), ("g1", "B"), ("g2", "B"), ("g2", "C")]
        );
    }

    #[test]
    fn neighbors_include_self_pairs() {
        let graph = sample();
        assert!(graph.neighbors(&"A").contains(&("g1", "A")));
    }

    #[test]
    fn isolated_entity_has_no_neighbors() {
        let graph = sample();
        assert!(graph.contains(&"D"));
        assert!(graph.neighbors(&"D").is_empty());
        assert!(!graph.contains(&"Z"));
    }

    #[test]
    fn membership_queries() {
        let graph = sample();
        assert!(graph.is_member(&"C", &"g2"));
        assert!(!graph.is_member(&"C", &"g1"));
        assert_eq!(graph.entity_count(), 4);
        assert_eq!(graph.groups(&"B").count(), 2);
    }

    #[test]
    fn reference_forwards_to_provider() {
        let graph = sample();
        let by_ref = &graph;
        assert!(AdjacencyProvider::contains(&by_ref, &"A"));
        assert_eq!(by_ref.neighbors(&"C"), graph.neighbors(&"C"));
    }
}
