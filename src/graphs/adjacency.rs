/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{Edge, EdgeView};
use crate::GraphError;
use indexmap::IndexMap;
use std::collections::hash_map::DefaultHasher;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

/// Iterator over the values of the nodes of a graph, in insertion order.
pub type Nodes<'a, T> = indexmap::map::Keys<'a, T, IndexMap<T, Edge>>;

/// The arc storage shared by all graphs.
///
/// Each node is associated with a map from its successors to the [`Edge`]
/// reaching them; a node without outbound arcs is associated with an empty
/// map. Nodes cannot be removed, so the position of a node in insertion order
/// is a stable index in `0..num_nodes()`: visits in [`algo`](crate::algo) work
/// on these indices, and [`index_of`](Adjacency::index_of) and
/// [`node`](Adjacency::node) convert between indices and values.
///
/// Mutation is reserved to the graph types, which are responsible for
/// keeping their own invariants (e.g., mirrored arcs in undirected graphs).
#[derive(Debug, Clone)]
pub struct Adjacency<T> {
    nodes: IndexMap<T, IndexMap<T, Edge>>,
}

impl<T> Default for Adjacency<T> {
    fn default() -> Self {
        Self {
            nodes: IndexMap::default(),
        }
    }
}

impl<T: Eq + Hash + Clone + Debug> Adjacency<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node without arcs.
    pub(crate) fn add_node(&mut self, value: T) -> Result<(), GraphError> {
        if self.nodes.contains_key(&value) {
            return Err(GraphError::duplicate_node(&value));
        }
        self.nodes.insert(value, IndexMap::new());
        Ok(())
    }

    /// Inserts the arc `from → to`, creating missing nodes, or updates its
    /// weight if the arc is already present.
    ///
    /// Missing nodes are created in argument order, `from` first.
    pub(crate) fn insert_edge(&mut self, from: T, to: T, weight: f64) {
        let from_index = match self.nodes.get_index_of(&from) {
            Some(index) => index,
            None => self.nodes.insert_full(from, IndexMap::new()).0,
        };
        if !self.nodes.contains_key(&to) {
            self.nodes.insert(to.clone(), IndexMap::new());
        }
        self.nodes[from_index].insert(to, Edge::new(weight));
    }

    /// Deletes the arc `from → to`; nothing happens if the arc does not exist.
    pub(crate) fn delete_edge(&mut self, from: &T, to: &T) {
        if let Some(successors) = self.nodes.get_mut(from) {
            // Keeps the insertion order of the remaining arcs
            successors.shift_remove(to);
        }
    }

    /// Returns the sum of the weights of all arcs.
    pub(crate) fn total_weight(&self) -> f64 {
        self.nodes
            .values()
            .flat_map(|successors| successors.values())
            .map(Edge::weight)
            .sum()
    }
}

impl<T: Eq + Hash> Adjacency<T> {
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of stored arcs; an undirected edge between distinct
    /// nodes accounts for two arcs.
    pub fn num_arcs(&self) -> usize {
        self.nodes.values().map(IndexMap::len).sum()
    }

    pub fn contains_node(&self, value: &T) -> bool {
        self.nodes.contains_key(value)
    }

    pub fn contains_edge(&self, from: &T, to: &T) -> bool {
        self.nodes
            .get(from)
            .is_some_and(|successors| successors.contains_key(to))
    }

    pub fn edge_weight(&self, from: &T, to: &T) -> Option<f64> {
        self.nodes
            .get(from)
            .and_then(|successors| successors.get(to))
            .map(Edge::weight)
    }

    /// Returns the index of a node, if present.
    #[inline(always)]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.nodes.get_index_of(value)
    }

    /// Returns the value of the node with the given index.
    #[inline(always)]
    pub fn node(&self, index: usize) -> Option<&T> {
        self.nodes.get_index(index).map(|(node, _)| node)
    }

    /// Returns an iterator over the node values.
    pub fn nodes(&self) -> Nodes<'_, T> {
        self.nodes.keys()
    }

    /// Returns an iterator over the indices of the successors of the node
    /// with the given index.
    ///
    /// # Panics
    ///
    /// If `index` is not smaller than [`num_nodes`](Adjacency::num_nodes).
    pub fn successors(&self, index: usize) -> Successors<'_, T> {
        Successors {
            nodes: &self.nodes,
            iter: self.nodes[index].keys(),
        }
    }

    /// Returns an iterator over the outbound arcs of a node, or `None` if
    /// the node is not present.
    pub fn outbound(&self, from: &T) -> Option<impl Iterator<Item = EdgeView<'_, T>>> {
        let (source, successors) = self.nodes.get_key_value(from)?;
        Some(
            successors
                .iter()
                .map(move |(destination, edge)| EdgeView::new(source, destination, edge)),
        )
    }
}

/// The iterator returned by [`successors`](Adjacency::successors).
pub struct Successors<'a, T> {
    nodes: &'a IndexMap<T, IndexMap<T, Edge>>,
    iter: indexmap::map::Keys<'a, T, Edge>,
}

impl<'a, T: Eq + Hash> Iterator for Successors<'a, T> {
    type Item = usize;

    #[inline(always)]
    fn next(&mut self) -> Option<usize> {
        self.iter.next().map(|succ| {
            self.nodes
                .get_index_of(succ)
                .expect("arc destinations should always be nodes")
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T: Eq + Hash> ExactSizeIterator for Successors<'a, T> {}

/// Two adjacencies are equal if they have the same nodes and each node has
/// the same successors with the same weights, independently of insertion
/// order.
impl<T: Eq + Hash> PartialEq for Adjacency<T> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl<T: Eq + Hash> Eq for Adjacency<T> {}

impl<T: Eq + Hash> Hash for Adjacency<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Entry hashes are combined by wrapping sums, so that the result
        // does not depend on insertion order
        fn hash_one(item: impl Hash) -> u64 {
            let mut hasher = DefaultHasher::new();
            item.hash(&mut hasher);
            hasher.finish()
        }

        let mut sum = 0_u64;
        for (node, successors) in &self.nodes {
            let arcs = successors
                .iter()
                .fold(0_u64, |acc, arc| acc.wrapping_add(hash_one(arc)));
            sum = sum.wrapping_add(hash_one((node, arcs)));
        }
        self.nodes.len().hash(state);
        sum.hash(state);
    }
}
