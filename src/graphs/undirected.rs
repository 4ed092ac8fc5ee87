/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::traits::{Graph, __seal_graph};
use super::{Adjacency, Nodes};
use crate::{algo, GraphError};
use dsi_progress_logger::no_logging;
use sealed::sealed;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

/// An undirected graph: each edge can be traversed from either of its nodes.
///
/// Every edge is stored as two mirrored arcs with the same weight, and every
/// mutation updates both arcs. A self-loop is stored as a single arc.
///
/// # Examples
///
/// ```
/// use graph_algo::prelude::*;
///
/// let mut graph = UndirectedGraph::new();
/// graph.add_weighted_edge("a", "b", 2.0);
/// graph.add_weighted_edge("b", "c", 3.0);
/// assert!(graph.contains_edge(&"c", &"b"));
/// assert!(graph.is_connected_graph());
/// assert!(!graph.has_cycle());
/// assert_eq!(graph.total_weight(), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct UndirectedGraph<T> {
    adjacency: Adjacency<T>,
}

impl<T> Default for UndirectedGraph<T> {
    fn default() -> Self {
        Self {
            adjacency: Adjacency::default(),
        }
    }
}

impl<T: Eq + Hash + Clone + Debug> UndirectedGraph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with the given nodes and no edges.
    ///
    /// # Errors
    ///
    /// [`GraphError::DuplicateNode`] if a value appears twice.
    pub fn with_nodes(values: impl IntoIterator<Item = T>) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        for value in values {
            graph.add_node(value)?;
        }
        Ok(graph)
    }
}

#[sealed]
impl<T: Eq + Hash + Clone + Debug> Graph for UndirectedGraph<T> {
    type Node = T;

    #[inline(always)]
    fn adjacency(&self) -> &Adjacency<T> {
        &self.adjacency
    }

    fn add_node(&mut self, value: T) -> Result<(), GraphError> {
        self.adjacency.add_node(value)
    }

    fn add_weighted_edge(&mut self, from: T, to: T, weight: f64) {
        self.adjacency.insert_edge(from.clone(), to.clone(), weight);
        self.adjacency.insert_edge(to, from, weight);
    }

    fn remove_edge(&mut self, from: &T, to: &T) {
        self.adjacency.delete_edge(from, to);
        self.adjacency.delete_edge(to, from);
    }

    fn has_cycle(&self) -> bool {
        !algo::symm_acyclicity(&self.adjacency, no_logging![])
    }

    fn is_connected_graph(&self) -> bool {
        algo::symm_connectivity(&self.adjacency, no_logging![])
    }

    /// Returns the sum of the weights of the edges; each edge is counted
    /// once, even if it is stored as two arcs.
    ///
    /// The result is half the sum of the weights of the arcs, so a self-loop,
    /// which is stored as a single arc, contributes half of its weight.
    fn total_weight(&self) -> f64 {
        self.adjacency.total_weight() / 2.0
    }
}

impl<T: Eq + Hash> PartialEq for UndirectedGraph<T> {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl<T: Eq + Hash> Eq for UndirectedGraph<T> {}

impl<T: Eq + Hash> Hash for UndirectedGraph<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.adjacency.hash(state);
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a UndirectedGraph<T> {
    type Item = &'a T;
    type IntoIter = Nodes<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.adjacency.nodes()
    }
}
