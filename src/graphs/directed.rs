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

/// A directed graph: adding an edge creates a single arc from one node to
/// another.
///
/// # Examples
///
/// ```
/// use graph_algo::prelude::*;
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge("a", "b");
/// graph.add_edge("b", "c");
/// assert!(!graph.has_cycle());
/// assert!(!graph.is_connected_graph());
///
/// graph.add_edge("c", "a");
/// assert!(graph.has_cycle());
/// assert!(graph.is_connected_graph());
/// ```
#[derive(Debug, Clone)]
pub struct DirectedGraph<T> {
    adjacency: Adjacency<T>,
}

impl<T> Default for DirectedGraph<T> {
    fn default() -> Self {
        Self {
            adjacency: Adjacency::default(),
        }
    }
}

impl<T: Eq + Hash + Clone + Debug> DirectedGraph<T> {
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
impl<T: Eq + Hash + Clone + Debug> Graph for DirectedGraph<T> {
    type Node = T;

    #[inline(always)]
    fn adjacency(&self) -> &Adjacency<T> {
        &self.adjacency
    }

    fn add_node(&mut self, value: T) -> Result<(), GraphError> {
        self.adjacency.add_node(value)
    }

    fn add_weighted_edge(&mut self, from: T, to: T, weight: f64) {
        self.adjacency.insert_edge(from, to, weight);
    }

    fn remove_edge(&mut self, from: &T, to: &T) {
        self.adjacency.delete_edge(from, to);
    }

    fn has_cycle(&self) -> bool {
        !algo::acyclicity(&self.adjacency, no_logging![])
    }

    /// Returns whether the graph is strongly connected, that is, whether every
    /// node can reach every other node.
    fn is_connected_graph(&self) -> bool {
        algo::strong_connectivity(&self.adjacency, no_logging![])
    }

    fn total_weight(&self) -> f64 {
        self.adjacency.total_weight()
    }
}

impl<T: Eq + Hash> PartialEq for DirectedGraph<T> {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl<T: Eq + Hash> Eq for DirectedGraph<T> {}

impl<T: Eq + Hash> Hash for DirectedGraph<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.adjacency.hash(state);
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a DirectedGraph<T> {
    type Item = &'a T;
    type IntoIter = Nodes<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.adjacency.nodes()
    }
}
