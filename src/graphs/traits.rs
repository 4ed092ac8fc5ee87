/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{Adjacency, EdgeView, Nodes};
use crate::{algo, GraphError};
use dsi_progress_logger::no_logging;
use sealed::sealed;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// A graph whose nodes are identified by their values.
///
/// The trait is implemented by [`DirectedGraph`](super::DirectedGraph) and
/// [`UndirectedGraph`](super::UndirectedGraph), which decide how edges are
/// inserted and removed, and how cycles and connectivity are established.
/// All queries that do not depend on the kind of graph are provided methods
/// working on the underlying [`Adjacency`].
///
/// Algorithms invoked through this trait do not log; use the functions in
/// [`algo`](crate::algo) to pass a progress logger.
#[sealed(pub(crate))]
pub trait Graph {
    /// The type of the values identifying nodes.
    type Node: Eq + Hash + Clone + Debug;

    /// Returns the underlying arc storage.
    fn adjacency(&self) -> &Adjacency<Self::Node>;

    /// Adds an edge with the given weight, creating missing nodes.
    ///
    /// If the edge already exists, its weight is replaced. Self-loops are
    /// allowed.
    fn add_weighted_edge(&mut self, from: Self::Node, to: Self::Node, weight: f64);

    /// Adds an edge with weight zero.
    ///
    /// See [`add_weighted_edge`](Graph::add_weighted_edge).
    fn add_edge(&mut self, from: Self::Node, to: Self::Node) {
        self.add_weighted_edge(from, to, 0.0);
    }

    /// Removes an edge; the graph is unchanged if the edge does not exist.
    ///
    /// Nodes are never removed.
    fn remove_edge(&mut self, from: &Self::Node, to: &Self::Node);

    /// Returns whether the graph contains a cycle. Self-loops are cycles.
    fn has_cycle(&self) -> bool;

    /// Returns whether the graph is connected. Empty graphs are not
    /// connected.
    fn is_connected_graph(&self) -> bool;

    /// Returns the sum of the weights of the edges of the graph.
    fn total_weight(&self) -> f64;

    /// Adds a node without edges.
    ///
    /// # Errors
    ///
    /// [`GraphError::DuplicateNode`] if a node with the same value exists.
    fn add_node(&mut self, value: Self::Node) -> Result<(), GraphError>;

    fn contains_node(&self, value: &Self::Node) -> bool {
        self.adjacency().contains_node(value)
    }

    fn contains_edge(&self, from: &Self::Node, to: &Self::Node) -> bool {
        self.adjacency().contains_edge(from, to)
    }

    /// Returns the weight of an edge, or `None` if the edge does not exist.
    fn edge_weight(&self, from: &Self::Node, to: &Self::Node) -> Option<f64> {
        self.adjacency().edge_weight(from, to)
    }

    /// Returns the values of the nodes `from` has an edge to.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if `from` is not in the graph.
    fn neighbors(&self, from: &Self::Node) -> Result<Vec<Self::Node>, GraphError> {
        Ok(self
            .outbound_edges(from)?
            .into_iter()
            .map(|edge| edge.destination().clone())
            .collect())
    }

    /// Returns the edges leaving `from`.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if `from` is not in the graph.
    fn outbound_edges(
        &self,
        from: &Self::Node,
    ) -> Result<Vec<EdgeView<'_, Self::Node>>, GraphError> {
        self.adjacency()
            .outbound(from)
            .map(|arcs| arcs.collect())
            .ok_or_else(|| GraphError::node_not_found(from))
    }

    /// Returns the number of nodes.
    fn size(&self) -> usize {
        self.adjacency().num_nodes()
    }

    /// Returns the number of stored arcs. In undirected graphs, an edge
    /// between distinct nodes is stored as two arcs.
    fn num_arcs(&self) -> usize {
        self.adjacency().num_arcs()
    }

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns an iterator over the node values, in insertion order.
    fn nodes(&self) -> Nodes<'_, Self::Node> {
        self.adjacency().nodes()
    }

    /// Returns the minimum positive number of edges to traverse to go from
    /// `from` to `to`, or `None` if there is no such path or either node is
    /// missing.
    ///
    /// Note that the empty path does not count: the distance from a node to
    /// itself is the length of the shortest cycle through it.
    fn distance_between(&self, from: &Self::Node, to: &Self::Node) -> Option<usize> {
        algo::distance(self.adjacency(), from, to, no_logging![])
    }

    /// Returns the nodes reachable from `source` by a path of positive
    /// length, excluding `source` itself.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] if `source` is not in the graph.
    fn nodes_connected_to(
        &self,
        source: &Self::Node,
    ) -> Result<HashSet<Self::Node>, GraphError> {
        algo::reachable_from(self.adjacency(), source, no_logging![])
    }
}
