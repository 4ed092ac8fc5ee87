/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::fmt::Debug;
use thiserror::Error;

/// Errors returned by graph operations.
///
/// Nodes are rendered through their [`Debug`] implementation, so the error
/// type does not depend on the node type of the graph that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node with the same value is already present in the graph.
    #[error("There is already a node in the graph with value {node}")]
    DuplicateNode { node: String },
    /// The requested node is not present in the graph.
    #[error("Node {node} does not exist in the graph")]
    NodeNotFound { node: String },
}

impl GraphError {
    pub(crate) fn duplicate_node(node: &impl Debug) -> Self {
        GraphError::DuplicateNode {
            node: format!("{:?}", node),
        }
    }

    pub(crate) fn node_not_found(node: &impl Debug) -> Self {
        GraphError::NodeNotFound {
            node: format!("{:?}", node),
        }
    }
}
