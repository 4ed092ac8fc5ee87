/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{
    depth_first::{EventNoPred, EventPred},
    Sequential,
};
use crate::graphs::{Adjacency, Successors};
use dsi_progress_logger::ProgressLog;
use sealed::sealed;
use std::hash::Hash;
use sux::bits::BitVec;

/// A depth-first visit which does not keep track of predecessors, or nodes on the stack.
pub type SeqNoPred<'a, T> = SeqIter<'a, TwoStates, T, (), false>;

/// A depth-first visit which keeps track of predecessors, but not nodes on the stack.
pub type SeqPred<'a, T> = SeqIter<'a, TwoStates, T, usize, true>;

/// A depth-first visit which keeps track of predecessors and nodes on the stack.
pub type SeqPath<'a, T> = SeqIter<'a, ThreeStates, T, usize, true>;

/// Sequential depth-first visits.
///
/// This is an iterative implementation that does not need a large stack size:
/// the visit path is a vector of iterators on successors, so the depth of the
/// visit is limited only by available memory.
///
/// There are three version of the visit, which are type aliases to the same
/// common implementation: [`SeqNoPred`], [`SeqPred`] and [`SeqPath`] (the
/// generic implementation should not be instantiated by the user).
///
/// * [`SeqNoPred`] does not keep track of predecessors, nor of nodes on the
///   stack; it can be used, for example, to compute reachability information.
/// * [`SeqPred`] keeps track of predecessors, but not of nodes on the stack.
/// * [`SeqPath`] keeps track of predecessors and nodes on the stack; it can be
///   used, for example, to establish [acyclicity](crate::algo::acyclicity()).
///
/// [`SeqNoPred`] generates events of type [`EventNoPred`]; the other two
/// visits generate events of type [`EventPred`], with the proviso that for
/// [`SeqPred`] the Boolean associated with events of type
/// [`Revisit`](`EventPred::Revisit`) is always false.
///
/// The progress logger will be [invoked](ProgressLog::light_update) after
/// completion of each postvisit.
///
/// # Examples
///
/// Let's test acyclicity:
///
/// ```
/// use graph_algo::prelude::*;
/// use graph_algo::algo::visits::*;
/// use dsi_progress_logger::no_logging;
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge(0, 1);
/// graph.add_edge(1, 2);
/// graph.add_edge(2, 0);
/// graph.add_edge(1, 3);
/// let mut visit = depth_first::SeqPath::new(graph.adjacency());
///
/// assert!(visit.visit_all(
///     |event|
///         {
///             // Stop the visit as soon as a back edge is found
///            match event {
///                depth_first::EventPred::Revisit { on_stack: true, .. } => Err(StoppedWhenDone),
///                _ => Ok(()),
///            }
///         },
///     no_logging![]
/// ).is_err()); // As the graph is not acyclic
/// ```

// General depth-first visit implementation. The user shouldn't see this.
// Allowed combinations for `PRED`, `S` and `P` are:
// * `false`, `TwoStates` and `()` (no predecessors, no stack tracking)
// * `true`, `TwoStates` and `usize` (predecessors, no stack tracking)
// * `true`, `ThreeStates` and `usize` (predecessors, stack tracking)
pub struct SeqIter<'a, S, T, P, const PRED: bool> {
    graph: &'a Adjacency<T>,
    /// Entries on this stack represent the iterator on the successors of a node
    /// and the parent of the node. This approach makes it possible to avoid
    /// storing both the current and the parent node in the stack.
    stack: Vec<(Successors<'a, T>, P)>,
    state: S,
}

impl<'a, S: NodeStates, T: Eq + Hash, P, const PRED: bool> SeqIter<'a, S, T, P, PRED> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a Adjacency<T>) -> SeqIter<'a, S, T, P, PRED> {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            stack: Vec::with_capacity(16),
            state: S::new(num_nodes),
        }
    }

    /// Returns whether the node with the given index has been discovered
    /// since the last reset.
    pub fn known(&self, node: usize) -> bool {
        self.state.known(node)
    }
}

#[doc(hidden)]
#[sealed]
pub trait NodeStates {
    fn new(n: usize) -> Self;
    fn set_on_stack(&mut self, node: usize);
    fn set_off_stack(&mut self, node: usize);
    fn on_stack(&self, node: usize) -> bool;
    fn set_known(&mut self, node: usize);
    fn known(&self, node: usize) -> bool;
    fn reset(&mut self);
}

#[doc(hidden)]
/// A two-state selector type for [sequential depth-first visits](SeqIter).
///
/// This implementation does not keep track of nodes on the stack, so events of
/// type [`Revisit`](`EventPred::Revisit`) will always have the associated
/// Boolean equal to false.
pub struct TwoStates(BitVec);

#[doc(hidden)]
/// A three-state selector type for [sequential depth-first visits](SeqIter).
///
/// This implementation does keep track of nodes on the stack, so events of type
/// [`Revisit`](`EventPred::Revisit`) will provide information about whether the
/// node associated with event is currently on the visit path.
pub struct ThreeStates(BitVec);

#[sealed]
impl NodeStates for ThreeStates {
    fn new(n: usize) -> ThreeStates {
        ThreeStates(BitVec::new(2 * n))
    }
    #[inline(always)]
    fn set_on_stack(&mut self, node: usize) {
        self.0.set(node * 2 + 1, true);
    }
    #[inline(always)]
    fn set_off_stack(&mut self, node: usize) {
        self.0.set(node * 2 + 1, false);
    }
    #[inline(always)]
    fn on_stack(&self, node: usize) -> bool {
        self.0.get(node * 2 + 1)
    }
    #[inline(always)]
    fn set_known(&mut self, node: usize) {
        self.0.set(node * 2, true);
    }
    #[inline(always)]
    fn known(&self, node: usize) -> bool {
        self.0.get(node * 2)
    }
    #[inline(always)]
    fn reset(&mut self) {
        self.0.fill(false);
    }
}

#[sealed]
impl NodeStates for TwoStates {
    fn new(n: usize) -> TwoStates {
        TwoStates(BitVec::new(n))
    }
    #[inline(always)]
    fn set_on_stack(&mut self, _node: usize) {}
    #[inline(always)]
    fn set_off_stack(&mut self, _node: usize) {}
    #[inline(always)]
    fn on_stack(&self, _node: usize) -> bool {
        false
    }
    #[inline(always)]
    fn set_known(&mut self, node: usize) {
        self.0.set(node, true);
    }
    #[inline(always)]
    fn known(&self, node: usize) -> bool {
        self.0.get(node)
    }
    #[inline(always)]
    fn reset(&mut self) {
        self.0.fill(false);
    }
}

impl<'a, S: NodeStates, T: Eq + Hash> Sequential<EventPred> for SeqIter<'a, S, T, usize, true> {
    fn visit<E, C: FnMut(EventPred) -> Result<(), E>>(
        &mut self,
        root: usize,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        let state = &mut self.state;

        if state.known(root) {
            // We ignore the node: it has been visited already
            return Ok(());
        }

        callback(EventPred::Init { root })?;

        state.set_known(root);

        callback(EventPred::Previsit {
            curr: root,
            pred: root,
            root,
            depth: 0,
        })?;

        self.stack.push((self.graph.successors(root), root));

        state.set_on_stack(root);

        // This variable keeps track of the current node being visited; the
        // parent node is derived at each iteration of the 'recurse loop.
        let mut current_node = root;

        'recurse: loop {
            let depth = self.stack.len();
            let Some((iter, parent)) = self.stack.last_mut() else {
                callback(EventPred::Done { root })?;
                return Ok(());
            };

            for succ in iter {
                if state.known(succ) {
                    // Node has already been discovered
                    callback(EventPred::Revisit {
                        curr: succ,
                        pred: current_node,
                        root,
                        depth,
                        on_stack: state.on_stack(succ),
                    })?;
                } else {
                    // First time seeing node
                    state.set_known(succ);

                    callback(EventPred::Previsit {
                        curr: succ,
                        pred: current_node,
                        root,
                        depth,
                    })?;
                    // current_node is the parent of succ
                    self.stack.push((self.graph.successors(succ), current_node));

                    state.set_on_stack(succ);

                    // At the next iteration, succ will be the current node
                    current_node = succ;

                    continue 'recurse;
                }
            }

            callback(EventPred::Postvisit {
                curr: current_node,
                pred: *parent,
                root,
                depth: depth - 1,
            })?;

            pl.light_update();

            state.set_off_stack(current_node);

            // We're going up one stack level, so the next current_node
            // is the current parent.
            current_node = *parent;
            self.stack.pop();
        }
    }

    fn visit_all<E, C: FnMut(EventPred) -> Result<(), E>>(
        &mut self,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        for node in 0..self.graph.num_nodes() {
            self.visit(node, &mut callback, pl)?;
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.state.reset();
    }
}

impl<'a, T: Eq + Hash> Sequential<EventNoPred> for SeqIter<'a, TwoStates, T, (), false> {
    fn visit<E, C: FnMut(EventNoPred) -> Result<(), E>>(
        &mut self,
        root: usize,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        let state = &mut self.state;

        if state.known(root) {
            // We ignore the node: it has been visited already
            return Ok(());
        }

        callback(EventNoPred::Init { root })?;

        state.set_known(root);

        callback(EventNoPred::Previsit {
            curr: root,
            root,
            depth: 0,
        })?;

        self.stack.push((self.graph.successors(root), ()));

        'recurse: loop {
            let depth = self.stack.len();
            let Some((iter, _)) = self.stack.last_mut() else {
                callback(EventNoPred::Done { root })?;
                return Ok(());
            };

            for succ in iter {
                if state.known(succ) {
                    // Node has already been discovered
                    callback(EventNoPred::Revisit {
                        curr: succ,
                        root,
                        depth,
                    })?;
                } else {
                    // First time seeing node
                    state.set_known(succ);

                    callback(EventNoPred::Previsit {
                        curr: succ,
                        root,
                        depth,
                    })?;

                    self.stack.push((self.graph.successors(succ), ()));

                    continue 'recurse;
                }
            }

            pl.light_update();

            self.stack.pop();
        }
    }

    fn visit_all<E, C: FnMut(EventNoPred) -> Result<(), E>>(
        &mut self,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        for node in 0..self.graph.num_nodes() {
            self.visit(node, &mut callback, pl)?;
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.state.reset();
    }
}
