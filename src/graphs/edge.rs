/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::hash::{Hash, Hasher};

/// The weight of an arc.
///
/// Two edges are equal if their weights have the same bit pattern, which is
/// the equality induced by [`f64::total_cmp`]. In particular, `0.0` and `-0.0`
/// are different edges, and a `NaN` weight is equal to itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Edge {
    weight: f64,
}

impl Edge {
    pub const fn new(weight: f64) -> Self {
        Self { weight }
    }

    #[inline(always)]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.weight.total_cmp(&other.weight).is_eq()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.weight.to_bits().hash(state);
    }
}

/// A read-only view of an outbound arc of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeView<'a, T> {
    source: &'a T,
    destination: &'a T,
    weight: f64,
}

impl<'a, T> EdgeView<'a, T> {
    pub(crate) fn new(source: &'a T, destination: &'a T, edge: &Edge) -> Self {
        Self {
            source,
            destination,
            weight: edge.weight(),
        }
    }

    /// The node the arc starts from.
    pub fn source(&self) -> &'a T {
        self.source
    }

    /// The node the arc points to.
    pub fn destination(&self) -> &'a T {
        self.destination
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}
