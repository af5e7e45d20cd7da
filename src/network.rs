/*
 * Copyright (c) 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! A capacitated network with keyed nodes.
//!
//! [`FlowNetwork`] is the boundary type for callers that identify
//! vertices by arbitrary hashable keys instead of dense indices. It
//! collects nodes, edges and capacities, validates the query and only
//! then translates everything into a static [`Net`][crate::Net] for the
//! solver.
//!
//! # Example
//!
//! ```
//! use rs_flow::FlowNetwork;
//!
//! let mut net = FlowNetwork::new();
//! net.add_edge(1u32, 2, 10);
//! net.add_edge(2, 3, 5);
//!
//! assert_eq!(net.max_flow(&1, &3), 5);
//! // degenerate queries report zero flow
//! assert_eq!(net.max_flow(&1, &1), 0);
//! assert_eq!(net.max_flow(&1, &42), 0);
//! ```

use crate::maxflow::Dinic;
use crate::num::traits::NumAssign;
use crate::traits::{FiniteGraph, IndexGraph};
use crate::{Buildable, Builder, Net};

use std::collections::HashMap;
use std::hash::Hash;

/// A directed, capacitated graph with nodes identified by keys.
///
/// Nodes are added explicitly or implicitly as endpoints of an edge.
/// Parallel edges are allowed; capacities must be non-negative. The flow
/// type `F` must be wide enough that the sum of the capacities of all
/// edges leaving any single node cannot overflow (the default is `i64`).
pub struct FlowNetwork<K, F = i64>
where
    K: Eq + Hash + Clone,
{
    /// The key of each node id.
    keys: Vec<K>,
    /// The node id of each key.
    ids: HashMap<K, usize>,
    /// The edges as pairs of node ids.
    edges: Vec<(usize, usize)>,
    /// The capacity of each edge.
    upper: Vec<F>,
}

/// The result of a detailed max-flow computation.
///
/// Exposes the flow value, the flow over each edge (in insertion order)
/// and the number of BFS rounds the algorithm performed.
pub struct FlowResult<F> {
    /// The value of the maximum flow.
    pub value: F,
    /// The flow over each edge, indexed in edge insertion order.
    pub flows: Vec<F>,
    /// The number of BFS rounds (at most the number of nodes).
    pub rounds: usize,
}

impl<K, F> FlowNetwork<K, F>
where
    K: Eq + Hash + Clone,
    F: NumAssign + Ord + Copy,
{
    /// Create a new, empty network.
    pub fn new() -> Self {
        Self::with_capacities(0, 0)
    }

    /// Create a new, empty network with preallocated memory.
    pub fn with_capacities(nnodes: usize, nedges: usize) -> Self {
        FlowNetwork {
            keys: Vec::with_capacity(nnodes),
            ids: HashMap::with_capacity(nnodes),
            edges: Vec::with_capacity(nedges),
            upper: Vec::with_capacity(nedges),
        }
    }

    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.keys.len()
    }

    /// Return the number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Return whether the network contains a node with the given key.
    pub fn contains(&self, key: &K) -> bool {
        self.ids.contains_key(key)
    }

    /// Return an iterator over all edges in insertion order.
    ///
    /// Each item is the source key, the target key and the capacity of
    /// one edge. The order matches the `flows` vector of a
    /// [`FlowResult`].
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K, F)> + '_ {
        self.edges
            .iter()
            .zip(&self.upper)
            .map(move |(&(u, v), &cap)| (&self.keys[u], &self.keys[v], cap))
    }

    /// Add a node, return its dense id.
    ///
    /// Adding a key twice returns the existing id.
    pub fn add_node(&mut self, key: K) -> usize {
        let keys = &mut self.keys;
        *self.ids.entry(key.clone()).or_insert_with(|| {
            let id = keys.len();
            keys.push(key);
            id
        })
    }

    /// Add an edge with a capacity.
    ///
    /// Missing endpoints are added implicitly. Zero-capacity edges are
    /// kept, they merely never carry flow.
    pub fn add_edge(&mut self, from: K, to: K, upper: F) {
        debug_assert!(upper >= F::zero(), "Negative edge capacity");
        let u = self.add_node(from);
        let v = self.add_node(to);
        self.edges.push((u, v));
        self.upper.push(upper);
    }

    /// Compute the maximum flow from `source` to `sink`.
    ///
    /// The degenerate inputs are reported as zero-flow results, not as
    /// errors: an empty network, a source or sink key that does not
    /// exist, and a source equal to the sink all yield zero.
    pub fn max_flow(&self, source: &K, sink: &K) -> F {
        match self.solve(source, sink) {
            Some(result) => result.value,
            None => F::zero(),
        }
    }

    /// Compute the maximum flow and return the detailed result.
    ///
    /// Returns `None` for the degenerate inputs that `max_flow` reports
    /// as zero.
    pub fn solve(&self, source: &K, sink: &K) -> Option<FlowResult<F>> {
        if self.keys.is_empty() {
            return None;
        }
        let (src, snk) = match (self.ids.get(source), self.ids.get(sink)) {
            (Some(&src), Some(&snk)) => (src, snk),
            _ => return None,
        };
        if src == snk {
            return None;
        }

        let g = Net::new_with(|b| {
            let nodes = b.add_nodes(self.keys.len());
            for &(u, v) in &self.edges {
                b.add_edge(nodes[u], nodes[v]);
            }
        });

        let mut mf = Dinic::new(&g);
        mf.solve(g.id2node(src), g.id2node(snk), |e| self.upper[g.edge_id(e)]);

        Some(FlowResult {
            value: mf.value(),
            flows: g.edges().map(|e| mf.flow(e)).collect(),
            rounds: mf.rounds(),
        })
    }
}

impl<K, F> Default for FlowNetwork<K, F>
where
    K: Eq + Hash + Clone,
    F: NumAssign + Ord + Copy,
{
    fn default() -> Self {
        FlowNetwork::new()
    }
}

#[cfg(test)]
mod tests {
    use super::FlowNetwork;

    #[test]
    fn test_empty_network() {
        let net = FlowNetwork::<u32>::new();
        assert_eq!(net.max_flow(&1, &3), 0);
        assert!(net.solve(&1, &3).is_none());
    }

    #[test]
    fn test_missing_source_or_sink() {
        let mut net = FlowNetwork::new();
        net.add_edge(1u32, 2, 10);
        assert_eq!(net.max_flow(&7, &2), 0);
        assert_eq!(net.max_flow(&1, &100), 0);
    }

    #[test]
    fn test_source_equals_sink() {
        let mut net = FlowNetwork::new();
        net.add_edge(1u32, 2, 10);
        net.add_edge(2, 3, 5);
        assert_eq!(net.max_flow(&1, &1), 0);
    }

    #[test]
    fn test_nodes_without_edges() {
        let mut net = FlowNetwork::<u32>::new();
        for i in 1..=3 {
            net.add_node(i);
        }
        assert_eq!(net.num_nodes(), 3);
        assert_eq!(net.max_flow(&1, &3), 0);
    }

    #[test]
    fn test_string_keys() {
        let mut net = FlowNetwork::new();
        net.add_edge("s", "a", 4i64);
        net.add_edge("a", "t", 3);
        net.add_edge("s", "t", 2);
        assert_eq!(net.max_flow(&"s", &"t"), 5);
    }

    #[test]
    fn test_duplicate_nodes() {
        let mut net = FlowNetwork::<u32>::new();
        let a = net.add_node(1);
        let b = net.add_node(1);
        assert_eq!(a, b);
        assert_eq!(net.num_nodes(), 1);
    }

    #[test]
    fn test_detailed_result() {
        let mut net = FlowNetwork::new();
        net.add_edge(1u32, 2, 10);
        net.add_edge(2, 3, 5);

        let result = net.solve(&1, &3).unwrap();
        assert_eq!(result.value, 5);
        assert_eq!(result.flows, vec![5, 5]);
        assert!(result.rounds <= net.num_nodes());
    }
}
