/*
 * Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! This module implements Dinic' max flow algorithm
//!
//! The algorithm runs in rounds. Each round first computes the BFS
//! distance from the source to every node in the residual network,
//! following only arcs with positive residual capacity. If the sink was
//! not reached the algorithm stops. Otherwise augmenting paths that
//! strictly increase the level at each hop are extracted until the level
//! graph admits no further path (a blocking flow). A per-node current-arc
//! pointer ensures that each arc is examined at most once per round.
//!
//! # Example
//!
//! ```
//! use rs_flow::traits::*;
//! use rs_flow::maxflow::dinic;
//! use rs_flow::{Buildable, Builder, Net};
//!
//! let mut upper = vec![];
//! let g = Net::new_with(|b| {
//!     let n = b.add_nodes(6);
//!     for &(u, v, c) in &[
//!         (0, 1, 16), (0, 2, 13), (1, 2, 12), (1, 3, 10), (2, 1, 9),
//!         (2, 4, 14), (3, 4, 7), (3, 5, 4), (4, 5, 20),
//!     ] {
//!         b.add_edge(n[u], n[v]);
//!         upper.push(c);
//!     }
//! });
//!
//! let s = g.id2node(0);
//! let t = g.id2node(5);
//! let (value, flow, mincut) = dinic(&g, s, t, |e| upper[g.edge_id(e)]);
//!
//! assert_eq!(value, 24);
//! assert!(flow.iter().all(|&(e, f)| f >= 0 && f <= upper[g.edge_id(e)]));
//! assert!(g.nodes().filter(|&u| u != s && u != t).all(|u| {
//!     g.outedges(u).map(|(e, _)| flow[g.edge_id(e)].1).sum::<i32>()
//!         == g.inedges(u).map(|(e, _)| flow[g.edge_id(e)].1).sum::<i32>()
//! }));
//! assert!(mincut.contains(&s) && !mincut.contains(&t));
//! ```

use crate::maxflow::residual::ResidualNetwork;
use crate::num::traits::NumAssign;
use crate::traits::IndexDigraph;

use std::collections::VecDeque;

/// The dinic max-flow algorithm.
pub struct Dinic<'a, G, F>
where
    G: 'a + IndexDigraph<'a>,
{
    g: &'a G,
    res: ResidualNetwork<F>,
    /// BFS distance from the source, `num_nodes` means unreached.
    level: Vec<usize>,
    /// Current-arc pointer of each node, only advanced within a round.
    next_arc: Vec<usize>,
    queue: VecDeque<usize>,
    /// The arcs of the augmenting path currently under construction.
    path: Vec<usize>,
    value: F,
    rounds: usize,
}

impl<'a, G, F> Dinic<'a, G, F>
where
    G: IndexDigraph<'a>,
    F: NumAssign + Ord + Copy,
{
    /// Create a new Dinic algorithm instance for a graph.
    pub fn new(g: &'a G) -> Self {
        Dinic {
            g,
            res: ResidualNetwork::new(g),
            level: vec![0; g.num_nodes()],
            next_arc: vec![0; g.num_nodes()],
            queue: VecDeque::with_capacity(g.num_nodes()),
            path: Vec::with_capacity(g.num_nodes()),
            value: F::zero(),
            rounds: 0,
        }
    }

    /// Return the underlying graph.
    pub fn as_graph(&self) -> &'a G {
        self.g
    }

    /// Return the value of the latest computed maximum flow.
    pub fn value(&self) -> F {
        self.value
    }

    /// Return the flow value on edge `e`
    pub fn flow(&self, e: G::Edge) -> F {
        self.res.flow(self.g.edge_id(e))
    }

    /// Return the number of BFS rounds of the latest computation.
    ///
    /// This is bounded by the number of nodes of the graph.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Return the residual network of the latest computation.
    pub fn residual(&self) -> &ResidualNetwork<F> {
        &self.res
    }

    /// Solve the maxflow problem.
    ///
    /// The method solves the max flow problem from the source node
    /// `src` to the sink node `snk` with the given `upper` bounds on
    /// the edges.
    ///
    /// The flow type `F` must be wide enough that the sum of the
    /// capacities of all edges leaving the source cannot overflow.
    pub fn solve<Us>(&mut self, src: G::Node, snk: G::Node, upper: Us)
    where
        Us: Fn(G::Edge) -> F,
    {
        let src = self.g.node_id(src);
        let snk = self.g.node_id(snk);
        assert_ne!(src, snk, "Source and sink node must not be equal");

        self.res.reset(self.g, upper);
        self.value = F::zero();
        self.rounds = 0;

        while self.search(src, snk) {
            self.rounds += 1;
            for ptr in &mut self.next_arc {
                *ptr = 0;
            }
            loop {
                let df = self.augment(src, snk);
                if df.is_zero() {
                    break;
                }
                self.value += df;
            }
        }
    }

    /// Return the minimal cut associated with the last maximum flow.
    pub fn mincut(&self) -> Vec<G::Node> {
        let n = self.g.num_nodes();
        self.g
            .nodes()
            .filter(|&u| self.level[self.g.node_id(u)] < n)
            .collect()
    }

    /// Compute the level graph of the current residual network.
    ///
    /// Returns whether the sink has been reached. Residual capacities are
    /// not modified.
    fn search(&mut self, src: usize, snk: usize) -> bool {
        let n = self.g.num_nodes();

        for level in &mut self.level {
            *level = n;
        }
        self.level[src] = 0;

        self.queue.clear();
        self.queue.push_back(src);

        while let Some(u) = self.queue.pop_front() {
            let d = self.level[u];
            if d >= self.level[snk] {
                // deeper nodes cannot lie on a shortest path
                break;
            }
            for &a in self.res.arcs(u) {
                let v = self.res.to(a);
                if self.res.residual(a) > F::zero() && self.level[v] == n {
                    self.level[v] = d + 1;
                    self.queue.push_back(v);
                }
            }
        }

        self.level[snk] < n
    }

    /// Find one augmenting path in the level graph and push its
    /// bottleneck capacity.
    ///
    /// The path is grown arc by arc on an explicit stack. Each node
    /// resumes scanning at its current-arc pointer; an arc that leads to
    /// a node not on the next level or has no residual capacity left is
    /// skipped for the rest of the round. A dead end drops back to the
    /// predecessor and abandons the arc that led into it.
    ///
    /// Returns the amount pushed, zero if no augmenting path remains in
    /// this round.
    fn augment(&mut self, src: usize, snk: usize) -> F {
        self.path.clear();
        let mut u = src;

        loop {
            if u == snk {
                let df = match self.path.iter().map(|&a| self.res.residual(a)).min() {
                    Some(df) => df,
                    None => return F::zero(),
                };
                for &a in &self.path {
                    self.res.push(a, df);
                }
                return df;
            }

            let mut advance = None;
            while self.next_arc[u] < self.res.degree(u) {
                let a = self.res.arc(u, self.next_arc[u]);
                let v = self.res.to(a);
                if self.res.residual(a) > F::zero() && self.level[v] == self.level[u] + 1 {
                    advance = Some((a, v));
                    break;
                }
                self.next_arc[u] += 1;
            }

            match advance {
                Some((a, v)) => {
                    self.path.push(a);
                    u = v;
                }
                None => match self.path.pop() {
                    Some(a) => {
                        // back out of the dead end and skip the arc
                        // that led into it
                        u = self.res.to(self.res.rev(a));
                        self.next_arc[u] += 1;
                    }
                    // the source itself is exhausted
                    None => return F::zero(),
                },
            }
        }
    }
}

/// Solve the maxflow problem using the algorithm of Dinic.
///
/// The function solves the max flow problem from the source nodes
/// `src` to the sink node `snk` with the given `upper` bounds on
/// the edges.
///
/// The function returns the flow value, the flow on each edge and the
/// nodes in a minimal cut.
pub fn dinic<'a, G, F, Us>(g: &'a G, src: G::Node, snk: G::Node, upper: Us) -> (F, Vec<(G::Edge, F)>, Vec<G::Node>)
where
    G: IndexDigraph<'a>,
    F: 'a + NumAssign + Ord + Copy,
    Us: Fn(G::Edge) -> F,
{
    let mut maxflow = Dinic::new(g);
    maxflow.solve(src, snk, upper);
    (
        maxflow.value(),
        g.edges().map(|e| (e, maxflow.flow(e))).collect(),
        maxflow.mincut(),
    )
}

#[cfg(test)]
mod tests {
    use super::Dinic;
    use crate::traits::{FiniteGraph, IndexGraph};
    use crate::{Buildable, Builder, Net};

    fn solve(edges: &[(usize, usize, i64)], n: usize, s: usize, t: usize) -> (i64, usize) {
        let upper: Vec<_> = edges.iter().map(|&(_, _, c)| c).collect();
        let g = Net::new_with(|b| {
            let nodes = b.add_nodes(n);
            for &(u, v, _) in edges {
                b.add_edge(nodes[u], nodes[v]);
            }
        });
        let mut mf = Dinic::new(&g);
        mf.solve(g.id2node(s), g.id2node(t), |e| upper[g.edge_id(e)]);
        (mf.value(), mf.rounds())
    }

    #[test]
    fn test_bottleneck_path() {
        let (value, _) = solve(&[(0, 1, 10), (1, 2, 5)], 3, 0, 2);
        assert_eq!(value, 5);
    }

    #[test]
    fn test_disconnected() {
        let (value, rounds) = solve(&[(0, 1, 10), (2, 3, 5)], 4, 0, 3);
        assert_eq!(value, 0);
        assert_eq!(rounds, 0);
    }

    #[test]
    fn test_parallel_edges() {
        let (value, _) = solve(&[(0, 1, 3), (0, 1, 4), (1, 2, 5)], 3, 0, 2);
        assert_eq!(value, 5);
    }

    #[test]
    fn test_zero_capacities_block() {
        // reachability alone is not enough, positive capacity is required
        let (value, rounds) = solve(&[(0, 1, 0), (1, 2, 0), (2, 3, 0)], 4, 0, 3);
        assert_eq!(value, 0);
        assert_eq!(rounds, 0);
    }

    #[test]
    fn test_disjoint_paths() {
        let (value, _) = solve(
            &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 1, 1), (1, 2, 1), (2, 4, 1), (3, 5, 1), (4, 5, 1)],
            6,
            0,
            5,
        );
        assert_eq!(value, 2);
    }

    #[test]
    fn test_dead_end_backtracking() {
        // in the first round node 1 is a dead end (node 2 is on the same
        // level), the longer path is only found in the second round
        let (value, rounds) = solve(&[(0, 1, 1), (1, 2, 1), (2, 3, 2), (0, 2, 1)], 4, 0, 3);
        assert_eq!(value, 2);
        assert_eq!(rounds, 2);
    }

    #[test]
    fn test_round_bound() {
        let edges = [
            (0, 1, 20),
            (0, 2, 15),
            (0, 3, 10),
            (1, 4, 25),
            (2, 4, 10),
            (2, 5, 15),
            (3, 5, 20),
            (4, 6, 15),
            (4, 7, 10),
            (5, 7, 20),
            (5, 8, 5),
            (6, 9, 30),
            (7, 9, 20),
            (8, 9, 10),
        ];
        let (value, rounds) = solve(&edges, 10, 0, 9);
        assert_eq!(value, 40);
        assert!(rounds <= 10);
    }

    #[test]
    #[should_panic(expected = "Source and sink node must not be equal")]
    fn test_source_equals_sink_panics() {
        solve(&[(0, 1, 1)], 2, 0, 0);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let upper = [16i64, 13, 12, 10, 9, 14, 7, 4, 20];
        let edges = [(0, 1), (0, 2), (1, 2), (1, 3), (2, 1), (2, 4), (3, 4), (3, 5), (4, 5)];
        let g = Net::new_with(|b| {
            let nodes = b.add_nodes(6);
            for &(u, v) in &edges {
                b.add_edge(nodes[u], nodes[v]);
            }
        });

        let mut mf = Dinic::new(&g);
        mf.solve(g.id2node(0), g.id2node(5), |e| upper[g.edge_id(e)]);
        let first = mf.value();
        let flows: Vec<_> = g.edges().map(|e| mf.flow(e)).collect();

        // solving again resets all state and yields the same flow
        mf.solve(g.id2node(0), g.id2node(5), |e| upper[g.edge_id(e)]);
        assert_eq!(mf.value(), first);
        assert_eq!(g.edges().map(|e| mf.flow(e)).collect::<Vec<_>>(), flows);
    }

    #[test]
    fn test_capacity_conservation() {
        let upper = [16i64, 13, 12, 10, 9, 14, 7, 4, 20];
        let edges = [(0, 1), (0, 2), (1, 2), (1, 3), (2, 1), (2, 4), (3, 4), (3, 5), (4, 5)];
        let g = Net::new_with(|b| {
            let nodes = b.add_nodes(6);
            for &(u, v) in &edges {
                b.add_edge(nodes[u], nodes[v]);
            }
        });

        let mut mf = Dinic::new(&g);
        mf.solve(g.id2node(0), g.id2node(5), |e| upper[g.edge_id(e)]);
        assert_eq!(mf.value(), 24);

        let res = mf.residual();
        for eid in 0..g.num_edges() {
            let fwd = res.residual(eid << 1);
            let bwd = res.residual((eid << 1) | 1);
            assert!(fwd >= 0 && bwd >= 0);
            assert_eq!(fwd + bwd, upper[eid]);
        }
    }
}
