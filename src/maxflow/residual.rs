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

//! The residual network of a capacitated digraph.
//!
//! Every edge `e` of the underlying graph is represented by a pair of
//! residual arcs: the forward arc with index `2e` carrying the remaining
//! capacity of the edge and the backward arc with index `2e + 1` carrying
//! the flow already sent. The reverse of an arc `a` is `a ^ 1`, so the
//! pairing is structural and needs no extra storage. Each arc additionally
//! stores its destination node, so the endpoint of a backward arc is
//! available in O(1).

use crate::num::traits::NumAssign;
use crate::traits::IndexDigraph;

/// A single residual arc.
struct Arc<F> {
    /// The destination node of this arc.
    to: usize,
    /// The remaining capacity of this arc.
    cap: F,
}

/// The residual network derived from a digraph.
///
/// The network is owned by a single max-flow computation. Its arc arena is
/// allocated once from the underlying graph; capacities are (re)set by
/// [`reset`](ResidualNetwork::reset) at the start of each computation.
pub struct ResidualNetwork<F> {
    /// All residual arcs, the pair of edge `e` at `2e` and `2e + 1`.
    arcs: Vec<Arc<F>>,
    /// The outgoing residual arcs of each node in construction order:
    /// forward arcs of outgoing edges followed by backward arcs of
    /// incoming edges.
    adj: Vec<Vec<usize>>,
}

impl<F> ResidualNetwork<F>
where
    F: NumAssign + Ord + Copy,
{
    /// Create the residual network of a graph.
    ///
    /// All capacities are initialized to zero, use
    /// [`reset`](ResidualNetwork::reset) to install the edge capacities.
    pub fn new<'a, G>(g: &'a G) -> Self
    where
        G: IndexDigraph<'a>,
    {
        let mut arcs = Vec::with_capacity(g.num_edges() * 2);
        for e in g.edges() {
            arcs.push(Arc {
                to: g.node_id(g.snk(e)),
                cap: F::zero(),
            });
            arcs.push(Arc {
                to: g.node_id(g.src(e)),
                cap: F::zero(),
            });
        }

        let adj = g
            .nodes()
            .map(|u| {
                g.outedges(u)
                    .map(|(e, _)| g.edge_id(e) << 1)
                    .chain(g.inedges(u).map(|(e, _)| (g.edge_id(e) << 1) | 1))
                    .collect()
            })
            .collect();

        ResidualNetwork { arcs, adj }
    }

    /// Install the edge capacities given by `upper`.
    ///
    /// Forward arcs get the full capacity of their edge, backward arcs
    /// zero, i.e. the network is reset to the zero flow.
    pub fn reset<'a, G, Us>(&mut self, g: &'a G, upper: Us)
    where
        G: IndexDigraph<'a>,
        Us: Fn(G::Edge) -> F,
    {
        for eid in 0..g.num_edges() {
            let cap = upper(g.id2edge(eid));
            debug_assert!(cap >= F::zero(), "Negative edge capacity");
            self.arcs[eid << 1].cap = cap;
            self.arcs[(eid << 1) | 1].cap = F::zero();
        }
    }

    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    /// Return the number of residual arcs (twice the number of edges).
    pub fn num_arcs(&self) -> usize {
        self.arcs.len()
    }

    /// Return the residual arcs leaving node `u`.
    pub fn arcs(&self, u: usize) -> &[usize] {
        &self.adj[u]
    }

    /// Return the number of residual arcs leaving node `u`.
    pub fn degree(&self, u: usize) -> usize {
        self.adj[u].len()
    }

    /// Return the `i`-th residual arc leaving node `u`.
    pub fn arc(&self, u: usize, i: usize) -> usize {
        self.adj[u][i]
    }

    /// Return the destination node of arc `a`.
    pub fn to(&self, a: usize) -> usize {
        self.arcs[a].to
    }

    /// Return the paired reverse arc of arc `a`.
    pub fn rev(&self, a: usize) -> usize {
        a ^ 1
    }

    /// Return the remaining capacity of arc `a`.
    pub fn residual(&self, a: usize) -> F {
        self.arcs[a].cap
    }

    /// Return whether `a` is a forward arc.
    pub fn is_forward(&self, a: usize) -> bool {
        a & 1 == 0
    }

    /// Push `df` units of flow over arc `a`.
    ///
    /// The capacity of `a` is decreased by `df`, the capacity of its
    /// reverse arc increased by the same amount, hence the total capacity
    /// of the pair is invariant.
    pub fn push(&mut self, a: usize, df: F) {
        debug_assert!(df <= self.arcs[a].cap, "Pushing more than the residual capacity");
        self.arcs[a].cap -= df;
        self.arcs[a ^ 1].cap += df;
    }

    /// Return the flow over edge `eid`.
    ///
    /// This is the capacity accumulated on the backward arc of the pair.
    pub fn flow(&self, eid: usize) -> F {
        self.arcs[(eid << 1) | 1].cap
    }
}

#[cfg(test)]
mod tests {
    use super::ResidualNetwork;
    use crate::traits::{FiniteGraph, IndexGraph};
    use crate::{Buildable, Builder, Net};

    fn path() -> (Net, Vec<i32>) {
        let g = Net::new_with(|b| {
            let nodes = b.add_nodes(3);
            b.add_edge(nodes[0], nodes[1]);
            b.add_edge(nodes[1], nodes[2]);
        });
        (g, vec![10, 5])
    }

    #[test]
    fn test_construction() {
        let (g, upper) = path();
        let mut res = ResidualNetwork::new(&g);
        res.reset(&g, |e| upper[g.edge_id(e)]);

        assert_eq!(res.num_nodes(), 3);
        assert_eq!(res.num_arcs(), 2 * g.num_edges());

        // forward arcs carry the capacity, backward arcs zero
        assert_eq!(res.residual(0), 10);
        assert_eq!(res.residual(1), 0);
        assert_eq!(res.to(0), 1);
        assert_eq!(res.to(1), 0);

        // the middle node sees its forward arc first, then the backward
        // arc of the incoming edge
        assert_eq!(res.arcs(1), &[2, 1]);
    }

    #[test]
    fn test_push_conserves_pair_capacity() {
        let (g, upper) = path();
        let mut res = ResidualNetwork::new(&g);
        res.reset(&g, |e| upper[g.edge_id(e)]);

        res.push(0, 4);
        assert_eq!(res.residual(0), 6);
        assert_eq!(res.residual(1), 4);
        assert_eq!(res.residual(0) + res.residual(1), upper[0]);
        assert_eq!(res.flow(0), 4);

        // cancelling flow via the backward arc
        res.push(1, 3);
        assert_eq!(res.residual(0), 9);
        assert_eq!(res.flow(0), 1);
    }
}
