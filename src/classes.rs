/*
 * Copyright (c) 2016-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Some common flow networks.
//!
//! These are small, fixed instances with nodes keyed `1..=n`, used by the
//! tests and the demo program. Each function documents the maximum flow
//! from node 1 to node n.

use crate::network::FlowNetwork;

fn network(n: u32, edges: &[(u32, u32, i64)]) -> FlowNetwork<u32> {
    let mut net = FlowNetwork::with_capacities(n as usize, edges.len());
    for key in 1..=n {
        net.add_node(key);
    }
    for &(u, v, cap) in edges {
        net.add_edge(u, v, cap);
    }
    net
}

/// Returns `n` isolated nodes without any edges.
///
/// The maximum flow between any two nodes is 0.
pub fn isolated(n: u32) -> FlowNetwork<u32> {
    network(n, &[])
}

/// Returns the path `1 -> 2 -> 3` with a bottleneck on the second edge.
///
/// The maximum flow from 1 to 3 is 5.
pub fn path3() -> FlowNetwork<u32> {
    network(3, &[(1, 2, 10), (2, 3, 5)])
}

/// Returns a 5-node network with several parallel routes.
///
/// The maximum flow from 1 to 5 is 90 (the source is saturated).
pub fn diamond5() -> FlowNetwork<u32> {
    network(
        5,
        &[
            (1, 3, 40),
            (1, 2, 30),
            (1, 4, 20),
            (2, 3, 50),
            (3, 4, 20),
            (4, 5, 30),
            (3, 5, 30),
            (2, 5, 40),
        ],
    )
}

/// Returns the 6-node textbook network.
///
/// The maximum flow from 1 to 6 is 24, the minimum cut consists of the
/// two edges entering the sink.
pub fn textbook6() -> FlowNetwork<u32> {
    network(
        6,
        &[
            (1, 2, 16),
            (1, 3, 13),
            (2, 3, 12),
            (2, 4, 10),
            (3, 2, 9),
            (3, 5, 14),
            (4, 5, 7),
            (4, 6, 4),
            (5, 6, 20),
        ],
    )
}

/// Returns a 10-node layered network.
///
/// The maximum flow from 1 to 10 is 40.
pub fn layered10() -> FlowNetwork<u32> {
    network(
        10,
        &[
            (1, 2, 20),
            (1, 3, 15),
            (1, 4, 10),
            (2, 5, 25),
            (3, 5, 10),
            (3, 6, 15),
            (4, 6, 20),
            (5, 7, 15),
            (5, 8, 10),
            (6, 8, 20),
            (6, 9, 5),
            (7, 10, 30),
            (8, 10, 20),
            (9, 10, 10),
        ],
    )
}

/// Returns a 15-node layered network with two cross edges.
///
/// The maximum flow from 1 to 15 is 110.
pub fn layered15() -> FlowNetwork<u32> {
    network(
        15,
        &[
            (1, 2, 50),
            (1, 3, 40),
            (1, 4, 30),
            (1, 5, 20),
            (2, 6, 15),
            (2, 7, 10),
            (3, 7, 20),
            (3, 8, 15),
            (4, 8, 25),
            (4, 9, 10),
            (5, 9, 30),
            (5, 10, 5),
            (6, 11, 40),
            (7, 11, 20),
            (7, 12, 15),
            (8, 12, 25),
            (8, 13, 10),
            (9, 13, 30),
            (9, 14, 5),
            (10, 14, 35),
            (11, 15, 50),
            (12, 15, 45),
            (13, 15, 35),
            (14, 15, 25),
            (12, 8, 5),
            (14, 10, 3),
        ],
    )
}

/// Returns the path `1 -> 2 -> 3 -> 4` where every edge has capacity 0.
///
/// The sink is reachable in the underlying graph but the maximum flow
/// from 1 to 4 is 0.
pub fn zero_chain() -> FlowNetwork<u32> {
    network(4, &[(1, 2, 0), (2, 3, 0), (3, 4, 0)])
}
