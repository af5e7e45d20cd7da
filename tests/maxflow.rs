/*
 * Copyright (c) 2020, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

use rs_flow::classes;
use rs_flow::FlowNetwork;

struct Instance {
    name: &'static str,
    net: fn() -> FlowNetwork<u32>,
    src: u32,
    snk: u32,
    expected: i64,
}

const INSTANCES: &[Instance] = &[
    Instance {
        name: "path3",
        net: classes::path3,
        src: 1,
        snk: 3,
        expected: 5,
    },
    Instance {
        name: "diamond5",
        net: classes::diamond5,
        src: 1,
        snk: 5,
        expected: 90,
    },
    Instance {
        name: "textbook6",
        net: classes::textbook6,
        src: 1,
        snk: 6,
        expected: 24,
    },
    Instance {
        name: "layered10",
        net: classes::layered10,
        src: 1,
        snk: 10,
        expected: 40,
    },
    Instance {
        name: "layered15",
        net: classes::layered15,
        src: 1,
        snk: 15,
        expected: 110,
    },
    Instance {
        name: "zero_chain",
        net: classes::zero_chain,
        src: 1,
        snk: 4,
        expected: 0,
    },
];

#[test]
fn test_instances() {
    for inst in INSTANCES {
        let net = (inst.net)();
        assert_eq!(net.max_flow(&inst.src, &inst.snk), inst.expected, "Instance: {}", inst.name);
    }
}

#[test]
fn test_degenerate_inputs() {
    // empty network
    let net = FlowNetwork::<u32>::new();
    assert_eq!(net.max_flow(&1, &3), 0);

    // nodes but no edges
    let net = classes::isolated(3);
    assert_eq!(net.max_flow(&1, &3), 0);

    // missing source or sink
    let net = classes::textbook6();
    assert_eq!(net.max_flow(&100, &6), 0);
    assert_eq!(net.max_flow(&1, &100), 0);

    // source equals sink
    assert_eq!(net.max_flow(&1, &1), 0);
}

#[test]
fn test_flow_bound() {
    // the flow value never exceeds the capacity leaving the source nor
    // the capacity entering the sink
    let bounds = [
        ("path3", classes::path3 as fn() -> FlowNetwork<u32>, 1u32, 3u32, 10, 5),
        ("diamond5", classes::diamond5, 1, 5, 90, 100),
        ("textbook6", classes::textbook6, 1, 6, 29, 24),
        ("layered10", classes::layered10, 1, 10, 45, 60),
        ("layered15", classes::layered15, 1, 15, 140, 155),
    ];
    for &(name, net, src, snk, src_out, snk_in) in &bounds {
        let value = net().max_flow(&src, &snk);
        assert!(value <= src_out.min(snk_in), "Instance: {}", name);
    }
}

#[test]
fn test_idempotent() {
    let net = classes::layered15();
    let first = net.solve(&1, &15).unwrap();
    let second = net.solve(&1, &15).unwrap();
    assert_eq!(first.value, second.value);
    assert_eq!(first.flows, second.flows);
    assert_eq!(first.rounds, second.rounds);
}

#[test]
fn test_round_bound() {
    for inst in INSTANCES {
        let net = (inst.net)();
        if let Some(result) = net.solve(&inst.src, &inst.snk) {
            assert!(result.rounds <= net.num_nodes(), "Instance: {}", inst.name);
        }
    }
}

#[test]
fn test_flow_is_feasible_and_conserved() {
    for inst in INSTANCES {
        let net = (inst.net)();
        let result = match net.solve(&inst.src, &inst.snk) {
            Some(result) => result,
            None => continue,
        };

        let mut excess = vec![0i64; net.num_nodes() + 1];
        for ((&u, &v, cap), &f) in net.edges().zip(&result.flows) {
            assert!(f >= 0 && f <= cap, "Instance: {}", inst.name);
            excess[u as usize] -= f;
            excess[v as usize] += f;
        }
        for key in 1..=net.num_nodes() as u32 {
            if key == inst.src {
                assert_eq!(excess[key as usize], -result.value, "Instance: {}", inst.name);
            } else if key == inst.snk {
                assert_eq!(excess[key as usize], result.value, "Instance: {}", inst.name);
            } else {
                assert_eq!(excess[key as usize], 0, "Instance: {}", inst.name);
            }
        }
    }
}
