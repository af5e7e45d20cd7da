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

use time::OffsetDateTime;

use rustop::opts;

use rs_flow::classes;
use rs_flow::FlowNetwork;

fn run(name: &str, net: &FlowNetwork<u32>, src: u32, snk: u32, niter: usize) {
    println!("Instance: {}", name);
    println!("  number of nodes: {}", net.num_nodes());
    println!("  number of arcs: {}", net.num_edges());
    println!("  source: {}, sink: {}", src, snk);

    let tstart = OffsetDateTime::now_utc();
    let mut value = 0;
    for _ in 0..niter {
        value = net.max_flow(&src, &snk);
    }
    let tend = OffsetDateTime::now_utc();

    println!("Time: {}", (tend - tstart).as_seconds_f64());
    println!("Flow: {}", value);

    if let Some(result) = net.solve(&src, &snk) {
        assert_eq!(result.value, value);
        assert!(net.edges().zip(&result.flows).all(|((_, _, cap), &f)| f >= 0 && f <= cap));
        assert!(result.rounds <= net.num_nodes());
    }
    println!();
}

fn main() {
    let (args, _) = opts! {
        synopsis "Solve the max-flow problem on the sample networks with the algorithm of Dinic.";
        opt num:usize=1, desc:"Number of times the algorithm is repeated.";
        opt instance:Option<String>, desc:"Run only the instance with this name.";
    }
    .parse_or_exit();

    let instances: &[(&str, fn() -> FlowNetwork<u32>, u32, u32)] = &[
        ("path3", classes::path3, 1, 3),
        ("diamond5", classes::diamond5, 1, 5),
        ("textbook6", classes::textbook6, 1, 6),
        ("layered10", classes::layered10, 1, 10),
        ("layered15", classes::layered15, 1, 15),
        ("isolated3", || classes::isolated(3), 1, 3),
        ("zero_chain", classes::zero_chain, 1, 4),
    ];

    for &(name, net, src, snk) in instances {
        if let Some(only) = &args.instance {
            if only != name {
                continue;
            }
        }
        run(name, &net(), src, snk, args.num);
    }
}
