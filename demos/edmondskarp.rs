/*
 * Copyright (c) 2015-2024 Frank Fischer <frank-fischer@shadow-soft.de>
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

use rs_flownet::maxflow::EdmondsKarp;
use rs_flownet::{CapacitatedEdge, FlowNetwork, Net, VertexId};

use std::error::Error;

/// Build a layered network.
///
/// The source is connected to all vertices of the first layer, all vertices
/// of the last layer to the sink. Vertex `i` of layer `k` is connected to the
/// vertices `i`, `i+1` and `i+3` (modulo `width`) of layer `k+1`. Capacities
/// follow a fixed pattern.
fn layered(layers: usize, width: usize) -> Result<(Net, VertexId, VertexId), Box<dyn Error>> {
    let n = layers * width + 2;
    let src = n - 2;
    let snk = n - 1;
    let mut net = FlowNetwork::with_capacities(n, 3 * layers * width + 2 * width);

    for i in 0..width {
        net.add_edge(CapacitatedEdge::new(src, i, (width * 7) as f64)?)?;
        net.add_edge(CapacitatedEdge::new((layers - 1) * width + i, snk, (width * 7) as f64)?)?;
    }
    for k in 0..layers - 1 {
        for i in 0..width {
            let u = k * width + i;
            for &d in &[0, 1, 3] {
                let v = (k + 1) * width + (i + d) % width;
                let cap = ((u * 31 + v * 17) % 13 + 1) as f64;
                net.add_edge(CapacitatedEdge::new(u, v, cap)?)?;
            }
        }
    }

    Ok((net, src, snk))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let (args, _) = opts! {
        synopsis "Solve max-flow problem on a layered network with the algorithm of Edmonds-Karp.";
        opt num:usize=1, desc:"Number of times the algorithm is repeated.";
        opt layers:usize=50, desc:"Number of layers.";
        opt width:usize=50, desc:"Number of vertices per layer.";
    }
    .parse_or_exit();

    if args.layers == 0 || args.width == 0 {
        return Err("layers and width must be positive".into());
    }

    let tstart = OffsetDateTime::now_utc();
    let (mut net, s, t) = layered(args.layers, args.width)?;
    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());
    println!("  number of vertices: {}", net.num_vertices());
    println!("  number of edges: {}", net.num_edges());

    let tstart = OffsetDateTime::now_utc();
    let mut value = 0.0;
    for _ in 0..args.num {
        net.clear_flow();
        let mut ek = EdmondsKarp::new(&mut net);
        value = ek.solve(s, t)?;
        println!("Augmentations: {}", ek.cnt_augment);
    }
    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());
    println!("Flow: {}", value);

    assert!(net.all_edges().all(|(_, e)| e.flow() >= 0.0 && e.flow() <= e.capacity()));
    assert!((0..net.num_vertices())
        .filter(|&u| u != s && u != t)
        .all(|u| (net.inflow(u) - net.outflow(u)).abs() < 1e-9));
    assert!((net.outflow(s) - net.inflow(s) - value).abs() < 1e-9);

    Ok(())
}
