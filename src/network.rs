/*
 * Copyright (c) 2024 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! A flow network.
//!
//! The network stores its edges in a single vector, each edge is
//! identified by its position in that vector. The adjacency list of
//! a vertex contains the ids of all edges incident to the vertex, incoming
//! and outgoing, in the order in which they have been added. Hence each
//! edge is reachable from both of its endpoints but exists only once, so a
//! flow change made from one side is seen from the other side.
//!
//! # Example
//!
//! ```
//! use rs_flownet::{CapacitatedEdge, FlowNetwork};
//!
//! let mut net = FlowNetwork::new(3);
//! let e = net.add_edge(CapacitatedEdge::new(0, 1, 2.0).unwrap()).unwrap();
//! let f = net.add_edge(CapacitatedEdge::new(1, 2, 1.0).unwrap()).unwrap();
//!
//! assert_eq!(net.num_vertices(), 3);
//! assert_eq!(net.num_edges(), 2);
//! assert_eq!(net.adjacent(0), &[e]);
//! assert_eq!(net.adjacent(1), &[e, f]);
//! assert_eq!(net.adjacent(2), &[f]);
//! assert!(net.add_edge(CapacitatedEdge::new(2, 3, 1.0).unwrap()).is_err());
//! ```

use crate::edge::CapacitatedEdge;
use crate::error::{Error, Result};
use crate::traits::FlowNum;

use std::fmt;
use std::slice::Iter as SliceIter;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Index of a vertex, vertices are numbered `0..n`.
pub type VertexId = usize;

/// Edge of a flow network.
///
/// This is basically a newtype of the edge index.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct EdgeId(usize);

impl EdgeId {
    /// Return the position of the edge in the network.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

/// A directed network with capacitated edges.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct FlowNetwork<F = f64> {
    edges: Vec<CapacitatedEdge<F>>,
    // For each vertex the ids of its incident edges in insertion order.
    adj: Vec<Vec<EdgeId>>,
}

/// Iterator over all edges of a network together with their ids.
pub struct EdgeIt<'a, F> {
    it: std::iter::Enumerate<SliceIter<'a, CapacitatedEdge<F>>>,
}

impl<'a, F> Iterator for EdgeIt<'a, F> {
    type Item = (EdgeId, &'a CapacitatedEdge<F>);

    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(i, e)| (EdgeId(i), e))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

impl<'a, F> ExactSizeIterator for EdgeIt<'a, F> {}

impl<F> FlowNetwork<F>
where
    F: FlowNum,
{
    /// Create a network with `n` vertices and no edges.
    pub fn new(n: usize) -> Self {
        FlowNetwork {
            edges: vec![],
            adj: vec![vec![]; n],
        }
    }

    /// Create a network with `n` vertices and room for `m` edges.
    pub fn with_capacities(n: usize, m: usize) -> Self {
        FlowNetwork {
            edges: Vec::with_capacity(m),
            adj: vec![vec![]; n],
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Add an edge to the network.
    ///
    /// Both endpoints of the edge must be vertices of the network.
    pub fn add_edge(&mut self, edge: CapacitatedEdge<F>) -> Result<EdgeId> {
        let n = self.num_vertices();
        for &u in &[edge.from(), edge.to()] {
            if u >= n {
                return Err(Error::Construction(format!(
                    "invalid vertex {} in edge ({},{}) (must be in 0..{})",
                    u,
                    edge.from(),
                    edge.to(),
                    n
                )));
            }
        }

        let e = EdgeId(self.edges.len());
        self.adj[edge.from()].push(e);
        self.adj[edge.to()].push(e);
        self.edges.push(edge);
        Ok(e)
    }

    /// Return the ids of all edges incident to `u` in insertion order.
    ///
    /// A loop at `u` appears twice, in successive positions.
    pub fn adjacent(&self, u: VertexId) -> &[EdgeId] {
        self.check_vertex(u);
        &self.adj[u]
    }

    /// Return the edge with id `e`.
    pub fn edge(&self, e: EdgeId) -> &CapacitatedEdge<F> {
        &self.edges[e.0]
    }

    pub(crate) fn edge_mut(&mut self, e: EdgeId) -> &mut CapacitatedEdge<F> {
        &mut self.edges[e.0]
    }

    /// Return an iterator over all edges, each edge exactly once.
    pub fn all_edges(&self) -> EdgeIt<F> {
        EdgeIt {
            it: self.edges.iter().enumerate(),
        }
    }

    /// Sum the flow on the edges incident to `u` selected by `select`.
    ///
    /// A loop appears twice in the adjacency list but is counted once.
    fn incident_flow<P>(&self, u: VertexId, select: P) -> F
    where
        P: Fn(&CapacitatedEdge<F>) -> bool,
    {
        let adj = self.adjacent(u);
        let mut sum = F::zero();
        for (i, &e) in adj.iter().enumerate() {
            if i > 0 && adj[i - 1] == e {
                continue;
            }
            let edge = self.edge(e);
            if select(edge) {
                sum += edge.flow();
            }
        }
        sum
    }

    /// The total flow on edges entering `u`.
    ///
    /// The flow on a loop at `u` is counted once.
    pub fn inflow(&self, u: VertexId) -> F {
        self.incident_flow(u, |e| e.to() == u)
    }

    /// The total flow on edges leaving `u`.
    ///
    /// The flow on a loop at `u` is counted once.
    pub fn outflow(&self, u: VertexId) -> F {
        self.incident_flow(u, |e| e.from() == u)
    }

    /// The net flow entering `u`, i.e. `inflow(u) - outflow(u)`.
    pub fn excess(&self, u: VertexId) -> F {
        self.inflow(u) - self.outflow(u)
    }

    /// Set the flow on all edges to zero.
    pub fn clear_flow(&mut self) {
        for e in &mut self.edges {
            e.set_flow(F::zero());
        }
    }

    fn check_vertex(&self, u: VertexId) {
        assert!(
            u < self.num_vertices(),
            "Invalid vertex {} (network has {} vertices)",
            u,
            self.num_vertices()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::FlowNetwork;
    use crate::edge::CapacitatedEdge;
    use crate::error::Error;

    fn path(n: usize) -> FlowNetwork<i32> {
        let mut net = FlowNetwork::new(n);
        for u in 1..n {
            net.add_edge(CapacitatedEdge::with_flow(u - 1, u, 3, 2).unwrap()).unwrap();
        }
        net
    }

    #[test]
    fn test_adjacency() {
        let net = path(4);
        assert_eq!(net.num_vertices(), 4);
        assert_eq!(net.num_edges(), 3);

        for (e, edge) in net.all_edges() {
            assert!(net.adjacent(edge.from()).contains(&e));
            assert!(net.adjacent(edge.to()).contains(&e));
        }
        let total: usize = (0..net.num_vertices()).map(|u| net.adjacent(u).len()).sum();
        assert_eq!(total, 2 * net.num_edges());
        assert_eq!(net.all_edges().len(), net.num_edges());
    }

    #[test]
    fn test_insertion_order() {
        let mut net = FlowNetwork::new(3);
        let a = net.add_edge(CapacitatedEdge::new(1, 2, 1.0).unwrap()).unwrap();
        let b = net.add_edge(CapacitatedEdge::new(0, 1, 1.0).unwrap()).unwrap();
        let c = net.add_edge(CapacitatedEdge::new(1, 1, 1.0).unwrap()).unwrap();
        assert_eq!(net.adjacent(1), &[a, b, c, c]);
        assert_eq!(
            net.all_edges().map(|(e, _)| e.index()).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_invalid_endpoint() {
        let mut net = path(3);
        let r = net.add_edge(CapacitatedEdge::new(0, 3, 1).unwrap());
        assert!(matches!(r, Err(Error::Construction(_))));
        assert_eq!(net.num_edges(), 2);
        assert!(net.adjacent(0).len() == 1);
    }

    #[test]
    #[should_panic]
    fn test_vertex_out_of_range() {
        let net = path(3);
        net.adjacent(3);
    }

    #[test]
    fn test_flow_balance() {
        let mut net = path(3);
        assert_eq!(net.outflow(0), 2);
        assert_eq!(net.inflow(1), 2);
        assert_eq!(net.outflow(1), 2);
        assert_eq!(net.excess(1), 0);
        assert_eq!(net.excess(2), 2);
        assert_eq!(net.excess(0), -2);

        net.clear_flow();
        assert!(net.all_edges().all(|(_, e)| e.flow() == 0));
    }

    #[test]
    fn test_loop_flow() {
        let mut net = FlowNetwork::new(2);
        net.add_edge(CapacitatedEdge::with_flow(0, 1, 5, 1).unwrap()).unwrap();
        net.add_edge(CapacitatedEdge::with_flow(1, 1, 4, 3).unwrap()).unwrap();
        net.add_edge(CapacitatedEdge::with_flow(1, 0, 5, 1).unwrap()).unwrap();

        assert_eq!(net.adjacent(1).len(), 4);
        assert_eq!(net.inflow(1), 4);
        assert_eq!(net.outflow(1), 4);
        assert_eq!(net.excess(1), 0);
    }

    #[test]
    fn test_shared_edge() {
        let mut net = path(3);
        let e = net.adjacent(1)[0];
        net.edge_mut(e).add_residual_flow_to(1, 1).unwrap();
        let f = net.adjacent(0)[0];
        assert_eq!(e, f);
        assert_eq!(net.edge(f).flow(), 3);
    }

    #[cfg(feature = "serialize")]
    mod serialize {
        use super::path;
        use crate::network::FlowNetwork;
        use serde_json;

        #[test]
        fn test_serde() {
            let net = path(5);
            let serialized = serde_json::to_string(&net).unwrap();
            let h: FlowNetwork<i32> = serde_json::from_str(&serialized).unwrap();

            assert_eq!(net.num_vertices(), h.num_vertices());
            assert_eq!(net.num_edges(), h.num_edges());
            for ((e, a), (f, b)) in net.all_edges().zip(h.all_edges()) {
                assert_eq!(e, f);
                assert_eq!(a, b);
            }
            for u in 0..net.num_vertices() {
                assert_eq!(net.adjacent(u), h.adjacent(u));
            }
        }
    }
}
