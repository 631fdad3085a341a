/*
 * Copyright (c) 2017-2024 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! This module implements the max flow algorithm of Edmonds-Karp.
//!
//! The algorithm repeatedly searches a shortest augmenting path in the
//! residual network by a breadth-first search and augments the flow along
//! this path by its bottleneck capacity. If no augmenting path exists,
//! the flow is maximal and the vertices reached by the last search form the
//! source side of a minimal cut.
//!
//! The flow already present on the network is the starting point of the
//! algorithm, hence it must be feasible.
//!
//! # Example
//!
//! ```
//! use rs_flownet::{CapacitatedEdge, FlowNetwork};
//! use rs_flownet::maxflow::edmondskarp;
//!
//! // s = 0, a = 1, b = 2, c = 3, d = 4, t = 5
//! let mut net = FlowNetwork::new(6);
//! for &(u, v, c) in &[
//!     (0, 1, 5.0),
//!     (0, 3, 5.0),
//!     (1, 2, 2.0),
//!     (1, 3, 1.0),
//!     (1, 4, 1.0),
//!     (3, 4, 2.0),
//!     (4, 2, 2.0),
//!     (2, 5, 4.0),
//!     (4, 5, 5.0),
//! ] {
//!     net.add_edge(CapacitatedEdge::new(u, v, c).unwrap()).unwrap();
//! }
//!
//! let (value, mincut) = edmondskarp(&mut net, 0, 5).unwrap();
//!
//! assert_eq!(value, 5.0);
//! assert_eq!(mincut, vec![0, 1, 3]);
//! assert!(net.all_edges().all(|(_, e)| e.flow() >= 0.0 && e.flow() <= e.capacity()));
//! assert!((1..5).all(|u| net.inflow(u) == net.outflow(u)));
//!
//! let mincutval: f64 = net
//!     .all_edges()
//!     .filter(|(_, e)| mincut.contains(&e.from()) && !mincut.contains(&e.to()))
//!     .map(|(_, e)| e.capacity())
//!     .sum();
//! assert_eq!(value, mincutval);
//! ```

use super::SolutionState;
use crate::error::{Error, Result};
use crate::network::{EdgeId, FlowNetwork, VertexId};
use crate::traits::FlowNum;

use log::debug;

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};

/// Max-flow algorithm of Edmonds and Karp.
pub struct EdmondsKarp<'a, F = f64> {
    /// The network the flow is computed on.
    net: &'a mut FlowNetwork<F>,
    src: VertexId,
    snk: VertexId,
    /// Vertices reached by the latest search.
    reached: Vec<bool>,
    /// The edge by which a vertex has been reached in the latest search.
    pred: Vec<Option<EdgeId>>,
    queue: VecDeque<VertexId>,
    /// The current augmenting path from sink to source.
    ///
    /// Each element is a path edge and the vertex it points to.
    path: Vec<(EdgeId, VertexId)>,
    /// The new flow of each edge on `path`.
    newflow: Vec<F>,
    value: F,
    state: SolutionState,
    /// Whether to verify that the initial flow is feasible.
    pub check_feasibility: bool,
    /// The number of augmentations performed by the latest solve.
    pub cnt_augment: usize,
}

impl<'a, F> EdmondsKarp<'a, F>
where
    F: FlowNum,
{
    /// Create a new Edmonds-Karp algorithm instance for a network.
    pub fn new(net: &'a mut FlowNetwork<F>) -> Self {
        let n = net.num_vertices();
        EdmondsKarp {
            net,
            src: 0,
            snk: 0,
            reached: vec![false; n],
            pred: vec![None; n],
            queue: VecDeque::with_capacity(n),
            path: vec![],
            newflow: vec![],
            value: F::zero(),
            state: SolutionState::Unsolved,
            check_feasibility: true,
            cnt_augment: 0,
        }
    }

    /// Return the underlying network.
    pub fn as_network(&self) -> &FlowNetwork<F> {
        &*self.net
    }

    /// Return the value of the latest computed flow.
    pub fn value(&self) -> F {
        self.value
    }

    pub fn state(&self) -> SolutionState {
        self.state
    }

    /// Compute a maximum flow from `src` to `snk`.
    ///
    /// Returns the value of the maximum flow. The flow itself is stored on
    /// the edges of the network.
    pub fn solve(&mut self, src: VertexId, snk: VertexId) -> Result<F> {
        self.start(src, snk)?;
        while self.augment()? {}
        Ok(self.value)
    }

    /// Compute a maximum flow with the possibility to cancel.
    ///
    /// The flag `cancel` is checked before each augmentation. If it is set,
    /// the computation stops with `Error::Cancelled` and the network holds
    /// the (feasible) flow after the last complete augmentation.
    pub fn solve_cancellable(&mut self, src: VertexId, snk: VertexId, cancel: &AtomicBool) -> Result<F> {
        self.start(src, snk)?;
        loop {
            if cancel.load(Ordering::Relaxed) {
                self.state = SolutionState::Cancelled;
                debug!(
                    "Edmonds-Karp cancelled after {} augmentations, flow value {}",
                    self.cnt_augment, self.value
                );
                return Err(Error::Cancelled(self.cnt_augment));
            }
            if !self.augment()? {
                return Ok(self.value);
            }
        }
    }

    /// Prepare a flow computation from `src` to `snk`.
    ///
    /// If `check_feasibility` is set, the current flow on the network is
    /// verified. The network is not modified.
    pub fn start(&mut self, src: VertexId, snk: VertexId) -> Result<()> {
        self.state = SolutionState::Unsolved;
        if src == snk {
            return Err(Error::DegenerateQuery(src));
        }
        let n = self.net.num_vertices();
        assert!(src < n, "Invalid source vertex {} (network has {} vertices)", src, n);
        assert!(snk < n, "Invalid sink vertex {} (network has {} vertices)", snk, n);

        if self.check_feasibility {
            if let Err(err) = self.check_flow(src, snk) {
                debug!("{}", err);
                return Err(err);
            }
        }

        self.src = src;
        self.snk = snk;
        self.value = self.net.excess(snk);
        self.cnt_augment = 0;
        self.state = SolutionState::Augmenting;

        debug!(
            "Start Edmonds-Karp from {} to {} on {} vertices and {} edges, initial flow value {}",
            src,
            snk,
            n,
            self.net.num_edges(),
            self.value
        );

        Ok(())
    }

    /// Perform one augmentation.
    ///
    /// Returns `true` if the flow has been augmented and `false` if no
    /// augmenting path exists, i.e. if the flow is maximal.
    pub fn augment(&mut self) -> Result<bool> {
        match self.state {
            SolutionState::Augmenting => {}
            SolutionState::Saturated => return Ok(false),
            state => panic!("Cannot augment in state {:?}, call `start` first", state),
        }

        // sink cannot be reached -> stop
        if !self.search()? {
            self.state = SolutionState::Saturated;
            debug!(
                "Edmonds-Karp finished after {} augmentations, flow value {}",
                self.cnt_augment, self.value
            );
            return Ok(false);
        }

        // collect the path from the sink back to the source
        self.path.clear();
        let mut v = self.snk;
        while v != self.src {
            let e = self.pred[v].ok_or_else(|| {
                Error::InvariantViolation(format!("vertex {} on augmenting path has no predecessor", v))
            })?;
            self.path.push((e, v));
            v = self.net.edge(e).other(v)?;
        }

        // compute augmentation value
        let (e, v) = self.path[0];
        let mut df = self.net.edge(e).residual_capacity_to(v)?;
        for &(e, v) in &self.path[1..] {
            let r = self.net.edge(e).residual_capacity_to(v)?;
            if r < df {
                df = r;
            }
        }

        debug_assert!(df > F::zero());

        // validate all changes before touching the network
        self.newflow.clear();
        for &(e, v) in &self.path {
            self.newflow.push(self.net.edge(e).residual_flow_to(v, df)?);
        }

        // now augment the flow
        for (&(e, _), &flw) in self.path.iter().zip(&self.newflow) {
            self.net.edge_mut(e).set_flow(flw);
        }

        self.value += df;
        self.cnt_augment += 1;
        debug!(
            "Augmentation {}: path of length {} with bottleneck {}",
            self.cnt_augment,
            self.path.len(),
            df
        );

        Ok(true)
    }

    /// Breadth-first search from the source in the residual network.
    ///
    /// Returns `true` if the sink has been reached. The search stops as soon
    /// as the sink is found.
    fn search(&mut self) -> Result<bool> {
        for x in self.reached.iter_mut() {
            *x = false;
        }
        for p in self.pred.iter_mut() {
            *p = None;
        }

        self.reached[self.src] = true;
        self.queue.clear();
        self.queue.push_back(self.src);
        while let Some(u) = self.queue.pop_front() {
            for &e in self.net.adjacent(u) {
                let edge = self.net.edge(e);
                let v = edge.other(u)?;
                if !self.reached[v] && edge.residual_capacity_to(v)? > F::zero() {
                    self.reached[v] = true;
                    self.pred[v] = Some(e);
                    if v == self.snk {
                        return Ok(true);
                    }
                    self.queue.push_back(v);
                }
            }
        }

        Ok(false)
    }

    /// Verify that the current flow is feasible for source `src` and sink
    /// `snk`.
    fn check_flow(&self, src: VertexId, snk: VertexId) -> Result<()> {
        for (e, edge) in self.net.all_edges() {
            if !edge.is_feasible() {
                return Err(Error::InfeasibleFlow(format!(
                    "flow {} on edge {} ({},{}) exceeds capacity bounds [0, {}]",
                    edge.flow(),
                    e,
                    edge.from(),
                    edge.to(),
                    edge.capacity()
                )));
            }
        }

        for u in (0..self.net.num_vertices()).filter(|&u| u != src && u != snk) {
            let inflow = self.net.inflow(u);
            let outflow = self.net.outflow(u);
            if !inflow.approx_eq(outflow) {
                return Err(Error::InfeasibleFlow(format!(
                    "flow conservation violated at vertex {}: inflow {}, outflow {}",
                    u, inflow, outflow
                )));
            }
        }

        let srcflow = -self.net.excess(src);
        let snkflow = self.net.excess(snk);
        if !srcflow.approx_eq(snkflow) {
            return Err(Error::InfeasibleFlow(format!(
                "net flow {} leaving source {} differs from net flow {} entering sink {}",
                srcflow, src, snkflow, snk
            )));
        }

        Ok(())
    }

    /// Return `true` if `u` is on the source side of the minimal cut.
    ///
    /// The flow must have been computed completely.
    pub fn in_cut(&self, u: VertexId) -> bool {
        assert_eq!(
            self.state,
            SolutionState::Saturated,
            "Minimal cut is only available for a maximal flow"
        );
        assert!(
            u < self.reached.len(),
            "Invalid vertex {} (network has {} vertices)",
            u,
            self.reached.len()
        );
        self.reached[u]
    }

    /// Return the minimal cut associated with the last maximum flow.
    ///
    /// These are the vertices on the source side in increasing order.
    pub fn mincut(&self) -> Vec<VertexId> {
        (0..self.reached.len()).filter(|&u| self.in_cut(u)).collect()
    }

    /// Return the edges leaving the source side of the minimal cut.
    ///
    /// The sum of their capacities equals the value of the maximum flow.
    pub fn cut_edges(&self) -> Vec<EdgeId> {
        self.net
            .all_edges()
            .filter(|(_, edge)| self.in_cut(edge.from()) && !self.in_cut(edge.to()))
            .map(|(e, _)| e)
            .collect()
    }
}

/// Solve the maxflow problem using the algorithm of Edmonds-Karp.
///
/// The function solves the max flow problem from the source vertex `src` to
/// the sink vertex `snk` starting from the flow currently on the network.
///
/// The function returns the flow value and the vertices on the source side
/// of a minimal cut. The flow on each edge is stored in the network.
pub fn edmondskarp<F>(net: &mut FlowNetwork<F>, src: VertexId, snk: VertexId) -> Result<(F, Vec<VertexId>)>
where
    F: FlowNum,
{
    let mut maxflow = EdmondsKarp::new(net);
    let value = maxflow.solve(src, snk)?;
    Ok((value, maxflow.mincut()))
}
