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

//! Capacitated edges carrying a flow.
//!
//! An edge `(u,v)` with capacity `c` and flow `f` has two residual
//! directions: `c - f` units may still be pushed forward to `v`, and `f`
//! units may be pushed backward to `u` by cancelling existing flow.
//!
//! # Example
//!
//! ```
//! use rs_flownet::CapacitatedEdge;
//!
//! let mut e = CapacitatedEdge::new(0, 1, 5.0).unwrap();
//! assert_eq!(e.residual_capacity_to(1).unwrap(), 5.0);
//! assert_eq!(e.residual_capacity_to(0).unwrap(), 0.0);
//!
//! e.add_residual_flow_to(1, 3.0).unwrap();
//! assert_eq!(e.flow(), 3.0);
//! assert_eq!(e.residual_capacity_to(1).unwrap(), 2.0);
//! assert_eq!(e.residual_capacity_to(0).unwrap(), 3.0);
//!
//! e.add_residual_flow_to(0, 1.0).unwrap();
//! assert_eq!(e.flow(), 2.0);
//! ```

use crate::error::{Error, Result};
use crate::network::VertexId;
use crate::traits::FlowNum;

use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A directed edge with a capacity and a flow.
///
/// The capacity is fixed at construction, the flow always satisfies
/// `0 <= flow <= capacity`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct CapacitatedEdge<F = f64> {
    from: VertexId,
    to: VertexId,
    capacity: F,
    flow: F,
}

impl<F> CapacitatedEdge<F>
where
    F: FlowNum,
{
    /// Create a new edge from `from` to `to` with zero flow.
    pub fn new(from: VertexId, to: VertexId, capacity: F) -> Result<Self> {
        CapacitatedEdge::with_flow(from, to, capacity, F::zero())
    }

    /// Create a new edge carrying an initial flow.
    ///
    /// The flow must satisfy `0 <= flow <= capacity`.
    pub fn with_flow(from: VertexId, to: VertexId, capacity: F, flow: F) -> Result<Self> {
        if !capacity.is_comparable() || capacity < F::zero() {
            return Err(Error::Construction(format!(
                "invalid capacity {} of edge ({},{}), must be non-negative",
                capacity, from, to
            )));
        }
        if !flow.is_comparable() || flow < F::zero() || flow > capacity {
            return Err(Error::Construction(format!(
                "invalid flow {} on edge ({},{}), must be in [0, {}]",
                flow, from, to, capacity
            )));
        }
        Ok(CapacitatedEdge {
            from,
            to,
            capacity,
            flow,
        })
    }

    /// The tail of the edge.
    pub fn from(&self) -> VertexId {
        self.from
    }

    /// The head of the edge.
    pub fn to(&self) -> VertexId {
        self.to
    }

    /// The capacity of the edge.
    pub fn capacity(&self) -> F {
        self.capacity
    }

    /// The current flow on the edge.
    pub fn flow(&self) -> F {
        self.flow
    }

    /// Return `true` if `0 <= flow <= capacity`.
    pub fn is_feasible(&self) -> bool {
        self.flow >= F::zero() && self.flow <= self.capacity
    }

    /// Return the endpoint of this edge that is not `vertex`.
    ///
    /// For a loop this is `vertex` itself.
    pub fn other(&self, vertex: VertexId) -> Result<VertexId> {
        if vertex == self.from {
            Ok(self.to)
        } else if vertex == self.to {
            Ok(self.from)
        } else {
            Err(self.invalid_endpoint(vertex))
        }
    }

    /// Return the residual capacity in direction of `vertex`.
    ///
    /// This is `capacity - flow` if `vertex` is the head (pushing forward)
    /// and `flow` if `vertex` is the tail (cancelling flow).
    pub fn residual_capacity_to(&self, vertex: VertexId) -> Result<F> {
        if vertex == self.from {
            Ok(self.flow)
        } else if vertex == self.to {
            Ok(self.capacity - self.flow)
        } else {
            Err(self.invalid_endpoint(vertex))
        }
    }

    /// Compute the flow resulting from pushing `delta` units towards `vertex`.
    ///
    /// The edge is not modified. The result is snapped to `0` or to the
    /// capacity if it is within the tolerance of the number type, and it is
    /// guaranteed to be feasible.
    pub fn residual_flow_to(&self, vertex: VertexId, delta: F) -> Result<F> {
        if !delta.is_comparable() || delta < F::zero() {
            return Err(Error::InvariantViolation(format!(
                "negative flow change {} on edge ({},{})",
                delta, self.from, self.to
            )));
        }

        let forward = vertex == self.to;
        let mut flow = if forward {
            self.flow + delta
        } else if vertex == self.from {
            self.flow - delta
        } else {
            return Err(self.invalid_endpoint(vertex));
        };

        // Remove floating point noise. If the capacity itself is below the
        // tolerance both bounds are close, then snap to the bound the flow
        // is pushed towards.
        let near_zero = flow.approx_eq(F::zero());
        let near_cap = flow.approx_eq(self.capacity);
        if near_zero && near_cap {
            flow = if forward { self.capacity } else { F::zero() };
        } else if near_zero {
            flow = F::zero();
        } else if near_cap {
            flow = self.capacity;
        }

        if flow < F::zero() || flow > self.capacity {
            return Err(Error::InvariantViolation(format!(
                "flow {} on edge ({},{}) not in [0, {}]",
                flow, self.from, self.to, self.capacity
            )));
        }

        Ok(flow)
    }

    /// Push `delta` units of flow towards `vertex`.
    ///
    /// If `vertex` is the head, the flow on the edge increases, if it is the
    /// tail, existing flow is cancelled. On error the edge is unchanged.
    pub fn add_residual_flow_to(&mut self, vertex: VertexId, delta: F) -> Result<()> {
        self.flow = self.residual_flow_to(vertex, delta)?;
        Ok(())
    }

    /// Overwrite the flow with a value obtained from `residual_flow_to`.
    pub(crate) fn set_flow(&mut self, flow: F) {
        debug_assert!(flow >= F::zero() && flow <= self.capacity);
        self.flow = flow;
    }

    fn invalid_endpoint(&self, vertex: VertexId) -> Error {
        Error::InvalidEndpoint {
            vertex,
            from: self.from,
            to: self.to,
        }
    }
}

impl<F> fmt::Display for CapacitatedEdge<F>
where
    F: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        write!(f, "{}->{} {}/{}", self.from, self.to, self.flow, self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::CapacitatedEdge;
    use crate::error::Error;

    #[test]
    fn test_construction() {
        assert!(CapacitatedEdge::new(0, 1, 0.0).is_ok());
        assert!(CapacitatedEdge::with_flow(0, 1, 4.0, 4.0).is_ok());

        assert!(matches!(CapacitatedEdge::new(0, 1, -1.0), Err(Error::Construction(_))));
        assert!(matches!(CapacitatedEdge::new(0, 1, f64::NAN), Err(Error::Construction(_))));
        assert!(matches!(
            CapacitatedEdge::with_flow(0, 1, 4.0, 4.5),
            Err(Error::Construction(_))
        ));
        assert!(matches!(
            CapacitatedEdge::with_flow(0, 1, 4, -1),
            Err(Error::Construction(_))
        ));
    }

    #[test]
    fn test_other() {
        let e = CapacitatedEdge::new(3, 7, 1).unwrap();
        assert_eq!(e.other(3), Ok(7));
        assert_eq!(e.other(7), Ok(3));
        assert_eq!(
            e.other(5),
            Err(Error::InvalidEndpoint {
                vertex: 5,
                from: 3,
                to: 7
            })
        );
    }

    #[test]
    fn test_residual() {
        let mut e = CapacitatedEdge::with_flow(0, 1, 10, 4).unwrap();
        assert_eq!(e.residual_capacity_to(1), Ok(6));
        assert_eq!(e.residual_capacity_to(0), Ok(4));
        assert!(e.residual_capacity_to(2).is_err());

        e.add_residual_flow_to(1, 6).unwrap();
        assert_eq!(e.flow(), 10);
        assert_eq!(e.residual_capacity_to(1), Ok(0));

        e.add_residual_flow_to(0, 10).unwrap();
        assert_eq!(e.flow(), 0);
        assert_eq!(e.residual_capacity_to(0), Ok(0));
    }

    #[test]
    fn test_violation_keeps_flow() {
        let mut e = CapacitatedEdge::with_flow(0, 1, 10, 4).unwrap();
        assert!(matches!(e.add_residual_flow_to(1, 7), Err(Error::InvariantViolation(_))));
        assert!(matches!(e.add_residual_flow_to(0, 5), Err(Error::InvariantViolation(_))));
        assert!(matches!(e.add_residual_flow_to(1, -1), Err(Error::InvariantViolation(_))));
        assert!(matches!(e.add_residual_flow_to(9, 1), Err(Error::InvalidEndpoint { .. })));
        assert_eq!(e.flow(), 4);
    }

    #[test]
    fn test_snapping() {
        let mut e = CapacitatedEdge::new(0, 1, 0.3).unwrap();
        e.add_residual_flow_to(1, 0.1).unwrap();
        e.add_residual_flow_to(1, 0.2).unwrap();
        // 0.1 + 0.2 != 0.3 in floating point
        assert_eq!(e.flow(), 0.3);
        assert_eq!(e.residual_capacity_to(1), Ok(0.0));

        e.add_residual_flow_to(0, 0.1).unwrap();
        e.add_residual_flow_to(0, 0.2).unwrap();
        assert_eq!(e.flow(), 0.0);
        assert_eq!(e.residual_capacity_to(0), Ok(0.0));
    }

    #[test]
    fn test_snapping_tiny_capacity() {
        let mut e = CapacitatedEdge::new(0, 1, 1e-11).unwrap();
        e.add_residual_flow_to(1, 1e-11).unwrap();
        assert_eq!(e.flow(), 1e-11);
        assert_eq!(e.residual_capacity_to(1), Ok(0.0));

        e.add_residual_flow_to(0, 1e-11).unwrap();
        assert_eq!(e.flow(), 0.0);
        assert_eq!(e.residual_capacity_to(0), Ok(0.0));

        let mut e = CapacitatedEdge::new(0, 1, 1e-7f32).unwrap();
        e.add_residual_flow_to(1, 1e-7).unwrap();
        assert_eq!(e.flow(), 1e-7);
    }

    #[test]
    fn test_loop() {
        let e = CapacitatedEdge::new(2, 2, 1).unwrap();
        assert_eq!(e.other(2), Ok(2));
        assert_eq!(e.to_string(), "2->2 0/1");
    }
}
