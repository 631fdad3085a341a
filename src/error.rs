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

//! Errors of network construction and flow computation.

use crate::network::VertexId;

use thiserror::Error;

/// Error raised by edges, networks and flow algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid data when constructing an edge or adding it to a network.
    #[error("Construction error: {0}")]
    Construction(String),

    /// An edge has been queried with a vertex that is none of its endpoints.
    #[error("Vertex {vertex} is not an endpoint of edge ({from},{to})")]
    InvalidEndpoint { vertex: VertexId, from: VertexId, to: VertexId },

    /// A flow update would leave the feasible range `[0, capacity]`.
    ///
    /// This indicates a bug in the calling algorithm.
    #[error("Flow invariant violated: {0}")]
    InvariantViolation(String),

    /// The flow already present on a network is not a feasible flow.
    #[error("Infeasible initial flow: {0}")]
    InfeasibleFlow(String),

    /// Source and sink of a flow problem are the same vertex.
    #[error("Source and sink must not be equal (both are {0})")]
    DegenerateQuery(VertexId),

    /// The computation has been cancelled after the given number of
    /// augmentations.
    #[error("Flow computation cancelled after {0} augmentations")]
    Cancelled(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
