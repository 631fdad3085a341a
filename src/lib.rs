// Copyright (c) 2015-2024 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

#![forbid(unsafe_code)]

//! Maximum flows and minimum cuts on capacitated networks.
//!
//! A [`FlowNetwork`] consists of a fixed number of vertices `0..n` and
//! directed [`CapacitatedEdge`]s. The algorithms in [`maxflow`] compute a
//! maximum flow between two vertices, store it on the edges of the network
//! and report a minimum cut.

mod num {
    pub use num_traits as traits;
}

// # Data structures

pub mod traits;
pub use self::traits::FlowNum;

pub mod error;
pub use self::error::{Error, Result};

pub mod edge;
pub use self::edge::CapacitatedEdge;

pub mod network;
pub use self::network::{EdgeId, FlowNetwork, VertexId};

/// The default network type with floating point capacities.
pub type Net = self::FlowNetwork<f64>;

// # Algorithms

pub mod maxflow;
