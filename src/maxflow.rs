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

//! Maximum flow algorithms.
//!
//! The algorithms work directly on the flow stored in a
//! [`FlowNetwork`](crate::FlowNetwork): after a solve each edge carries its
//! part of the maximum flow.

pub mod edmondskarp;
pub use self::edmondskarp::{edmondskarp, EdmondsKarp};

/// State of a max-flow computation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SolutionState {
    /// No source and sink have been set, yet.
    Unsolved,
    /// Source and sink are set and augmenting paths may still exist.
    Augmenting,
    /// No augmenting path exists, the flow is maximal.
    Saturated,
    /// The computation has been cancelled.
    Cancelled,
}
