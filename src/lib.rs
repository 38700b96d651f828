// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Beam-geometry utilities for TRAPUM multi-beam observations: which coherent
//! beams fall within a globular cluster's characteristic radii, which beams
//! neighbour a reference beam (within and across epochs), and how a candidate
//! relates to the known pulsars of a cluster.

pub mod beams;
mod cli;
pub mod clusters;
pub mod constants;
pub mod coord;
pub mod geometry;
pub(crate) mod glob;
pub mod metadata;
mod params;
pub mod pulsars;
pub mod sexagesimal;

// Re-exports.
pub use cli::{TrapumBeams, TrapumError};
