// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Angular geometry of coherent beams relative to a reference position.
//!
//! All angles are in degrees.

mod error;

pub use error::GeometryError;

use std::fmt;

use indexmap::IndexMap;
use log::{trace, warn};

use crate::{
    beams::{BeamCatalog, BeamId},
    constants::MAX_NEIGHBOURS,
    coord::SkyPosition,
};

/// A beam and its angular separation from some reference position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbour {
    pub id: BeamId,
    pub separation_deg: f64,
}

impl fmt::Display for Neighbour {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.id, self.separation_deg)
    }
}

/// Where the reference position used for ranking came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Epoch {
    /// The reference is one of the beams being ranked, so the closest beam is
    /// the reference itself and is not reported.
    Same,

    /// The beams being ranked are from a different observation than the
    /// reference; every beam is eligible.
    Other,
}

/// Get the separation of every beam from `reference`, in beam order.
pub fn separations(reference: &SkyPosition, beams: &BeamCatalog) -> Vec<Neighbour> {
    beams
        .iter()
        .map(|beam| Neighbour {
            id: beam.id,
            separation_deg: reference.separation(&beam.position),
        })
        .collect()
}

/// For each named radius \[degrees\], get the beams that are strictly closer
/// than that radius to `reference`. Beams are listed in index order, and the
/// output has the same order as `radii`. A beam may be within many radii.
pub fn classify(
    reference: &SkyPosition,
    beams: &BeamCatalog,
    radii: &IndexMap<String, f64>,
) -> IndexMap<String, Vec<BeamId>> {
    let seps = separations(reference, beams);
    radii
        .iter()
        .map(|(name, &radius_deg)| {
            let within = seps
                .iter()
                .filter(|n| n.separation_deg < radius_deg)
                .map(|n| n.id)
                .collect::<Vec<_>>();
            trace!("{} beams within the {name} radius ({radius_deg}°)", within.len());
            (name.clone(), within)
        })
        .collect()
}

/// Sort all beams by their separation from `reference`, closest first. Beams
/// with equal separations stay in index order.
pub fn rank(reference: &SkyPosition, beams: &BeamCatalog) -> Vec<Neighbour> {
    let mut ranked = separations(reference, beams);
    ranked.sort_by(|a, b| a.separation_deg.total_cmp(&b.separation_deg));
    ranked
}

/// Get the `k` beams closest to `reference` (at most [`MAX_NEIGHBOURS`]),
/// closest first. For [`Epoch::Same`], the closest beam (the reference
/// itself) is skipped.
pub fn rank_nearest(
    reference: &SkyPosition,
    beams: &BeamCatalog,
    k: usize,
    epoch: Epoch,
) -> Result<Vec<Neighbour>, GeometryError> {
    if beams.is_empty() {
        return Err(GeometryError::EmptyCatalog);
    }

    let ranked = rank(reference, beams);
    let skip = match epoch {
        Epoch::Same => {
            let closest = ranked[0];
            if closest.separation_deg > 0.0 {
                warn!(
                    "The reference position is not one of the beams; {} ({}°) will not be reported",
                    closest.id, closest.separation_deg
                );
            }
            1
        }
        Epoch::Other => 0,
    };

    Ok(ranked
        .into_iter()
        .skip(skip)
        .take(k.min(MAX_NEIGHBOURS))
        .collect())
}
