// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Coherent beams and the catalogs that hold them.

use std::fmt;

use crate::{constants::BEAM_TOKEN_PREFIX, coord::SkyPosition};

/// The index of a coherent beam within its catalog. This is rendered as a
/// token like "cfbf00007".
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BeamId(pub usize);

impl fmt::Display for BeamId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{BEAM_TOKEN_PREFIX}{:03}", self.0)
    }
}

/// A single coherent beam.
#[derive(Clone, Debug, PartialEq)]
pub struct Beam {
    pub id: BeamId,

    /// The key this beam was listed under in the metadata. This is not
    /// necessarily the same as `id` rendered as a token, because unset beams
    /// don't consume an index.
    pub key: String,

    pub position: SkyPosition,
}

/// Coherent beams, ordered by their index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BeamCatalog {
    beams: Vec<Beam>,
}

impl BeamCatalog {
    /// Build a catalog from (key, position) pairs. Indices are assigned in
    /// iteration order, starting from 0.
    pub fn from_positions<I, S>(positions: I) -> Self
    where
        I: IntoIterator<Item = (S, SkyPosition)>,
        S: Into<String>,
    {
        Self {
            beams: positions
                .into_iter()
                .enumerate()
                .map(|(i, (key, position))| Beam {
                    id: BeamId(i),
                    key: key.into(),
                    position,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.beams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beams.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<Beam> {
        self.beams.iter()
    }

    pub fn get(&self, id: BeamId) -> Option<&Beam> {
        self.beams.get(id.0)
    }
}

impl<'a> IntoIterator for &'a BeamCatalog {
    type Item = &'a Beam;
    type IntoIter = std::slice::Iter<'a, Beam>;

    fn into_iter(self) -> Self::IntoIter {
        self.beams.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beam_token() {
        assert_eq!(BeamId(0).to_string(), "cfbf00000");
        assert_eq!(BeamId(7).to_string(), "cfbf00007");
        assert_eq!(BeamId(123).to_string(), "cfbf00123");
    }

    #[test]
    fn test_catalog_indices_follow_insertion_order() {
        let p = SkyPosition::from_hours_degrees(5.0, -10.0).unwrap();
        let catalog = BeamCatalog::from_positions([("cfbf00002", p), ("cfbf00005", p)]);
        assert_eq!(catalog.len(), 2);
        let ids = catalog.iter().map(|b| b.id).collect::<Vec<_>>();
        assert_eq!(ids, [BeamId(0), BeamId(1)]);
        assert_eq!(catalog.get(BeamId(1)).unwrap().key, "cfbf00005");
        assert!(catalog.get(BeamId(2)).is_none());
    }
}
