// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to read beam metadata files.
//!
//! A metadata file is JSON, with (at least) a "boresight" record and a
//! "beams" object mapping beam keys to records. Each record is a
//! comma-separated string whose last two fields are the RA \[hours\] and Dec
//! \[degrees\], e.g.
//!
//! ```json
//! {
//!     "boresight": "Ter5, 17:48:04.85, -24:46:44.6",
//!     "beams": {
//!         "cfbf00000": "Ter5_000, 17:48:04.85, -24:46:44.6",
//!         "cfbf00001": "unset"
//!     }
//! }
//! ```

mod error;

pub use error::ReadMetadataError;

use std::{
    collections::BTreeMap,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{beams::BeamCatalog, constants::UNSET_BEAM_MARKER, coord::SkyPosition};

/// The contents of a beam metadata file. Other fields may be present in the
/// file, but they're not used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamMetadata {
    /// The boresight record.
    pub boresight: String,

    /// All beam records, keyed by the beam key. A `BTreeMap` keeps the keys
    /// lexically sorted.
    pub beams: BTreeMap<String, String>,
}

/// A single record, split into its named fields.
#[derive(Debug, Clone, PartialEq)]
pub struct BeamRecord<'a> {
    /// Everything before the coordinates; usually the name of the target.
    pub label: String,
    pub ra: &'a str,
    pub dec: &'a str,
}

impl<'a> BeamRecord<'a> {
    /// Split a record into its fields. At least two comma-separated fields
    /// (RA and Dec) must be present.
    pub fn parse(key: &str, record: &'a str) -> Result<Self, ReadMetadataError> {
        let fields = record.split(',').map(str::trim).collect::<Vec<_>>();
        match fields.as_slice() {
            [label @ .., ra, dec] if !ra.is_empty() && !dec.is_empty() => Ok(Self {
                label: label.join(","),
                ra: *ra,
                dec: *dec,
            }),
            _ => Err(ReadMetadataError::MalformedRecord {
                key: key.to_string(),
                record: record.to_string(),
                reason: "expected the last two comma-separated fields to be RA and Dec"
                    .to_string(),
            }),
        }
    }
}

fn parse_position(key: &str, record: &str) -> Result<SkyPosition, ReadMetadataError> {
    let fields = BeamRecord::parse(key, record)?;
    SkyPosition::parse(fields.ra, fields.dec).map_err(|e| ReadMetadataError::MalformedRecord {
        key: key.to_string(),
        record: record.to_string(),
        reason: e.to_string(),
    })
}

impl BeamMetadata {
    /// Read a beam metadata file.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ReadMetadataError> {
        let path = path.as_ref();
        debug!("Attempting to read beam metadata {}", path.display());
        let f = File::open(path).map_err(|err| ReadMetadataError::NotFound {
            path: path.to_path_buf(),
            err,
        })?;
        serde_json::from_reader(BufReader::new(f)).map_err(|err| {
            ReadMetadataError::MalformedMetadata {
                path: PathBuf::from(path),
                err,
            }
        })
    }

    /// Get the boresight position.
    pub fn boresight(&self) -> Result<SkyPosition, ReadMetadataError> {
        parse_position("boresight", &self.boresight)
    }

    /// Get the position of a specific beam, identified by its key in the
    /// metadata (e.g. "cfbf00000").
    pub fn reference_beam(&self, key: &str) -> Result<SkyPosition, ReadMetadataError> {
        let record = self
            .beams
            .get(key)
            .ok_or_else(|| ReadMetadataError::MissingKey {
                key: key.to_string(),
            })?;
        if record.contains(UNSET_BEAM_MARKER) {
            return Err(ReadMetadataError::MalformedRecord {
                key: key.to_string(),
                record: record.clone(),
                reason: "the beam is unset".to_string(),
            });
        }
        parse_position(key, record)
    }

    /// Get all of the coherent beams.
    ///
    /// Records containing "unset" are skipped and never receive an index. The
    /// last remaining record (in sorted key order) is always discarded; in
    /// metadata files this record is a summary of the tiling rather than a
    /// coherent beam.
    pub fn coherent_beams(&self) -> Result<BeamCatalog, ReadMetadataError> {
        let mut positions = Vec::with_capacity(self.beams.len());
        let mut num_unset = 0;
        for (key, record) in &self.beams {
            if record.contains(UNSET_BEAM_MARKER) {
                trace!("Skipping unset beam {key}");
                num_unset += 1;
                continue;
            }
            positions.push((key.as_str(), parse_position(key, record)?));
        }
        if let Some((key, _)) = positions.pop() {
            debug!("Discarding the last beam record ({key})");
        }
        debug!("{} coherent beams ({num_unset} unset)", positions.len());

        Ok(BeamCatalog::from_positions(positions))
    }
}
