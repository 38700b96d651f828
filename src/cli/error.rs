// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all trapum-beams-related errors. This should be the *only*
//! error enum that is publicly visible.

use thiserror::Error;

use super::{
    beam_neighbours::BeamNeighboursArgsError, beams_in_radius::BeamsInRadiusArgsError,
    harmonics::HarmonicsArgsError,
};
use crate::{
    clusters::ClusterTableError, geometry::GeometryError, metadata::ReadMetadataError,
    pulsars::ParFileError,
};

/// The *only* publicly visible error from trapum-beams.
#[derive(Error, Debug)]
pub enum TrapumError {
    /// An error related to beams-in-radius.
    #[error("{0}\n\nSee `trapum-beams beams-in-radius --help` for usage.")]
    BeamsInRadius(String),

    /// An error related to beam-neighbours.
    #[error("{0}\n\nSee `trapum-beams beam-neighbours --help` for usage.")]
    BeamNeighbours(String),

    /// An error related to harmonics.
    #[error("{0}\n\nSee `trapum-beams harmonics --help` for usage.")]
    Harmonics(String),

    /// An error related to beam metadata files.
    #[error("{0}\n\nBeam metadata is a JSON file with a \"boresight\" record and a \"beams\" map of records; the last two fields of each record are RA [hours] and Dec [degrees].")]
    Metadata(String),

    /// An error related to the cluster property table.
    #[error("{0}\n\nThe cluster property table is whitespace delimited, with a header row (which must include Cluster, R_Sun, rc, rh,l, rh,m and rt) followed by a row of units.")]
    ClusterTable(String),

    /// An error related to par files.
    #[error("{0}")]
    ParFile(String),

    /// An error related to argument files.
    #[error("{0}\n\nArgument files are toml or json, with the same field names as the long command-line arguments (using underscores).")]
    ArgFile(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

// Binary sub-command errors.

impl From<BeamsInRadiusArgsError> for TrapumError {
    fn from(e: BeamsInRadiusArgsError) -> Self {
        Self::BeamsInRadius(e.to_string())
    }
}

impl From<BeamNeighboursArgsError> for TrapumError {
    fn from(e: BeamNeighboursArgsError) -> Self {
        Self::BeamNeighbours(e.to_string())
    }
}

impl From<HarmonicsArgsError> for TrapumError {
    fn from(e: HarmonicsArgsError) -> Self {
        Self::Harmonics(e.to_string())
    }
}

// Library errors.

impl From<ReadMetadataError> for TrapumError {
    fn from(e: ReadMetadataError) -> Self {
        match e {
            ReadMetadataError::NotFound { .. } => Self::Generic(e.to_string()),
            ReadMetadataError::MalformedMetadata { .. }
            | ReadMetadataError::MalformedRecord { .. }
            | ReadMetadataError::MissingKey { .. } => Self::Metadata(e.to_string()),
        }
    }
}

impl From<ClusterTableError> for TrapumError {
    fn from(e: ClusterTableError) -> Self {
        match e {
            ClusterTableError::NotFound { .. } | ClusterTableError::IO(_) => {
                Self::Generic(e.to_string())
            }
            ClusterTableError::NoHeader
            | ClusterTableError::MissingColumn(_)
            | ClusterTableError::MalformedRecord { .. }
            | ClusterTableError::MissingKey(_) => Self::ClusterTable(e.to_string()),
        }
    }
}

impl From<GeometryError> for TrapumError {
    fn from(e: GeometryError) -> Self {
        match e {
            GeometryError::EmptyCatalog => Self::Metadata(e.to_string()),
        }
    }
}

impl From<ParFileError> for TrapumError {
    fn from(e: ParFileError) -> Self {
        match e {
            ParFileError::InvalidPeriod(_) => Self::Harmonics(e.to_string()),
            ParFileError::NotFound { .. } | ParFileError::Glob(_) | ParFileError::IO(_) => {
                Self::Generic(e.to_string())
            }
            ParFileError::MissingKey { .. } | ParFileError::MalformedRecord { .. } => {
                Self::ParFile(e.to_string())
            }
        }
    }
}

// External crate errors.

impl From<std::io::Error> for TrapumError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<toml::ser::Error> for TrapumError {
    fn from(e: toml::ser::Error) -> Self {
        Self::ArgFile(e.to_string())
    }
}
