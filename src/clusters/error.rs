// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

/// Errors associated with reading a globular-cluster property table.
#[derive(Error, Debug)]
pub enum ClusterTableError {
    #[error("Couldn't open cluster property file '{}': {err}", path.display())]
    NotFound {
        path: PathBuf,
        err: std::io::Error,
    },

    #[error("The cluster property table has no header row")]
    NoHeader,

    #[error("The cluster property table has no '{0}' column")]
    MissingColumn(&'static str),

    #[error("Cluster property table line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Cluster '{0}' is not listed in the cluster property table")]
    MissingKey(String),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
