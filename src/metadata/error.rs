// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

/// Errors associated with reading beam metadata.
#[derive(Error, Debug)]
pub enum ReadMetadataError {
    #[error("Couldn't open beam metadata file '{}': {err}", path.display())]
    NotFound {
        path: PathBuf,
        err: std::io::Error,
    },

    #[error("Beam metadata '{}' is malformed: {err}", path.display())]
    MalformedMetadata {
        path: PathBuf,
        err: serde_json::Error,
    },

    #[error("Beam metadata record '{key}' is malformed ({reason}): '{record}'")]
    MalformedRecord {
        key: String,
        record: String,
        reason: String,
    },

    #[error("Beam '{key}' is not listed in the beam metadata")]
    MissingKey { key: String },
}
