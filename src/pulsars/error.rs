// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

use crate::glob::GlobError;

#[derive(Error, Debug)]
pub enum ParFileError {
    #[error("Couldn't open par file '{}': {err}", path.display())]
    NotFound {
        path: PathBuf,
        err: std::io::Error,
    },

    #[error("Par file '{file}' has no {key} parameter")]
    MissingKey { file: String, key: &'static str },

    #[error("Par file '{file}' has an invalid {key} value '{value}'")]
    MalformedRecord {
        file: String,
        key: &'static str,
        value: String,
    },

    #[error("The candidate period must be positive and finite; got {0} ms")]
    InvalidPeriod(f64),

    #[error("Couldn't find par files: {0}")]
    Glob(#[from] GlobError),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
