// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Functions to glob files.

use std::path::{Path, PathBuf};

use glob::glob;
use thiserror::Error;

/// Given a glob pattern, get all of the matches from the filesystem, sorted.
pub(crate) fn get_all_matches_from_glob(g: &str) -> Result<Vec<PathBuf>, GlobError> {
    let mut entries = vec![];
    for entry in glob(g)? {
        match entry {
            Ok(e) => entries.push(e),
            Err(e) => return Err(GlobError::GlobCrate(e)),
        }
    }
    entries.sort();
    Ok(entries)
}

/// Get all files in `dir` with the extension `ext`, sorted by path.
pub(crate) fn get_files_with_extension(dir: &Path, ext: &str) -> Result<Vec<PathBuf>, GlobError> {
    if !dir.is_dir() {
        return Err(GlobError::NotADirectory(dir.to_path_buf()));
    }
    let pattern = dir.join(format!("*.{ext}"));
    get_all_matches_from_glob(&pattern.display().to_string())
}

#[derive(Error, Debug)]
/// Error type associated with glob helper functions.
pub enum GlobError {
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error(transparent)]
    GlobCrate(#[from] glob::GlobError),

    #[error(transparent)]
    PatternError(#[from] glob::PatternError),
}
