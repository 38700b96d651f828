// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::{pulsars::find_harmonics, TrapumError};

/// Compare a candidate's period with the spin frequencies of known pulsars.
/// For each par file, print the pulsar's name and DM, the candidate-to-pulsar
/// frequency ratio and its reciprocal.
#[derive(Parser, Debug)]
pub(super) struct HarmonicsArgs {
    /// Directory containing the par files of known pulsars.
    #[clap(name = "PAR_DIR", parse(from_os_str))]
    par_dir: PathBuf,

    /// The period of the candidate [milliseconds].
    #[clap(name = "PERIOD_MS")]
    period_ms: f64,
}

impl HarmonicsArgs {
    pub(super) fn run(self, dry_run: bool) -> Result<(), TrapumError> {
        let Self { par_dir, period_ms } = self;
        if !par_dir.is_dir() {
            return Err(HarmonicsArgsError::NotADirectory(par_dir).into());
        }

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        let harmonics = find_harmonics(&par_dir, period_ms)?;
        info!(
            "Compared a {period_ms} ms candidate against {} pulsars",
            harmonics.len()
        );
        for h in harmonics {
            println!("{h}");
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub(super) enum HarmonicsArgsError {
    #[error("Par file directory '{}' doesn't exist or isn't a directory", .0.display())]
    NotADirectory(PathBuf),
}
