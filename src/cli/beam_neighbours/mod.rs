// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::common::{display_warnings, Warn, ARG_FILE_HELP, REFERENCE_BEAM_HELP};
use crate::{constants::DEFAULT_REFERENCE_BEAM, params::NeighbourParams, TrapumError};

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct BeamNeighboursArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    /// Path to the beam metadata (JSON) of the observation containing the
    /// reference beam.
    #[clap(short, long, parse(from_os_str), help_heading = "INPUT FILES")]
    pub(super) meta_path: Option<PathBuf>,

    /// Path to the beam metadata (JSON) of another epoch of the same pointing.
    /// Its beams closest to the reference beam are also reported.
    #[clap(long, parse(from_os_str), help_heading = "INPUT FILES")]
    pub(super) meta_path2: Option<PathBuf>,

    #[clap(short, long, help = REFERENCE_BEAM_HELP.as_str())]
    pub(super) reference_beam: Option<String>,
}

impl BeamNeighboursArgs {
    /// Consolidate the command-line and file arguments, preferring the
    /// command-line arguments.
    pub(super) fn merge(self) -> Result<BeamNeighboursArgs, TrapumError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            let BeamNeighboursArgs {
                args_file: _,
                meta_path,
                meta_path2,
                reference_beam,
            } = unpack_arg_file!(arg_file);

            Ok(BeamNeighboursArgs {
                args_file: None,
                meta_path: cli_args.meta_path.or(meta_path),
                meta_path2: cli_args.meta_path2.or(meta_path2),
                reference_beam: cli_args.reference_beam.or(reference_beam),
            })
        } else {
            Ok(cli_args)
        }
    }

    pub(super) fn parse(self) -> Result<NeighbourParams, TrapumError> {
        debug!("{:#?}", self);

        let Self {
            args_file: _,
            meta_path,
            meta_path2,
            reference_beam,
        } = self;

        let meta_path = meta_path.ok_or(BeamNeighboursArgsError::NoMetadata)?;
        let other_epoch_meta_path = match meta_path2 {
            Some(p) if !p.exists() => {
                format!(
                    "Second epoch beam metadata '{}' doesn't exist; only reporting neighbours from '{}'",
                    p.display(),
                    meta_path.display()
                )
                .warn();
                None
            }
            p => p,
        };

        Ok(NeighbourParams {
            meta_path,
            other_epoch_meta_path,
            reference_beam: reference_beam.unwrap_or_else(|| DEFAULT_REFERENCE_BEAM.to_string()),
        })
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), TrapumError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;
        display_warnings();

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        params.run()
    }
}

#[derive(thiserror::Error, Debug)]
pub(super) enum BeamNeighboursArgsError {
    #[error("No beam metadata was specified (--meta-path)")]
    NoMetadata,
}
