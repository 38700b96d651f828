// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.


use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::common::{display_warnings, ARG_FILE_HELP, CLUSTER_FILE_HELP, CLUSTER_NAME_HELP};
use crate::{
    constants::{DEFAULT_CLUSTER_FILE, DEFAULT_CLUSTER_NAME},
    params::RadiusParams,
    TrapumError,
};

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct BeamsInRadiusArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    /// Path to the beam metadata (JSON) of the observation.
    #[clap(short, long, parse(from_os_str), help_heading = "INPUT FILES")]
    pub(super) meta_path: Option<PathBuf>,

    #[clap(long, help = CLUSTER_NAME_HELP.as_str(), help_heading = "CLUSTER")]
    pub(super) gc_name: Option<String>,

    #[clap(long, help = CLUSTER_FILE_HELP.as_str(), parse(from_os_str), help_heading = "CLUSTER")]
    pub(super) gc_file: Option<PathBuf>,

    /// Also report the beams within this radius of the boresight [degrees].
    #[clap(long, help_heading = "CLUSTER")]
    pub(super) user_radius: Option<f64>,
}

impl BeamsInRadiusArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    ///
    /// This function should only ever merge arguments, and not try to make
    /// sense of them.
    pub(super) fn merge(self) -> Result<BeamsInRadiusArgs, TrapumError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Ensure all of the file args are accounted for by pattern
            // matching.
            let BeamsInRadiusArgs {
                args_file: _,
                meta_path,
                gc_name,
                gc_file,
                user_radius,
            } = unpack_arg_file!(arg_file);

            Ok(BeamsInRadiusArgs {
                args_file: None,
                meta_path: cli_args.meta_path.or(meta_path),
                gc_name: cli_args.gc_name.or(gc_name),
                gc_file: cli_args.gc_file.or(gc_file),
                user_radius: cli_args.user_radius.or(user_radius),
            })
        } else {
            Ok(cli_args)
        }
    }

    pub(super) fn parse(self) -> Result<RadiusParams, TrapumError> {
        debug!("{:#?}", self);

        let Self {
            args_file: _,
            meta_path,
            gc_name,
            gc_file,
            user_radius,
        } = self;

        let meta_path = meta_path.ok_or(BeamsInRadiusArgsError::NoMetadata)?;
        if let Some(r) = user_radius {
            if !r.is_finite() || r < 0.0 {
                return Err(BeamsInRadiusArgsError::InvalidUserRadius(r).into());
            }
        }

        Ok(RadiusParams {
            meta_path,
            cluster_name: gc_name.unwrap_or_else(|| DEFAULT_CLUSTER_NAME.to_string()),
            cluster_file: gc_file.unwrap_or_else(|| PathBuf::from(DEFAULT_CLUSTER_FILE)),
            user_radius_deg: user_radius,
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
pub(super) enum BeamsInRadiusArgsError {
    #[error("No beam metadata was specified (--meta-path)")]
    NoMetadata,

    #[error("The user-specified radius must be a non-negative number of degrees; got {0}")]
    InvalidUserRadius(f64),
}
