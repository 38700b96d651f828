// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line interface code. More specific options for `trapum-beams`
//! subcommands are contained in modules.
//!
//! Every field of an arguments struct is optional, so that any argument may
//! come from the command line *or* an arguments file; defaults are only
//! applied when the merged arguments are parsed into parameters.
//!
//! Only 3 things should be public in this module: `TrapumBeams`,
//! `TrapumBeams::run`, and `TrapumError`.

#[macro_use]
mod common;
mod beam_neighbours;
mod beams_in_radius;
mod error;
mod harmonics;

pub(crate) use common::{InfoPrinter, Warn};
pub use error::TrapumError;

use std::path::PathBuf;

use clap::{AppSettings, Args, Parser, Subcommand};
use log::info;

// Add build-time information from the "built" crate.
include!(concat!(env!("OUT_DIR"), "/built.rs"));

#[derive(Debug, Parser)]
#[clap(
    version,
    author,
    about = r#"Utilities for locating the coherent beams of TRAPUM observations
relative to globular clusters, each other, and known pulsars"#
)]
#[clap(global_setting(AppSettings::DeriveDisplayOrder))]
#[clap(disable_help_subcommand = true)]
#[clap(infer_subcommands = true)]
#[clap(propagate_version = true)]
#[clap(infer_long_args = true)]
pub struct TrapumBeams {
    #[clap(flatten)]
    global_opts: GlobalArgs,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// The verbosity of the program. Increase by specifying multiple times
    /// (e.g. -vv). The default is to print only warnings and errors; -v adds
    /// high-level information.
    #[clap(short, long, parse(from_occurrences))]
    #[clap(global = true)]
    verbosity: u8,

    /// Only verify that arguments were correctly ingested and print out
    /// high-level information.
    #[clap(long)]
    #[clap(global = true)]
    dry_run: bool,

    /// Save the input arguments into a new TOML file that can be used to
    /// reproduce this run.
    #[clap(long)]
    #[clap(global = true)]
    save_toml: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
#[clap(arg_required_else_help = true)]
enum Command {
    #[clap(alias = "radius")]
    #[clap(about = "List the coherent beams within the core, half-mass, half-light and tidal radii of a globular cluster.")]
    BeamsInRadius(beams_in_radius::BeamsInRadiusArgs),

    #[clap(alias = "neighbours")]
    #[clap(about = "List the coherent beams closest to a reference beam, optionally also from another epoch.")]
    BeamNeighbours(beam_neighbours::BeamNeighboursArgs),

    #[clap(about = "Compare a candidate's period with the spin frequencies of known pulsars.")]
    Harmonics(harmonics::HarmonicsArgs),
}

impl TrapumBeams {
    pub fn run(self) -> Result<(), TrapumError> {
        // Set up logging.
        let GlobalArgs {
            verbosity,
            dry_run,
            save_toml,
        } = self.global_opts;
        setup_logging(verbosity).expect("Failed to initialise logging.");

        // Print the version of trapum-beams and its build-time information.
        let sub_command = match &self.command {
            Command::BeamsInRadius(_) => "beams-in-radius",
            Command::BeamNeighbours(_) => "beam-neighbours",
            Command::Harmonics(_) => "harmonics",
        };
        info!("trapum-beams {} {}", sub_command, env!("CARGO_PKG_VERSION"));
        display_build_info();

        macro_rules! merge_save_run {
            ($args:expr) => {{
                let args = $args.merge()?;
                if let Some(toml) = save_toml {
                    use std::{
                        fs::File,
                        io::{BufWriter, Write},
                    };

                    let mut f = BufWriter::new(File::create(toml)?);
                    let toml_str = toml::to_string(&args)?;
                    f.write_all(toml_str.as_bytes())?;
                }
                args.run(dry_run)?;
            }};
        }

        match self.command {
            Command::BeamsInRadius(args) => merge_save_run!(args),
            Command::BeamNeighbours(args) => merge_save_run!(args),
            Command::Harmonics(args) => {
                if save_toml.is_some() {
                    "harmonics doesn't take an arguments file; ignoring --save-toml".warn();
                    common::display_warnings();
                }
                args.run(dry_run)?
            }
        }

        info!("trapum-beams {} complete.", sub_command);
        Ok(())
    }
}

/// Activate a logger. All log messages are put onto `stderr`, leaving `stdout`
/// for the report alone. Only warnings and errors are shown by default; each
/// `-v` lowers the level (info, debug, trace). `env_logger` automatically only
/// uses colours and fancy symbols if we're on a tty (e.g. a terminal). Source
/// code lines are displayed in log messages when verbosity >= 4.
fn setup_logging(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stderr);
    builder.format_target(false);
    match verbosity {
        0 => builder.filter_level(log::LevelFilter::Warn),
        1 => builder.filter_level(log::LevelFilter::Info),
        2 => builder.filter_level(log::LevelFilter::Debug),
        3 => builder.filter_level(log::LevelFilter::Trace),
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
            builder.format(|buf, record| {
                use std::io::Write;

                let timestamp = buf.timestamp();
                let level = record.level();
                let target = record.target();
                let line = record.line().unwrap_or(0);
                let message = record.args();

                writeln!(buf, "[{timestamp} {level} {target}:{line}] {message}")
            })
        }
    };
    builder.try_init()
}

/// Write many info-level log lines of how this executable was compiled.
fn display_build_info() {
    let dirty = match GIT_DIRTY {
        Some(true) => " (dirty)",
        _ => "",
    };
    match GIT_COMMIT_HASH_SHORT {
        Some(hash) => {
            info!("Compiled on git commit hash: {hash}{dirty}");
        }
        None => info!("Compiled on git commit hash: <no git info>"),
    }
    if let Some(hr) = GIT_HEAD_REF {
        info!("            git head ref: {}", hr);
    }
    info!("            {}", BUILT_TIME_UTC);
    info!("         with compiler {}", RUSTC_VERSION);
    info!("");
}
