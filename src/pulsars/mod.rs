// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Known pulsars from TEMPO-style par files, and how a candidate's spin
//! frequency relates to theirs.
//!
//! A candidate that is a harmonic (or sub-harmonic) of a known pulsar has a
//! frequency ratio close to an integer (or the reciprocal of an integer).

mod error;

pub use error::ParFileError;

use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::{debug, trace};

use crate::glob::get_files_with_extension;

/// The parameters of a known pulsar that are needed to compare it with a
/// candidate.
#[derive(Clone, Debug, PartialEq)]
pub struct ParFile {
    pub name: String,
    /// Dispersion measure \[pc cm^-3\]
    pub dm: f64,
    /// The dispersion measure exactly as written in the par file.
    pub dm_text: String,
    /// Spin frequency \[Hz\]
    pub f0: f64,
}

/// Par files sometimes use Fortran-style exponents (e.g. "1.5D-3").
fn parse_par_float(s: &str) -> Option<f64> {
    s.replace(['D', 'd'], "e").parse().ok()
}

impl ParFile {
    /// Read a par file.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ParFileError> {
        let path = path.as_ref();
        trace!("Reading par file {}", path.display());
        let f = File::open(path).map_err(|err| ParFileError::NotFound {
            path: path.to_path_buf(),
            err,
        })?;
        Self::parse(BufReader::new(f), &path.display().to_string())
    }

    /// Parse the contents of a par file. Each line is a parameter name
    /// followed by its value (and optionally a fit flag and uncertainty).
    /// Only the first occurrence of each parameter is used. F0 must be
    /// positive. `file` is only used in error messages.
    pub fn parse<R: BufRead>(reader: R, file: &str) -> Result<Self, ParFileError> {
        let mut name = None;
        let mut dm = None;
        let mut f0 = None;
        for line in reader.lines() {
            let line = line?;
            let mut fields = line.split_whitespace();
            let (key, value) = match (fields.next(), fields.next()) {
                (Some(k), Some(v)) if !k.starts_with('#') => (k, v),
                _ => continue,
            };

            match key {
                k if k.starts_with("PSR") && name.is_none() => name = Some(value.to_string()),
                "DM" if dm.is_none() => dm = Some(value.to_string()),
                "F0" if f0.is_none() => f0 = Some(value.to_string()),
                _ => (),
            }
            if name.is_some() && dm.is_some() && f0.is_some() {
                break;
            }
        }

        let require = |value: Option<&str>, key: &'static str| -> Result<f64, ParFileError> {
            let value = value.ok_or_else(|| ParFileError::MissingKey {
                file: file.to_string(),
                key,
            })?;
            parse_par_float(value).ok_or_else(|| ParFileError::MalformedRecord {
                file: file.to_string(),
                key,
                value: value.to_string(),
            })
        };
        let f0_value = require(f0.as_deref(), "F0")?;
        if !f0_value.is_finite() || f0_value <= 0.0 {
            return Err(ParFileError::MalformedRecord {
                file: file.to_string(),
                key: "F0",
                value: f0.unwrap_or_default(),
            });
        }
        Ok(Self {
            name: name.ok_or_else(|| ParFileError::MissingKey {
                file: file.to_string(),
                key: "PSR",
            })?,
            dm: require(dm.as_deref(), "DM")?,
            dm_text: dm.unwrap_or_default(),
            f0: f0_value,
        })
    }
}

/// A candidate compared against a known pulsar.
#[derive(Clone, Debug, PartialEq)]
pub struct Harmonic {
    pub pulsar: ParFile,
    /// Candidate spin frequency / pulsar spin frequency
    pub ratio: f64,
    /// Pulsar spin frequency / candidate spin frequency
    pub reciprocal_ratio: f64,
}

impl fmt::Display for Harmonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {}  {} {}",
            self.pulsar.name, self.pulsar.dm_text, self.ratio, self.reciprocal_ratio
        )
    }
}

/// Convert a period \[ms\] to a spin frequency \[Hz\].
pub fn spin_frequency_hz(period_ms: f64) -> Result<f64, ParFileError> {
    if !period_ms.is_finite() || period_ms <= 0.0 {
        return Err(ParFileError::InvalidPeriod(period_ms));
    }
    Ok(1000.0 / period_ms)
}

/// Compare a candidate period \[ms\] against every par file in `par_dir`. The
/// results are in par-file name order.
pub fn find_harmonics(par_dir: &Path, period_ms: f64) -> Result<Vec<Harmonic>, ParFileError> {
    let spin_freq = spin_frequency_hz(period_ms)?;
    debug!("Candidate spin frequency: {spin_freq} Hz");

    let par_files = get_files_with_extension(par_dir, "par")?;
    debug!("Found {} par files in {}", par_files.len(), par_dir.display());

    par_files
        .iter()
        .map(|path| {
            let pulsar = ParFile::read(path)?;
            Ok(Harmonic {
                ratio: spin_freq / pulsar.f0,
                reciprocal_ratio: pulsar.f0 / spin_freq,
                pulsar,
            })
        })
        .collect()
}
