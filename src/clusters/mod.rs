// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Globular-cluster structural parameters, and their conversion into angular
//! radii.
//!
//! The property table is whitespace-delimited text in the style of the
//! Baumgardt & Hilker catalogue: a header row of column names, a row of units
//! (ignored), then one row per cluster.

mod error;

pub use error::ClusterTableError;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use indexmap::IndexMap;
use log::debug;

use crate::constants::{PC_PER_KPC, PI};

const NAME_COLUMN: &str = "Cluster";
const DISTANCE_COLUMN: &str = "R_Sun";
const CORE_RADIUS_COLUMN: &str = "rc";
const HALF_LIGHT_RADIUS_COLUMN: &str = "rh,l";
const HALF_MASS_RADIUS_COLUMN: &str = "rh,m";
const TIDAL_RADIUS_COLUMN: &str = "rt";

/// Convert a linear radius \[pc\] at a distance \[kpc\] into an angular radius
/// \[degrees\], using the small-angle approximation.
pub fn linear_to_angular_deg(radius_pc: f64, distance_kpc: f64) -> f64 {
    (180.0 / PI) * (radius_pc / (distance_kpc * PC_PER_KPC))
}

/// One row of the cluster property table.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterRecord {
    pub name: String,
    /// Heliocentric distance \[kpc\]
    pub distance_kpc: f64,
    /// \[pc\]
    pub core_radius_pc: f64,
    /// \[pc\]
    pub half_light_radius_pc: f64,
    /// \[pc\]
    pub half_mass_radius_pc: f64,
    /// \[pc\]
    pub tidal_radius_pc: f64,
}

/// The standard cluster radii as seen on the sky \[degrees\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngularRadii {
    pub core_deg: f64,
    pub half_light_deg: f64,
    pub half_mass_deg: f64,
    pub tidal_deg: f64,
}

impl ClusterRecord {
    pub fn angular_radii(&self) -> AngularRadii {
        let d = self.distance_kpc;
        AngularRadii {
            core_deg: linear_to_angular_deg(self.core_radius_pc, d),
            half_light_deg: linear_to_angular_deg(self.half_light_radius_pc, d),
            half_mass_deg: linear_to_angular_deg(self.half_mass_radius_pc, d),
            tidal_deg: linear_to_angular_deg(self.tidal_radius_pc, d),
        }
    }
}

impl AngularRadii {
    /// The radii keyed by name, in the order they're reported: core,
    /// half-mass, half-light, tidal.
    pub fn named(&self) -> IndexMap<String, f64> {
        [
            ("core", self.core_deg),
            ("half-mass", self.half_mass_deg),
            ("half-light", self.half_light_deg),
            ("tidal", self.tidal_deg),
        ]
        .into_iter()
        .map(|(name, deg)| (name.to_string(), deg))
        .collect()
    }
}

/// All clusters in a property table, keyed by name, in file order.
#[derive(Clone, Debug, Default)]
pub struct ClusterTable {
    clusters: IndexMap<String, ClusterRecord>,
}

impl ClusterTable {
    /// Read a cluster property table from a file.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ClusterTableError> {
        let path = path.as_ref();
        debug!("Attempting to read cluster property table {}", path.display());
        let f = File::open(path).map_err(|err| ClusterTableError::NotFound {
            path: path.to_path_buf(),
            err,
        })?;
        let table = Self::parse(BufReader::new(f))?;
        debug!("Read {} clusters", table.len());
        Ok(table)
    }

    /// Parse a cluster property table.
    pub fn parse<R: BufRead>(reader: R) -> Result<Self, ClusterTableError> {
        // Line numbers start at 1.
        let mut lines = (1..).zip(reader.lines());
        let mut header = None;
        for (_, line) in lines.by_ref() {
            let line = line?;
            if !line.trim().is_empty() {
                header = Some(line);
                break;
            }
        }
        let header = header.ok_or(ClusterTableError::NoHeader)?;
        let columns = header.split_whitespace().collect::<Vec<_>>();
        let column_index = |name: &'static str| {
            columns
                .iter()
                .position(|&c| c == name)
                .ok_or(ClusterTableError::MissingColumn(name))
        };
        let i_name = column_index(NAME_COLUMN)?;
        let i_distance = column_index(DISTANCE_COLUMN)?;
        let i_core = column_index(CORE_RADIUS_COLUMN)?;
        let i_half_light = column_index(HALF_LIGHT_RADIUS_COLUMN)?;
        let i_half_mass = column_index(HALF_MASS_RADIUS_COLUMN)?;
        let i_tidal = column_index(TIDAL_RADIUS_COLUMN)?;

        // The row after the header is units.
        if let Some((_, line)) = lines.next() {
            line?;
        }

        let mut clusters = IndexMap::new();
        for (line_num, line) in lines {
            let line = line?;
            let fields = line.split_whitespace().collect::<Vec<_>>();
            if fields.is_empty() {
                continue;
            }
            if fields.len() != columns.len() {
                return Err(ClusterTableError::MalformedRecord {
                    line: line_num,
                    reason: format!(
                        "expected {} fields, but found {}",
                        columns.len(),
                        fields.len()
                    ),
                });
            }

            let number = |i: usize| {
                fields[i]
                    .parse::<f64>()
                    .map_err(|_| ClusterTableError::MalformedRecord {
                        line: line_num,
                        reason: format!(
                            "couldn't parse {} '{}' as a number",
                            columns[i], fields[i]
                        ),
                    })
            };
            let record = ClusterRecord {
                name: fields[i_name].to_string(),
                distance_kpc: number(i_distance)?,
                core_radius_pc: number(i_core)?,
                half_light_radius_pc: number(i_half_light)?,
                half_mass_radius_pc: number(i_half_mass)?,
                tidal_radius_pc: number(i_tidal)?,
            };
            if record.distance_kpc.is_nan() || record.distance_kpc <= 0.0 {
                return Err(ClusterTableError::MalformedRecord {
                    line: line_num,
                    reason: format!(
                        "{} has a non-positive distance ({} kpc)",
                        record.name, record.distance_kpc
                    ),
                });
            }
            if clusters.contains_key(&record.name) {
                return Err(ClusterTableError::MalformedRecord {
                    line: line_num,
                    reason: format!("{} is listed more than once", record.name),
                });
            }
            clusters.insert(record.name.clone(), record);
        }

        Ok(Self { clusters })
    }

    /// Get a cluster by name.
    pub fn get(&self, name: &str) -> Result<&ClusterRecord, ClusterTableError> {
        self.clusters
            .get(name)
            .ok_or_else(|| ClusterTableError::MissingKey(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClusterRecord> {
        self.clusters.values()
    }
}
