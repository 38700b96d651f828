// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::{fmt, path::PathBuf};

use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, info};

use crate::{
    beams::BeamId, cli::InfoPrinter, clusters::ClusterTable, geometry::classify,
    metadata::BeamMetadata, TrapumError,
};

pub(crate) const USER_RADIUS_NAME: &str = "user specified";

#[derive(Debug)]
pub(crate) struct RadiusParams {
    pub(crate) meta_path: PathBuf,
    pub(crate) cluster_name: String,
    pub(crate) cluster_file: PathBuf,
    /// \[degrees\]
    pub(crate) user_radius_deg: Option<f64>,
}

/// The beams within each cluster radius, in reporting order.
#[derive(Debug, PartialEq)]
pub(crate) struct RadiusReport(pub(crate) IndexMap<String, Vec<BeamId>>);

impl fmt::Display for RadiusReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (name, ids) in &self.0 {
            writeln!(f, "Beams within the {name} radius:{}", ids.iter().join(","))?;
        }
        Ok(())
    }
}

impl RadiusParams {
    pub(crate) fn report(&self) -> Result<RadiusReport, TrapumError> {
        let metadata = BeamMetadata::read(&self.meta_path)?;
        let boresight = metadata.boresight()?;
        let beams = metadata.coherent_beams()?;

        let table = ClusterTable::read(&self.cluster_file)?;
        debug!(
            "Read {} clusters from {}",
            table.len(),
            self.cluster_file.display()
        );
        let cluster = table.get(&self.cluster_name)?;
        let mut radii = cluster.angular_radii().named();
        if let Some(r) = self.user_radius_deg {
            radii.insert(USER_RADIUS_NAME.to_string(), r);
        }

        let mut printer =
            InfoPrinter::new(format!("{} ({} kpc)", cluster.name, cluster.distance_kpc).into());
        printer.push_block(vec![
            format!("Boresight: {boresight}").into(),
            format!("{} coherent beams", beams.len()).into(),
        ]);
        printer.push_block(
            radii
                .iter()
                .map(|(name, r)| format!("{name} radius: {r}°").into())
                .collect(),
        );
        printer.display();

        Ok(RadiusReport(classify(&boresight, &beams, &radii)))
    }

    pub(crate) fn run(&self) -> Result<(), TrapumError> {
        let report = self.report()?;
        info!(
            "{} beams within the widest radius",
            report.0.values().map(Vec::len).max().unwrap_or(0)
        );
        print!("{report}");
        Ok(())
    }
}
