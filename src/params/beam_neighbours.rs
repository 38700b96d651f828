// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::{fmt, path::PathBuf};

use log::warn;

use crate::{
    cli::InfoPrinter,
    constants::MAX_NEIGHBOURS,
    geometry::{rank_nearest, Epoch, Neighbour},
    metadata::BeamMetadata,
    TrapumError,
};

#[derive(Debug)]
pub(crate) struct NeighbourParams {
    pub(crate) meta_path: PathBuf,
    /// Beam metadata from another epoch of the same pointing.
    pub(crate) other_epoch_meta_path: Option<PathBuf>,
    pub(crate) reference_beam: String,
}

#[derive(Debug, PartialEq)]
pub(crate) struct NeighbourReport {
    pub(crate) same_epoch: Vec<Neighbour>,
    pub(crate) other_epoch: Option<(PathBuf, Vec<Neighbour>)>,
}

impl fmt::Display for NeighbourReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Neighbouring beams are..")?;
        for n in &self.same_epoch {
            writeln!(f, "{n}")?;
        }
        if let Some((path, neighbours)) = &self.other_epoch {
            writeln!(
                f,
                "Neighbouring beams from different epoch ({}) are..",
                path.display()
            )?;
            for n in neighbours {
                writeln!(f, "{n}")?;
            }
        }
        Ok(())
    }
}

impl NeighbourParams {
    pub(crate) fn report(&self) -> Result<NeighbourReport, TrapumError> {
        let metadata = BeamMetadata::read(&self.meta_path)?;
        let reference = metadata.reference_beam(&self.reference_beam)?;
        let beams = metadata.coherent_beams()?;

        let mut printer = InfoPrinter::new("Neighbouring beams".into());
        printer.push_line(format!("Reference beam {}: {reference}", self.reference_beam).into());
        printer.push_line(
            format!(
                "{} coherent beams in {}",
                beams.len(),
                self.meta_path.display()
            )
            .into(),
        );

        let same_epoch = rank_nearest(&reference, &beams, MAX_NEIGHBOURS, Epoch::Same)?;

        let other_epoch = match &self.other_epoch_meta_path {
            None => None,
            Some(path) => {
                let other_beams = BeamMetadata::read(path)?.coherent_beams()?;
                printer.push_line(
                    format!("{} coherent beams in {}", other_beams.len(), path.display()).into(),
                );
                // Beams are matched between epochs by index only.
                if other_beams.len() != beams.len() {
                    warn!(
                        "The epochs have different numbers of coherent beams ({} vs {}); beam indices may not refer to the same tiling",
                        beams.len(),
                        other_beams.len()
                    );
                }
                let neighbours =
                    rank_nearest(&reference, &other_beams, MAX_NEIGHBOURS, Epoch::Other)?;
                Some((path.clone(), neighbours))
            }
        };
        printer.display();

        Ok(NeighbourReport {
            same_epoch,
            other_epoch,
        })
    }

    pub(crate) fn run(&self) -> Result<(), TrapumError> {
        print!("{}", self.report()?);
        Ok(())
    }
}
