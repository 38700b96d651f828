// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision; angular comparisons are done in
degrees and a lower precision would change which beams land inside a radius.
 */

pub use std::f64::consts::PI;

/// Every coherent-beam identifier starts with this, followed by the
/// zero-padded beam index (e.g. "cfbf00007").
pub const BEAM_TOKEN_PREFIX: &str = "cfbf00";

/// Any beam record containing this string is an inactive beam slot.
pub const UNSET_BEAM_MARKER: &str = "unset";

/// The default beam used as the reference when looking for neighbours.
pub const DEFAULT_REFERENCE_BEAM: &str = "cfbf00000";

/// The default globular cluster used when deriving radii.
pub const DEFAULT_CLUSTER_NAME: &str = "Ter_5";

/// The default globular-cluster property table (Baumgardt & Hilker).
pub const DEFAULT_CLUSTER_FILE: &str = "glob_cluster_properties_HB.txt";

/// The most neighbouring beams that will ever be reported.
pub const MAX_NEIGHBOURS: usize = 10;

/// Cluster distances are given in kpc, whereas radii are in pc.
pub const PC_PER_KPC: f64 = 1000.0;

/// Sidereal hours to degrees.
pub const DEGREES_PER_HOUR: f64 = 15.0;
