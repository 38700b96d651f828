// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Handle (right ascension, declination) coordinates.
 */

use serde::{Deserialize, Serialize};

use crate::{
    constants::DEGREES_PER_HOUR,
    sexagesimal::{
        dec_str_to_degrees, degrees_to_sexagesimal_dms, degrees_to_sexagesimal_hms,
        ra_hours_str_to_degrees, SexagesimalError,
    },
};

/// An equatorial sky position. Both coordinates are stored in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkyPosition {
    /// Right ascension \[degrees\]
    ra_deg: f64,
    /// Declination \[degrees\]
    dec_deg: f64,
}

impl SkyPosition {
    /// Make a new `SkyPosition` from a right ascension in hours and a
    /// declination in degrees.
    pub fn from_hours_degrees(ra_hours: f64, dec_deg: f64) -> Result<Self, SexagesimalError> {
        if !(0.0..24.0).contains(&ra_hours) {
            return Err(SexagesimalError::InvalidRa(ra_hours));
        }
        if !(-90.0..=90.0).contains(&dec_deg) {
            return Err(SexagesimalError::InvalidDec(dec_deg));
        }
        Ok(Self {
            ra_deg: ra_hours * DEGREES_PER_HOUR,
            dec_deg,
        })
    }

    /// Make a new `SkyPosition` from strings, as they appear in beam metadata.
    /// The RA is in hours and the Dec in degrees; either may be sexagesimal
    /// ("17:48:04.83", "-24:46:46.8") or decimal.
    pub fn parse(ra_hours: &str, dec_deg: &str) -> Result<Self, SexagesimalError> {
        Ok(Self {
            ra_deg: ra_hours_str_to_degrees(ra_hours)?,
            dec_deg: dec_str_to_degrees(dec_deg)?,
        })
    }

    /// Right ascension \[degrees\]
    pub fn ra_deg(&self) -> f64 {
        self.ra_deg
    }

    /// Declination \[degrees\]
    pub fn dec_deg(&self) -> f64 {
        self.dec_deg
    }

    /// Calculate the great-circle distance between two positions \[degrees\].
    ///
    /// This uses the Vincenty formula, which is well conditioned for both
    /// tiny and antipodal separations.
    pub fn separation(&self, b: &Self) -> f64 {
        let (s_lat1, c_lat1) = self.dec_deg.to_radians().sin_cos();
        let (s_lat2, c_lat2) = b.dec_deg.to_radians().sin_cos();
        let (s_dlon, c_dlon) = (b.ra_deg - self.ra_deg).to_radians().sin_cos();

        let num1 = c_lat2 * s_dlon;
        let num2 = c_lat1 * s_lat2 - s_lat1 * c_lat2 * c_dlon;
        let denominator = s_lat1 * s_lat2 + c_lat1 * c_lat2 * c_dlon;

        num1.hypot(num2).atan2(denominator).to_degrees()
    }
}

impl std::fmt::Display for SkyPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "({}, {})",
            degrees_to_sexagesimal_hms(self.ra_deg),
            degrees_to_sexagesimal_dms(self.dec_deg)
        )
    }
}
