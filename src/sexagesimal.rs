// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Code for reading right ascensions and declinations, which may be written
either in sexagesimal or as plain decimal numbers.
 */

use thiserror::Error;

use crate::constants::DEGREES_PER_HOUR;

/// Convert a sexagesimal-formatted string delimited by colons to a float. The
/// units of the output are the units of the first field, e.g. "-22:58:52.56"
/// is -22.98 (degrees), "17:48:04.83" is 17.80 (hours).
///
/// The sign is taken from the string rather than the first field, so that
/// values like "-00:30:00" stay negative.
///
/// # Examples
///
/// ```
/// # use trapum_beams::sexagesimal::*;
/// # use approx::*;
/// # fn main() -> Result<(), SexagesimalError> {
/// let f = sexagesimal_colon_str_to_float("-22:58:52.56")?;
/// assert_abs_diff_eq!(f, -22.981267, epsilon = 1e-6);
/// # Ok(())
/// # }
/// ```
pub fn sexagesimal_colon_str_to_float(s: &str) -> Result<f64, SexagesimalError> {
    let trimmed = s.trim();
    let mut split = Vec::with_capacity(3);
    for elem in trimmed.split(':') {
        split.push(elem.trim().parse::<f64>()?);
    }
    if split.len() != 3 {
        return Err(SexagesimalError::WrongFieldCount(s.to_string()));
    }
    let negative = trimmed.starts_with('-');
    Ok(sexagesimal_to_float(negative, split[0], split[1], split[2]))
}

/// Combine (whole, minutes, seconds) into a single number. `negative` applies
/// to the whole quantity.
pub fn sexagesimal_to_float(negative: bool, whole: f64, m: f64, s: f64) -> f64 {
    let num = whole.abs() + m / 60.0 + s / 3600.0;
    if negative {
        -num
    } else {
        num
    }
}

/// Read a right ascension in hours, either as "hh:mm:ss.s" or decimal hours,
/// and return it in degrees. The RA must be within [0, 24) hours.
///
/// # Examples
///
/// ```
/// # use trapum_beams::sexagesimal::*;
/// # use approx::*;
/// # fn main() -> Result<(), SexagesimalError> {
/// assert_abs_diff_eq!(ra_hours_str_to_degrees("17:48:04.83")?, 267.0201250, epsilon = 1e-6);
/// assert_abs_diff_eq!(ra_hours_str_to_degrees("5")?, 75.0);
/// # Ok(())
/// # }
/// ```
pub fn ra_hours_str_to_degrees(s: &str) -> Result<f64, SexagesimalError> {
    let hours = if s.contains(':') {
        sexagesimal_colon_str_to_float(s)?
    } else {
        s.trim().parse::<f64>()?
    };
    if !(0.0..24.0).contains(&hours) {
        return Err(SexagesimalError::InvalidRa(hours));
    }
    Ok(hours * DEGREES_PER_HOUR)
}

/// Read a declination in degrees, either as "±dd:mm:ss.s" or decimal degrees.
/// The Dec must be within [-90, 90] degrees.
pub fn dec_str_to_degrees(s: &str) -> Result<f64, SexagesimalError> {
    let degrees = if s.contains(':') {
        sexagesimal_colon_str_to_float(s)?
    } else {
        s.trim().parse::<f64>()?
    };
    if !(-90.0..=90.0).contains(&degrees) {
        return Err(SexagesimalError::InvalidDec(degrees));
    }
    Ok(degrees)
}

/// Convert a number in degrees to a sexagesimal-formatted string in "hours
/// minutes seconds".
///
/// # Examples
///
/// ```
/// # use trapum_beams::sexagesimal::*;
/// let hms = degrees_to_sexagesimal_hms(267.020125);
/// assert_eq!(hms, "17h48m04.8300s");
/// ```
pub fn degrees_to_sexagesimal_hms(f: f64) -> String {
    let negative = f < 0.0;
    let f_abs = f.abs();
    let hours = (f_abs / DEGREES_PER_HOUR).floor();
    let minutes = ((f_abs / DEGREES_PER_HOUR - hours) * 60.0).floor();
    let seconds = (((f_abs / DEGREES_PER_HOUR - hours) * 60.0) - minutes) * 60.0;

    format!(
        "{sign}{hrs}h{min:02}m{sec:02}.{frac:04}s",
        sign = if negative { "-" } else { "" },
        hrs = hours as u8,
        min = minutes as u8,
        sec = seconds.floor() as u8,
        // The 4 in 1e4 gives that many decimal places.
        frac = ((seconds - seconds.floor()) * 1e4).round() as u32,
    )
}

/// Convert a number in degrees to a sexagesimal-formatted string in "degrees
/// minutes seconds".
///
/// # Examples
///
/// ```
/// # use trapum_beams::sexagesimal::*;
/// let dms = degrees_to_sexagesimal_dms(-24.7796667);
/// assert_eq!(dms, "-24d46m46.8001s");
/// ```
pub fn degrees_to_sexagesimal_dms(f: f64) -> String {
    let negative = f < 0.0;
    let f_abs = f.abs();
    let degrees = f_abs.floor();
    let minutes = (f_abs - degrees) * 60.0;
    let seconds = (minutes - minutes.floor()) * 60.0;

    format!(
        "{sign}{deg}d{min:02}m{sec:02}.{frac:04}s",
        sign = if negative { "-" } else { "" },
        deg = degrees as u8,
        min = minutes.floor() as u8,
        sec = seconds.floor() as u8,
        frac = ((seconds - seconds.floor()) * 1e4).round() as u32,
    )
}

#[derive(Error, Debug)]
pub enum SexagesimalError {
    /// Three numbers (fields) are expected; this error is used when the number
    /// of fields is not three.
    #[error("Did not get three sexagesimal fields: {0}")]
    WrongFieldCount(String),

    #[error("Attempted to use RA {0}h, but this is out of range (0h <= RA < 24h)")]
    InvalidRa(f64),

    #[error("Attempted to use Dec {0}°, but this is out of range (-90° <= Dec <= 90°)")]
    InvalidDec(f64),

    #[error("{0}")]
    ParseFloat(#[from] std::num::ParseFloatError),
}
