// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{get_cmd_output, trapum_beams, PAR_DIR};

#[test]
fn test_harmonics() {
    // Half of J1748-2446A's period, i.e. its second harmonic.
    let period_ms = (1000.0 / 86.4812566 / 2.0).to_string();
    let cmd = trapum_beams()
        .args(["harmonics", PAR_DIR, &period_ms])
        .ok();
    assert!(cmd.is_ok(), "harmonics failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);

    let fields = lines[0].split_whitespace().collect::<Vec<_>>();
    assert_eq!(fields[0], "J1748-2446A");
    assert_eq!(fields[1], "242.21");
    let ratio: f64 = fields[2].parse().unwrap();
    let reciprocal: f64 = fields[3].parse().unwrap();
    approx::assert_abs_diff_eq!(ratio, 2.0, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(reciprocal, 0.5, epsilon = 1e-9);
    assert!(lines[1].starts_with("J1748-2446O 236.38  "));
}

#[test]
fn test_harmonics_bad_period() {
    let cmd = trapum_beams().args(["harmonics", PAR_DIR, "0"]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("must be positive"), "{stderr}");
}
