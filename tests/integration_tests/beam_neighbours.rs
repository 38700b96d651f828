// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{get_cmd_output, trapum_beams, EPOCH1, EPOCH2};

fn tokens<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    lines
        .iter()
        .map(|&l| l.split(", ").next().unwrap())
        .collect()
}

#[test]
fn test_beam_neighbours() {
    let cmd = trapum_beams()
        .args(["beam-neighbours", "--meta-path", EPOCH1])
        .ok();
    assert!(cmd.is_ok(), "beam-neighbours failed: {}", cmd.err().unwrap());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Neighbouring beams are..");
    assert_eq!(
        tokens(&lines[1..]),
        ["cfbf00001", "cfbf00002", "cfbf00003", "cfbf00004"]
    );
    let sep: f64 = lines[1].split(", ").nth(1).unwrap().parse().unwrap();
    approx::assert_abs_diff_eq!(sep, 0.01, epsilon = 1e-9);
}

#[test]
fn test_beam_neighbours_two_epochs() {
    #[rustfmt::skip]
    let cmd = trapum_beams()
        .args([
            "neighbours",
            "--meta-path", EPOCH1,
            "--meta-path2", EPOCH2,
            "--reference-beam", "cfbf00000",
        ])
        .ok();
    assert!(cmd.is_ok(), "neighbours failed: {}", cmd.err().unwrap());
    let (stdout, stderr) = get_cmd_output(cmd);
    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 9);
    assert_eq!(
        lines[5],
        format!("Neighbouring beams from different epoch ({EPOCH2}) are..")
    );
    assert_eq!(tokens(&lines[6..]), ["cfbf00001", "cfbf00000", "cfbf00002"]);
    assert_eq!(lines[6], "cfbf00001, 0");
    // The epochs have different numbers of beams.
    assert!(stderr.contains("different numbers of coherent beams"), "{stderr}");
}

#[test]
fn test_beam_neighbours_missing_second_epoch() {
    #[rustfmt::skip]
    let cmd = trapum_beams()
        .args([
            "beam-neighbours",
            "--meta-path", EPOCH1,
            "--meta-path2", "test_files/does_not_exist.json",
        ])
        .ok();
    assert!(cmd.is_ok(), "beam-neighbours failed: {}", cmd.err().unwrap());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("doesn't exist"), "{stderr}");
    assert_eq!(stdout.lines().count(), 5);
    assert!(!stdout.contains("different epoch"));
}

#[test]
fn test_beam_neighbours_unknown_reference() {
    #[rustfmt::skip]
    let cmd = trapum_beams()
        .args([
            "beam-neighbours",
            "--meta-path", EPOCH1,
            "--reference-beam", "cfbf00099",
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("Beam 'cfbf00099' is not listed"), "{stderr}");
}
