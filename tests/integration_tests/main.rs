// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod beam_neighbours;
mod beams_in_radius;
mod harmonics;
mod no_stderr;

use std::{process::Output, str::from_utf8};

use assert_cmd::{output::OutputError, Command};

const EPOCH1: &str = "test_files/meta_epoch1.json";
const EPOCH2: &str = "test_files/meta_epoch2.json";
const CLUSTERS: &str = "test_files/glob_cluster_properties_HB.txt";
const PAR_DIR: &str = "test_files/par";

fn trapum_beams() -> Command {
    Command::cargo_bin("trapum-beams").unwrap()
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}
