// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests to ensure there is no stderr output for successful commands that
//! have nothing to warn about.

use crate::{get_cmd_output, trapum_beams, CLUSTERS, EPOCH1, PAR_DIR};

#[test]
fn test_subcommands_no_stderr() {
    #[rustfmt::skip]
    let commands: [&[&str]; 3] = [
        &["beams-in-radius", "--meta-path", EPOCH1, "--gc-file", CLUSTERS],
        &["beam-neighbours", "--meta-path", EPOCH1, "--reference-beam", "cfbf00003"],
        &["harmonics", PAR_DIR, "11.56"],
    ];
    for args in commands {
        let cmd = trapum_beams().args(args).ok();
        assert!(cmd.is_ok(), "{args:?} failed: {}", cmd.err().unwrap());
        let (_, stderr) = get_cmd_output(cmd);
        assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
    }
}
