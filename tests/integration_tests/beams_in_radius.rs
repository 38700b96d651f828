// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Write;

use indoc::{indoc, writedoc};

use crate::{get_cmd_output, trapum_beams, CLUSTERS, EPOCH1};

#[test]
fn test_beams_in_radius() {
    #[rustfmt::skip]
    let cmd = trapum_beams()
        .args([
            "beams-in-radius",
            "--meta-path", EPOCH1,
            "--gc-file", CLUSTERS,
        ])
        .ok();
    assert!(cmd.is_ok(), "beams-in-radius failed: {}", cmd.err().unwrap());
    let (stdout, stderr) = get_cmd_output(cmd);
    // Nothing but the report is written.
    assert_eq!(
        stdout,
        indoc! {"
            Beams within the core radius:cfbf00000
            Beams within the half-mass radius:cfbf00000,cfbf00001,cfbf00002
            Beams within the half-light radius:cfbf00000,cfbf00001
            Beams within the tidal radius:cfbf00000,cfbf00001,cfbf00002,cfbf00003
        "}
    );
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}

#[test]
fn test_beams_in_radius_with_user_radius_and_alias() {
    #[rustfmt::skip]
    let cmd = trapum_beams()
        .args([
            "radius",
            "--meta-path", EPOCH1,
            "--gc-file", CLUSTERS,
            "--gc-name", "Ter_5",
            "--user-radius", "0.05",
        ])
        .ok();
    assert!(cmd.is_ok(), "radius failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    let lines = stdout.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[4],
        "Beams within the user specified radius:cfbf00000,cfbf00001,cfbf00002"
    );
}

#[test]
fn test_beams_in_radius_arg_file() {
    let mut f = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writedoc!(
        f,
        r#"
            meta_path = "{}"
            gc_file = "{}"
            user_radius = 0.3
        "#,
        EPOCH1,
        CLUSTERS
    )
    .unwrap();
    f.flush().unwrap();

    let cmd = trapum_beams()
        .args(["beams-in-radius", &f.path().display().to_string()])
        .ok();
    assert!(cmd.is_ok(), "beams-in-radius failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert_eq!(stdout.lines().count(), 5);
    assert!(stdout.ends_with(
        "Beams within the user specified radius:cfbf00000,cfbf00001,cfbf00002,cfbf00003\n"
    ));
}

#[test]
fn test_beams_in_radius_save_toml() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let toml = tmp_dir.path().join("args.toml");
    #[rustfmt::skip]
    let cmd = trapum_beams()
        .args([
            "beams-in-radius",
            "--meta-path", EPOCH1,
            "--gc-name", "NGC_6544",
            "--dry-run",
            "--save-toml", &toml.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_ok(), "beams-in-radius failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.is_empty(), "{stdout}");

    let contents = std::fs::read_to_string(&toml).unwrap();
    assert!(contents.contains(r#"meta_path = "test_files/meta_epoch1.json""#));
    assert!(contents.contains(r#"gc_name = "NGC_6544""#));
}

#[test]
fn test_beams_in_radius_unknown_cluster() {
    #[rustfmt::skip]
    let cmd = trapum_beams()
        .args([
            "beams-in-radius",
            "--meta-path", EPOCH1,
            "--gc-file", CLUSTERS,
            "--gc-name", "NGC_0000",
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("Cluster 'NGC_0000' is not listed"), "{stderr}");
}

#[test]
fn test_beams_in_radius_missing_metadata() {
    #[rustfmt::skip]
    let cmd = trapum_beams()
        .args([
            "beams-in-radius",
            "--meta-path", "test_files/does_not_exist.json",
            "--gc-file", CLUSTERS,
        ])
        .assert();
    cmd.failure().code(1);
}

#[test]
fn test_beams_in_radius_verbose_logs_go_to_stderr() {
    #[rustfmt::skip]
    let cmd = trapum_beams()
        .args([
            "beams-in-radius",
            "--meta-path", EPOCH1,
            "--gc-file", CLUSTERS,
            "-vv",
        ])
        .ok();
    assert!(cmd.is_ok(), "beams-in-radius failed: {}", cmd.err().unwrap());
    let (stdout, stderr) = get_cmd_output(cmd);
    assert_eq!(stdout.lines().count(), 4);
    assert!(stdout.lines().all(|l| l.starts_with("Beams within the ")));
    assert!(stderr.contains("trapum-beams beams-in-radius"), "{stderr}");
    assert!(stderr.contains("Ter_5 (6.62 kpc)"), "{stderr}");
}
