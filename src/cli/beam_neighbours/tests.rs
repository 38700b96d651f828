// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Write;

use clap::Parser;

use super::*;

#[test]
fn test_defaults() {
    let args = BeamNeighboursArgs::parse_from(["beam-neighbours", "--meta-path", "meta.json"]);
    let params = args.merge().unwrap().parse().unwrap();
    assert_eq!(params.meta_path, PathBuf::from("meta.json"));
    assert_eq!(params.reference_beam, "cfbf00000");
    assert!(params.other_epoch_meta_path.is_none());
}

#[test]
fn test_no_metadata() {
    let args = BeamNeighboursArgs::parse_from(["beam-neighbours", "-r", "cfbf00010"]);
    let result = args.merge().unwrap().parse();
    assert!(matches!(result, Err(TrapumError::BeamNeighbours(_))));
}

#[test]
fn test_missing_second_epoch_is_skipped() {
    let args = BeamNeighboursArgs::parse_from([
        "beam-neighbours",
        "--meta-path",
        "test_files/meta_epoch1.json",
        "--meta-path2",
        "test_files/does_not_exist.json",
    ]);
    let params = args.merge().unwrap().parse().unwrap();
    assert!(params.other_epoch_meta_path.is_none());

    let args = BeamNeighboursArgs::parse_from([
        "beam-neighbours",
        "--meta-path",
        "test_files/meta_epoch1.json",
        "--meta-path2",
        "test_files/meta_epoch2.json",
    ]);
    let params = args.merge().unwrap().parse().unwrap();
    assert_eq!(
        params.other_epoch_meta_path,
        Some(PathBuf::from("test_files/meta_epoch2.json"))
    );
}

#[test]
fn test_json_arg_file_is_overridden_by_cli() {
    let mut f = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    f.write_all(br#"{"meta_path": "file_meta.json", "reference_beam": "cfbf00004"}"#)
        .unwrap();
    f.flush().unwrap();
    let arg_file = f.path().display().to_string();

    let args = BeamNeighboursArgs::parse_from(["beam-neighbours", &arg_file]);
    let params = args.merge().unwrap().parse().unwrap();
    assert_eq!(params.meta_path, PathBuf::from("file_meta.json"));
    assert_eq!(params.reference_beam, "cfbf00004");

    let args = BeamNeighboursArgs::parse_from([
        "beam-neighbours",
        &arg_file,
        "--reference-beam",
        "cfbf00002",
    ]);
    let params = args.merge().unwrap().parse().unwrap();
    assert_eq!(params.reference_beam, "cfbf00002");
}

#[test]
fn test_run() {
    let args = BeamNeighboursArgs::parse_from([
        "beam-neighbours",
        "--meta-path",
        "test_files/meta_epoch1.json",
        "--meta-path2",
        "test_files/meta_epoch2.json",
    ]);
    assert!(args.clone().run(true).is_ok());
    assert!(args.run(false).is_ok());

    let args = BeamNeighboursArgs::parse_from([
        "beam-neighbours",
        "--meta-path",
        "test_files/meta_epoch1.json",
        "--reference-beam",
        "cfbf00099",
    ]);
    // The reference beam is only looked up when running.
    assert!(args.clone().run(true).is_ok());
    assert!(matches!(args.run(false), Err(TrapumError::Metadata(_))));
}
