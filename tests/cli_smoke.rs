use assert_cmd::prelude::*;
use std::process::Command;

#[test]
fn help_lists_pipeline_flags() {
    let mut cmd = Command::cargo_bin("ghstats").unwrap();
    let out = cmd.arg("--help").assert().success().get_output().stdout.clone();
    let help = String::from_utf8(out).unwrap();
    assert!(help.contains("--count-mode"));
    assert!(help.contains("--charts"));
    assert!(help.contains("--no-commits"));
    assert!(help.contains("--no-lines"));
}

#[test]
fn owner_argument_is_required() {
    let mut cmd = Command::cargo_bin("ghstats").unwrap();
    cmd.assert().failure();
}

#[test]
fn unknown_count_mode_is_rejected() {
    let mut cmd = Command::cargo_bin("ghstats").unwrap();
    cmd.args(["acme", "--count-mode", "abacus"]).assert().failure();
}
