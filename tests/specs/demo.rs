// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `wordy demo`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

// =============================================================================
// Listing and sample text
// =============================================================================

#[test]
fn list_shows_every_demo() {
    wordy_cmd()
        .args(["demo", "--list"])
        .assert()
        .success()
        .stdout(
            predicates::str::contains("email")
                .and(predicates::str::contains("signed-int-wordlike"))
                .and(predicates::str::contains("line-start-lower")),
        );
}

#[test]
fn demo_without_name_is_usage_error() {
    wordy_cmd().arg("demo").assert().failure().code(2);
}

#[test]
fn unknown_demo_is_usage_error() {
    wordy_cmd().args(["demo", "nope"]).assert().failure().code(2);
}

#[test]
fn email_demo_prints_matches() {
    let tmp = tempfile::tempdir().unwrap();
    wordy_cmd()
        .args(["demo", "email"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(
            predicates::str::contains("hello8799@gmail.com")
                .and(predicates::str::contains("ding.dong@mmm-NN.CO.in"))
                .and(predicates::str::contains("4 matches"))
                .and(predicates::str::contains("BOOM").not()),
        );
}

#[test]
fn json_output() {
    let tmp = tempfile::tempdir().unwrap();
    let output = wordy_cmd()
        .args(["demo", "last-word", "-o", "json"])
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "last-word");
    assert_eq!(value["matches"][0]["text"], "have");
}

#[test]
fn verbose_prints_pattern_to_stderr() {
    let tmp = tempfile::tempdir().unwrap();
    wordy_cmd()
        .args(["demo", "first-word", "-v"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("Pattern:").and(predicates::str::contains(r"\A\s*\S+\b")));
}

// =============================================================================
// Input files and config
// =============================================================================

#[test]
fn input_file_is_searched() {
    let tmp = tempfile::tempdir().unwrap();
    wordy_cmd()
        .args(["demo", "signed-int-wordlike", "--input"])
        .arg(fixture("numbers.txt"))
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(
            predicates::str::contains("(0, 3) -12")
                .and(predicates::str::contains("(4, 5) 7"))
                .and(predicates::str::contains("(9, 12) +40"))
                .and(predicates::str::contains("3 matches")),
        );
}

#[test]
fn no_match_exits_one() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("empty.txt");
    std::fs::write(&input, "no numbers here\n").unwrap();
    wordy_cmd()
        .args(["demo", "signed-int", "--input"])
        .arg(&input)
        .current_dir(tmp.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("0 matches"));
}

#[test]
fn missing_input_file_is_internal_error() {
    let tmp = tempfile::tempdir().unwrap();
    wordy_cmd()
        .args(["demo", "email", "--input", "missing.txt"])
        .current_dir(tmp.path())
        .assert()
        .code(3)
        .stderr(predicates::str::contains("missing.txt"));
}

#[test]
fn discovered_config_sets_flags() {
    wordy_cmd()
        .args(["demo", "comma-line-end"])
        .current_dir(fixture("with-config"))
        .assert()
        .success()
        .stdout(predicates::str::contains("comma-line-end: (?im),$"));
}

#[test]
fn explicit_config_flag() {
    let tmp = tempfile::tempdir().unwrap();
    wordy_cmd()
        .args(["demo", "comma-line-end", "-C"])
        .arg(fixture("with-config/wordy.toml"))
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("(?im),$"));
}

#[test]
fn bad_config_exits_four() {
    wordy_cmd()
        .args(["demo", "email"])
        .current_dir(fixture("bad-config"))
        .assert()
        .code(4)
        .stderr(predicates::str::contains("unsupported config version 7"));
}

#[test]
fn missing_explicit_config_exits_four() {
    wordy_cmd()
        .args(["demo", "email", "-C", "no-such-wordy.toml"])
        .assert()
        .code(4)
        .stderr(predicates::str::contains("failed to read no-such-wordy.toml"));
}
