use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_flags() {
    cargo_bin_cmd!("countty")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--target"))
        .stdout(predicate::str::contains("--critical"))
        .stdout(predicate::str::contains("--blink"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("countty")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_flag_fails() {
    cargo_bin_cmd!("countty")
        .arg("-x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("-x"));
}

#[test]
fn test_non_numeric_target_fails() {
    cargo_bin_cmd!("countty")
        .args(["-t", "tomorrow"])
        .assert()
        .failure();
}
