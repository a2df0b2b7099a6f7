use predicates::prelude::predicate;
use serde_json::Value;

#[test]
fn help_is_available() {
    assert_cmd::cargo::cargo_bin_cmd!("knotq")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("hash"))
        .stdout(predicate::str::contains("product"));
}

#[test]
fn version_is_available() {
    assert_cmd::cargo::cargo_bin_cmd!("knotq")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("knotq")
        .arg("unravel")
        .output()
        .expect("run knotq");

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let stderr: Value = serde_json::from_slice(&output.stderr).expect("stderr json");
    assert_eq!(stderr["error"], "input_usage_error");
    assert_eq!(stderr["code"], 3);
    assert_eq!(stderr["details"]["kind"], "cli_parse_error");
}

#[test]
fn missing_subcommand_is_usage_error() {
    assert_cmd::cargo::cargo_bin_cmd!("knotq")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("input_usage_error"));
}
