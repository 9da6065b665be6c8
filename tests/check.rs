mod common;

use common::{authorstamp_cmd, project};
use predicates::prelude::*;
use std::fs;

#[test]
fn check_reports_missing_headers() {
    let temp = project();

    authorstamp_cmd(temp.path())
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Missing header: src/a.rs"))
        .stdout(predicate::str::contains("b.txt").not());

    assert_eq!(
        fs::read_to_string(temp.path().join("src/a.rs")).unwrap(),
        "fn main() {}"
    );
}

#[test]
fn check_passes_after_stamp() {
    let temp = project();

    authorstamp_cmd(temp.path()).arg("stamp").assert().success();

    authorstamp_cmd(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn check_passes_on_tree_without_sources() {
    let temp = tempfile::TempDir::new().unwrap();
    fs::create_dir(temp.path().join("src")).unwrap();
    fs::write(temp.path().join("src/readme.md"), "# hi").unwrap();

    authorstamp_cmd(temp.path()).arg("check").assert().success();
}
