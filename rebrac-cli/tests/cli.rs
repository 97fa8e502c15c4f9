use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_the_three_flags() {
    let mut cmd = Command::cargo_bin("rebrac").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dataset"))
        .stdout(predicate::str::contains("--seed"))
        .stdout(predicate::str::contains("--gpu"))
        .stdout(predicate::str::contains("[default: hopper-medium-v0]"));
}

#[test]
fn bad_seed_fails_before_touching_python() {
    let mut cmd = Command::cargo_bin("rebrac").unwrap();
    cmd.args(["--seed", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'abc'"));
}
