use assert_cmd::Command;
use predicates::str::contains;

mod common;
use common::TestEnv;

fn cmd() -> Command {
    Command::cargo_bin("solbundle").unwrap()
}

#[test]
fn list_prints_builtin_set_in_order() {
    cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Account.sol"))
        .stdout(contains("ContractRegistry.sol"));
}

#[test]
fn bundle_reports_written_output() {
    let env = TestEnv::new();
    env.cmd()
        .args(["bundle", "Account.sol", "Escrow.sol"])
        .assert()
        .success()
        .stdout(contains("wrote"))
        .stdout(contains("2 documents"));
}

#[test]
fn bundle_fails_on_missing_source() {
    let env = TestEnv::new();
    env.cmd()
        .args(["bundle", "Nope.sol"])
        .assert()
        .failure()
        .stderr(contains("source file not found: Nope.sol"));
}

#[test]
fn check_flags_missing_source() {
    let env = TestEnv::new();
    env.cmd()
        .args(["check", "Account.sol", "Nope.sol"])
        .assert()
        .failure()
        .stdout(contains("overall: fail"))
        .stdout(contains("Nope.sol\tmissing"));
}
