use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const DEFAULT_CONTRACTS: [&str; 8] = [
    "Account.sol",
    "Arbitration.sol",
    "Escrow.sol",
    "Offer.sol",
    "Rating.sol",
    "Reputation.sol",
    "Trade.sol",
    "ContractRegistry.sol",
];

pub struct TestEnv {
    _tmp: TempDir,
    pub dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let dir = make_fixture_contracts(tmp.path());
        Self { _tmp: tmp, dir }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("solbundle").expect("binary built");
        cmd.arg("--dir").arg(self.dir.to_str().expect("dir path utf8"));
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn write_source(&self, name: &str, content: &str) {
        fs::write(self.dir.join(name), content).expect("write source fixture");
    }

    pub fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.dir.join(name)).expect("read output file")
    }
}

fn make_fixture_contracts(base: &Path) -> PathBuf {
    let dir = base.join("contracts");
    fs::create_dir_all(&dir).expect("create contracts dir");
    for name in DEFAULT_CONTRACTS {
        let stem = name.trim_end_matches(".sol");
        fs::write(
            dir.join(name),
            format!("pragma solidity ^0.8.0;\n\ncontract {} {{}}\n", stem),
        )
        .expect("write contract fixture");
    }
    dir
}
