#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::path::PathBuf;

pub fn kin() -> Command {
    cargo_bin_cmd!("kintai")
}

/// Create a unique test store path inside the system temp dir and remove any
/// existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_kintai.json", name));
    let store_path = path.to_string_lossy().to_string();
    std::fs::remove_file(&store_path).ok();
    store_path
}

/// Run one subcommand against the given store, as a fixed user, evaluated at
/// a fixed RFC3339 instant.
pub fn kin_at(store: &str, at: &str, args: &[&str]) -> Command {
    let mut cmd = kin();
    cmd.args(["--data", store, "--user", "aoi", "--test", "--at", at]);
    cmd.args(args);
    cmd
}

/// Initialize an empty store and clock in at `at`.
pub fn init_and_clock_in(store: &str, at: &str) {
    kin()
        .args(["--data", store, "--test", "init"])
        .assert()
        .success();

    kin_at(store, at, &["in"]).assert().success();
}
