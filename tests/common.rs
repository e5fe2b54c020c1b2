#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tlk() -> Command {
    cargo_bin_cmd!("targetlock")
}

/// Create a unique test store path inside the system temp dir and remove any existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_targetlock.json", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a store pinned to July 2024 with a 3.1M target.
/// July 2024 has 31 days with Sundays on the 7th, 14th, 21st and 28th.
pub fn init_store_july_2024(store_path: &str) {
    tlk()
        .args(["--store", store_path, "--test", "init"])
        .assert()
        .success();

    tlk()
        .args([
            "--store",
            store_path,
            "--test",
            "target",
            "--month",
            "2024-07",
            "--set",
            "3100000",
            "--meal",
            "15000",
        ])
        .assert()
        .success();
}

/// Add `qty` units of a catalog item on a date.
pub fn add_item(store_path: &str, date: &str, item: &str, qty: &str) {
    tlk()
        .args(["--store", store_path, "--test", "add", date, item, qty])
        .assert()
        .success();
}
