#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dlg() -> Command {
    cargo_bin_cmd!("drivelog")
}

/// Create a unique test store path inside the system temp dir and remove any
/// existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_drivelog.sqlite", name));
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

/// Initialize a store and add a small dataset useful for many tests:
/// a 90-minute day drive and a 30-minute night drive.
pub fn init_store_with_data(store_path: &str) {
    dlg()
        .args(["--db", store_path, "--test", "init"])
        .assert()
        .success();

    dlg()
        .args([
            "--db",
            store_path,
            "add",
            "2025-06-15",
            "--from",
            "09:00",
            "--to",
            "10:30",
            "--notes",
            "first lesson",
        ])
        .assert()
        .success();

    dlg()
        .args([
            "--db",
            store_path,
            "add",
            "2025-06-16",
            "--from",
            "21:00",
            "--to",
            "21:30",
            "--night",
            "--weather",
            "raining",
        ])
        .assert()
        .success();
}
