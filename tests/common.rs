#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn teer() -> Command {
    cargo_bin_cmd!("teerlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_teerlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a unique cache-file path inside the system temp dir
pub fn setup_test_cache(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_teerlog_cache.json", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str, cache_path: &str) {
    // init DB (creates tables)
    teer()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    teer()
        .args([
            "--db", db_path, "--cache", cache_path, "add", "2025-06-01", "--first", "23", "--second", "45",
        ])
        .assert()
        .success();

    teer()
        .args([
            "--db", db_path, "--cache", cache_path, "add", "2025-06-15", "--first", "7,12", "--second", "88",
        ])
        .assert()
        .success();
}
