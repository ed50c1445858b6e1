#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn stl() -> Command {
    cargo_bin_cmd!("studylogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_studylogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn save(db_path: &str, date: &str, start: &str, stop: &str) {
    stl()
        .args(["--db", db_path, "save", date, start, stop])
        .assert()
        .success();
}

/// Initialize DB and record a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    stl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    save(db_path, "2025-09-01", "09:00", "11:30");
    save(db_path, "2025-09-15", "14:00", "15:00");
    save(db_path, "2025-10-02", "08:00", "08:45");
}
