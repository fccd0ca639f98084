#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn oar() -> Command {
    cargo_bin_cmd!("oarlog")
}

/// Create a unique test store path inside the system temp dir and remove
/// any existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_oarlog.json", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a fresh fake home directory inside tempdir so config and
/// saved filters stay isolated from the real user environment
pub fn setup_test_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_oarlog_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("test home");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Seed the store with a small dataset useful for many tests: two rowers,
/// 2k and 6k results across two months.
pub fn seed_store(store_path: &str) {
    let json = r#"[
      {
        "id": "1",
        "name": "Jan Novák",
        "club": "VK Smíchov",
        "category": "U23",
        "testType": "2k",
        "date": "2025-02-01",
        "time": "6:45,3",
        "timeSeconds": 405.3,
        "note": "control test"
      },
      {
        "id": "2",
        "name": "Jan Novák",
        "club": "VK Smíchov",
        "category": "U23",
        "testType": "2k",
        "date": "2025-03-01",
        "time": "6:42,8",
        "timeSeconds": 402.8
      },
      {
        "id": "3",
        "name": "Jan Novák",
        "club": "VK Smíchov",
        "category": "U23",
        "testType": "6k",
        "date": "2025-02-15",
        "time": "21:30,0",
        "timeSeconds": 1290.0
      },
      {
        "id": "4",
        "name": "Petr Dvořák",
        "club": "ČVK Praha",
        "category": "U19",
        "testType": "2k",
        "date": "2025-02-10",
        "time": "7:05,0"
      }
    ]"#;
    fs::write(store_path, json).expect("seed store");
}
