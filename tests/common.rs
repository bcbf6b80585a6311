#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn gl() -> Command {
    cargo_bin_cmd!("gatelog")
}

/// Create a unique data file path inside the system temp dir and remove any existing file
pub fn setup_test_data(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_gatelog.csv", name));
    let data_path = path.to_string_lossy().to_string();
    fs::remove_file(&data_path).ok();
    data_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_gatelog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Register an entry through the CLI
pub fn add_person(data_path: &str, name: &str, kind: &str) {
    gl().args([
        "--data",
        data_path,
        "add",
        "--name",
        name,
        "--doc",
        "12.345.678-9",
        "--car",
        "Fiat Uno",
        "--plate",
        "ABC1D23",
        "--address",
        "Rua das Flores",
        "--number",
        "42",
        "--kind",
        kind,
    ])
    .assert()
    .success();
}

/// Initialize the data file and add a small dataset useful for many tests
pub fn init_with_data(data_path: &str) {
    gl().args(["--data", data_path, "--test", "init"])
        .assert()
        .success();

    add_person(data_path, "Ana Silva", "Visitor");
    add_person(data_path, "Bruno Costa", "Resident");
}

/// Data rows of the CSV file (header excluded)
pub fn data_rows(data_path: &str) -> Vec<String> {
    fs::read_to_string(data_path)
        .expect("read data file")
        .lines()
        .skip(1)
        .map(str::to_string)
        .collect()
}
