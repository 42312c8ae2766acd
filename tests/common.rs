#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rlunchbank::config::Config;
use rlunchbank::db::initialize::init_db;
use rlunchbank::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rlb() -> Command {
    cargo_bin_cmd!("rlunchbank")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rlunchbank.sqlite", name));
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

/// Default configuration pointing at `db_path`.
pub fn test_config(db_path: &str) -> Config {
    Config {
        database: db_path.to_string(),
        ..Config::default()
    }
}

/// Fresh, migrated database opened through the library API.
pub fn open_test_pool(name: &str) -> (DbPool, Config) {
    let db_path = setup_test_db(name);
    let pool = DbPool::new(&db_path).expect("open db");
    init_db(&pool.conn).expect("init db");
    (pool, test_config(&db_path))
}

/// Initialize DB through the binary
pub fn init_cli_db(db_path: &str) {
    rlb()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add a lunch break through the binary
pub fn add_cli(db_path: &str, date: &str, departure: &str, ret: &str) {
    rlb()
        .args(["--db", db_path, "add", date, departure, ret])
        .assert()
        .success();
}
