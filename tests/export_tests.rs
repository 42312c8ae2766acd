use predicates::str::contains;
use std::fs;

mod common;
use common::{add_cli, init_cli_db, rlb, setup_test_db, temp_out};

fn seeded_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    init_cli_db(&db_path);
    add_cli(&db_path, "2025-09-01", "12:00", "13:00");
    add_cli(&db_path, "2025-09-02", "12:00", "13:10");
    rlb()
        .args(["--db", &db_path, "week", "add", "W1"])
        .assert()
        .success();
    db_path
}

#[test]
fn test_export_json() {
    let db_path = seeded_db("export_json");
    let out = temp_out("export_json", "json");

    rlb()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();

    assert_eq!(doc["balance"]["remaining_minutes"], 2350);
    assert_eq!(doc["balance"]["total_deficit_minutes"], 50);
    assert_eq!(doc["records"].as_array().unwrap().len(), 2);
    assert_eq!(doc["records"][0]["date"], "2025-09-02");
    assert_eq!(doc["records"][0]["departure_time"], "12:00");
    assert_eq!(doc["records"][0]["deficit_minutes"], 20);
    assert_eq!(doc["weeks"][0]["name"], "W1");
    assert_eq!(doc["weeks"][0]["deficit_total"], 50);
}

#[test]
fn test_export_csv_records() {
    let db_path = seeded_db("export_csv_records");
    let out = temp_out("export_csv_records", "csv");

    rlb()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,date,departure_time,return_time,break_minutes,deficit_minutes"
    );
    assert_eq!(lines.next().unwrap(), "2,2025-09-02,12:00,13:10,70,20");
    assert_eq!(lines.next().unwrap(), "1,2025-09-01,12:00,13:00,60,30");
    assert!(lines.next().is_none());
}

#[test]
fn test_export_csv_weeks() {
    let db_path = seeded_db("export_csv_weeks");
    let out = temp_out("export_csv_weeks", "csv");

    rlb()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--weeks",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next().unwrap(), "id,name,deficit_total,created_at");
    assert!(lines.next().unwrap().starts_with("1,W1,50,"));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = seeded_db("export_relative");

    rlb()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "json",
            "--file",
            "relative.json",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_does_not_overwrite_without_confirmation() {
    let db_path = seeded_db("export_overwrite");
    let out = temp_out("export_overwrite", "json");
    fs::write(&out, "keep me").unwrap();

    rlb()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rlb()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--force",
        ])
        .assert()
        .success();

    assert_ne!(fs::read_to_string(&out).unwrap(), "keep me");
}
