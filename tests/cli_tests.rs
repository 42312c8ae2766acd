use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_cli, init_cli_db, rlb, setup_test_db};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    rlb()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"))
        .stdout(contains("0001_create_lunch_records"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_and_list() {
    let db_path = setup_test_db("cli_add_list");
    init_cli_db(&db_path);

    rlb()
        .args(["--db", &db_path, "add", "2025-09-01", "12:00", "13:00"])
        .assert()
        .success()
        .stdout(contains("deficit 30 min"))
        .stdout(contains("39h 30m"));

    rlb()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("12:00"))
        .stdout(contains("13:00"))
        .stdout(contains("(2370 min)"));
}

#[test]
fn test_add_works_without_init() {
    let db_path = setup_test_db("cli_no_init");

    rlb()
        .args(["--db", &db_path, "add", "2025-09-01", "12:00", "13:30"])
        .assert()
        .success()
        .stdout(contains("deficit 0 min"));
}

#[test]
fn test_add_rejects_return_before_departure() {
    let db_path = setup_test_db("cli_negative");
    init_cli_db(&db_path);

    rlb()
        .args(["--db", &db_path, "add", "2025-09-01", "14:00", "13:00"])
        .assert()
        .failure()
        .stderr(contains("earlier than departure"));

    rlb()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No lunch breaks recorded."));
}

#[test]
fn test_add_rejects_bad_date() {
    let db_path = setup_test_db("cli_bad_date");

    rlb()
        .args(["--db", &db_path, "add", "2025-13-40", "12:00", "13:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_del_unknown_id_fails() {
    let db_path = setup_test_db("cli_del_unknown");
    init_cli_db(&db_path);

    rlb()
        .args(["--db", &db_path, "del", "99"])
        .assert()
        .failure()
        .stderr(contains("Lunch record #99 not found"));
}

#[test]
fn test_del_record() {
    let db_path = setup_test_db("cli_del");
    init_cli_db(&db_path);
    add_cli(&db_path, "2025-09-01", "12:00", "13:00");

    rlb()
        .args(["--db", &db_path, "del", "1"])
        .assert()
        .success()
        .stdout(contains("#1 has been deleted"));

    rlb()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("(2400 min)"));
}

#[test]
fn test_reset_asks_confirmation() {
    let db_path = setup_test_db("cli_reset_cancel");
    init_cli_db(&db_path);
    add_cli(&db_path, "2025-09-01", "12:00", "13:00");

    rlb()
        .args(["--db", &db_path, "reset"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    rlb()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("(2370 min)"));
}

#[test]
fn test_reset_with_yes() {
    let db_path = setup_test_db("cli_reset_yes");
    init_cli_db(&db_path);
    add_cli(&db_path, "2025-09-01", "12:00", "13:00");
    add_cli(&db_path, "2025-09-02", "12:00", "12:30");

    rlb()
        .args(["--db", &db_path, "reset", "--yes"])
        .assert()
        .success()
        .stdout(contains("2 lunch records have been deleted."));

    rlb()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("(2400 min)"))
        .stdout(contains("No lunch breaks recorded."));
}

#[test]
fn test_week_snapshot_via_cli() {
    let db_path = setup_test_db("cli_week");
    init_cli_db(&db_path);
    add_cli(&db_path, "2025-09-01", "12:00", "13:00");
    add_cli(&db_path, "2025-09-02", "12:00", "13:10");

    rlb()
        .args(["--db", &db_path, "week", "add", "W1"])
        .assert()
        .success()
        .stdout(contains("Week #1 'W1' closed"))
        .stdout(contains("(50 min)"));

    rlb()
        .args(["--db", &db_path, "del", "1"])
        .assert()
        .success();

    rlb()
        .args(["--db", &db_path, "list", "--weeks"])
        .assert()
        .success()
        .stdout(contains("W1"))
        .stdout(contains("00:50 (50)"))
        .stdout(contains("(2380 min)"))
        .stdout(contains("2025-09-02").not());

    rlb()
        .args(["--db", &db_path, "week", "del", "1"])
        .assert()
        .success();

    rlb()
        .args(["--db", &db_path, "week", "del", "1"])
        .assert()
        .failure()
        .stderr(contains("Week #1 not found"));
}

#[test]
fn test_db_maintenance() {
    let db_path = setup_test_db("cli_db");
    init_cli_db(&db_path);
    add_cli(&db_path, "2025-09-01", "12:00", "13:00");

    rlb()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Schema already up to date."));

    rlb()
        .args(["--db", &db_path, "db", "--check", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed."))
        .stdout(contains("Vacuum completed"));

    rlb()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Lunch records:"))
        .stdout(contains("Migrations applied:"));
}

#[test]
fn test_log_print() {
    let db_path = setup_test_db("cli_log");
    init_cli_db(&db_path);
    add_cli(&db_path, "2025-09-01", "12:00", "13:00");

    rlb()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("init"))
        .stdout(contains("add (2025-09-01)"));
}

#[test]
fn test_config_print() {
    let db_path = setup_test_db("cli_config");

    rlb()
        .args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("expected_break_minutes"))
        .stdout(contains(db_path.as_str()));
}

#[test]
fn test_audit_log_failure_is_reported_but_add_succeeds() {
    let db_path = setup_test_db("cli_audit_failure");
    init_cli_db(&db_path);

    // make every "add" audit insert fail
    {
        let pool = rlunchbank::db::pool::DbPool::new(&db_path).unwrap();
        pool.conn
            .execute_batch(
                r#"
                CREATE TRIGGER reject_add_log BEFORE INSERT ON log
                WHEN NEW.operation = 'add'
                BEGIN
                    SELECT RAISE(ABORT, 'log is read-only');
                END;
                "#,
            )
            .unwrap();
    }

    rlb()
        .args(["--db", &db_path, "add", "2025-09-01", "12:00", "13:00"])
        .assert()
        .success()
        .stdout(contains("Failed to write internal log (add)"))
        .stdout(contains("log is read-only"));

    rlb()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("(2370 min)"));
}
