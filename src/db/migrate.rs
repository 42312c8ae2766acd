use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::date::{format_date, parse_date};
use crate::utils::time::{format_time, parse_time};
use rusqlite::{Connection, OptionalExtension, Result, params};

/// A versioned schema step. Applied at most once; the marker lives in the
/// `log` table as `operation = 'migration_applied'`.
struct Migration {
    version: &'static str,
    description: &'static str,
    apply: fn(&Connection) -> Result<()>,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "0001_create_lunch_records",
        description: "Created lunch_records table",
        apply: create_lunch_records_table,
    },
    Migration {
        version: "0002_create_weeks",
        description: "Created weeks table",
        apply: create_weeks_table,
    },
    Migration {
        version: "0003_import_legacy_tables",
        description: "Imported rows from legacy almocos/semanas tables",
        apply: import_legacy_tables,
    },
];

/// Ensure that the `log` table exists. It also stores migration markers,
/// so it has to be created before anything else.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_is_empty(conn: &Connection, name: &str) -> Result<bool> {
    // `name` only ever comes from the constants in this module.
    let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {name}"), [], |row| {
        row.get(0)
    })?;
    Ok(count == 0)
}

fn create_lunch_records_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS lunch_records (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            date            TEXT NOT NULL,
            departure_time  TEXT NOT NULL,
            return_time     TEXT NOT NULL,
            break_minutes   INTEGER NOT NULL,
            deficit_minutes INTEGER NOT NULL CHECK(deficit_minutes >= 0)
        );
        "#,
    )
}

fn create_weeks_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS weeks (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL,
            deficit_total INTEGER NOT NULL,
            created_at    TEXT NOT NULL DEFAULT ''
        );
        "#,
    )
}

/// A row of the legacy `almocos` table, as stored (never validated).
struct LegacyLunch {
    id: i64,
    date: String,
    departure: String,
    ret: String,
    break_minutes: i64,
    deficit_minutes: i64,
}

impl LegacyLunch {
    /// Normalized `(date, departure, return)` or `None` when any of them
    /// cannot be read back by the row mapper.
    fn parsed(&self) -> Option<(String, String, String)> {
        let date = parse_date(&self.date)?;
        let departure = parse_time(&self.departure)?;
        let ret = parse_time(&self.ret)?;
        Some((format_date(date), format_time(departure), format_time(ret)))
    }
}

fn load_legacy_lunches(conn: &Connection) -> Result<Vec<LegacyLunch>> {
    let mut stmt = conn.prepare(
        "SELECT id,
                COALESCE(data, ''),
                COALESCE(hora_saida, ''),
                COALESCE(hora_retorno, ''),
                COALESCE(CAST(tempo_almoco AS INTEGER), 0),
                COALESCE(CAST(deficit AS INTEGER), 0)
         FROM almocos
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(LegacyLunch {
            id: row.get(0)?,
            date: row.get(1)?,
            departure: row.get(2)?,
            ret: row.get(3)?,
            break_minutes: row.get(4)?,
            deficit_minutes: row.get(5)?,
        })
    })?;

    rows.collect()
}

/// Copy `almocos` rows into `lunch_records`, keeping ids. Rows whose date or
/// times do not parse are left behind and reported; returns their ids.
fn import_legacy_lunches(conn: &Connection) -> Result<Vec<i64>> {
    let legacy = load_legacy_lunches(conn)?;
    let mut skipped = Vec::new();

    let tx = conn.unchecked_transaction()?;
    {
        let mut insert = tx.prepare(
            "INSERT INTO lunch_records
                 (id, date, departure_time, return_time, break_minutes, deficit_minutes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;

        for row in &legacy {
            let Some((date, departure, ret)) = row.parsed() else {
                skipped.push(row.id);
                continue;
            };
            insert.execute(params![
                row.id,
                date,
                departure,
                ret,
                row.break_minutes,
                row.deficit_minutes.max(0),
            ])?;
        }
    }
    tx.commit()?;

    Ok(skipped)
}

/// Copy rows from the tables used by the first (pre-Rust) release of the
/// hour bank. Ids are kept; the legacy tables are left untouched.
fn import_legacy_tables(conn: &Connection) -> Result<()> {
    if table_exists(conn, "almocos")? && table_is_empty(conn, "lunch_records")? {
        warning("Legacy 'almocos' table detected, importing lunch records...");
        let skipped = import_legacy_lunches(conn)?;

        if !skipped.is_empty() {
            let ids = skipped
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            tracing::warn!(ids = %ids, "legacy lunch records skipped");
            warning(format!(
                "Skipped {} legacy lunch record(s) with an unreadable date or time (almocos ids: {}).",
                skipped.len(),
                ids
            ));
        }
    }

    if table_exists(conn, "semanas")? && table_is_empty(conn, "weeks")? {
        warning("Legacy 'semanas' table detected, importing weeks...");
        conn.execute_batch(
            r#"
            INSERT INTO weeks (id, name, deficit_total, created_at)
            SELECT id, COALESCE(nome, ''), COALESCE(CAST(deficit_total AS INTEGER), 0), ''
            FROM semanas;
            "#,
        )?;
    }

    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// List of migration versions already recorded in the database.
pub fn applied_migrations(conn: &Connection) -> AppResult<Vec<String>> {
    ensure_log_table(conn)?;
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Returns the number of migrations applied by this call (0 when the schema
/// is already current).
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        (m.apply)(conn)
            .map_err(|e| AppError::Migration(format!("{} failed: {}", m.version, e)))?;
        mark_applied(conn, m.version, m.description)?;

        success(format!("Migration applied: {} → {}", m.version, m.description));
        applied += 1;
    }

    Ok(applied)
}
