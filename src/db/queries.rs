use crate::errors::AppError;
use crate::models::lunch_record::{LunchRecord, NewLunchRecord};
use crate::models::week::Week;
use crate::utils::date::DATE_FORMAT;
use crate::utils::time::{format_time, parse_time};
use chrono::{Local, NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------------------------------------------------------
// Lunch records
// ---------------------------------------------------------------------------

pub fn map_record_row(row: &Row) -> Result<LunchRecord> {
    let date_str: String = row.get("date")?;
    let departure_str: String = row.get("departure_time")?;
    let return_str: String = row.get("return_time")?;

    let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let departure_time = parse_db_time(&departure_str)?;
    let return_time = parse_db_time(&return_str)?;

    Ok(LunchRecord {
        id: row.get("id")?,
        date,
        departure_time,
        return_time,
        break_minutes: row.get("break_minutes")?,
        deficit_minutes: row.get("deficit_minutes")?,
    })
}

fn parse_db_time(s: &str) -> Result<NaiveTime> {
    parse_time(s).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(s.to_string())),
        )
    })
}

/// Insert a lunch record and return its new id.
pub fn insert_record(conn: &Connection, rec: &NewLunchRecord) -> Result<i64> {
    conn.execute(
        "INSERT INTO lunch_records (date, departure_time, return_time, break_minutes, deficit_minutes)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            rec.date.format(DATE_FORMAT).to_string(),
            format_time(rec.departure_time),
            format_time(rec.return_time),
            rec.break_minutes,
            rec.deficit_minutes,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All lunch records, most recent first.
pub fn load_records(conn: &Connection) -> Result<Vec<LunchRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, departure_time, return_time, break_minutes, deficit_minutes
         FROM lunch_records
         ORDER BY id DESC",
    )?;

    let rows = stmt.query_map([], map_record_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_record(conn: &Connection, id: i64) -> Result<Option<LunchRecord>> {
    conn.query_row(
        "SELECT id, date, departure_time, return_time, break_minutes, deficit_minutes
         FROM lunch_records
         WHERE id = ?1",
        [id],
        map_record_row,
    )
    .optional()
}

/// Returns the number of deleted rows (0 or 1).
pub fn delete_record(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM lunch_records WHERE id = ?1", [id])
}

pub fn delete_all_records(conn: &Connection) -> Result<usize> {
    conn.execute("DELETE FROM lunch_records", [])
}

/// Sum of all current deficits; 0 when there are no records.
pub fn total_deficit(conn: &Connection) -> Result<i64> {
    conn.query_row(
        "SELECT COALESCE(SUM(deficit_minutes), 0) FROM lunch_records",
        [],
        |row| row.get(0),
    )
}

pub fn count_records(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM lunch_records", [], |row| row.get(0))
}

// ---------------------------------------------------------------------------
// Weeks
// ---------------------------------------------------------------------------

fn map_week_row(row: &Row) -> Result<Week> {
    Ok(Week {
        id: row.get("id")?,
        name: row.get("name")?,
        deficit_total: row.get("deficit_total")?,
        created_at: row.get("created_at")?,
    })
}

/// Insert a week snapshot and return it as stored.
pub fn insert_week(conn: &Connection, name: &str, deficit_total: i64) -> Result<Week> {
    let created_at = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO weeks (name, deficit_total, created_at) VALUES (?1, ?2, ?3)",
        params![name, deficit_total, created_at],
    )?;

    Ok(Week {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
        deficit_total,
        created_at,
    })
}

/// All weeks, most recent first.
pub fn load_weeks(conn: &Connection) -> Result<Vec<Week>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, deficit_total, created_at
         FROM weeks
         ORDER BY id DESC",
    )?;

    let rows = stmt.query_map([], map_week_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_week(conn: &Connection, id: i64) -> Result<Option<Week>> {
    conn.query_row(
        "SELECT id, name, deficit_total, created_at FROM weeks WHERE id = ?1",
        [id],
        map_week_row,
    )
    .optional()
}

pub fn delete_week(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM weeks WHERE id = ?1", [id])
}

pub fn count_weeks(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM weeks", [], |row| row.get(0))
}
