use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Like [`ttlog`], but a failure is only reported as a warning: through
/// tracing when a subscriber listens (`serve`), on the terminal otherwise.
pub fn ttlog_quiet(conn: &Connection, operation: &str, target: &str, message: &str) {
    let Err(e) = ttlog(conn, operation, target, message) else {
        return;
    };

    if tracing::enabled!(tracing::Level::WARN) {
        tracing::warn!(operation, target, error = %e, "failed to write internal log");
    } else {
        warning(format!("Failed to write internal log ({operation}): {e}"));
    }
}
