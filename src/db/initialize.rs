use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Bring a freshly opened database up to the current schema.
/// Returns the number of migrations that had to be applied.
pub fn init_db(conn: &Connection) -> AppResult<usize> {
    let applied = run_pending_migrations(conn)?;
    if applied > 0 {
        tracing::debug!(applied, "database schema upgraded");
    }
    Ok(applied)
}
