use crate::core::add::required;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_week, insert_week, total_deficit};
use crate::errors::{AppError, AppResult};
use crate::models::week::Week;

pub struct WeekLogic;

impl WeekLogic {
    /// Close out a period: store `name` with the current total deficit.
    ///
    /// The stored total is a snapshot; later record changes never touch it.
    pub fn close(pool: &mut DbPool, name: &str) -> AppResult<Week> {
        let name = required("name", name)?;
        let total = total_deficit(&pool.conn)?;
        let week = insert_week(&pool.conn, name, total)?;

        ttlog_quiet(
            &pool.conn,
            "week_add",
            &week.name,
            &format!("Week #{} closed with deficit {} min", week.id, total),
        );
        Ok(week)
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        if delete_week(&pool.conn, id)? == 0 {
            return Err(AppError::NotFound { entity: "Week", id });
        }

        ttlog_quiet(&pool.conn, "week_del", &id.to_string(), "Week deleted");
        Ok(())
    }
}
