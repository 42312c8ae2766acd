use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_all_records, delete_record};
use crate::errors::{AppError, AppResult};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one lunch record. An unknown id is reported as `NotFound`.
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<()> {
        if delete_record(&pool.conn, id)? == 0 {
            return Err(AppError::NotFound {
                entity: "Lunch record",
                id,
            });
        }

        ttlog_quiet(&pool.conn, "del", &id.to_string(), "Lunch record deleted");
        Ok(())
    }

    /// Delete every lunch record. Weeks are left untouched.
    pub fn reset(pool: &mut DbPool) -> AppResult<usize> {
        let removed = delete_all_records(&pool.conn)?;

        ttlog_quiet(
            &pool.conn,
            "reset",
            "lunch_records",
            &format!("Removed {} lunch records", removed),
        );
        Ok(removed)
    }
}
