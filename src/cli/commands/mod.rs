pub mod add;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod reset;
pub mod serve;
pub mod week;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::path::ensure_parent_dir;

/// Open the configured database and bring its schema up to date.
pub(crate) fn open_db(cfg: &Config) -> AppResult<DbPool> {
    let path = cfg.database_path();
    ensure_parent_dir(&path)?;

    let pool = DbPool::new(&path)?;
    init_db(&pool.conn)?;
    Ok(pool)
}
