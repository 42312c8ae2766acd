use crate::config::Config;
use crate::core::calculator::calculate_balance;
use crate::db::pool::DbPool;
use crate::db::queries::{load_records, load_weeks, total_deficit};
use crate::errors::AppResult;
use crate::models::balance::Balance;
use crate::models::overview::Overview;

pub struct Core;

impl Core {
    /// Allowance minus the deficit of every current record, computed fresh.
    pub fn balance(pool: &mut DbPool, cfg: &Config) -> AppResult<Balance> {
        let total = total_deficit(&pool.conn)?;
        Ok(calculate_balance(cfg.initial_allowance_minutes, total))
    }

    pub fn overview(pool: &mut DbPool, cfg: &Config) -> AppResult<Overview> {
        Ok(Overview {
            balance: Self::balance(pool, cfg)?,
            records: load_records(&pool.conn)?,
            weeks: load_weeks(&pool.conn)?,
        })
    }
}
