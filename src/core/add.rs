use crate::config::Config;
use crate::core::calculator::calculate_break;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::insert_record;
use crate::errors::{AppError, AppResult};
use crate::models::lunch_record::{LunchRecord, NewLunchRecord};
use crate::utils::{date, time};

/// High-level business logic for recording a lunch break.
pub struct AddLogic;

/// Reject blank input for a required field.
pub fn required<'a>(field: &'static str, value: &'a str) -> AppResult<&'a str> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::MissingField(field));
    }
    Ok(v)
}

impl AddLogic {
    /// Validate the raw inputs, compute break and deficit, then insert.
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        date_str: &str,
        departure_str: &str,
        return_str: &str,
    ) -> AppResult<LunchRecord> {
        let date = date::parse_required_date(required("date", date_str)?)?;
        let departure = time::parse_required_time(required("departure", departure_str)?)?;
        let ret = time::parse_required_time(required("return", return_str)?)?;

        let outcome = calculate_break(departure, ret, cfg.expected_break_minutes)?;

        let new = NewLunchRecord {
            date,
            departure_time: departure,
            return_time: ret,
            break_minutes: outcome.break_minutes,
            deficit_minutes: outcome.deficit_minutes,
        };

        let id = insert_record(&pool.conn, &new)?;
        let record = new.into_record(id);

        ttlog_quiet(
            &pool.conn,
            "add",
            &record.date_str(),
            &format!(
                "Lunch #{} {}-{}: break {} min, deficit {} min",
                id,
                record.departure_str(),
                record.return_str(),
                record.break_minutes,
                record.deficit_minutes
            ),
        );

        Ok(record)
    }
}
