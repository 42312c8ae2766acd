// src/export/model.rs

use crate::models::balance::Balance;
use crate::models::lunch_record::LunchRecord;
use crate::models::week::Week;
use serde::Serialize;

/// Flat lunch record, times rendered as `HH:MM`.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub id: i64,
    pub date: String,
    pub departure_time: String,
    pub return_time: String,
    pub break_minutes: i64,
    pub deficit_minutes: i64,
}

impl From<&LunchRecord> for RecordExport {
    fn from(r: &LunchRecord) -> Self {
        Self {
            id: r.id,
            date: r.date_str(),
            departure_time: r.departure_str(),
            return_time: r.return_str(),
            break_minutes: r.break_minutes,
            deficit_minutes: r.deficit_minutes,
        }
    }
}

/// Whole-ledger document used by the JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct LedgerExport {
    pub generated_at: String,
    pub balance: Balance,
    pub records: Vec<RecordExport>,
    pub weeks: Vec<Week>,
}
