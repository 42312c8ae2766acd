use chrono::{NaiveDate, NaiveTime};

use crate::utils::{date, time};

/// A persisted lunch break with its derived break length and deficit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunchRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub departure_time: NaiveTime,
    pub return_time: NaiveTime,
    pub break_minutes: i64,
    pub deficit_minutes: i64,
}

/// A lunch break ready to be inserted (no id yet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLunchRecord {
    pub date: NaiveDate,
    pub departure_time: NaiveTime,
    pub return_time: NaiveTime,
    pub break_minutes: i64,
    pub deficit_minutes: i64,
}

impl NewLunchRecord {
    pub fn into_record(self, id: i64) -> LunchRecord {
        LunchRecord {
            id,
            date: self.date,
            departure_time: self.departure_time,
            return_time: self.return_time,
            break_minutes: self.break_minutes,
            deficit_minutes: self.deficit_minutes,
        }
    }
}

impl LunchRecord {
    pub fn date_str(&self) -> String {
        date::format_date(self.date)
    }

    pub fn departure_str(&self) -> String {
        time::format_time(self.departure_time)
    }

    pub fn return_str(&self) -> String {
        time::format_time(self.return_time)
    }
}
