//! Time utilities: parsing HH:MM, duration computations, formatting minutes.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub const TIME_FORMAT: &str = "%H:%M";
const TIME_FORMAT_SECS: &str = "%H:%M:%S";

/// Accepts `HH:MM` or `HH:MM:SS`. Seconds are kept so that durations are
/// truncated only once, on the difference.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(t, TIME_FORMAT_SECS))
        .ok()
}

/// Parse a wall-clock `HH:MM` value, mapping failures to `InvalidTime`.
pub fn parse_required_time(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Whole minutes from `start` to `end`, truncated.
pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let duration = end - start;
    duration.num_minutes()
}

/// `HH:MM`, or `HH:MM:SS` when the time carries seconds.
pub fn format_time(t: NaiveTime) -> String {
    if t.second() == 0 {
        t.format(TIME_FORMAT).to_string()
    } else {
        t.format(TIME_FORMAT_SECS).to_string()
    }
}
