//! Per-record computation: break length and shortfall against the expected
//! break.

use crate::errors::{AppError, AppResult};
use crate::utils::time::{format_time, minutes_between};
use chrono::NaiveTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakOutcome {
    pub break_minutes: i64,
    pub deficit_minutes: i64,
}

/// Shortfall of `break_minutes` against `expected`, floored at zero.
pub fn deficit_for(break_minutes: i64, expected: i64) -> i64 {
    (expected - break_minutes).max(0)
}

/// Both times are on the same implicit day. A return earlier than the
/// departure is rejected; equal times mean a zero-length break.
pub fn calculate_break(
    departure: NaiveTime,
    ret: NaiveTime,
    expected: i64,
) -> AppResult<BreakOutcome> {
    if ret < departure {
        return Err(AppError::ReturnBeforeDeparture {
            departure: format_time(departure),
            ret: format_time(ret),
        });
    }

    let break_minutes = minutes_between(departure, ret);

    Ok(BreakOutcome {
        break_minutes,
        deficit_minutes: deficit_for(break_minutes, expected),
    })
}
