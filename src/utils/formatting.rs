//! Formatting utilities used for CLI, page and export outputs.

use crate::utils::colors::{BOLD, RESET};

/// Minutes as `HHh MMm`, or `HH:MM` when `short`. Negative values always
/// carry a "-"; "+" is added only when `want_sign`.
pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 {
        "-"
    } else {
        ""
    };

    if short {
        format!("{sign}{hours:02}:{minutes:02}")
    } else {
        format!("{sign}{hours:02}h {minutes:02}m")
    }
}

pub fn bold(s: &str) -> String {
    format!("{BOLD}{s}{RESET}")
}
