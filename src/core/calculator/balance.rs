use crate::models::balance::Balance;

pub fn calculate_balance(initial_allowance: i64, total_deficit: i64) -> Balance {
    Balance {
        initial_allowance_minutes: initial_allowance,
        total_deficit_minutes: total_deficit,
        remaining_minutes: initial_allowance - total_deficit,
    }
}
