pub mod balance;
pub mod deficit;

pub use balance::calculate_balance;
pub use deficit::{BreakOutcome, calculate_break, deficit_for};
