use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct Balance {
    pub initial_allowance_minutes: i64,
    pub total_deficit_minutes: i64,
    /// May go negative once the allowance is exhausted.
    pub remaining_minutes: i64,
}
