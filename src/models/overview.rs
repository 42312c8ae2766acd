use crate::models::balance::Balance;
use crate::models::lunch_record::LunchRecord;
use crate::models::week::Week;

/// Everything the listing views need, loaded in one pass.
#[derive(Debug, Default)]
pub struct Overview {
    pub balance: Balance,
    pub records: Vec<LunchRecord>,
    pub weeks: Vec<Week>,
}
