pub mod balance;
pub mod lunch_record;
pub mod overview;
pub mod week;
