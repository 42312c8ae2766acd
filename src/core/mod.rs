pub mod add;
pub mod calculator;
pub mod del;
pub mod log;
pub mod logic;
pub mod week;
