use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::mins2readable;

/// Record a lunch break.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        departure,
        ret,
    } = cmd
    {
        let mut pool = open_db(cfg)?;

        let record = AddLogic::apply(&mut pool, cfg, date, departure, ret)?;

        success(format!(
            "Lunch #{} on {}: {} → {} ({} min, deficit {} min)",
            record.id,
            record.date_str(),
            record.departure_str(),
            record.return_str(),
            record.break_minutes,
            record.deficit_minutes
        ));

        let balance = Core::balance(&mut pool, cfg)?;
        info(format!(
            "Balance: {} ({} min)",
            mins2readable(balance.remaining_minutes, false, false),
            balance.remaining_minutes
        ));
    }

    Ok(())
}
