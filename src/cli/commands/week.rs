use crate::cli::commands::open_db;
use crate::cli::parser::{Commands, WeekAction};
use crate::config::Config;
use crate::core::week::WeekLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::mins2readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { action } = cmd {
        let mut pool = open_db(cfg)?;

        match action {
            WeekAction::Add { name } => {
                let week = WeekLogic::close(&mut pool, name)?;
                success(format!(
                    "Week #{} '{}' closed with deficit {} ({} min).",
                    week.id,
                    week.name,
                    mins2readable(week.deficit_total, false, false),
                    week.deficit_total
                ));
            }
            WeekAction::Del { id } => {
                WeekLogic::delete(&mut pool, *id)?;
                success(format!("Week #{} has been deleted.", id));
            }
        }
    }

    Ok(())
}
