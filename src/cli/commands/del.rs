use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut pool = open_db(cfg)?;
        DeleteLogic::apply(&mut pool, *id)?;
        success(format!("Lunch record #{} has been deleted.", id));
    }

    Ok(())
}
