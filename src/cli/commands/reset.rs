use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        if !*yes
            && !confirm(
                "Delete ALL lunch records? Weeks are kept. This action is irreversible.",
                "Confirm",
            )
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = open_db(cfg)?;
        let removed = DeleteLogic::reset(&mut pool)?;
        success(format!("{} lunch records have been deleted.", removed));
    }

    Ok(())
}
