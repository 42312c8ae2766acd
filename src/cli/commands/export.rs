use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        weeks,
        force,
    } = cmd
    {
        let mut pool = open_db(cfg)?;
        ExportLogic::export(&mut pool, cfg, *format, file, *weeks, *force)?;
    }
    Ok(())
}
