use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};
use std::fs;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    else {
        return Ok(());
    };

    let db_path = cfg.database_path();
    // opened without init_db so that --migrate reports what it applied
    let mut pool = DbPool::new(&db_path)?;

    if *migrate {
        step("Running migrations");
        match run_pending_migrations(&pool.conn)? {
            0 => done("Schema already up to date."),
            n => done(&format!("{n} migration(s) applied.")),
        }
    }

    if *info {
        run_pending_migrations(&pool.conn)?;
        stats::print_db_info(&mut pool, &db_path)?;
    }

    if *check {
        step("Running integrity check");
        let report = integrity_check(&pool)?;
        if report == "ok" {
            done("Integrity check passed.");
        } else {
            println!("{RED}✘ Integrity check failed:{RESET} {report}\n");
        }
    }

    if *vacuum {
        step("Running VACUUM");
        let before = file_size(&db_path);
        pool.conn.execute_batch("VACUUM;")?;
        let after = file_size(&db_path);
        done(&format!("Vacuum completed ({before} → {after} bytes)."));
    }

    Ok(())
}

fn step(label: &str) {
    println!("{CYAN}▶ {label}…{RESET}");
}

fn done(label: &str) {
    println!("{GREEN}✔ {label}{RESET}\n");
}

/// First line of `PRAGMA integrity_check`; "ok" when the file is sound.
fn integrity_check(pool: &DbPool) -> AppResult<String> {
    let report = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    Ok(report)
}

fn file_size(path: &Path) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
