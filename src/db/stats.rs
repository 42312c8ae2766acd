use crate::db::migrate::applied_migrations;
use crate::db::pool::DbPool;
use crate::db::queries::{count_records, count_weeks, total_deficit};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::mins2readable;
use rusqlite::OptionalExtension;
use std::fs;
use std::path::Path;

pub fn print_db_info(pool: &mut DbPool, db_path: &Path) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!(
        "{}• File:{} {}{}{}",
        CYAN,
        RESET,
        YELLOW,
        db_path.display(),
        RESET
    );
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTALS
    //
    let records = count_records(&pool.conn)?;
    let weeks = count_weeks(&pool.conn)?;
    let deficit = total_deficit(&pool.conn)?;

    println!(
        "{}• Lunch records:{} {}{}{}",
        CYAN, RESET, GREEN, records, RESET
    );
    println!("{}• Weeks:{} {}{}{}", CYAN, RESET, GREEN, weeks, RESET);
    println!(
        "{}• Total deficit:{} {}",
        CYAN,
        RESET,
        mins2readable(deficit, false, false)
    );

    //
    // 3) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM lunch_records ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM lunch_records ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    println!("{}• Date range:{}", CYAN, RESET);
    println!(
        "    from: {}",
        first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    to:   {}",
        last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    //
    // 4) SCHEMA
    //
    let migrations = applied_migrations(&pool.conn)?;
    println!("{}• Migrations applied:{} {}", CYAN, RESET, migrations.len());
    for m in migrations {
        println!("    - {}", m);
    }

    println!();
    Ok(())
}
