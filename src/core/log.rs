use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};

const MAX_OP_WIDTH: usize = 40;

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// ANSI color for an operation name
fn color_for_operation(op: &str) -> &'static str {
    match op {
        "add" | "week_add" => GREEN,
        "del" | "week_del" | "reset" => RED,
        "init" | "serve" => YELLOW,
        "migration_applied" => CYAN,
        _ => RESET,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn load_log(pool: &mut DbPool) -> AppResult<Vec<LogEntry>> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogEntry {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }
        Ok(entries)
    }

    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = Self::load_log(pool)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for e in entries {
            let mut op_target = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };

            if op_target.chars().count() > MAX_OP_WIDTH {
                op_target = op_target.chars().take(MAX_OP_WIDTH - 3).collect();
                op_target.push_str("...");
            }

            // padding computed on the visible text, before coloring
            let padding = " ".repeat(MAX_OP_WIDTH.saturating_sub(op_target.chars().count()));
            let color = color_for_operation(&e.operation);

            println!(
                "{:>id_w$}: {:<date_w$} | {}{}{}{} => {}",
                e.id,
                e.date,
                color,
                op_target,
                RESET,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
