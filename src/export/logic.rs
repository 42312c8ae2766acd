// src/export/logic.rs

use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{LedgerExport, RecordExport};
use crate::ui::messages::warning;
use crate::utils::path::ensure_parent_dir;
use chrono::Local;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the ledger.
    ///
    /// - `Json`: balance, records and weeks in one document
    /// - `Csv`: lunch records, or weeks when `weeks` is set
    ///
    /// `file` must be an absolute path.
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        weeks: bool,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;
        ensure_parent_dir(path)?;

        let ledger = Self::build(pool, cfg)?;

        match format {
            ExportFormat::Json => export_json(&ledger, path)?,
            ExportFormat::Csv if weeks => {
                if ledger.weeks.is_empty() {
                    warning("No weeks to export.");
                }
                export_csv(&ledger.weeks, path)?
            }
            ExportFormat::Csv => {
                if ledger.records.is_empty() {
                    warning("No lunch records to export.");
                }
                export_csv(&ledger.records, path)?
            }
        }

        crate::db::log::ttlog_quiet(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("Exported ledger as {}", format.as_str()),
        );

        Ok(())
    }

    /// Snapshot of the ledger in its export shape.
    pub fn build(pool: &mut DbPool, cfg: &Config) -> AppResult<LedgerExport> {
        let overview = Core::overview(pool, cfg)?;

        Ok(LedgerExport {
            generated_at: Local::now().to_rfc3339(),
            balance: overview.balance,
            records: overview.records.iter().map(RecordExport::from).collect(),
            weeks: overview.weeks,
        })
    }
}
