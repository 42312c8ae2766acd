//! Unified application error type.
//! All modules (db, core, cli, web) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Validation errors (user input)
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Return time {ret} is earlier than departure time {departure}")]
    ReturnBeforeDeparture { departure: String, ret: String },

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("{entity} #{id} not found")]
    NotFound { entity: &'static str, id: i64 },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export / rendering errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for errors caused by bad user input rather than by the system.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate(_)
                | AppError::InvalidTime(_)
                | AppError::MissingField(_)
                | AppError::ReturnBeforeDeparture { .. }
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
