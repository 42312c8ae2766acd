//! Form bodies. Fields are optional so that a missing one surfaces as a
//! `MissingField` validation error instead of an extractor rejection.

use crate::errors::{AppError, AppResult};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddRecordForm {
    pub data: Option<String>,
    pub hora_saida: Option<String>,
    pub hora_retorno: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddWeekForm {
    pub nome: Option<String>,
}

pub fn field(name: &'static str, value: Option<String>) -> AppResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::MissingField(name)),
    }
}
