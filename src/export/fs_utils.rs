use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info};
use std::path::Path;

/// Refuse to clobber an existing export unless `force` is set or the user
/// agrees at the prompt.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    let question = format!("The file '{}' already exists.", path.display());
    if !confirm(question, "Overwrite?") {
        return Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ));
    }

    info("Existing file will be overwritten.");
    Ok(())
}
