// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{ask_confirmation, info};
use std::io;
use std::path::Path;

/// Verify that a file can be created or overwritten.
///
/// - file missing → Ok
/// - file exists and `force` → Ok
/// - file exists and no `force` → ask the user.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    if ask_confirmation(&format!("The file '{}' already exists.", path.display())) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::from(io::Error::other(
            "Export cancelled: existing file not overwritten",
        )))
    }
}
