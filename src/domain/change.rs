use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{AppError, AppResult};

pub const DIFF_EXTENSION: &str = ".diff";

/// Where the changes text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeSource {
    Literal,
    DiffFile,
}

#[derive(Debug, Clone)]
pub struct ResolvedChanges {
    pub source: ChangeSource,
    pub text: String,
}

/// Turns the raw `changes` argument into the text sent to the model.
///
/// Arguments ending in `.diff` are treated as paths and must name an existing
/// file; anything else is taken literally without touching the filesystem.
pub fn resolve_changes(raw: &str) -> AppResult<ResolvedChanges> {
    if !raw.ends_with(DIFF_EXTENSION) {
        return Ok(ResolvedChanges {
            source: ChangeSource::Literal,
            text: raw.to_string(),
        });
    }

    let path = Path::new(raw);
    if !path.is_file() {
        return Err(AppError::DiffNotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = text.len(), "read diff file");

    Ok(ResolvedChanges {
        source: ChangeSource::DiffFile,
        text,
    })
}
