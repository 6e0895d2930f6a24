//! Per-file header application
//!
//! Read, check for the marker, prepend the header, write back in place.
//! There is no temp-file/atomic-rename discipline; an interruption between
//! read and write can leave a partially-written file.

use std::fs;
use thiserror::Error;

use crate::core::model::{Outcome, TrackedFile};
use crate::header::notice::{has_notice, header_for_extension};

/// Per-file failure, caught at the call site and recorded as Errored
#[derive(Debug, Error)]
pub enum ApplyError {
    #[error("unsupported file type: .{0}")]
    UnsupportedExtension(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Apply the header to a single file.
///
/// Returns Skipped when the marker is already present, Added after a
/// successful write (or would-be write in dry-run mode). Non-UTF-8 content
/// surfaces as an I/O error rather than being re-encoded.
pub fn apply_header(file: &TrackedFile, dry_run: bool) -> Result<Outcome, ApplyError> {
    let content = fs::read_to_string(&file.path)?;

    if has_notice(&content) {
        return Ok(Outcome::Skipped);
    }

    let header = header_for_extension(&file.ext)
        .ok_or_else(|| ApplyError::UnsupportedExtension(file.ext.clone()))?;

    if !dry_run {
        let mut updated = String::with_capacity(header.len() + content.len());
        updated.push_str(header);
        updated.push_str(&content);
        fs::write(&file.path, updated)?;
    }

    Ok(Outcome::Added)
}
