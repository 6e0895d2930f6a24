//! git integration
//!
//! Runs `git ls-files` against a root directory and turns its output into
//! candidate TrackedFiles: filtered by extension, resolved to absolute paths,
//! with stale index entries dropped.

use std::io;
use std::path::Path;
use std::process::Command;
use thiserror::Error;

use crate::core::model::TrackedFile;
use crate::core::util::command_exists;

/// Enumeration failure; either variant ends the run with an empty candidate set
#[derive(Debug, Error)]
pub enum VcsError {
    #[error("this doesn't appear to be a git repository")]
    NotARepository,

    #[error("git is not installed or not in PATH")]
    ToolUnavailable,

    #[error("failed to run git: {0}")]
    Io(io::Error),
}

/// Check if git is available
pub fn is_git_available() -> bool {
    command_exists("git")
}

/// List git-tracked files under `root` whose extension is in `extensions`.
///
/// Paths are resolved against `root`; entries that no longer exist on disk
/// (stale index entries) are dropped. Order follows git's output order.
pub fn list_tracked_files(
    root: &Path,
    extensions: &[&str],
) -> Result<Vec<TrackedFile>, VcsError> {
    if !is_git_available() {
        return Err(VcsError::ToolUnavailable);
    }

    let output = Command::new("git")
        .current_dir(root)
        .arg("ls-files")
        .output()
        .map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                VcsError::ToolUnavailable
            } else {
                VcsError::Io(e)
            }
        })?;

    if !output.status.success() {
        return Err(VcsError::NotARepository);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut files = Vec::new();

    for line in stdout.lines().filter(|l| !l.is_empty()) {
        let file = TrackedFile::new(root.join(line));

        if !extensions.contains(&file.ext.as_str()) {
            continue;
        }
        // Stale index entries
        if !file.path.exists() {
            continue;
        }

        files.push(file);
    }

    Ok(files)
}
