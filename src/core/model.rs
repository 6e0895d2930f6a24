//! Run data model
//!
//! Every candidate file ends in exactly one of three terminal states:
//! Added, Skipped, or Errored. The per-file reports and the summary counters
//! together form the RunReport the renderer consumes.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A git-tracked candidate file: absolute path plus lower-cased extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedFile {
    /// Absolute filesystem path.
    pub path: PathBuf,

    /// File extension, lower-cased; empty if the path has none.
    pub ext: String,
}

impl TrackedFile {
    pub fn new(path: PathBuf) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        Self { path, ext }
    }
}

/// Terminal state of a processed file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Added,
    Skipped,
    Errored,
}

/// Per-file result record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// Path relative to root, using '/' as separator
    pub path: String,

    /// Terminal state reached by this file
    pub outcome: Outcome,

    /// Error message for Errored outcomes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl FileReport {
    #[allow(dead_code)]
    pub fn added(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            outcome: Outcome::Added,
            detail: None,
        }
    }

    #[allow(dead_code)]
    pub fn skipped(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            outcome: Outcome::Skipped,
            detail: None,
        }
    }

    #[allow(dead_code)]
    pub fn errored(path: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            outcome: Outcome::Errored,
            detail: Some(detail.into()),
        }
    }
}

/// Outcome counters accumulated across the run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub added: usize,
    pub skipped: usize,
    pub errored: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Added => self.added += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Errored => self.errored += 1,
        }
    }

    /// Total number of processed files
    pub fn total(&self) -> usize {
        self.added + self.skipped + self.errored
    }
}

/// The full run report: per-file records plus the summary counters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    pub files: Vec<FileReport>,
    pub summary: RunSummary,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a per-file result, keeping the summary counters in sync
    pub fn push(&mut self, report: FileReport) {
        self.summary.record(report.outcome);
        self.files.push(report);
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_tracked_file_lowercases_extension() {
        let file = TrackedFile::new(PathBuf::from("/project/Style.CSS"));
        assert_eq!(file.ext, "css");
    }

    #[test]
    fn test_tracked_file_without_extension() {
        let file = TrackedFile::new(PathBuf::from("/project/Makefile"));
        assert_eq!(file.ext, "");
    }

    #[test]
    fn test_file_report_constructors() {
        let added = FileReport::added("src/app.tsx");
        assert_eq!(added.outcome, Outcome::Added);
        assert!(added.detail.is_none());

        let skipped = FileReport::skipped("index.html");
        assert_eq!(skipped.outcome, Outcome::Skipped);

        let errored = FileReport::errored("broken.css", "permission denied");
        assert_eq!(errored.outcome, Outcome::Errored);
        assert_eq!(errored.detail, Some("permission denied".to_string()));
    }

    #[test]
    fn test_summary_record_and_total() {
        let mut summary = RunSummary::default();
        summary.record(Outcome::Added);
        summary.record(Outcome::Added);
        summary.record(Outcome::Skipped);
        summary.record(Outcome::Errored);

        assert_eq!(summary.added, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.errored, 1);
        assert_eq!(summary.total(), 4);
    }

    #[test]
    fn test_report_push_keeps_summary_in_sync() {
        let mut report = RunReport::new();
        report.push(FileReport::added("a.css"));
        report.push(FileReport::skipped("b.html"));

        assert_eq!(report.len(), 2);
        assert_eq!(report.summary.added, 1);
        assert_eq!(report.summary.skipped, 1);
        assert_eq!(report.summary.errored, 0);
    }

    #[test]
    fn test_outcome_serialization() {
        let report = FileReport::added("a.css");
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"outcome\":\"added\""));
        // detail is skipped when None
        assert!(!json.contains("detail"));
    }

    #[test]
    fn test_errored_serialization_includes_detail() {
        let report = FileReport::errored("a.css", "boom");
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"outcome\":\"errored\""));
        assert!(json.contains("\"detail\":\"boom\""));
    }

    #[test]
    fn test_run_report_deserialization() {
        let json = r#"{"files":[{"path":"a.css","outcome":"added"}],"summary":{"added":1,"skipped":0,"errored":0}}"#;
        let report: RunReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.files.len(), 1);
        assert_eq!(report.summary.added, 1);
    }
}
