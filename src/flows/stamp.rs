//! Stamp flow - the interactive run driver
//!
//! Orchestrates: enumerate tracked files, print the candidates, confirm,
//! apply the header once per file, print the summary. Each file reaches
//! exactly one terminal state; per-file failures never abort the run, and
//! the process exits 0 even when the enumeration itself fails.

use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

use crate::core::model::{FileReport, Outcome, RunReport, TrackedFile};
use crate::core::paths::{make_relative, normalize_path};
use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::header::apply::apply_header;
use crate::header::notice::SUPPORTED_EXTENSIONS;
use crate::vcs::git::list_tracked_files;

/// Options controlling the stamp flow
#[derive(Debug, Clone, Copy, Default)]
pub struct StampOptions {
    /// Skip the confirmation prompt
    pub assume_yes: bool,

    /// Classify every candidate but write nothing
    pub dry_run: bool,
}

/// Run the stamp flow
pub fn run_stamp(root: &Path, options: &StampOptions, config: RenderConfig) -> Result<()> {
    // With JSON output the human-facing lines move to stderr so stdout stays
    // machine-parseable.
    let machine = config.format == OutputFormat::Json;
    let say = |line: String| {
        if machine {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    };

    say(format!(
        "🔍 Scanning git-tracked files in: {}",
        root.display()
    ));

    let files = match list_tracked_files(root, SUPPORTED_EXTENSIONS) {
        Ok(files) => files,
        Err(err) => {
            say(format!("{} {}", "❌ Error:".red().bold(), err));
            return Ok(());
        }
    };

    if files.is_empty() {
        say("❌ No relevant git-tracked files found!".to_string());
        return Ok(());
    }

    say(format!(
        "📁 Found {} git-tracked files to process:",
        files.len()
    ));
    for file in &files {
        say(format!("   - {}", display_path(file, root)));
    }

    if options.dry_run {
        say(format!("\n{}", "Dry run: no files will be modified.".yellow()));
    } else if !options.assume_yes && !confirm(files.len(), machine)? {
        say("❌ Operation cancelled.".to_string());
        return Ok(());
    }

    say("\n🚀 Processing files...".to_string());

    let mut report = RunReport::new();
    for file in &files {
        let rel = display_path(file, root);

        let (outcome, detail) = match apply_header(file, options.dry_run) {
            Ok(outcome) => (outcome, None),
            Err(err) => (Outcome::Errored, Some(err.to_string())),
        };

        match outcome {
            Outcome::Added => {
                let verb = if options.dry_run {
                    "Would add notice to"
                } else {
                    "Added notice to"
                };
                say(format!("✅ {} {}", verb, rel.green()));
            }
            Outcome::Skipped => {
                say(format!("⏭️  Skipped {} (notice already present)", rel));
            }
            Outcome::Errored => {
                say(format!(
                    "❌ Error processing {}: {}",
                    rel.red(),
                    detail.as_deref().unwrap_or("unknown error")
                ));
            }
        }

        report.push(FileReport {
            path: rel,
            outcome,
            detail,
        });
    }

    say(String::new());
    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(&report));

    Ok(())
}

/// Candidate path for display: relative to root, '/'-separated
fn display_path(file: &TrackedFile, root: &Path) -> String {
    make_relative(&file.path, root).unwrap_or_else(|| normalize_path(&file.path))
}

/// Ask for confirmation. Anything other than y/yes (case-insensitive)
/// declines, including a closed stdin.
fn confirm(count: usize, machine: bool) -> io::Result<bool> {
    let prompt = format!(
        "\nDo you want to add copyright notices to all {} files? (y/N): ",
        count
    );
    if machine {
        eprint!("{}", prompt);
        io::stderr().flush()?;
    } else {
        print!("{}", prompt);
        io::stdout().flush()?;
    }

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
