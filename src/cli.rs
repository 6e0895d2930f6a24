//! CLI module - Command-line interface definitions and the run dispatcher

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::render::{OutputFormat, RenderConfig};
use crate::flows::stamp::{run_stamp, StampOptions};

/// licstamp - prepend a copyright notice to git-tracked source files.
#[derive(Parser, Debug)]
#[command(name = "licstamp")]
#[command(
    author,
    version,
    about,
    long_about = r#"licstamp enumerates git-tracked files with supported extensions under ROOT,
shows the candidates, asks for confirmation, and prepends a comment-wrapped
copyright notice to each file that does not already carry it.

Supported extensions:
- tsx, ts, jsx, js, css: block comment (/* ... */)
- html, htm: markup comment (<!-- ... -->)

Files already containing the notice marker are skipped, so repeat runs are
idempotent. Per-file failures are reported and the run continues; the process
exits 0 either way.

Examples:
    licstamp
    licstamp --root path/to/checkout
    licstamp --yes
    licstamp --dry-run
    licstamp --yes --format json | jq .summary
"#
)]
pub struct Cli {
    /// Root directory of the checkout to process.
    #[arg(
        long,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory of the checkout to process (defaults to the current\n\
directory). The git query runs with this directory as its working directory,\n\
and candidate paths are printed relative to it."
    )]
    pub root: PathBuf,

    /// Output format for the final report (text/json).
    #[arg(
        long,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the output format for the run report.\n\n\
Supported values:\n\
- text (default): human-readable summary\n\
- json: the full report (per-file outcomes plus summary counters)\n\n\
With json, progress lines and the prompt move to stderr so stdout stays\n\
machine-parseable."
    )]
    pub format: String,

    /// Pretty-print JSON output with indentation.
    #[arg(
        long,
        long_help = "Pretty-print the JSON report with indentation for human readability.\n\n\
Has no effect on the text format."
    )]
    pub pretty: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long,
        long_help = "Skip the interactive confirmation prompt and process all candidates.\n\n\
Use this for scripted or CI invocations; without it, a closed stdin declines\n\
the prompt and nothing is modified."
    )]
    pub yes: bool,

    /// Report what would change without writing any file.
    #[arg(
        long,
        long_help = "Go through the full run without writing: every candidate is read and\n\
classified, the report shows what a real run would do, and no file changes.\n\
Implies --yes (there is nothing to guard)."
    )]
    pub dry_run: bool,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Parse output format
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let config = RenderConfig::with_pretty(format, cli.pretty);

    // Get absolute root path
    let root = cli.root.canonicalize().unwrap_or(cli.root);

    let options = StampOptions {
        assume_yes: cli.yes,
        dry_run: cli.dry_run,
    };

    run_stamp(&root, &options, config)
}
