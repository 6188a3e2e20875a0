//! dirstats — report the largest folders and files under a directory.
//!
//! Thin binary entry point. The scanning and ranking logic lives in the
//! `dirstats-core` crate; this file parses flags, sets up logging, shows
//! progress and prints the report.

mod render;

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{CommandFactory, Parser};
use dirstats_core::analysis::Report;
use dirstats_core::{Node, TreeBuilder};

#[derive(Parser, Debug)]
#[command(name = "dirstats")]
#[command(about = "Show the largest folders and files under a directory")]
#[command(version)]
struct Args {
    /// Directory to analyse
    #[arg(short = 'd', long = "directory", value_name = "DIRECTORY")]
    directory: Option<PathBuf>,

    /// Number of entries to show in each ranking
    #[arg(short = 'c', long = "count", value_name = "NUM", default_value_t = 10)]
    count: usize,

    /// Do not print progress while scanning
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Print the report as JSON
    #[arg(long = "json")]
    json: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // No directory is not an error: show what the tool expects and leave.
    let Some(directory) = args.directory.as_deref() else {
        Args::command().print_help()?;
        println!();
        return Ok(());
    };

    init_logging(&args);

    let root_path = strip_trailing_separator(directory);
    let root = scan(&root_path, args.quiet)
        .with_context(|| format!("failed to scan {}", root_path.display()))?;

    let report = Report::from_tree(&root, args.count);
    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        render::write_text(&mut out, &report)?;
    }
    out.flush()?;

    Ok(())
}

/// Initialise structured logging on stderr so stdout only carries the report.
fn init_logging(args: &Args) {
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else if args.quiet {
        tracing::Level::WARN
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// `foo/bar/` and `foo/bar` name the same root; `/` stays `/`.
fn strip_trailing_separator(path: &Path) -> PathBuf {
    path.components().collect()
}

/// Build the tree, printing progress to stderr unless `quiet`.
fn scan(root_path: &Path, quiet: bool) -> Result<Node, dirstats_core::ScanError> {
    if quiet {
        return TreeBuilder::new().build(root_path);
    }

    let interactive = io::stderr().is_terminal();
    TreeBuilder::new()
        .on_progress(|event| render::write_progress(&mut io::stderr(), event, interactive))
        .build(root_path)
}
