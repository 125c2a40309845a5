//! CLI module - Command-line interface definition and run driver

use anyhow::Result;
use chrono::Local;
use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::core::model::{ExclusionSet, PackError, RunConfig};
use crate::core::paths::root_title;
use crate::core::render::render_document;
use crate::core::tokenizer::TokenModel;
use crate::flows::output::{output_path, write_document};
use crate::flows::pack::{compute_stats, run_pipeline};

const USAGE_EXAMPLE: &str = "Example: filepack ./my-project 'node_modules,build,target'";

/// filepack - pack a source tree into one comment-stripped Markdown document.
#[derive(Parser, Debug)]
#[command(name = "filepack")]
#[command(
    author,
    version,
    about,
    long_about = r#"Recursively scan ENTRY_FOLDER for .java, .yml, .yaml and .properties files,
strip their comments, collapse runs of spaces, and merge everything into a
single Markdown document named <folder>-<MMDD>-<HHmm>.md inside ENTRY_FOLDER.

Files that cannot be read are kept in the document as error blocks; the run
still succeeds.

Examples:
    filepack ./my-project-source
    filepack ./my-project-source 'node_modules,build,target'
    filepack ./my-project-source 'bin,out,dist,.git' --sort --stats
"#
)]
pub struct Cli {
    /// Folder to scan.
    #[arg(
        value_name = "ENTRY_FOLDER",
        // accept "" so it is reported like a missing folder
        value_parser = OsStringValueParser::new().map(PathBuf::from),
        long_help = "Folder to scan. Must exist and be a directory.\n\n\
The output document is written here unless --output-dir is given."
    )]
    pub entry_folder: Option<PathBuf>,

    /// Comma-separated folder names to exclude.
    #[arg(
        value_name = "EXCLUDE_FOLDERS",
        long_help = "Comma-separated list of folder names to exclude, e.g. 'node_modules,build'.\n\n\
A directory is skipped (with everything beneath it) when its name equals a token\n\
or when its full path contains a token anywhere."
    )]
    pub exclude_folders: Option<String>,

    /// Further positionals are accepted and ignored
    #[arg(hide = true, value_name = "IGNORED")]
    pub extra_args: Vec<OsString>,

    /// Write the document to this directory instead of ENTRY_FOLDER.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Sort files by path instead of directory listing order.
    #[arg(
        long,
        long_help = "Sort discovered files lexicographically by path.\n\n\
Without this flag files appear in the order the filesystem lists them, which\n\
can differ between platforms and runs."
    )]
    pub sort: bool,

    /// Print document statistics to stderr.
    #[arg(long)]
    pub stats: bool,

    /// Tokenizer used by --stats (cl100k/o200k/heuristic).
    #[arg(long, default_value = "cl100k", value_name = "MODEL")]
    pub token_model: String,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let started_at = Local::now().naive_local();

    if !cli.extra_args.is_empty() {
        debug!("Ignoring extra arguments: {:?}", cli.extra_args);
    }

    // an empty argument counts as no argument
    let root = cli
        .entry_folder
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(PackError::MissingEntryFolder)?;
    if !root.is_dir() {
        return Err(PackError::NotADirectory(root).into());
    }

    let exclusions = cli
        .exclude_folders
        .as_deref()
        .map(ExclusionSet::parse)
        .unwrap_or_default();
    if !exclusions.is_empty() {
        println!("Excluding folders: {}", exclusions.tokens().join(", "));
    }

    let config = RunConfig::new(root)
        .with_exclusions(exclusions)
        .with_sorted_paths(cli.sort);
    let result = run_pipeline(&config)?;

    for (path, message) in result.failures() {
        eprintln!(
            "{} Could not process file {}: {}",
            "Warning:".yellow().bold(),
            path.display(),
            message
        );
    }

    let title = root_title(&config.root);
    let document = render_document(&title, &result);

    let out_dir = cli.output_dir.as_deref().unwrap_or(config.root.as_path());
    let out_path = output_path(out_dir, &title, &started_at);
    write_document(&out_path, &document)?;
    info!("Wrote {} bytes", document.len());

    println!(
        "Successfully merged and processed content into: {}",
        out_path.display()
    );
    println!("Processed {} files.", result.len());

    if cli.stats {
        let model: TokenModel = cli.token_model.parse().unwrap_or_default();
        let stats = compute_stats(&document, &result, model);
        eprintln!("Pack Statistics:");
        eprintln!("   Files: {}", stats.total_files);
        if stats.failed_files > 0 {
            eprintln!("   Unreadable: {}", stats.failed_files);
        }
        eprintln!("   Lines: {}", stats.total_lines);
        eprintln!("   Characters: {}", stats.total_chars);
        eprintln!(
            "   Tokens: {} (model: {})",
            stats.estimated_tokens, stats.token_model
        );
    }

    Ok(())
}

/// Print a fatal error, plus usage when the entry folder was missing
pub fn report_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if matches!(
        err.downcast_ref::<PackError>(),
        Some(PackError::MissingEntryFolder)
    ) {
        eprintln!("{}", Cli::command().render_usage());
        eprintln!("{}", USAGE_EXAMPLE);
    }
}
