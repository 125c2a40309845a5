//! filepack - pack a source tree into a single Markdown document for review
//!
//! filepack:
//! - walks a directory tree depth-first, pruning excluded folders
//! - keeps .java, .yml, .yaml and .properties files
//! - strips comments and collapses space runs
//! - writes one timestamped document next to the scanned tree

use clap::Parser;
use std::process::ExitCode;

mod backends;
mod cli;
mod core;
mod flows;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    if let Err(e) = core::logging::init_logging(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cli::report_error(&err);
            ExitCode::FAILURE
        }
    }
}
