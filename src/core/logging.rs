//! Diagnostic logging setup
//!
//! Diagnostics go through `tracing` to stderr. The report lines a user or
//! script depends on (output path, file count, per-file warnings) are
//! printed directly by the CLI and are not affected by the level chosen here.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

const VERBOSE_FILTER: &str = "filepack=debug";
const QUIET_FILTER: &str = "warn";

/// Install the global subscriber. `verbose` switches on per-file debug output.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = EnvFilter::new(if verbose { VERBOSE_FILTER } else { QUIET_FILTER });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
