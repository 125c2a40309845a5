//! Core module - data model and the per-file building blocks
//!
//! This module provides:
//! - Run model (RunConfig, RunResult, PackError)
//! - Path helpers
//! - Source reading with surrogate cleanup
//! - Comment stripping and space collapsing
//! - Document rendering
//! - Token counting for --stats
//! - Logging setup

pub mod file_reader;
pub mod logging;
pub mod model;
pub mod paths;
pub mod render;
pub mod sanitize;
pub mod tokenizer;
