//! Flows module - the end-to-end pack run
//!
//! - pack: discovery, reading and sanitizing into a RunResult
//! - output: naming and writing the packed document

pub mod output;
pub mod pack;
