//! Backends module - filesystem access
//!
//! Provides:
//! - scan: directory walking and extension filtering

pub mod scan;
