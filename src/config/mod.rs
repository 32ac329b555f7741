//! Configuration loading and parsing for titlepat.
//!
//! This module handles:
//! - TOML series config parsing
//! - Validation of series entries
//! - Per-series pattern compilation and airdate adjustment

pub mod parser;
pub mod types;

pub use parser::{parse_config_file, parse_config_str};
pub use types::{Config, Series};
