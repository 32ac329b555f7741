//! Titlepat - compile expected episode titles into tolerant match patterns.
//!
//! This library provides the core functionality for titlepat, including:
//! - Ordered, rule-driven compilation of a seed title into a regex pattern
//! - Airdate offsets for series that publish later than they air
//! - Series configuration parsing
//!
//! # Example
//!
//! ```
//! use titlepat_cli::logging::LogFacade;
//! use titlepat_cli::rules::{TitleFormat, TitleMatcher, compile};
//!
//! let format = TitleFormat::parse("apply_default_format = true").unwrap();
//! let compiled = compile("Bob's Burgers", &format, &LogFacade);
//! assert_eq!(compiled.pattern, r"BOB([']?)([']?)S\ BURGERS");
//!
//! let matcher = TitleMatcher::new(&compiled.pattern).unwrap();
//! assert!(matcher.is_match("Bobs Burgers"));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod offset;
pub mod rules;

pub use error::{Result, TitlepatError};
