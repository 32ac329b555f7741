//! Title pattern compilation for titlepat.
//!
//! This module handles:
//! - Turning `title_format` entries into typed rules
//! - Folding those rules over a seed title to build a match pattern
//! - Compiling patterns into regexes for matching downloaded titles

pub mod compiler;
pub mod matcher;
pub mod rule;

pub use compiler::{
	CompiledPattern, apply_rules, compile, default_format, escape, make_punctuation_optional,
	remove_quotes,
};
pub use matcher::TitleMatcher;
pub use rule::{TitleFormat, TitleRule};
