use crate::error::{Result, TitlepatError};
use regex::{Regex, RegexBuilder};

/// A compiled title pattern ready to test downloaded titles against.
///
/// Matching is an unanchored, case-insensitive search, which is how the
/// download engine's title filter treats these patterns.
#[derive(Debug, Clone)]
pub struct TitleMatcher {
	regex: Regex,
}

impl TitleMatcher {
	/// Compile a pattern string.
	pub fn new(pattern: &str) -> Result<Self> {
		let regex = RegexBuilder::new(pattern)
			.case_insensitive(true)
			.build()
			.map_err(|source| TitlepatError::InvalidRegex {
				pattern: pattern.to_string(),
				source,
			})?;
		Ok(TitleMatcher { regex })
	}

	/// Check whether a candidate title matches.
	pub fn is_match(&self, candidate: &str) -> bool {
		self.regex.is_match(candidate)
	}

	/// The pattern this matcher was built from.
	pub fn pattern(&self) -> &str {
		self.regex.as_str()
	}
}
