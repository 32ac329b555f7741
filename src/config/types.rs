use crate::error::{Result, TitlepatError};
use crate::logging::LogSink;
use crate::offset::{OffsetSpec, adjust};
use crate::rules::{CompiledPattern, TitleFormat, TitleMatcher, compile};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::collections::HashSet;

/// Top-level configuration from a series config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
	/// Series to match downloads against.
	#[serde(default)]
	pub series: Vec<Series>,
}

/// A tracked series.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Series {
	/// Expected title, used as the seed for the match pattern.
	pub title: String,

	/// Ordered formatting rules applied to `title`.
	#[serde(default)]
	pub title_format: TitleFormat,

	/// Shift applied to the indexer's airdate before it is compared to now.
	#[serde(default)]
	pub offset: OffsetSpec,
}

impl Series {
	/// Compile this series' title into a match pattern.
	pub fn pattern(&self, log: &dyn LogSink) -> CompiledPattern {
		compile(&self.title, &self.title_format, log)
	}

	/// Build a matcher from the compiled pattern.
	pub fn matcher(&self, log: &dyn LogSink) -> Result<TitleMatcher> {
		TitleMatcher::new(&self.pattern(log).pattern)
	}

	/// Apply this series' offset to an airdate.
	pub fn adjust_airdate(&self, airdate: NaiveDateTime) -> Result<NaiveDateTime> {
		adjust(airdate, &self.offset)
	}
}

impl Config {
	/// Validate that every series has a usable, unique title.
	pub fn validate(&self) -> Result<()> {
		let mut seen = HashSet::new();
		for series in &self.series {
			if series.title.trim().is_empty() {
				return Err(TitlepatError::InvalidConfig {
					reason: "series title must not be empty".to_string(),
				});
			}
			if !seen.insert(series.title.as_str()) {
				return Err(TitlepatError::InvalidConfig {
					reason: format!("duplicate series title: {}", series.title),
				});
			}
		}
		Ok(())
	}

	/// Look up a series by its exact title.
	pub fn find_series(&self, title: &str) -> Result<&Series> {
		self.series
			.iter()
			.find(|series| series.title == title)
			.ok_or_else(|| TitlepatError::SeriesNotFound {
				title: title.to_string(),
			})
	}
}
