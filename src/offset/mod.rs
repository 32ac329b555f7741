//! Airdate offsets for titlepat.
//!
//! This module handles:
//! - Reading a series' `offset` table
//! - Shifting an airdate by the configured weeks, days, hours and minutes

use crate::error::{Result, TitlepatError};
use chrono::{NaiveDateTime, TimeDelta};
use serde::Deserialize;

/// Timestamp formats accepted by [`parse_timestamp`], most specific first.
const TIMESTAMP_FORMATS: &[&str] = &[
	"%Y-%m-%dT%H:%M:%S",
	"%Y-%m-%dT%H:%M",
	"%Y-%m-%d %H:%M:%S",
	"%Y-%m-%d %H:%M",
];

/// A single offset amount: an integer, or text holding one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OffsetValue {
	Integer(i64),
	Text(String),
}

impl OffsetValue {
	/// Coerce to an integer, naming `field` in the error.
	pub fn to_i64(&self, field: &str) -> Result<i64> {
		match self {
			OffsetValue::Integer(n) => Ok(*n),
			OffsetValue::Text(text) => {
				text.trim()
					.parse()
					.map_err(|_| TitlepatError::TypeConversion {
						field: field.to_string(),
						value: text.clone(),
					})
			}
		}
	}
}

impl From<i64> for OffsetValue {
	fn from(n: i64) -> Self {
		OffsetValue::Integer(n)
	}
}

impl From<&str> for OffsetValue {
	fn from(text: &str) -> Self {
		OffsetValue::Text(text.to_string())
	}
}

/// How far to move an airdate. Missing fields count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OffsetSpec {
	#[serde(default)]
	pub weeks: Option<OffsetValue>,

	#[serde(default)]
	pub days: Option<OffsetValue>,

	#[serde(default)]
	pub hours: Option<OffsetValue>,

	#[serde(default)]
	pub minutes: Option<OffsetValue>,
}

type DeltaFn = fn(i64) -> Option<TimeDelta>;

impl OffsetSpec {
	/// Sum all fields into one duration.
	pub fn duration(&self) -> Result<TimeDelta> {
		let fields: [(&str, &Option<OffsetValue>, DeltaFn); 4] = [
			("weeks", &self.weeks, TimeDelta::try_weeks),
			("days", &self.days, TimeDelta::try_days),
			("hours", &self.hours, TimeDelta::try_hours),
			("minutes", &self.minutes, TimeDelta::try_minutes),
		];

		let mut total = TimeDelta::zero();
		for (field, value, to_delta) in fields {
			let amount = match value {
				Some(value) => value.to_i64(field)?,
				None => 0,
			};
			total = to_delta(amount)
				.and_then(|delta| total.checked_add(&delta))
				.ok_or_else(|| TitlepatError::OffsetOutOfRange {
					field: field.to_string(),
				})?;
		}
		Ok(total)
	}
}

/// Shift `timestamp` by `offset`.
///
/// Bad offsets are returned as errors rather than ignored: a silently wrong
/// airdate would make the caller download at the wrong time.
pub fn adjust(timestamp: NaiveDateTime, offset: &OffsetSpec) -> Result<NaiveDateTime> {
	let duration = offset.duration()?;
	timestamp
		.checked_add_signed(duration)
		.ok_or_else(|| TitlepatError::OffsetOutOfRange {
			field: "airdate".to_string(),
		})
}

/// Parse a timezone-naive timestamp such as `2024-01-01T00:00`.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
	let value = value.trim();
	NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMATS[0]).or_else(|source| {
		TIMESTAMP_FORMATS[1..]
			.iter()
			.find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
			.ok_or_else(|| TitlepatError::InvalidTimestamp {
				value: value.to_string(),
				source,
			})
	})
}
