use std::path::PathBuf;

/// Library-level structured errors for titlepat.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum TitlepatError {
	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid config: {reason}")]
	InvalidConfig { reason: String },

	#[error("Invalid title_format rule `{rule}`: {reason}")]
	InvalidRule { rule: String, reason: String },

	#[error("Invalid regex pattern: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Offset field `{field}` is not an integer: {value}")]
	TypeConversion { field: String, value: String },

	#[error("Offset out of range: {field}")]
	OffsetOutOfRange { field: String },

	#[error("Invalid timestamp: {value}")]
	InvalidTimestamp {
		value: String,
		#[source]
		source: chrono::ParseError,
	},

	#[error("Series not found in config: {title}")]
	SeriesNotFound { title: String },
}

/// Result type alias using TitlepatError.
pub type Result<T> = std::result::Result<T, TitlepatError>;
