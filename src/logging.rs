//! Logging capability handed to the pattern compiler.
//!
//! The library never installs or reaches into a global logger on its own.
//! Callers pass a [`LogSink`]; [`LogFacade`] forwards to the `log` crate and is
//! what the binary uses once `env_logger` is initialized.

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Log target used by [`LogFacade`].
pub const LOG_TARGET: &str = "titlepat";

/// Environment variable consulted when no explicit level is given.
pub const LOG_ENV_VAR: &str = "TITLEPAT_LOG";

/// Sink for human-readable diagnostics.
pub trait LogSink {
	fn info(&self, msg: &str);
	fn debug(&self, msg: &str);
	fn warning(&self, msg: &str);
	fn error(&self, msg: &str);
}

/// [`LogSink`] that forwards every line to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

impl LogSink for LogFacade {
	fn info(&self, msg: &str) {
		log::info!(target: LOG_TARGET, "{msg}");
	}

	fn debug(&self, msg: &str) {
		log::debug!(target: LOG_TARGET, "{msg}");
	}

	fn warning(&self, msg: &str) {
		log::warn!(target: LOG_TARGET, "{msg}");
	}

	fn error(&self, msg: &str) {
		log::error!(target: LOG_TARGET, "{msg}");
	}
}

/// Map a level name to a filter, defaulting to `info` for anything unknown.
pub fn parse_level(level: &str) -> LevelFilter {
	match level.trim().to_lowercase().as_str() {
		"trace" => LevelFilter::Trace,
		"debug" => LevelFilter::Debug,
		"warn" | "warning" => LevelFilter::Warn,
		"error" => LevelFilter::Error,
		"off" => LevelFilter::Off,
		_ => LevelFilter::Info,
	}
}

/// Initialize `env_logger` for the binary.
///
/// Priority: CLI argument, then `TITLEPAT_LOG`, then `info`.
pub fn init_logger(cli_level: Option<&str>) {
	let level = cli_level
		.map(str::to_string)
		.or_else(|| std::env::var(LOG_ENV_VAR).ok())
		.unwrap_or_else(|| "info".to_string());

	let mut builder = Builder::from_default_env();
	// Stdout carries patterns and airdates for scripts.
	builder.target(Target::Stderr);
	builder.filter_level(parse_level(&level));
	if let Err(err) = builder.try_init() {
		log::debug!(target: LOG_TARGET, "Logger already initialized: {err}");
	}
}
