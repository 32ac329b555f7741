use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use titlepat_cli::config::{Config, Series, parse_config_file};
use titlepat_cli::logging::{LogFacade, init_logger};
use titlepat_cli::offset::parse_timestamp;

#[derive(Parser)]
#[command(name = "titlepat")]
#[command(
	author,
	version,
	about = "Compile episode titles into tolerant match patterns and adjust airdates"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Log level (trace, debug, info, warn, error); falls back to TITLEPAT_LOG
	#[arg(long, global = true, value_name = "LEVEL")]
	log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the compiled match pattern for a series title
	Pattern {
		/// Series title (the seed for the pattern)
		title: String,

		/// Series config file; without it the title is used with no rules
		#[arg(long, short, value_name = "FILE")]
		config: Option<PathBuf>,
	},
	/// Check whether a downloaded title matches a series
	Check {
		/// Series title as written in the config
		title: String,

		/// Candidate title to test
		candidate: String,

		/// Series config file
		#[arg(long, short, value_name = "FILE")]
		config: PathBuf,
	},
	/// Print a series airdate shifted by its configured offset
	Airdate {
		/// Series title as written in the config
		title: String,

		/// Airdate, e.g. 2024-01-01T20:00
		airdate: String,

		/// Series config file
		#[arg(long, short, value_name = "FILE")]
		config: PathBuf,
	},
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Check a config file for errors and list its series
	Validate {
		/// Series config file
		#[arg(long, short, value_name = "FILE")]
		config: PathBuf,
	},
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_logger(cli.log_level.as_deref());

	match cli.command {
		Commands::Pattern { title, config } => handle_pattern(&title, config.as_deref()),
		Commands::Check {
			title,
			candidate,
			config,
		} => handle_check(&title, &candidate, &config),
		Commands::Airdate {
			title,
			airdate,
			config,
		} => handle_airdate(&title, &airdate, &config),
		Commands::Config { action } => match action {
			ConfigAction::Validate { config } => handle_config_validate(&config),
		},
	}
}

fn load_config(path: &Path) -> Result<Config> {
	parse_config_file(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn load_series(title: &str, path: &Path) -> Result<Series> {
	let config = load_config(path)?;
	let series = config
		.find_series(title)
		.with_context(|| format!("No series named \"{}\" in {}", title, path.display()))?;
	Ok(series.clone())
}

fn handle_pattern(title: &str, config_path: Option<&Path>) -> Result<ExitCode> {
	let series = match config_path {
		Some(path) => load_series(title, path)?,
		None => Series {
			title: title.to_string(),
			..Default::default()
		},
	};

	// A partial pattern is still printed; the diagnostic has been logged.
	let compiled = series.pattern(&LogFacade);
	println!("{}", compiled.pattern);
	Ok(ExitCode::SUCCESS)
}

fn handle_check(title: &str, candidate: &str, config_path: &Path) -> Result<ExitCode> {
	let series = load_series(title, config_path)?;
	let matcher = series
		.matcher(&LogFacade)
		.with_context(|| format!("Compiled pattern for \"{}\" is not a valid regex", title))?;

	if matcher.is_match(candidate) {
		println!("match");
		Ok(ExitCode::SUCCESS)
	} else {
		println!("no match");
		Ok(ExitCode::FAILURE)
	}
}

fn handle_airdate(title: &str, airdate: &str, config_path: &Path) -> Result<ExitCode> {
	let series = load_series(title, config_path)?;
	let airdate = parse_timestamp(airdate)?;
	let adjusted = series
		.adjust_airdate(airdate)
		.with_context(|| format!("Invalid offset for \"{}\"", title))?;

	println!("{}", adjusted.format("%Y-%m-%dT%H:%M:%S"));
	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate(config_path: &Path) -> Result<ExitCode> {
	match parse_config_file(config_path) {
		Ok(config) => {
			if config.series.is_empty() {
				println!("No series configured.");
				return Ok(ExitCode::SUCCESS);
			}

			let mut failures = 0;
			for series in &config.series {
				match series.title_format.rules() {
					Ok(rules) => println!("  {} ({} rules)", series.title, rules.len()),
					Err(e) => {
						failures += 1;
						println!("  {} (invalid: {})", series.title, e);
					}
				}
			}

			if failures == 0 {
				println!("All series in {} are valid", config_path.display());
				Ok(ExitCode::SUCCESS)
			} else {
				eprintln!("{} series have invalid title_format rules", failures);
				Ok(ExitCode::FAILURE)
			}
		}
		Err(e) => {
			eprintln!("Configuration error: {}", e);
			Ok(ExitCode::FAILURE)
		}
	}
}
