use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser, ValueEnum};

use super::styles::{cli_styles, long_version};

/// How the final filter selection is printed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

/// Command-line arguments accepted by the `foodhub` binary.
#[derive(Parser, Debug)]
#[command(
	name = "foodhub",
	version,
	long_version = long_version(),
	about = "Browse the FoodHub menu and filter it from a draggable bottom sheet",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "FOODHUB_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(long, value_name = "THEME", help = "Select a theme by name (default: slate)")]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List bundled themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the applied filters on exit"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		short = 's',
		long = "state-file",
		value_name = "PATH",
		help = "Where applied filters are saved (default: filters.json in the data directory)"
	)]
	pub(crate) state_file: Option<PathBuf>,
	#[arg(
		long = "no-persist",
		help = "Keep filters in memory only (default: disabled)"
	)]
	pub(crate) no_persist: bool,
	#[arg(
		long = "animation-ms",
		value_name = "MS",
		help = "Duration of sheet transitions in milliseconds (default: 300)"
	)]
	pub(crate) animation_ms: Option<u64>,
	#[arg(
		long = "collapsed-ratio",
		value_name = "RATIO",
		help = "Half-open sheet height as a fraction of the terminal (default: 0.5)"
	)]
	pub(crate) collapsed_ratio: Option<f32>,
	#[arg(
		long = "expanded-ratio",
		value_name = "RATIO",
		help = "Full-open sheet height as a fraction of the terminal (default: 0.85)"
	)]
	pub(crate) expanded_ratio: Option<f32>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Minimum level captured in the log pane (default: info)"
	)]
	pub(crate) log_level: Option<String>,
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn command_definition_is_consistent() {
		CliArgs::command().debug_assert();
	}

	#[test]
	fn defaults_to_plain_output() {
		let parsed = CliArgs::parse_from(["foodhub"]);
		assert_eq!(parsed.output, OutputFormat::Plain);
		assert!(parsed.config.is_empty());
		assert!(!parsed.no_persist);
	}

	#[test]
	fn accepts_sheet_overrides() {
		let parsed = CliArgs::parse_from([
			"foodhub",
			"--collapsed-ratio",
			"0.4",
			"--animation-ms",
			"150",
			"-o",
			"json",
			"-c",
			"a.toml",
			"-c",
			"b.toml",
		]);
		assert_eq!(parsed.collapsed_ratio, Some(0.4));
		assert_eq!(parsed.animation_ms, Some(150));
		assert_eq!(parsed.output, OutputFormat::Json);
		assert_eq!(parsed.config.len(), 2);
	}
}
