use std::path::PathBuf;

use foodhub_core::SheetTuning;
use log::LevelFilter;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
	pub(crate) theme: Option<String>,
	pub(crate) tuning: SheetTuning,
	/// `None` keeps filters in memory for this run only.
	pub(crate) state_file: Option<PathBuf>,
	pub(crate) log_level: LevelFilter,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		print!("{}", summary::format_summary(self));
	}
}
