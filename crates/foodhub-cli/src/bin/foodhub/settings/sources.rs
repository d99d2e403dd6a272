use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use foodhub_core::app_dirs;

use crate::cli::CliArgs;

pub(super) const ENV_PREFIX: &str = "foodhub";

/// Config files in merge order, lowest precedence first, each paired with
/// whether it has to exist.
pub(super) fn config_files(cli: &CliArgs) -> Vec<(PathBuf, bool)> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};
	defaults
		.into_iter()
		.map(|path| (path, false))
		.chain(cli.config.iter().map(|path| (path.clone(), true)))
		.collect()
}

/// Layer the config files under `FOODHUB__SECTION__KEY` variables.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	config_files(cli)
		.into_iter()
		.fold(Config::builder(), |builder, (path, required)| {
			builder.add_source(File::from(path).required(required))
		})
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.separator("__")
				.try_parsing(true),
		)
		.build()
		.context("failed to read configuration")
}

/// `config.toml` in the config directory, then `.foodhub.toml` and
/// `foodhub.toml` in the working directory.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let user = app_dirs::get_config_dir()
		.ok()
		.map(|dir| dir.join("config.toml"));
	let local = env::current_dir()
		.ok()
		.into_iter()
		.flat_map(|dir| [dir.join(".foodhub.toml"), dir.join("foodhub.toml")]);
	user.into_iter().chain(local).collect()
}
