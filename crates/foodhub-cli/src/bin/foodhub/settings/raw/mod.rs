use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Error, Result};
use foodhub_core::{JsonFileStore, SheetTuning, SnapThresholds};
use log::LevelFilter;
use serde::Deserialize;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	ui: UiSection,
	sheet: SheetSection,
	storage: StorageSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SheetSection {
	collapsed_ratio: Option<f32>,
	expanded_ratio: Option<f32>,
	overdrag_rows: Option<f32>,
	animation_ms: Option<u64>,
	expand_bias: Option<f32>,
	close_fraction: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct StorageSection {
	persist: Option<bool>,
	path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(ratio) = cli.collapsed_ratio {
			self.sheet.collapsed_ratio = Some(ratio);
		}
		if let Some(ratio) = cli.expanded_ratio {
			self.sheet.expanded_ratio = Some(ratio);
		}
		if let Some(ms) = cli.animation_ms {
			self.sheet.animation_ms = Some(ms);
		}
		if let Some(path) = cli.state_file.clone() {
			self.storage.path = Some(path);
		}
		if cli.no_persist {
			self.storage.persist = Some(false);
		}
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
	}

	/// Fill defaults and validate into a [`ResolvedConfig`].
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = self.sources(cli);

		let log_level = match self.logging.level.as_deref() {
			Some(level) => LevelFilter::from_str(level.trim()).map_err(|_| {
				ConfigError::invalid(
					"logging.level",
					level,
					sources.source_for("logging.level"),
					"expected one of off, error, warn, info, debug, trace",
				)
			})?,
			None => LevelFilter::Info,
		};

		let defaults = SheetTuning::default();
		let tuning = SheetTuning {
			collapsed_ratio: self.sheet.collapsed_ratio.unwrap_or(defaults.collapsed_ratio),
			expanded_ratio: self.sheet.expanded_ratio.unwrap_or(defaults.expanded_ratio),
			overdrag: self.sheet.overdrag_rows.unwrap_or(defaults.overdrag),
			animation: self
				.sheet
				.animation_ms
				.map_or(defaults.animation, Duration::from_millis),
			thresholds: SnapThresholds {
				expand_bias: self
					.sheet
					.expand_bias
					.unwrap_or(defaults.thresholds.expand_bias),
				close_fraction: self
					.sheet
					.close_fraction
					.unwrap_or(defaults.thresholds.close_fraction),
				..defaults.thresholds
			},
			..defaults
		};

		let state_file = if self.storage.persist.unwrap_or(true) {
			match self.storage.path {
				Some(path) => Some(path),
				None => Some(
					JsonFileStore::in_data_dir()
						.context("no data directory for saved filters; pass --state-file or --no-persist")?
						.path()
						.to_path_buf(),
				),
			}
		} else {
			None
		};

		let config = ResolvedConfig {
			theme: self.ui.theme,
			tuning,
			state_file,
			log_level,
		};
		config.validate(&sources).map_err(Error::new)?;
		Ok(config)
	}

	fn sources(&self, cli: &CliArgs) -> ConfigSources {
		let mut sources = ConfigSources::default();
		let entries = [
			(cli.theme.is_some(), self.ui.theme.is_some(), "--theme", "ui.theme"),
			(
				cli.collapsed_ratio.is_some(),
				self.sheet.collapsed_ratio.is_some(),
				"--collapsed-ratio",
				"sheet.collapsed_ratio",
			),
			(
				cli.expanded_ratio.is_some(),
				self.sheet.expanded_ratio.is_some(),
				"--expanded-ratio",
				"sheet.expanded_ratio",
			),
			(
				cli.animation_ms.is_some(),
				self.sheet.animation_ms.is_some(),
				"--animation-ms",
				"sheet.animation_ms",
			),
			(false, self.sheet.overdrag_rows.is_some(), "", "sheet.overdrag_rows"),
			(false, self.sheet.expand_bias.is_some(), "", "sheet.expand_bias"),
			(false, self.sheet.close_fraction.is_some(), "", "sheet.close_fraction"),
			(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"--log-level",
				"logging.level",
			),
		];
		for (cli_present, value_present, flag, key) in entries {
			if let Some(source) = detect_source(cli_present, value_present, flag, key) {
				sources.insert(key, source);
			}
		}
		sources
	}
}

/// Work out which layer supplied `key`. Flags win, then the matching
/// `FOODHUB__SECTION__KEY` variable; anything else came from a file.
fn detect_source(
	cli_present: bool,
	value_present: bool,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}
	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}
	let env_var = env_var_for(key);
	if env::var_os(&env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}
	Some(SettingSource::ConfigKey(key))
}

fn env_var_for(key: &str) -> String {
	format!(
		"{}__{}",
		super::sources::ENV_PREFIX.to_uppercase(),
		key.replace('.', "__").to_uppercase()
	)
}
