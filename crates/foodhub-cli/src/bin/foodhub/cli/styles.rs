use std::path::PathBuf;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use foodhub_core::app_dirs;
use foodhub_core::store::DEFAULT_FILE_NAME;

fn describe(dir: Result<PathBuf>, file: Option<&str>) -> String {
	match dir {
		Ok(dir) => match file {
			Some(file) => dir.join(file).display().to_string(),
			None => dir.display().to_string(),
		},
		Err(err) => format!("unavailable ({err})"),
	}
}

/// Version banner listing where configuration and saved filters live.
pub(super) fn long_version() -> &'static str {
	let banner = [
		format!("foodhub {}", env!("CARGO_PKG_VERSION")),
		String::new(),
		format!(
			"config file:   {}",
			describe(app_dirs::get_config_dir(), Some("config.toml"))
		),
		format!(
			"saved filters: {}",
			describe(app_dirs::get_data_dir(), Some(DEFAULT_FILE_NAME))
		),
		format!("cache:         {}", describe(app_dirs::get_cache_dir(), None)),
	]
	.join("\n");

	Box::leak(banner.into_boxed_str())
}

pub(super) fn cli_styles() -> Styles {
	let heading = AnsiColor::Yellow.on_default().effects(Effects::BOLD);
	Styles::styled()
		.header(heading)
		.usage(heading)
		.literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.placeholder(AnsiColor::Cyan.on_default())
		.valid(AnsiColor::Green.on_default())
		.invalid(AnsiColor::Red.on_default().effects(Effects::BOLD))
}
