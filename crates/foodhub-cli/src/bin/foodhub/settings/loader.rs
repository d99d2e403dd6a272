use anyhow::{Context, Result};
use log::debug;

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Resolve the effective configuration. Later layers win: config files, then
/// environment variables, then CLI flags.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw: RawConfig = build_config(cli)?
		.try_deserialize()
		.context("configuration does not match the expected layout")?;
	raw.apply_cli_overrides(cli);
	let resolved = raw.resolve(cli)?;
	debug!("configuration resolved: {resolved:?}");
	Ok(resolved)
}
