//! Resolve configuration, cache, and data directories for `foodhub`.
//!
//! Environment overrides win over the platform locations provided by the
//! `directories` crate.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "foodhub";
const APPLICATION: &str = "foodhub";

pub const CONFIG_DIR_ENV: &str = "FOODHUB_CONFIG_DIR";
pub const DATA_DIR_ENV: &str = "FOODHUB_DATA_DIR";
pub const CACHE_DIR_ENV: &str = "FOODHUB_CACHE_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for foodhub"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty value counts as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	env::var_os(name)
		.filter(|value| !value.is_empty())
		.map(PathBuf::from)
}

fn resolve(env_name: &str, platform: fn(&ProjectDirs) -> &Path) -> Result<PathBuf> {
	match dir_from_env(env_name) {
		Some(dir) => Ok(dir),
		None => Ok(platform(&project_dirs()?).to_path_buf()),
	}
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	resolve(CONFIG_DIR_ENV, ProjectDirs::config_local_dir)
}

/// Directory holding the persisted filter selection.
pub fn get_data_dir() -> Result<PathBuf> {
	resolve(DATA_DIR_ENV, ProjectDirs::data_local_dir)
}

pub fn get_cache_dir() -> Result<PathBuf> {
	resolve(CACHE_DIR_ENV, ProjectDirs::cache_dir)
}
