use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(String),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each explicitly set key came from, keyed by its dotted path.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	sources: HashMap<&'static str, SettingSource>,
}

impl ConfigSources {
	pub(crate) fn insert(&mut self, key: &'static str, source: SettingSource) {
		self.sources.insert(key, source);
	}

	/// Keys nobody set explicitly are reported as their configuration key.
	pub(crate) fn source_for(&self, key: &'static str) -> SettingSource {
		self.sources
			.get(key)
			.cloned()
			.unwrap_or(SettingSource::ConfigKey(key))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unset_keys_fall_back_to_the_config_key() {
		let mut sources = ConfigSources::default();
		sources.insert("sheet.animation_ms", SettingSource::CliFlag("--animation-ms"));

		assert_eq!(
			sources.source_for("sheet.animation_ms").to_string(),
			"CLI flag `--animation-ms`"
		);
		assert_eq!(
			sources.source_for("ui.theme").to_string(),
			"configuration key `ui.theme`"
		);
	}
}
