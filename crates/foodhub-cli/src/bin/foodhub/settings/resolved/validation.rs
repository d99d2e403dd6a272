use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	let tuning = &config.tuning;

	for (key, ratio) in [
		("sheet.collapsed_ratio", tuning.collapsed_ratio),
		("sheet.expanded_ratio", tuning.expanded_ratio),
	] {
		if ratio.is_nan() || ratio <= 0.0 || ratio > 1.0 {
			return Err(ConfigError::invalid(
				key,
				ratio.to_string(),
				sources.source_for(key),
				"must be greater than 0 and at most 1",
			));
		}
	}

	if tuning.collapsed_ratio >= tuning.expanded_ratio {
		return Err(ConfigError::invalid(
			"sheet.expanded_ratio",
			tuning.expanded_ratio.to_string(),
			sources.source_for("sheet.expanded_ratio"),
			format!(
				"must be greater than sheet.collapsed_ratio ({})",
				tuning.collapsed_ratio
			),
		));
	}

	if tuning.overdrag.is_nan() || tuning.overdrag < 0.0 {
		return Err(ConfigError::invalid(
			"sheet.overdrag_rows",
			tuning.overdrag.to_string(),
			sources.source_for("sheet.overdrag_rows"),
			"must not be negative",
		));
	}

	for (key, fraction) in [
		("sheet.expand_bias", tuning.thresholds.expand_bias),
		("sheet.close_fraction", tuning.thresholds.close_fraction),
	] {
		if !(0.0..=1.0).contains(&fraction) {
			return Err(ConfigError::invalid(
				key,
				fraction.to_string(),
				sources.source_for(key),
				"must be between 0 and 1",
			));
		}
	}

	if let Some(theme) = &config.theme
		&& foodhub_tui::by_name(theme).is_none()
	{
		return Err(ConfigError::UnknownTheme {
			name: theme.clone(),
			origin: sources.source_for("ui.theme"),
			available: foodhub_tui::names(),
		});
	}

	Ok(())
}
