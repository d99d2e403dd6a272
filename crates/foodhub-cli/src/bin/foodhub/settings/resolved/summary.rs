use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let tuning = &config.tuning;
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(
		out,
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	);
	let _ = writeln!(out, "  Half-open height: {}", percent(tuning.collapsed_ratio));
	let _ = writeln!(out, "  Full-open height: {}", percent(tuning.expanded_ratio));
	let _ = writeln!(out, "  Overdrag: {} rows", tuning.overdrag);
	let _ = writeln!(out, "  Animation: {} ms", tuning.animation.as_millis());
	let _ = writeln!(out, "  Expand bias: {}", tuning.thresholds.expand_bias);
	let _ = writeln!(out, "  Close fraction: {}", tuning.thresholds.close_fraction);
	match &config.state_file {
		Some(path) => {
			let _ = writeln!(out, "  Saved filters: {}", path.display());
		}
		None => {
			let _ = writeln!(out, "  Saved filters: (memory only)");
		}
	}
	let _ = writeln!(out, "  Log level: {}", config.log_level);
	out
}

fn percent(ratio: f32) -> String {
	format!("{:.0}%", ratio * 100.0)
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;
	use std::time::Duration;

	use foodhub_core::SheetTuning;
	use log::LevelFilter;

	use super::*;

	#[test]
	fn summary_lists_sheet_tuning_and_storage() {
		let config = ResolvedConfig {
			theme: Some("light".to_string()),
			tuning: SheetTuning {
				animation: Duration::from_millis(150),
				..SheetTuning::default()
			},
			state_file: Some(PathBuf::from("/tmp/filters.json")),
			log_level: LevelFilter::Debug,
		};
		let summary = format_summary(&config);
		assert!(summary.starts_with("Effective configuration:\n"));
		assert!(summary.contains("  UI theme: light\n"));
		assert!(summary.contains("  Half-open height: 50%\n"));
		assert!(summary.contains("  Full-open height: 85%\n"));
		assert!(summary.contains("  Animation: 150 ms\n"));
		assert!(summary.contains("  Saved filters: /tmp/filters.json\n"));
		assert!(summary.contains("  Log level: DEBUG\n"));
	}

	#[test]
	fn summary_marks_memory_only_storage() {
		let config = ResolvedConfig {
			theme: None,
			tuning: SheetTuning::default(),
			state_file: None,
			log_level: LevelFilter::Info,
		};
		let summary = format_summary(&config);
		assert!(summary.contains("(use the library default)"));
		assert!(summary.contains("  Saved filters: (memory only)\n"));
	}
}
