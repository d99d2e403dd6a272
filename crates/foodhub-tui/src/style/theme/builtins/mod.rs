mod loader;

use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use log::error;
use loader::{BuiltinThemes, load_builtin_themes};
use ratatui::style::{Color, Modifier, Style};

use crate::style::theme::types::{Theme, ThemeRegistration};

const BUILTIN_THEME_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/style/theme/builtins/themes");

/// The theme marked `default = true` among the bundled definitions.
pub fn default_theme() -> Theme {
	builtin_themes().default_theme
}

pub(super) fn registrations() -> &'static [ThemeRegistration] {
	&builtin_themes().registrations
}

fn builtin_themes() -> &'static BuiltinThemes {
	static BUILTINS: OnceLock<BuiltinThemes> = OnceLock::new();
	BUILTINS.get_or_init(|| {
		load_builtin_themes(&BUILTIN_THEME_DIR).unwrap_or_else(|err| {
			error!("failed to load built-in themes: {err:#}");
			BuiltinThemes {
				registrations: vec![ThemeRegistration::new("plain", plain_theme())],
				default_theme: plain_theme(),
			}
		})
	})
}

/// Terminal-default colours, used if the bundled definitions fail to load.
fn plain_theme() -> Theme {
	Theme {
		header: Style::new().add_modifier(Modifier::BOLD),
		row_highlight: Style::new().add_modifier(Modifier::REVERSED),
		accent: Style::new().fg(Color::Red),
		rating: Style::new().fg(Color::Yellow),
		muted: Style::new().fg(Color::DarkGray),
		chip: Style::new().add_modifier(Modifier::REVERSED),
		sheet: Style::new(),
		focus: Style::new().add_modifier(Modifier::REVERSED),
		button: Style::new().add_modifier(Modifier::BOLD),
		backdrop: Style::new().add_modifier(Modifier::DIM),
		empty: Style::new().add_modifier(Modifier::ITALIC),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bundled_themes_load() {
		let themes = load_builtin_themes(&BUILTIN_THEME_DIR).unwrap();
		let names: Vec<_> = themes.registrations.iter().map(|r| r.name.as_str()).collect();
		assert_eq!(names, vec!["light", "slate", "solarized"]);
	}

	#[test]
	fn slate_is_the_default() {
		let themes = load_builtin_themes(&BUILTIN_THEME_DIR).unwrap();
		let slate = themes
			.registrations
			.iter()
			.find(|registration| registration.name == "slate")
			.unwrap();
		assert_eq!(themes.default_theme, slate.theme);
	}
}
