mod builtins;
mod types;

pub use builtins::default_theme;
pub use types::{Theme, ThemeRegistration};

/// The themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> &'static [ThemeRegistration] {
	builtins::registrations()
}

/// Look up a bundled theme by name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	builtin_themes()
		.iter()
		.find(|registration| registration.matches(name))
		.map(|registration| registration.theme)
}

/// Canonical names of the bundled themes, sorted.
#[must_use]
pub fn names() -> Vec<String> {
	let mut names: Vec<String> = builtin_themes()
		.iter()
		.map(|registration| registration.name.clone())
		.collect();
	names.sort();
	names
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
