use ratatui::style::{Color, Modifier, Style};

/// Colour scheme for the storefront.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	/// Titles, table borders and column headers.
	pub header: Style,
	/// Selected card row.
	pub row_highlight: Style,
	/// Brand mark and prices.
	pub accent: Style,
	/// Filled rating stars.
	pub rating: Style,
	/// Descriptions, hints and empty stars.
	pub muted: Style,
	/// Active filter chips and selected options.
	pub chip: Style,
	/// Filter sheet surface.
	pub sheet: Style,
	/// Focused control inside the sheet.
	pub focus: Style,
	/// Footer buttons.
	pub button: Style,
	/// Patched over the list while the sheet is open.
	pub backdrop: Style,
	/// Empty result message.
	pub empty: Style,
}

impl Theme {
	/// Border colour shared by the list and the sheet.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}

	#[must_use]
	pub fn handle_style(&self) -> Style {
		self.muted.add_modifier(Modifier::BOLD)
	}
}

/// A named theme bundled with the application.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	pub name: String,
	pub theme: Theme,
	/// Alternate names accepted by `--theme`.
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}

	/// Whether `name` refers to this theme, ignoring case.
	#[must_use]
	pub fn matches(&self, name: &str) -> bool {
		let name = name.trim();
		self.name.eq_ignore_ascii_case(name)
			|| self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
	}
}
