use anyhow::{Context, Result};
use foodhub_core::{FilterStore, FoodItem, SheetTuning, catalog};
use log::warn;
use ratatui::crossterm::terminal;

use crate::app::{App, Outcome};
use crate::config::UiLabels;
use crate::style::{self, Theme};

/// Builder for the interactive storefront.
///
/// Collects the catalog, persistence, sheet tuning and presentation before
/// the terminal is taken over.
pub struct Storefront {
	catalog: &'static [FoodItem],
	store: Box<dyn FilterStore>,
	tuning: SheetTuning,
	theme: Option<Theme>,
	labels: Option<UiLabels>,
}

impl Storefront {
	/// Create a storefront over the built-in menu, persisting through `store`.
	pub fn new(store: Box<dyn FilterStore>) -> Self {
		Self {
			catalog: catalog::builtin(),
			store,
			tuning: SheetTuning::default(),
			theme: None,
			labels: None,
		}
	}

	#[must_use]
	pub fn with_catalog(mut self, catalog: &'static [FoodItem]) -> Self {
		self.catalog = catalog;
		self
	}

	#[must_use]
	pub fn with_tuning(mut self, tuning: SheetTuning) -> Self {
		self.tuning = tuning;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Use a bundled theme. Unknown names keep the default theme.
	#[must_use]
	pub fn with_theme_name(mut self, name: &str) -> Self {
		match style::by_name(name) {
			Some(theme) => self.theme = Some(theme),
			None => warn!("unknown theme {name:?}; keeping the default"),
		}
		self
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = Some(labels);
		self
	}

	/// Assemble the [`App`] for a viewport `viewport_rows` tall without
	/// touching the terminal.
	#[must_use]
	pub fn build(self, viewport_rows: u16) -> App {
		let mut app = App::new(self.catalog, self.store, self.tuning, viewport_rows);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(labels) = self.labels {
			app.set_labels(labels);
		}
		app
	}

	/// Run the storefront until the user quits.
	pub fn run(self) -> Result<Outcome> {
		let (_, rows) = terminal::size().context("failed to read the terminal size")?;
		self.build(rows).run()
	}
}
