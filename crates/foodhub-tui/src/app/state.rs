//! Core state container for the storefront.

use std::time::Instant;

use foodhub_core::store::load_or_default;
use foodhub_core::{
	FilterState, FilterStore, FoodItem, PanelEvent, SheetTuning, SnapMetrics, SnapPanel,
};
use log::{debug, info, warn};
use ratatui::layout::Rect;
use ratatui::widgets::TableState;
use serde::Serialize;

use super::sheet::SheetState;
use crate::components::{CardsLayout, ChipBarLayout, SHEET_CHROME_ROWS};
use crate::config::UiLabels;
use crate::logging::LogPane;
use crate::style::Theme;

/// What the storefront hands back when the user quits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
	/// Filters driving the list at exit.
	pub applied: FilterState,
	/// Ids of the listed dishes, in display order.
	pub visible: Vec<u32>,
}

/// Dish list state and the regions it occupied in the last frame.
#[derive(Debug, Default)]
pub(crate) struct ListState {
	pub table_state: TableState,
	pub area: Option<Rect>,
	pub cards: CardsLayout,
	pub chips: ChipBarLayout,
	pub dragging_scrollbar: bool,
}

/// Aggregate state of the storefront.
///
/// The list always shows the *applied* filters. The sheet edits a separate
/// *draft* that only reaches the list through apply, so closing the sheet
/// any other way leaves the list untouched.
pub struct App {
	pub(crate) catalog: &'static [FoodItem],
	pub(crate) draft: FilterState,
	pub(crate) applied: FilterState,
	pub(crate) visible: Vec<&'static FoodItem>,
	pub(crate) panel: SnapPanel,
	pub(crate) tuning: SheetTuning,
	/// The host's side of the open flag mirrored into `panel`.
	pub(crate) filters_open: bool,
	pub(crate) sheet: SheetState,
	pub(crate) list: ListState,
	pub(crate) ui: UiLabels,
	pub(crate) theme: Theme,
	pub(crate) log_pane: LogPane,
	store: Box<dyn FilterStore>,
	viewport_rows: u16,
}

impl App {
	/// Build the storefront for a viewport `viewport_rows` tall, starting
	/// from whatever `store` has saved.
	pub fn new(
		catalog: &'static [FoodItem],
		store: Box<dyn FilterStore>,
		mut tuning: SheetTuning,
		viewport_rows: u16,
	) -> Self {
		tuning.chrome_height = f32::from(SHEET_CHROME_ROWS);
		match store.location() {
			Some(path) => info!("saving filters to {}", path.display()),
			None => debug!("filters are kept in memory"),
		}
		let applied = load_or_default(store.as_ref());
		let panel = SnapPanel::from_tuning(f32::from(viewport_rows), &tuning);

		let mut app = Self {
			catalog,
			draft: applied.clone(),
			applied,
			visible: Vec::new(),
			panel,
			tuning,
			filters_open: false,
			sheet: SheetState::default(),
			list: ListState::default(),
			ui: UiLabels::default(),
			theme: Theme::default(),
			log_pane: LogPane::new(),
			store,
			viewport_rows,
		};
		app.refresh_visible();
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.ui = labels;
	}

	/// The result the storefront would report if the user quit now.
	#[must_use]
	pub fn outcome(&self) -> Outcome {
		Outcome {
			applied: self.applied.clone(),
			visible: self.visible.iter().map(|item| item.id).collect(),
		}
	}

	/// Whether the sheet is open and taking keyboard input. A sheet on its
	/// way out no longer is.
	pub(crate) fn sheet_active(&self) -> bool {
		self.filters_open && self.panel.state().is_open()
	}

	/// Advance the panel animation and answer its notifications.
	pub fn tick(&mut self, now: Instant) {
		match self.panel.tick(now) {
			Some(PanelEvent::CloseRequested) => {
				self.filters_open = false;
				self.panel.set_open(false, now);
				debug!("filter sheet closed");
			}
			Some(PanelEvent::Settled(state)) => {
				debug!("filter sheet settled {}", state.label());
			}
			None => {}
		}
	}

	/// Rescale the snap zones after the terminal changed height.
	pub fn resize(&mut self, viewport_rows: u16) {
		if viewport_rows == self.viewport_rows {
			return;
		}
		self.viewport_rows = viewport_rows;
		self.panel
			.set_metrics(SnapMetrics::for_viewport(f32::from(viewport_rows), &self.tuning));
		debug!("viewport resized to {viewport_rows} rows");
	}

	/// Recompute the list from the applied filters, keeping the selection in
	/// range.
	pub(crate) fn refresh_visible(&mut self) {
		self.visible = self.applied.apply(self.catalog);
		let selected = match (self.visible.len(), self.list.table_state.selected()) {
			(0, _) => None,
			(len, Some(index)) => Some(index.min(len - 1)),
			(_, None) => Some(0),
		};
		self.list.table_state.select(selected);
	}

	pub(crate) fn persist(&self) {
		if let Err(err) = self.store.save(&self.applied) {
			warn!("failed to save filters: {err}");
		}
	}

	/// Publish the draft to the list.
	pub(crate) fn commit_draft(&mut self) {
		self.applied = self.draft.clone();
		self.persist();
		self.refresh_visible();
		info!(
			"applied filters: {} of {} dishes listed",
			self.visible.len(),
			self.catalog.len()
		);
	}

	/// Return both the draft and the applied filters to their defaults.
	pub(crate) fn reset_filters(&mut self) {
		self.draft.reset();
		self.applied.reset();
		self.persist();
		self.refresh_visible();
		info!("filters reset");
	}
}
