use std::time::Instant;

use foodhub_core::FilterChip;
use log::debug;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use super::sheet::{Focus, Target, price_at};
use super::state::Outcome;
use crate::components::{SheetRegions, card_at, point_in_rect, star_at};

/// Lines moved by one wheel notch inside the sheet.
const WHEEL_LINES: usize = 3;
const PRICE_STEP: i32 = 5;

impl App {
	/// Process a keyboard event and return the outcome if the user quits.
	pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<Outcome> {
		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			return Some(self.outcome());
		}
		if self.sheet_active() {
			self.handle_sheet_key(key, now);
			return None;
		}

		match key.code {
			KeyCode::Char('q') => return Some(self.outcome()),
			KeyCode::Char('f') => self.open_filters(now),
			KeyCode::Char('c') => self.reset_filters(),
			KeyCode::Char('L') => self.log_pane.toggle(),
			KeyCode::Up => self.move_selection(-1),
			KeyCode::Down => self.move_selection(1),
			KeyCode::PageUp => self.move_selection(-self.page_len()),
			KeyCode::PageDown => self.move_selection(self.page_len()),
			KeyCode::Home => self.select_index(0),
			KeyCode::End => self.select_index(self.visible.len().saturating_sub(1)),
			_ => {
				if self.log_pane.is_visible() {
					self.log_pane.handle_key(key);
				}
			}
		}
		None
	}

	fn handle_sheet_key(&mut self, key: KeyEvent, now: Instant) {
		let fine = key.modifiers.contains(KeyModifiers::SHIFT);
		match key.code {
			KeyCode::Esc => {
				self.panel.request_close(now);
			}
			KeyCode::Enter => self.apply(now),
			KeyCode::Char('r') => self.reset_filters(),
			KeyCode::Char('e') | KeyCode::Tab => {
				self.panel.toggle_expand(now);
			}
			KeyCode::Up => self.sheet.focus_on(self.sheet.focus.prev()),
			KeyCode::Down => self.sheet.focus_on(self.sheet.focus.next()),
			KeyCode::Left => self.adjust_focused(-1, fine),
			KeyCode::Right => self.adjust_focused(1, fine),
			KeyCode::Char(' ') => self.toggle_focused(),
			_ => {}
		}
	}

	/// Process a mouse event.
	pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
		match mouse.kind {
			MouseEventKind::Drag(MouseButton::Left) if self.panel.is_dragging() => {
				self.panel.drag_move(f32::from(mouse.row));
			}
			MouseEventKind::Up(MouseButton::Left) if self.panel.is_dragging() => {
				if let Some(target) = self.panel.drag_end(now) {
					debug!("sheet released toward {}", target.label());
				}
			}
			MouseEventKind::Drag(MouseButton::Left) if self.list.dragging_scrollbar => {
				self.drag_list_scrollbar_to(mouse.row);
			}
			MouseEventKind::Up(MouseButton::Left) => {
				self.list.dragging_scrollbar = false;
			}
			MouseEventKind::Down(MouseButton::Left) => self.click(mouse.column, mouse.row, now),
			MouseEventKind::ScrollUp => self.scroll_at(mouse.column, mouse.row, -1),
			MouseEventKind::ScrollDown => self.scroll_at(mouse.column, mouse.row, 1),
			_ => {}
		}
	}

	pub(crate) fn open_filters(&mut self, now: Instant) {
		if self.sheet_active() {
			return;
		}
		if self.filters_open {
			// Still sliding out; turn it around.
			self.panel.set_open(false, now);
		}
		self.filters_open = true;
		self.sheet.rewind();
		self.panel.set_open(true, now);
		debug!("filter sheet opened");
	}

	fn apply(&mut self, now: Instant) {
		self.commit_draft();
		self.panel.request_close(now);
	}

	fn remove_chip(&mut self, chip: FilterChip) {
		self.applied.remove_chip(chip);
		self.draft.remove_chip(chip);
		self.persist();
		self.refresh_visible();
		debug!("removed filter chip {chip}");
	}

	fn adjust_focused(&mut self, direction: i8, fine: bool) {
		match self.sheet.focus {
			Focus::Price => {
				let step = if fine { 1 } else { PRICE_STEP };
				self.draft.adjust_price(i32::from(direction) * step);
			}
			Focus::Rating => {
				let rating = self.draft.selected_rating.saturating_add_signed(direction);
				self.draft.set_rating(rating);
			}
			Focus::Sort => {
				self.draft.sort_by = if direction < 0 {
					self.draft.sort_by.prev()
				} else {
					self.draft.sort_by.next()
				};
			}
			Focus::Cuisine(_) | Focus::Dietary(_) => {}
		}
	}

	fn toggle_focused(&mut self) {
		match self.sheet.focus {
			Focus::Cuisine(cuisine) => self.draft.toggle_cuisine(cuisine),
			Focus::Dietary(tag) => self.draft.toggle_dietary(tag),
			Focus::Rating => self.draft.toggle_rating(self.draft.selected_rating),
			Focus::Sort => self.draft.sort_by = self.draft.sort_by.next(),
			Focus::Price => {}
		}
	}

	fn click(&mut self, column: u16, row: u16, now: Instant) {
		if self.sheet_active() {
			let hit = self.sheet.hits.and_then(|hits| {
				hits.placement
					.row_from_screen(row)
					.map(|sheet_row| (hits.regions, sheet_row))
			});
			match hit {
				Some((regions, sheet_row)) => self.click_sheet(regions, column, sheet_row, row, now),
				None => {
					debug!("backdrop clicked");
					self.panel.request_close(now);
				}
			}
			return;
		}

		let chip = self
			.list
			.chips
			.chips
			.iter()
			.find(|(area, _)| point_in_rect(column, row, *area))
			.map(|(_, chip)| *chip);
		if let Some(chip) = chip {
			self.remove_chip(chip);
			return;
		}
		if self
			.list
			.chips
			.clear_all
			.is_some_and(|area| point_in_rect(column, row, area))
		{
			self.reset_filters();
			return;
		}
		if self
			.list
			.cards
			.scrollbar
			.is_some_and(|area| point_in_rect(column, row, area))
		{
			self.list.dragging_scrollbar = true;
			self.drag_list_scrollbar_to(row);
			return;
		}
		if point_in_rect(column, row, self.list.cards.body)
			&& let Some(index) = card_at(&self.list.cards, self.list.table_state.offset(), row)
			&& index < self.visible.len()
		{
			self.list.table_state.select(Some(index));
		}
	}

	/// `sheet_row` is the row within the sheet; `screen_row` is where the
	/// pointer actually is, which is what a drag tracks.
	fn click_sheet(
		&mut self,
		regions: SheetRegions,
		column: u16,
		sheet_row: u16,
		screen_row: u16,
		now: Instant,
	) {
		let hit = |area| point_in_rect(column, sheet_row, area);

		if hit(regions.close) {
			self.panel.request_close(now);
		} else if hit(regions.handle) || hit(regions.header) {
			self.panel.drag_start(f32::from(screen_row), now);
		} else if hit(regions.toggle) {
			self.panel.toggle_expand(now);
		} else if hit(regions.reset) {
			self.reset_filters();
		} else if hit(regions.apply) {
			self.apply(now);
		} else if hit(regions.content) {
			let line = self.sheet.scroll + usize::from(sheet_row - regions.content.y);
			let offset = column - regions.content.x;
			if let Some(target) = self.sheet.content.target_at(line, offset) {
				self.sheet.focus = target.focus;
				self.activate(target, offset);
			}
		}
	}

	fn activate(&mut self, target: Target, column: u16) {
		match target.focus {
			Focus::Price => {
				let price = price_at(column - target.x, target.width);
				self.draft.set_price_max(price);
			}
			Focus::Rating => {
				if let Some(rating) = star_at(target.x, column) {
					self.draft.toggle_rating(rating);
				}
			}
			Focus::Cuisine(cuisine) => self.draft.toggle_cuisine(cuisine),
			Focus::Dietary(tag) => self.draft.toggle_dietary(tag),
			Focus::Sort => {
				self.draft.sort_by = if column < target.x + 2 {
					self.draft.sort_by.prev()
				} else {
					self.draft.sort_by.next()
				};
			}
		}
	}

	fn scroll_at(&mut self, column: u16, row: u16, direction: isize) {
		if self.sheet_active() {
			let over_content = self.sheet.hits.is_some_and(|hits| {
				hits.placement
					.row_from_screen(row)
					.is_some_and(|sheet_row| point_in_rect(column, sheet_row, hits.regions.content))
			});
			if over_content {
				self.sheet.reveal_focus = false;
				self.sheet.scroll = if direction < 0 {
					self.sheet.scroll.saturating_sub(WHEEL_LINES)
				} else {
					self.sheet.scroll + WHEEL_LINES
				};
			}
			return;
		}
		if self
			.list
			.area
			.is_some_and(|area| point_in_rect(column, row, area))
		{
			self.move_selection(direction);
		}
	}

	fn page_len(&self) -> isize {
		isize::try_from(self.list.cards.visible_cards.max(1)).unwrap_or(1)
	}

	fn move_selection(&mut self, delta: isize) {
		if self.visible.is_empty() {
			return;
		}
		let current = self.list.table_state.selected().unwrap_or(0);
		self.select_index(current.saturating_add_signed(delta));
	}

	fn select_index(&mut self, index: usize) {
		if self.visible.is_empty() {
			self.list.table_state.select(None);
			return;
		}
		self.list
			.table_state
			.select(Some(index.min(self.visible.len() - 1)));
	}

	fn drag_list_scrollbar_to(&mut self, row: u16) {
		let Some(track) = self.list.cards.scrollbar else {
			return;
		};
		if track.height == 0 || self.visible.is_empty() {
			return;
		}
		let last = self.visible.len() - 1;
		let offset = usize::from(row.saturating_sub(track.y).min(track.height - 1));
		let span = usize::from(track.height.saturating_sub(1)).max(1);
		self.select_index((offset * last + span / 2) / span);
	}
}
