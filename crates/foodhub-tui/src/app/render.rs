use std::time::Instant;

use foodhub_core::PanelState;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use super::App;
use super::sheet::{SheetContent, SheetHits};
use crate::components::{
	Placement, ScrollMetrics, SheetView, content_width, render_cards, render_chip_bar,
	render_empty,
};

const LIST_HINTS: &str = "f filters  c clear  ↑↓ scroll  L logs  q quit";
const SHEET_HINTS: &str = "↑↓ focus  ←→ adjust  space toggle  e expand  r reset  enter apply  esc close";

impl App {
	/// Draw one frame as of `now`.
	pub fn draw(&mut self, frame: &mut Frame, now: Instant) {
		let area = frame.area();
		self.resize(area.height);

		let (main, logs) = if self.log_pane.is_visible() {
			let [main, logs] =
				Layout::vertical([Constraint::Min(8), Constraint::Percentage(35)]).areas(area);
			(main, Some(logs))
		} else {
			(area, None)
		};

		let [title, chips, list, status] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(3),
			Constraint::Length(1),
		])
		.areas(main);

		let buf = frame.buffer_mut();
		self.render_title(buf, title);
		let active = self.applied.chips();
		self.list.chips = render_chip_bar(buf, chips, &active, &self.ui.clear_all_label, &self.theme);
		self.render_list(buf, list);
		self.render_status(buf, status);

		if let Some(logs) = logs {
			self.log_pane.render(frame, logs, &self.theme);
		}

		self.render_sheet(frame.buffer_mut(), area, now);
	}

	fn render_title(&self, buf: &mut Buffer, area: Rect) {
		Line::from(vec![
			Span::styled(
				self.ui.brand_accent.clone(),
				self.theme.accent.add_modifier(Modifier::BOLD),
			),
			Span::styled(
				self.ui.brand_rest.clone(),
				self.theme.header.add_modifier(Modifier::BOLD),
			),
			Span::styled(format!("  {}", self.ui.tagline), self.theme.muted),
		])
		.render(area, buf);
	}

	fn render_list(&mut self, buf: &mut Buffer, area: Rect) {
		self.list.area = Some(area);
		self.list.cards = render_cards(
			buf,
			area,
			&mut self.list.table_state,
			&self.visible,
			&self.ui.list_title,
			&self.theme,
		);
		if self.visible.is_empty() {
			render_empty(
				buf,
				self.list.cards.body,
				&self.ui.empty_title,
				&self.ui.empty_hint,
				&self.theme,
			);
		}
	}

	fn render_status(&self, buf: &mut Buffer, area: Rect) {
		let hints = if self.sheet_active() { SHEET_HINTS } else { LIST_HINTS };
		Line::from(Span::styled(hints, self.theme.muted)).render(area, buf);
		let count = format!("{} of {} dishes", self.visible.len(), self.catalog.len());
		Line::from(Span::styled(count, self.theme.muted))
			.alignment(Alignment::Right)
			.render(area, buf);
	}

	/// Draw the sheet over `viewport` and record where its parts landed.
	fn render_sheet(&mut self, buf: &mut Buffer, viewport: Rect, now: Instant) {
		self.sheet.hits = None;
		if !self.panel.is_present() {
			return;
		}
		if self.filters_open {
			buf.set_style(viewport, self.theme.backdrop);
		}

		let Some(placement) = Placement::compute(viewport, self.panel.geometry(now)) else {
			return;
		};
		let area = placement.offscreen_area();
		let content = SheetContent::build(
			&self.draft,
			self.sheet.focus,
			content_width(area.width),
			&self.theme,
		);

		let rows = self.panel.content_height(now).round() as usize;
		let metrics = ScrollMetrics::compute(content.lines.len(), rows);
		if self.sheet.reveal_focus
			&& rows > 0
			&& let Some(line) = content.line_of(self.sheet.focus)
		{
			// Keep the heading above the control in view when possible.
			let scroll = metrics.scroll_to_reveal(self.sheet.scroll, line.saturating_sub(1));
			self.sheet.scroll = metrics.scroll_to_reveal(scroll, line);
			self.sheet.reveal_focus = false;
		}
		self.sheet.scroll = self.sheet.scroll.min(metrics.max_scroll);

		let expanded = self.panel.state() == PanelState::FullOpen;
		let mut sheet_buf = Buffer::empty(area);
		let regions = SheetView {
			title: &self.ui.sheet_title,
			toggle_label: self.ui.toggle_label(expanded),
			expanded,
			reset_label: &self.ui.reset_label,
			apply_label: &self.ui.apply_label,
			content: &content.lines,
			scroll: self.sheet.scroll,
			theme: &self.theme,
		}
		.render(area, &mut sheet_buf);
		placement.blit(&sheet_buf, buf);

		self.sheet.content = content;
		self.sheet.hits = Some(SheetHits { placement, regions });
	}
}
