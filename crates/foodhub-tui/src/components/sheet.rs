//! The bottom sheet surface: chrome, content viewport and placement.
//!
//! The sheet is always drawn at its full panel height into an off-screen
//! buffer. [`Placement`] then decides which of those rows sit above the
//! viewport's bottom edge, and only those are copied onto the screen. A panel
//! with a negative bottom therefore loses its lower rows first, the same way a
//! sheet sliding below a window edge would.

use foodhub_core::Geometry;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use super::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::style::Theme;

/// Rows taken by the handle, header, expand toggle and footer.
pub const SHEET_CHROME_ROWS: u16 = 4;

const HANDLE: &str = "━━━━━━━━";
const CLOSE: &str = "[×]";

/// Everything the sheet needs to draw one frame.
pub struct SheetView<'a> {
	pub title: &'a str,
	pub toggle_label: &'a str,
	/// Whether the toggle should point down (the sheet is fully open).
	pub expanded: bool,
	pub reset_label: &'a str,
	pub apply_label: &'a str,
	pub content: &'a [Line<'static>],
	pub scroll: usize,
	pub theme: &'a Theme,
}

/// Regions of a drawn sheet, in the coordinates of the buffer it was drawn to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SheetRegions {
	pub handle: Rect,
	pub header: Rect,
	pub close: Rect,
	pub toggle: Rect,
	pub content: Rect,
	pub reset: Rect,
	pub apply: Rect,
}

/// Columns available to content lines for a sheet `width` wide. One column
/// is kept for the scrollbar whether or not it is shown.
#[must_use]
pub fn content_width(width: u16) -> u16 {
	width.saturating_sub(3)
}

impl SheetView<'_> {
	/// Draw the sheet filling `area` and return its regions.
	pub fn render(self, area: Rect, buf: &mut Buffer) -> SheetRegions {
		let theme = self.theme;
		let mut regions = SheetRegions::default();
		if area.width < 4 || area.height == 0 {
			return regions;
		}

		let block = Block::default()
			.borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
			.border_set(ratatui::symbols::border::ROUNDED)
			.border_style(theme.border_style())
			.style(theme.sheet);
		let inner = block.inner(area);
		block.render(area, buf);

		regions.handle = Rect { height: 1, ..area };
		let handle_x = area.x + area.width.saturating_sub(HANDLE.width() as u16) / 2;
		buf.set_string(handle_x, area.y, HANDLE, theme.handle_style());

		let mut rows = inner.rows();
		if let Some(header) = rows.next() {
			regions.header = header;
			Line::from(Span::styled(
				self.title.to_string(),
				theme.header.add_modifier(Modifier::BOLD),
			))
			.render(header, buf);
			let close_width = CLOSE.width() as u16;
			regions.close = Rect {
				x: header.x + header.width.saturating_sub(close_width),
				width: close_width.min(header.width),
				..header
			};
			buf.set_string(regions.close.x, header.y, CLOSE, theme.accent);
		}

		if let Some(toggle) = rows.next() {
			regions.toggle = toggle;
			let arrow = if self.expanded { "▼" } else { "▲" };
			Line::from(Span::styled(format!("{arrow} {}", self.toggle_label), theme.muted))
				.alignment(Alignment::Center)
				.render(toggle, buf);
		}

		let footer_y = area.y + area.height - 1;
		let content_top = inner.y + 2;
		if footer_y > inner.y + 1 {
			regions.content = Rect {
				y: content_top,
				height: footer_y.saturating_sub(content_top),
				..inner
			};
			let footer = Rect {
				y: footer_y,
				height: 1,
				..inner
			};
			let half = footer.width / 2;
			regions.reset = Rect { width: half, ..footer };
			regions.apply = Rect {
				x: footer.x + half,
				width: footer.width - half,
				..footer
			};
			render_button(buf, regions.reset, self.reset_label, theme);
			render_button(buf, regions.apply, self.apply_label, theme);
		}

		render_content(buf, regions.content, self.content, self.scroll, theme);
		regions
	}
}

fn render_button(buf: &mut Buffer, area: Rect, label: &str, theme: &Theme) {
	Line::from(Span::styled(format!("[ {label} ]"), theme.button))
		.alignment(Alignment::Center)
		.render(area, buf);
}

fn render_content(buf: &mut Buffer, area: Rect, lines: &[Line<'static>], scroll: usize, theme: &Theme) {
	if area.height == 0 {
		return;
	}
	let metrics = ScrollMetrics::compute(lines.len(), usize::from(area.height));
	let scroll = scroll.min(metrics.max_scroll);
	let text_area = if metrics.needs_scrollbar {
		let mut state = metrics.scrollbar_state(scroll);
		render_scrollbar(buf, area, &mut state, theme)
	} else {
		Rect {
			width: area.width.saturating_sub(1),
			..area
		}
	};

	let visible: Vec<Line> = lines
		.iter()
		.skip(scroll)
		.take(usize::from(area.height))
		.cloned()
		.collect();
	Paragraph::new(visible).render(text_area, buf);
}

/// Where the visible part of a sheet lands on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
	/// Full panel height in rows; the size of the off-screen buffer.
	pub panel_rows: u16,
	/// First off-screen row that is copied.
	pub src_top: u16,
	/// Screen rows covered by the copied part.
	pub screen: Rect,
}

impl Placement {
	/// Place a panel with `geometry` against the bottom edge of `viewport`.
	///
	/// Returns `None` when no row of the panel is above the edge.
	#[must_use]
	pub fn compute(viewport: Rect, geometry: Geometry) -> Option<Self> {
		let panel_rows = to_rows(geometry.height);
		let mut visible = to_rows(geometry.visible_height()).min(panel_rows);
		if visible == 0 || viewport.height == 0 {
			return None;
		}
		let mut src_top = 0;
		if visible > viewport.height {
			src_top = visible - viewport.height;
			visible = viewport.height;
		}
		Some(Self {
			panel_rows,
			src_top,
			screen: Rect {
				x: viewport.x,
				y: viewport.y + viewport.height - visible,
				width: viewport.width,
				height: visible,
			},
		})
	}

	/// Buffer area the sheet is drawn into before being copied.
	#[must_use]
	pub fn offscreen_area(&self) -> Rect {
		Rect::new(self.screen.x, 0, self.screen.width, self.panel_rows)
	}

	/// Off-screen row drawn at screen `row`, if the sheet covers that row.
	#[must_use]
	pub fn row_from_screen(&self, row: u16) -> Option<u16> {
		(row >= self.screen.y && row < self.screen.bottom()).then(|| row - self.screen.y + self.src_top)
	}

	/// Copy the visible rows of `sheet` onto `dst`.
	pub fn blit(&self, sheet: &Buffer, dst: &mut Buffer) {
		for dy in 0..self.screen.height {
			let sy = self.src_top + dy;
			let y = self.screen.y + dy;
			for x in self.screen.left()..self.screen.right() {
				if sheet.area.contains((x, sy).into()) && dst.area.contains((x, y).into()) {
					dst[(x, y)] = sheet[(x, sy)].clone();
				}
			}
		}
	}
}

fn to_rows(value: f32) -> u16 {
	value.round().clamp(0.0, f32::from(u16::MAX)) as u16
}

#[cfg(test)]
mod tests {
	use super::*;

	fn row_text(buf: &Buffer, y: u16) -> String {
		(buf.area.left()..buf.area.right())
			.map(|x| buf[(x, y)].symbol())
			.collect()
	}

	fn view<'a>(theme: &'a Theme, content: &'a [Line<'static>]) -> SheetView<'a> {
		SheetView {
			title: "Filters",
			toggle_label: "Show more filters",
			expanded: false,
			reset_label: "Reset",
			apply_label: "Apply",
			content,
			scroll: 0,
			theme,
		}
	}

	#[test]
	fn chrome_leaves_panel_height_minus_chrome_for_content() {
		let theme = Theme::default();
		let area = Rect::new(0, 0, 40, 12);
		let mut buf = Buffer::empty(area);
		let regions = view(&theme, &[]).render(area, &mut buf);

		assert_eq!(regions.content.height, 12 - SHEET_CHROME_ROWS);
		assert_eq!(regions.header.y, 1);
		assert_eq!(regions.toggle.y, 2);
		assert_eq!(regions.reset.y, 11);
		assert!(row_text(&buf, 0).contains(HANDLE));
		assert!(row_text(&buf, 1).contains("Filters"));
		assert!(row_text(&buf, 1).contains(CLOSE));
		assert!(row_text(&buf, 2).contains("▲ Show more filters"));
		assert!(row_text(&buf, 11).contains("[ Reset ]"));
		assert!(row_text(&buf, 11).contains("[ Apply ]"));
	}

	#[test]
	fn content_scrolls_within_its_region() {
		let theme = Theme::default();
		let lines: Vec<Line<'static>> = (0..20).map(|i| Line::from(format!("line {i}"))).collect();
		let area = Rect::new(0, 0, 30, 8);
		let mut buf = Buffer::empty(area);
		let mut sheet = view(&theme, &lines);
		sheet.scroll = 5;
		let regions = sheet.render(area, &mut buf);

		assert_eq!(regions.content.height, 4);
		assert!(row_text(&buf, regions.content.y).contains("line 5"));
		assert!(row_text(&buf, regions.content.y + 3).contains("line 8"));
	}

	#[test]
	fn placement_hides_rows_below_the_edge() {
		let viewport = Rect::new(0, 0, 80, 24);
		let seated = Placement::compute(viewport, Geometry::new(12.0, 0.0)).unwrap();
		assert_eq!(seated.screen, Rect::new(0, 12, 80, 12));
		assert_eq!(seated.src_top, 0);

		let sunk = Placement::compute(viewport, Geometry::new(12.0, -5.0)).unwrap();
		assert_eq!(sunk.screen, Rect::new(0, 17, 80, 7));
		assert_eq!(sunk.panel_rows, 12);
		assert_eq!(sunk.row_from_screen(17), Some(0));
		assert_eq!(sunk.row_from_screen(16), None, "row above the sheet");

		assert!(Placement::compute(viewport, Geometry::new(12.0, -12.0)).is_none());
	}

	#[test]
	fn placement_clips_panels_taller_than_the_viewport() {
		let viewport = Rect::new(0, 0, 80, 10);
		let tall = Placement::compute(viewport, Geometry::new(12.0, 0.0)).unwrap();
		assert_eq!(tall.src_top, 2);
		assert_eq!(tall.screen, Rect::new(0, 0, 80, 10));
		assert_eq!(tall.row_from_screen(0), Some(2), "handle and header are cut off");
		assert_eq!(tall.row_from_screen(9), Some(11));
	}

	#[test]
	fn blit_copies_only_visible_rows() {
		let viewport = Rect::new(0, 0, 10, 6);
		let placement = Placement::compute(viewport, Geometry::new(4.0, -1.0)).unwrap();
		let mut sheet = Buffer::empty(placement.offscreen_area());
		for y in 0..4 {
			sheet.set_string(0, y, format!("row{y}"), ratatui::style::Style::new());
		}
		let mut screen = Buffer::empty(viewport);
		placement.blit(&sheet, &mut screen);

		assert!(row_text(&screen, 2).starts_with("    "));
		assert!(row_text(&screen, 3).starts_with("row0"));
		assert!(row_text(&screen, 5).starts_with("row2"));
	}
}
