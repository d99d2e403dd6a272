//! Active-filter chip bar shown above the dish list.

use foodhub_core::FilterChip;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

const PREFIX: &str = "Active filters: ";
const IDLE_HINT: &str = "Press f to filter dishes";

/// Clickable regions of the chip bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChipBarLayout {
	pub chips: Vec<(Rect, FilterChip)>,
	pub clear_all: Option<Rect>,
}

/// Draw the chip bar on the first row of `area`.
///
/// Chips that do not fit are dropped from the end; the clear-all button is
/// always kept when any filter is active.
pub fn render_chip_bar(
	buf: &mut Buffer,
	area: Rect,
	chips: &[FilterChip],
	clear_all_label: &str,
	theme: &Theme,
) -> ChipBarLayout {
	let mut layout = ChipBarLayout::default();
	if area.width == 0 || area.height == 0 {
		return layout;
	}
	let row = Rect { height: 1, ..area };

	if chips.is_empty() {
		Line::from(Span::styled(IDLE_HINT, theme.muted)).render(row, buf);
		return layout;
	}

	let button = format!(" {clear_all_label} (c) ");
	let button_width = button.width() as u16;
	let limit = row.x + row.width.saturating_sub(button_width + 1);

	let mut spans = vec![Span::styled(PREFIX, theme.muted)];
	let mut x = row.x + PREFIX.width() as u16;
	for chip in chips {
		let label = format!(" {} ", chip.label());
		let width = label.width() as u16;
		if x + width > limit {
			spans.push(Span::styled("…", theme.muted));
			x += 1;
			break;
		}
		layout.chips.push((Rect::new(x, row.y, width, 1), *chip));
		spans.push(Span::styled(label, theme.chip));
		spans.push(Span::raw(" "));
		x += width + 1;
	}

	let button_x = x.max(row.x + row.width.saturating_sub(button_width));
	if button_x + button_width <= row.x + row.width {
		let gap = usize::from(button_x - x);
		spans.push(Span::raw(" ".repeat(gap)));
		spans.push(Span::styled(button, theme.button));
		layout.clear_all = Some(Rect::new(button_x, row.y, button_width, 1));
	}

	Line::from(spans).render(row, buf);
	layout
}

#[cfg(test)]
mod tests {
	use foodhub_core::{Cuisine, FilterChip};

	use super::*;

	fn row_text(buf: &Buffer, y: u16) -> String {
		(0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
	}

	#[test]
	fn idle_bar_shows_hint() {
		let area = Rect::new(0, 0, 40, 1);
		let mut buf = Buffer::empty(area);
		let layout = render_chip_bar(&mut buf, area, &[], "Clear all", &Theme::default());
		assert!(row_text(&buf, 0).starts_with(IDLE_HINT));
		assert_eq!(layout, ChipBarLayout::default());
	}

	#[test]
	fn chips_and_clear_button_are_hit_testable() {
		let area = Rect::new(0, 0, 70, 1);
		let mut buf = Buffer::empty(area);
		let chips = [FilterChip::Rating(4), FilterChip::Cuisine(Cuisine::Thai)];
		let layout = render_chip_bar(&mut buf, area, &chips, "Clear all", &Theme::default());

		let text = row_text(&buf, 0);
		assert!(text.contains(" 4+ stars "));
		assert!(text.contains(" Thai "));
		assert!(text.trim_end().ends_with("Clear all (c)"));

		assert_eq!(layout.chips.len(), 2);
		let (thai, chip) = layout.chips[1];
		assert_eq!(chip, FilterChip::Cuisine(Cuisine::Thai));
		assert_eq!(&text[thai.x as usize..(thai.x + thai.width) as usize], " Thai ");
		assert_eq!(layout.clear_all.map(|rect| rect.x + rect.width), Some(70));
	}

	#[test]
	fn overflowing_chips_are_elided() {
		let area = Rect::new(0, 0, 40, 1);
		let mut buf = Buffer::empty(area);
		let chips = [
			FilterChip::Rating(4),
			FilterChip::Cuisine(Cuisine::Mexican),
			FilterChip::Cuisine(Cuisine::Desserts),
		];
		let layout = render_chip_bar(&mut buf, area, &chips, "Clear all", &Theme::default());
		assert!(layout.chips.len() < chips.len());
		assert!(layout.clear_all.is_some());
	}
}
