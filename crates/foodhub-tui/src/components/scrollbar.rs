//! Scroll offsets, the themed scrollbar, and pointer hit-testing.

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget};

use crate::style::Theme;

/// Precomputed scrolling metrics for a scrollable viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
	pub content_length: usize,
	pub viewport_len: usize,
	pub max_scroll: usize,
	pub needs_scrollbar: bool,
}

impl ScrollMetrics {
	/// Returns empty metrics if either value is zero.
	#[must_use]
	pub fn compute(content_length: usize, viewport_height: usize) -> Self {
		if content_length == 0 || viewport_height == 0 {
			return Self::default();
		}

		let viewport_len = viewport_height.min(content_length).max(1);
		let max_scroll = content_length.saturating_sub(viewport_len);
		let needs_scrollbar = content_length > viewport_len;

		Self {
			content_length,
			viewport_len,
			max_scroll,
			needs_scrollbar,
		}
	}

	/// Smallest scroll offset that keeps `line` inside the viewport, starting
	/// from the current `scroll`.
	#[must_use]
	pub fn scroll_to_reveal(&self, scroll: usize, line: usize) -> usize {
		if self.viewport_len == 0 {
			return 0;
		}
		let scroll = if line < scroll {
			line
		} else if line >= scroll + self.viewport_len {
			line + 1 - self.viewport_len
		} else {
			scroll
		};
		scroll.min(self.max_scroll)
	}

	#[must_use]
	pub fn scrollbar_state(&self, scroll: usize) -> ScrollbarState {
		ScrollbarState::new(self.max_scroll.saturating_add(1)).position(scroll.min(self.max_scroll))
	}
}

/// Whether the pointer cell `(column, row)` lies in `area`. Empty areas
/// contain nothing.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	area.contains(Position::new(column, row))
}

/// Render a themed vertical scrollbar on the right edge of `area`.
///
/// Returns the area left for content.
pub fn render_scrollbar(
	buf: &mut Buffer,
	area: Rect,
	scrollbar_state: &mut ScrollbarState,
	theme: &Theme,
) -> Rect {
	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(theme.border_style());

	let track = Rect {
		x: area.right().saturating_sub(1),
		width: 1,
		..area
	};
	scrollbar.render(track, buf, scrollbar_state);

	Rect {
		width: area.width.saturating_sub(1),
		..area
	}
}
