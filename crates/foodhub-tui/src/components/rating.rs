//! Star rating glyphs.

use foodhub_core::filters::MAX_RATING;
use ratatui::text::Span;

use crate::style::Theme;

pub const FILLED_STAR: &str = "★";
pub const EMPTY_STAR: &str = "☆";

/// Columns taken by one star including its trailing gap.
pub const STAR_STRIDE: u16 = 2;

/// `MAX_RATING` stars with the first `filled` highlighted, separated by
/// single spaces.
#[must_use]
pub fn stars(filled: u8, theme: &Theme) -> Vec<Span<'static>> {
	let mut spans = Vec::with_capacity(usize::from(MAX_RATING) * 2);
	for star in 1..=MAX_RATING {
		if star > 1 {
			spans.push(Span::raw(" "));
		}
		if star <= filled {
			spans.push(Span::styled(FILLED_STAR, theme.rating));
		} else {
			spans.push(Span::styled(EMPTY_STAR, theme.muted));
		}
	}
	spans
}

/// Which star (1-based) sits under `column`, given the column of the first
/// star. Gaps belong to the star on their left.
#[must_use]
pub fn star_at(first_column: u16, column: u16) -> Option<u8> {
	let offset = column.checked_sub(first_column)?;
	let star = offset / STAR_STRIDE + 1;
	u8::try_from(star).ok().filter(|star| *star <= MAX_RATING)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn renders_filled_then_empty() {
		let theme = Theme::default();
		let text: String = stars(3, &theme).iter().map(|span| span.content.as_ref()).collect();
		assert_eq!(text, "★ ★ ★ ☆ ☆");
	}

	#[test]
	fn maps_columns_to_stars() {
		assert_eq!(star_at(10, 9), None);
		assert_eq!(star_at(10, 10), Some(1));
		assert_eq!(star_at(10, 11), Some(1));
		assert_eq!(star_at(10, 18), Some(5));
		assert_eq!(star_at(10, 20), None);
	}
}
