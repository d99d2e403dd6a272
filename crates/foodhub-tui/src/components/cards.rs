//! The dish list rendered as a bordered table of two-line cards.

use foodhub_core::FoodItem;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, StatefulWidget, Table, TableState,
	Widget,
};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use super::rating::stars;
use super::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Lines per card.
pub(crate) const CARD_HEIGHT: u16 = 2;
/// Header row plus its bottom margin.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

const HEADERS: [&str; 5] = ["Dish", "Rating", "Price", "Cuisine", "Delivery"];

fn column_widths() -> [Constraint; 5] {
	[
		Constraint::Fill(1),
		Constraint::Length(15),
		Constraint::Length(7),
		Constraint::Length(9),
		Constraint::Length(10),
	]
}

/// Screen regions recorded while drawing the list, for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardsLayout {
	/// Rows below the header where cards are drawn.
	pub body: Rect,
	pub scrollbar: Option<Rect>,
	/// Cards that fit in `body`.
	pub visible_cards: usize,
}

/// Index of the card drawn at `row`, given the table's current offset.
#[must_use]
pub fn card_at(layout: &CardsLayout, offset: usize, row: u16) -> Option<usize> {
	if row < layout.body.y || row >= layout.body.y.saturating_add(layout.body.height) {
		return None;
	}
	let index = usize::from((row - layout.body.y) / CARD_HEIGHT);
	(index < layout.visible_cards).then_some(offset + index)
}

/// Width of the dish column once borders, the highlight symbol and the
/// fixed columns are accounted for.
fn dish_column_width(inner: Rect, scrollbar: bool) -> u16 {
	let table_width = inner.width.saturating_sub(u16::from(scrollbar));
	let highlight = HIGHLIGHT_SYMBOL.width() as u16;
	let [_selection, columns] =
		Layout::horizontal([Constraint::Length(highlight), Constraint::Fill(0)])
			.areas(Rect::new(0, 0, table_width, 1));
	Layout::horizontal(column_widths())
		.spacing(TABLE_COLUMN_SPACING)
		.split(columns)
		.first()
		.map_or(0, |rect| rect.width)
}

fn card_row<'a>(item: &FoodItem, dish_width: u16, theme: &Theme) -> Row<'a> {
	let width = usize::from(dish_width);
	let (name, _) = item.name.unicode_truncate(width);
	let (description, _) = item.description.unicode_truncate(width);

	let mut rating = stars(item.rounded_rating(), theme);
	rating.push(Span::styled(format!(" {:.1}", item.rating), theme.muted));

	Row::new(vec![
		Cell::from(Text::from(vec![
			Line::from(Span::styled(
				name.to_string(),
				Style::new().add_modifier(Modifier::BOLD),
			)),
			Line::from(Span::styled(description.to_string(), theme.muted)),
		])),
		Cell::from(Line::from(rating)),
		Cell::from(Span::styled(format!("${:.2}", item.price), theme.accent)),
		Cell::from(item.cuisine.label()),
		Cell::from(Span::styled(item.delivery_time, theme.muted)),
	])
	.height(CARD_HEIGHT)
}

/// Draw the card table into `area` and return its hit-test regions.
pub fn render_cards(
	buf: &mut Buffer,
	area: Rect,
	table_state: &mut TableState,
	items: &[&FoodItem],
	title: &str,
	theme: &Theme,
) -> CardsLayout {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(Span::styled(format!(" {title} ({}) ", items.len()), theme.header));
	let inner = block.inner(area);
	block.render(area, buf);

	let body = Rect {
		y: inner.y.saturating_add(TABLE_HEADER_ROWS),
		height: inner.height.saturating_sub(TABLE_HEADER_ROWS),
		..inner
	};
	let visible_cards = usize::from(body.height / CARD_HEIGHT);
	let metrics = ScrollMetrics::compute(items.len(), visible_cards);

	let table_area = if metrics.needs_scrollbar {
		Rect {
			width: inner.width.saturating_sub(1),
			..inner
		}
	} else {
		inner
	};
	let dish_width = dish_column_width(inner, metrics.needs_scrollbar);
	let rows: Vec<Row> = items
		.iter()
		.map(|item| card_row(item, dish_width, theme))
		.collect();

	let header = Row::new(HEADERS.map(Cell::from))
		.style(theme.header)
		.height(1)
		.bottom_margin(1);
	let table = Table::new(rows, column_widths())
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	StatefulWidget::render(table, table_area, buf, table_state);

	let scrollbar = if metrics.needs_scrollbar && body.height > 0 {
		let track = Rect {
			y: body.y,
			height: body.height,
			..inner
		};
		let mut state = metrics.scrollbar_state(table_state.offset());
		render_scrollbar(buf, track, &mut state, theme);
		Some(Rect {
			x: track.x + track.width.saturating_sub(1),
			width: 1,
			..track
		})
	} else {
		None
	};

	CardsLayout {
		body,
		scrollbar,
		visible_cards,
	}
}

/// Centered empty-state message drawn over the table body.
pub fn render_empty(buf: &mut Buffer, body: Rect, title: &str, hint: &str, theme: &Theme) {
	if body.height == 0 {
		return;
	}
	let top = body.y + body.height.saturating_sub(2) / 2;
	let message = Rect {
		y: top,
		height: 2.min(body.height),
		..body
	};
	Paragraph::new(vec![
		Line::from(Span::styled(title.to_string(), theme.empty.add_modifier(Modifier::BOLD))),
		Line::from(Span::styled(hint.to_string(), theme.muted)),
	])
	.alignment(Alignment::Center)
	.render(message, buf);
}
