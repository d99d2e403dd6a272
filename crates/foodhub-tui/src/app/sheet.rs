//! Content of the filter sheet: focus order, drawn lines and click targets.

use foodhub_core::filters::{MAX_RATING, PRICE_LIMIT};
use foodhub_core::{Cuisine, Dietary, FilterState};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::components::{Placement, SheetRegions, stars};
use crate::style::Theme;

const MARKER: &str = "▶ ";
const NO_MARKER: &str = "  ";
/// Columns before every control, taken by the focus marker.
const INDENT: u16 = 2;
const PRICE_LABEL_WIDTH: u16 = 11;
const STARS_WIDTH: u16 = 9;

/// A focusable control inside the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Focus {
	#[default]
	Price,
	Rating,
	Cuisine(Cuisine),
	Dietary(Dietary),
	Sort,
}

impl Focus {
	fn order() -> impl Iterator<Item = Self> {
		[Self::Price, Self::Rating]
			.into_iter()
			.chain(Cuisine::ALL.into_iter().map(Self::Cuisine))
			.chain(Dietary::ALL.into_iter().map(Self::Dietary))
			.chain(std::iter::once(Self::Sort))
	}

	/// The control after this one; the last control stays put.
	pub(crate) fn next(self) -> Self {
		Self::order()
			.skip_while(|focus| *focus != self)
			.nth(1)
			.unwrap_or(self)
	}

	/// The control before this one; the first control stays put.
	pub(crate) fn prev(self) -> Self {
		Self::order()
			.take_while(|focus| *focus != self)
			.last()
			.unwrap_or(self)
	}
}

/// A clickable span of one content line. `x` is relative to the left edge of
/// the content region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Target {
	pub focus: Focus,
	pub line: usize,
	pub x: u16,
	pub width: u16,
}

impl Target {
	fn contains(&self, line: usize, column: u16) -> bool {
		self.line == line && column >= self.x && column < self.x + self.width
	}
}

/// Lines and targets of the sheet content for one draft state.
#[derive(Debug, Clone, Default)]
pub(crate) struct SheetContent {
	pub lines: Vec<Line<'static>>,
	pub targets: Vec<Target>,
}

impl SheetContent {
	pub(crate) fn build(draft: &FilterState, focus: Focus, width: u16, theme: &Theme) -> Self {
		let mut builder = Builder {
			content: Self::default(),
			focus,
			theme,
		};
		builder.price(draft.price_max, width);
		builder.rating(draft.selected_rating);
		builder.cuisines(draft, width);
		builder.dietary(draft);
		builder.sort(draft);
		builder.content
	}

	pub(crate) fn line_of(&self, focus: Focus) -> Option<usize> {
		self.targets
			.iter()
			.find(|target| target.focus == focus)
			.map(|target| target.line)
	}

	pub(crate) fn target_at(&self, line: usize, column: u16) -> Option<Target> {
		self.targets
			.iter()
			.copied()
			.find(|target| target.contains(line, column))
	}
}

struct Builder<'a> {
	content: SheetContent,
	focus: Focus,
	theme: &'a Theme,
}

impl Builder<'_> {
	fn heading(&mut self, title: &'static str) {
		if !self.content.lines.is_empty() {
			self.content.lines.push(Line::default());
		}
		self.content.lines.push(Line::from(Span::styled(
			title,
			self.theme.header.add_modifier(Modifier::BOLD),
		)));
	}

	fn marker(&self, focused: bool) -> Span<'static> {
		if focused {
			Span::styled(MARKER, self.theme.focus)
		} else {
			Span::raw(NO_MARKER)
		}
	}

	fn label_style(&self, focused: bool) -> Style {
		if focused { self.theme.focus } else { Style::new() }
	}

	fn push(&mut self, line: Line<'static>, focus: Focus, x: u16, width: u16) {
		let index = self.content.lines.len();
		self.content.lines.push(line);
		self.content.targets.push(Target {
			focus,
			line: index,
			x,
			width,
		});
	}

	fn price(&mut self, price_max: u32, width: u16) {
		self.heading("Max price");
		let focused = self.focus == Focus::Price;
		let track_width = price_track_width(width);
		let line = Line::from(vec![
			self.marker(focused),
			Span::styled(format!("Up to ${price_max:<3} "), self.label_style(focused)),
			Span::styled(price_track(price_max, track_width), self.theme.accent),
		]);
		self.push(line, Focus::Price, INDENT + PRICE_LABEL_WIDTH, track_width);
	}

	fn rating(&mut self, selected: u8) {
		self.heading("Minimum rating");
		let focused = self.focus == Focus::Rating;
		let mut spans = vec![self.marker(focused)];
		spans.extend(stars(selected, self.theme));
		let label = if selected == 0 {
			"Any rating".to_string()
		} else if selected == MAX_RATING {
			format!("{selected} stars")
		} else {
			format!("{selected}+ stars")
		};
		spans.push(Span::styled(format!("  {label}"), self.label_style(focused)));
		self.push(Line::from(spans), Focus::Rating, INDENT, STARS_WIDTH);
	}

	fn cuisines(&mut self, draft: &FilterState, width: u16) {
		self.heading("Cuisine");
		let mut spans = Vec::new();
		let mut pending = Vec::new();
		let mut x = INDENT;
		let mut line_focused = false;

		for cuisine in Cuisine::ALL {
			let label = format!(" {} ", cuisine.label());
			let chip_width = label.width() as u16;
			if x > INDENT && x + chip_width > width {
				self.flush_chips(&mut spans, &mut pending, line_focused);
				x = INDENT;
				line_focused = false;
			}
			let focused = self.focus == Focus::Cuisine(cuisine);
			let style = if focused {
				self.theme.focus
			} else if draft.selected_cuisines.contains(&cuisine) {
				self.theme.chip
			} else {
				self.theme.muted
			};
			line_focused |= focused;
			pending.push((Focus::Cuisine(cuisine), x, chip_width));
			spans.push(Span::styled(label, style));
			spans.push(Span::raw(" "));
			x += chip_width + 1;
		}
		self.flush_chips(&mut spans, &mut pending, line_focused);
	}

	fn flush_chips(
		&mut self,
		spans: &mut Vec<Span<'static>>,
		pending: &mut Vec<(Focus, u16, u16)>,
		focused: bool,
	) {
		if pending.is_empty() {
			return;
		}
		let index = self.content.lines.len();
		let mut line = vec![self.marker(focused)];
		line.append(spans);
		self.content.lines.push(Line::from(line));
		for (focus, x, width) in pending.drain(..) {
			self.content.targets.push(Target {
				focus,
				line: index,
				x,
				width,
			});
		}
	}

	fn dietary(&mut self, draft: &FilterState) {
		self.heading("Dietary");
		for tag in Dietary::ALL {
			let focused = self.focus == Focus::Dietary(tag);
			let checked = draft.selected_dietary.contains(&tag);
			let text = format!("[{}] {}", if checked { "x" } else { " " }, tag.label());
			let width = text.width() as u16;
			let style = if checked && !focused {
				self.theme.chip
			} else {
				self.label_style(focused)
			};
			let line = Line::from(vec![self.marker(focused), Span::styled(text, style)]);
			self.push(line, Focus::Dietary(tag), INDENT, width);
		}
	}

	fn sort(&mut self, draft: &FilterState) {
		self.heading("Sort by");
		let focused = self.focus == Focus::Sort;
		let text = format!("◀ {} ▶", draft.sort_by.label());
		let width = text.width() as u16;
		let line = Line::from(vec![
			self.marker(focused),
			Span::styled(text, self.label_style(focused)),
		]);
		self.push(line, Focus::Sort, INDENT, width);
	}
}

fn price_track_width(content_width: u16) -> u16 {
	content_width.saturating_sub(INDENT + PRICE_LABEL_WIDTH)
}

/// Slider track with the knob placed in proportion to `price_max`.
fn price_track(price_max: u32, width: u16) -> String {
	if width == 0 {
		return String::new();
	}
	let span = u32::from(width - 1);
	let knob = (price_max.min(PRICE_LIMIT) * span + PRICE_LIMIT / 2) / PRICE_LIMIT;
	(0..u32::from(width))
		.map(|column| match column.cmp(&knob) {
			std::cmp::Ordering::Less => '━',
			std::cmp::Ordering::Equal => '●',
			std::cmp::Ordering::Greater => '─',
		})
		.collect()
}

/// Price selected by a click `offset` columns into a track `width` wide.
pub(crate) fn price_at(offset: u16, width: u16) -> u32 {
	if width <= 1 {
		return PRICE_LIMIT;
	}
	let span = u32::from(width - 1);
	(u32::from(offset.min(width - 1)) * PRICE_LIMIT + span / 2) / span
}

/// Screen geometry of the sheet as drawn in the last frame.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SheetHits {
	pub placement: Placement,
	pub regions: SheetRegions,
}

/// Interaction state of the sheet that survives between frames.
#[derive(Debug, Default)]
pub(crate) struct SheetState {
	pub focus: Focus,
	pub scroll: usize,
	/// Scroll the focused control into view on the next render.
	pub reveal_focus: bool,
	pub content: SheetContent,
	pub hits: Option<SheetHits>,
}

impl SheetState {
	pub(crate) fn focus_on(&mut self, focus: Focus) {
		self.focus = focus;
		self.reveal_focus = true;
	}

	/// Start over at the first control, scrolled to the top.
	pub(crate) fn rewind(&mut self) {
		self.focus = Focus::default();
		self.scroll = 0;
		self.reveal_focus = false;
	}
}
