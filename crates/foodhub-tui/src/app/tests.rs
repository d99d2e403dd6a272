use std::time::{Duration, Instant};

use foodhub_core::{
	Cuisine, FilterState, FilterStore, JsonFileStore, MemoryStore, PanelState, SheetTuning,
	catalog,
};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;

const WIDTH: u16 = 80;
const HEIGHT: u16 = 24;
/// First sheet row once it rests half open on a 24-row terminal.
const SHEET_TOP: u16 = 12;

struct Harness {
	app: App,
	terminal: Terminal<TestBackend>,
	now: Instant,
}

impl Harness {
	fn new() -> Self {
		Self::with_store(Box::new(MemoryStore::new()))
	}

	fn with_store(store: Box<dyn FilterStore>) -> Self {
		let app = App::new(catalog::builtin(), store, SheetTuning::default(), HEIGHT);
		let terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
		let mut harness = Self {
			app,
			terminal,
			now: Instant::now(),
		};
		harness.draw();
		harness
	}

	fn draw(&mut self) {
		let Self { app, terminal, now } = self;
		terminal.draw(|frame| app.draw(frame, *now)).unwrap();
	}

	/// Let any animation finish, then redraw.
	fn settle(&mut self) {
		self.now += Duration::from_millis(400);
		self.app.tick(self.now);
		self.draw();
	}

	fn key(&mut self, code: KeyCode) -> Option<super::Outcome> {
		self.app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), self.now)
	}

	fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
		let event = MouseEvent {
			kind,
			column,
			row,
			modifiers: KeyModifiers::NONE,
		};
		self.app.handle_mouse(event, self.now);
	}

	fn click(&mut self, column: u16, row: u16) {
		self.mouse(MouseEventKind::Down(MouseButton::Left), column, row);
		self.mouse(MouseEventKind::Up(MouseButton::Left), column, row);
	}

	fn open_sheet(&mut self) {
		self.key(KeyCode::Char('f'));
		self.settle();
		assert_eq!(self.app.panel.state(), PanelState::HalfOpen);
	}

	fn screen(&self) -> String {
		buffer_to_string(self.terminal.backend().buffer())
	}

	fn row(&self, y: u16) -> String {
		let buf = self.terminal.backend().buffer();
		(0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
	}
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut out = String::new();
	for y in buf.area.top()..buf.area.bottom() {
		for x in buf.area.left()..buf.area.right() {
			out.push_str(buf[(x, y)].symbol());
		}
		out.push('\n');
	}
	out
}

#[test]
fn storefront_lists_dishes_within_the_default_price() {
	let harness = Harness::new();
	let screen = harness.screen();

	assert!(harness.row(0).starts_with("FoodHub"));
	assert!(screen.contains("Dishes (20)"));
	assert!(screen.contains("Chocolate Lava Cake"));
	assert!(!screen.contains("Wagyu"), "over the default price limit");
	assert!(screen.contains("20 of 21 dishes"));
	assert!(harness.row(1).contains("Press f to filter dishes"));
	assert!(!harness.app.panel.is_present());
}

#[test]
fn sheet_opens_half_way_with_its_chrome() {
	let mut harness = Harness::new();
	harness.open_sheet();

	assert!(harness.row(SHEET_TOP).contains("━━━━"));
	assert!(harness.row(SHEET_TOP + 1).contains("Filters"));
	assert!(harness.row(SHEET_TOP + 1).contains("[×]"));
	assert!(harness.row(SHEET_TOP + 2).contains("Show more filters"));
	assert!(harness.row(SHEET_TOP + 3).contains("Max price"));
	assert!(harness.row(HEIGHT - 1).contains("[ Apply ]"));
}

#[test]
fn sheet_is_partially_visible_while_sliding_in() {
	let mut harness = Harness::new();
	harness.key(KeyCode::Char('f'));
	harness.now += Duration::from_millis(60);
	harness.draw();

	let hits = harness.app.sheet.hits.expect("sheet drawn while animating");
	assert!(hits.placement.screen.y > SHEET_TOP);
	assert!(hits.placement.screen.height < HEIGHT - SHEET_TOP);
	assert_eq!(hits.placement.panel_rows, HEIGHT - SHEET_TOP);
	assert!(harness.row(hits.placement.screen.y).contains("━━━━"));
}

#[test]
fn applying_the_draft_filters_the_list_and_closes() {
	let mut harness = Harness::new();
	harness.open_sheet();

	harness.key(KeyCode::Down);
	harness.key(KeyCode::Down);
	harness.key(KeyCode::Char(' '));
	assert_eq!(harness.app.draft.selected_cuisines, vec![Cuisine::Pizza]);
	assert!(harness.app.applied.selected_cuisines.is_empty(), "draft only");

	assert!(harness.key(KeyCode::Enter).is_none());
	assert_eq!(harness.app.applied.selected_cuisines, vec![Cuisine::Pizza]);
	harness.settle();

	assert!(!harness.app.filters_open);
	assert!(!harness.app.panel.is_present());
	assert!(harness.row(1).contains(" Pizza "));
	let outcome = harness.key(KeyCode::Char('q')).expect("q quits");
	assert_eq!(outcome.visible, vec![1, 9]);
}

#[test]
fn escape_closes_without_applying() {
	let mut harness = Harness::new();
	harness.open_sheet();
	harness.key(KeyCode::Right);
	assert_eq!(harness.app.draft.price_max, 55);

	harness.key(KeyCode::Esc);
	assert!(!harness.app.sheet_active());
	harness.settle();

	assert!(!harness.app.panel.is_present());
	assert_eq!(harness.app.applied, FilterState::default());
	assert_eq!(harness.app.draft.price_max, 55, "draft survives closing");
}

#[test]
fn reset_clears_both_states_and_keeps_the_sheet_open() {
	let mut harness = Harness::new();
	harness.app.applied.set_rating(4);
	harness.app.draft.set_rating(4);
	harness.app.refresh_visible();
	harness.open_sheet();

	harness.key(KeyCode::Char('r'));
	harness.settle();

	assert_eq!(harness.app.applied, FilterState::default());
	assert_eq!(harness.app.draft, FilterState::default());
	assert!(harness.app.sheet_active());
}

#[test]
fn expand_toggle_switches_snap_points() {
	let mut harness = Harness::new();
	harness.open_sheet();

	harness.key(KeyCode::Char('e'));
	harness.settle();
	assert_eq!(harness.app.panel.state(), PanelState::FullOpen);
	assert!(harness.screen().contains("Show fewer filters"));

	harness.key(KeyCode::Tab);
	harness.settle();
	assert_eq!(harness.app.panel.state(), PanelState::HalfOpen);
}

#[test]
fn dragging_the_handle_up_expands() {
	let mut harness = Harness::new();
	harness.open_sheet();

	harness.mouse(MouseEventKind::Down(MouseButton::Left), 40, SHEET_TOP);
	assert!(harness.app.panel.is_dragging());
	harness.mouse(MouseEventKind::Drag(MouseButton::Left), 40, 6);
	harness.mouse(MouseEventKind::Drag(MouseButton::Left), 40, 2);
	harness.mouse(MouseEventKind::Up(MouseButton::Left), 40, 2);
	assert!(!harness.app.panel.is_dragging());
	harness.settle();

	assert_eq!(harness.app.panel.state(), PanelState::FullOpen);
	let hits = harness.app.sheet.hits.expect("sheet drawn");
	assert_eq!(hits.placement.screen.y, 4, "expanded to 20 rows");
}

#[test]
fn dragging_the_header_down_closes() {
	let mut harness = Harness::new();
	harness.open_sheet();

	harness.mouse(MouseEventKind::Down(MouseButton::Left), 10, SHEET_TOP + 1);
	harness.mouse(MouseEventKind::Drag(MouseButton::Left), 10, HEIGHT - 1);
	harness.draw();
	let hits = harness.app.sheet.hits.expect("sheet drawn while dragged");
	assert!(hits.placement.screen.height < HEIGHT - SHEET_TOP);

	harness.mouse(MouseEventKind::Up(MouseButton::Left), 10, HEIGHT - 1);
	harness.settle();

	assert!(!harness.app.filters_open);
	assert!(!harness.app.panel.is_present());
}

#[test]
fn stray_drag_events_are_ignored() {
	let mut harness = Harness::new();
	harness.open_sheet();
	harness.mouse(MouseEventKind::Drag(MouseButton::Left), 40, 2);
	harness.mouse(MouseEventKind::Up(MouseButton::Left), 40, 2);
	harness.settle();
	assert_eq!(harness.app.panel.state(), PanelState::HalfOpen);
}

#[test]
fn enter_mid_drag_applies_and_closes() {
	let mut harness = Harness::new();
	harness.open_sheet();
	harness.key(KeyCode::Down);
	harness.key(KeyCode::Down);
	harness.key(KeyCode::Char(' '));

	harness.mouse(MouseEventKind::Down(MouseButton::Left), 40, SHEET_TOP);
	harness.mouse(MouseEventKind::Drag(MouseButton::Left), 40, SHEET_TOP - 3);
	assert!(harness.app.panel.is_dragging());

	assert!(harness.key(KeyCode::Enter).is_none());
	assert!(!harness.app.panel.is_dragging());
	harness.mouse(MouseEventKind::Up(MouseButton::Left), 40, SHEET_TOP - 3);
	harness.settle();
	harness.settle();

	assert!(!harness.app.filters_open);
	assert!(!harness.app.panel.is_present());
	assert!(!harness.screen().contains("Filters"));
	assert!(harness.screen().contains("2 of 21 dishes"));
	let outcome = harness.key(KeyCode::Char('q')).expect("q quits");
	assert_eq!(outcome.visible, vec![1, 9]);
}

#[test]
fn escape_mid_drag_closes_without_applying() {
	let mut harness = Harness::new();
	harness.open_sheet();
	harness.key(KeyCode::Right);

	harness.mouse(MouseEventKind::Down(MouseButton::Left), 40, SHEET_TOP);
	harness.mouse(MouseEventKind::Drag(MouseButton::Left), 40, SHEET_TOP + 4);
	harness.key(KeyCode::Esc);
	assert!(!harness.app.panel.is_dragging());
	harness.settle();

	assert!(!harness.app.panel.is_present());
	assert_eq!(harness.app.applied, FilterState::default());
}

#[test]
fn escape_never_quits() {
	let mut harness = Harness::new();
	harness.open_sheet();

	assert!(harness.key(KeyCode::Esc).is_none());
	assert!(harness.key(KeyCode::Esc).is_none(), "second escape while closing");
	harness.settle();
	assert!(!harness.app.panel.is_present());
	assert!(harness.key(KeyCode::Esc).is_none(), "escape on the list");
	assert!(harness.screen().contains("20 of 21 dishes"));
}

#[test]
fn backdrop_and_close_button_request_close() {
	let mut harness = Harness::new();
	harness.open_sheet();
	harness.click(40, 4);
	harness.settle();
	assert!(!harness.app.panel.is_present());

	harness.open_sheet();
	let close = harness
		.row(SHEET_TOP + 1)
		.chars()
		.position(|c| c == '×')
		.expect("close button drawn") as u16;
	harness.click(close, SHEET_TOP + 1);
	harness.settle();
	assert!(!harness.app.panel.is_present());
}

#[test]
fn clicking_a_star_sets_the_minimum_rating() {
	let mut harness = Harness::new();
	harness.open_sheet();

	// Content starts below the toggle; the stars sit on its fifth line.
	let row = SHEET_TOP + 3 + 4;
	let line = harness.row(row);
	assert!(line.contains("☆ ☆ ☆ ☆ ☆"));
	let first_star = line.chars().position(|c| c == '☆').expect("stars drawn") as u16;
	harness.click(first_star + 4, row);
	assert_eq!(harness.app.draft.selected_rating, 3);

	harness.draw();
	assert!(harness.row(row).contains("★ ★ ★ ☆ ☆"));
	harness.click(first_star + 4, row);
	assert_eq!(harness.app.draft.selected_rating, 0, "second click clears");
}

#[test]
fn focus_moves_scroll_the_content() {
	let mut harness = Harness::new();
	harness.open_sheet();
	for _ in 0..20 {
		harness.key(KeyCode::Down);
	}
	harness.draw();

	assert!(harness.app.sheet.scroll > 0);
	assert!(harness.screen().contains("Sort by"));
	assert!(!harness.row(SHEET_TOP + 3).contains("Max price"));
}

#[test]
fn chip_click_removes_that_filter() {
	let mut harness = Harness::new();
	harness.app.applied.toggle_cuisine(Cuisine::Thai);
	harness.app.applied.set_rating(4);
	harness.app.draft = harness.app.applied.clone();
	harness.app.refresh_visible();
	harness.draw();

	let thai = harness.app.list.chips.chips[1].0;
	harness.click(thai.x + 1, thai.y);
	harness.draw();

	assert!(harness.app.applied.selected_cuisines.is_empty());
	assert!(harness.app.draft.selected_cuisines.is_empty());
	assert_eq!(harness.app.applied.selected_rating, 4);
	assert!(!harness.row(1).contains("Thai"));
}

#[test]
fn clear_all_restores_the_full_list() {
	let mut harness = Harness::new();
	harness.app.applied.set_price_max(0);
	harness.app.refresh_visible();
	harness.draw();
	assert!(harness.screen().contains("No results found"));

	harness.key(KeyCode::Char('c'));
	harness.draw();
	assert!(harness.screen().contains("Dishes (20)"));
}

#[test]
fn applied_filters_persist_through_the_store() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("filters.json");
	let mut harness = Harness::with_store(Box::new(JsonFileStore::new(&path)));
	harness.open_sheet();
	harness.key(KeyCode::Left);
	harness.key(KeyCode::Enter);

	let saved = JsonFileStore::new(&path).load().unwrap().unwrap();
	assert_eq!(saved.price_max, 45);

	let reopened = Harness::with_store(Box::new(JsonFileStore::new(&path)));
	assert_eq!(reopened.app.applied.price_max, 45);
	assert_eq!(reopened.app.draft.price_max, 45);
}

#[test]
fn resize_rescales_the_sheet() {
	let mut harness = Harness::new();
	harness.open_sheet();
	harness.terminal.backend_mut().resize(WIDTH, 40);
	harness.draw();

	let hits = harness.app.sheet.hits.expect("sheet drawn");
	assert_eq!(hits.placement.panel_rows, 20);
	assert_eq!(hits.placement.screen.y, 20);
}

#[test]
fn ctrl_c_quits_from_the_sheet() {
	let mut harness = Harness::new();
	harness.open_sheet();
	let outcome = harness
		.app
		.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), harness.now);
	assert!(outcome.is_some());
	assert!(harness.key(KeyCode::Char('q')).is_none(), "q is not a sheet key");
}
